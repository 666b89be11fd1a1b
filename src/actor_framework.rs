use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Failures raised by the framework itself rather than by an entity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped the response")]
    Dropped,
    #[error("Store has no id generator; items must be inserted under an explicit key")]
    NoIdGenerator,
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Short name used in log fields
    const KIND: &'static str;

    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: From<FrameworkError> + Send + Sync + Debug + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Check a payload before an id is allocated for it.
    ///
    /// A rejected payload never consumes an id, so ids stay contiguous.
    fn validate(_payload: &Self::CreatePayload) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// The error reported when `id` is not in the store
    fn not_found(id: Self::Id) -> Self::Error;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Id generator yielding 1, 2, 3, ...
pub fn sequential_ids() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || counter.fetch_add(1, Ordering::SeqCst)
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    /// Apply an action, first inserting the item built from `payload` under `id` if absent.
    Upsert {
        id: T::Id,
        payload: T::CreatePayload,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// Single-writer store for one entity type.
///
/// Items are kept ordered by id, so listing a store with sequential ids yields
/// insertion order.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    /// A store that allocates ids itself on `Create`.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    /// A store whose items live under caller-chosen keys (see `Upsert`).
    pub fn keyed(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    fn build(buffer_size: usize, next_id_fn: Option<IdGenerator<T::Id>>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn,
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(kind = T::KIND))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.on_update(patch).map(|()| item.clone()),
                        None => Err(T::not_found(id)),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Remove { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.remove(&id)));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action),
                        None => Err(T::not_found(id)),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Upsert { id, payload, action, respond_to } => {
                    let _ = respond_to.send(self.handle_upsert(id, payload, action));
                }
            }
        }
        info!(items = self.store.len(), "Store stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, T::Error> {
        T::validate(&payload)?;
        let next_id = self.next_id_fn.as_ref().ok_or(FrameworkError::NoIdGenerator)?;
        let id = next_id();
        let item = T::from_create(id, payload)?;
        let id = item.id().clone();
        debug!(id = %id, "Item created");
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_upsert(
        &mut self,
        id: T::Id,
        payload: T::CreatePayload,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        if !self.store.contains_key(&id) {
            T::validate(&payload)?;
            let item = T::from_create(id.clone(), payload)?;
            debug!(id = %id, "Item inserted on first use");
            self.store.insert(id.clone(), item);
        }
        match self.store.get_mut(&id) {
            Some(item) => item.handle_action(action),
            None => {
                warn!(id = %id, "Item vanished during upsert");
                Err(T::not_found(id))
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T> + Send,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::Closed)?;
        response.await.map_err(|_| FrameworkError::Dropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn remove(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Remove { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn upsert(
        &self,
        id: T::Id,
        payload: T::CreatePayload,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        self.request(|respond_to| ResourceRequest::Upsert { id, payload, action, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u64,
        label: String,
        hits: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    struct CounterPatch {
        label: String,
    }

    #[derive(Debug)]
    enum CounterAction {
        Hit,
    }

    #[derive(Debug, PartialEq, Error)]
    enum CounterError {
        #[error("blank label")]
        BlankLabel,
        #[error("counter {0} not found")]
        NotFound(u64),
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    impl Entity for Counter {
        const KIND: &'static str = "counter";

        type Id = u64;
        type CreatePayload = CounterCreate;
        type Patch = CounterPatch;
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = CounterError;

        fn id(&self) -> &u64 { &self.id }

        fn validate(payload: &CounterCreate) -> Result<(), CounterError> {
            if payload.label.trim().is_empty() {
                return Err(CounterError::BlankLabel);
            }
            Ok(())
        }

        fn from_create(id: u64, payload: CounterCreate) -> Result<Self, CounterError> {
            Ok(Self { id, label: payload.label, hits: 0 })
        }

        fn not_found(id: u64) -> CounterError {
            CounterError::NotFound(id)
        }

        fn on_update(&mut self, patch: CounterPatch) -> Result<(), CounterError> {
            self.label = patch.label;
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
            match action {
                CounterAction::Hit => {
                    self.hits += 1;
                    Ok(self.hits)
                }
            }
        }
    }

    fn label(text: &str) -> CounterCreate {
        CounterCreate { label: text.to_string() }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_ids_are_sequential_and_listing_follows_insertion() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        tokio::spawn(actor.run());

        let first = client.create(label("a")).await.unwrap();
        let second = client.create(label("b")).await.unwrap();
        let third = client.create(label("c")).await.unwrap();
        assert_eq!((first, second, third), (1, 2, 3));

        let labels: Vec<String> = client.list().await.unwrap().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_rejected_payload_does_not_consume_an_id() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        tokio::spawn(actor.run());

        assert_eq!(client.create(label("   ")).await, Err(CounterError::BlankLabel));
        assert_eq!(client.create(label("ok")).await, Ok(1));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_action_report_missing_items() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        tokio::spawn(actor.run());

        let id = client.create(label("a")).await.unwrap();
        let updated = client.update(id, CounterPatch { label: "renamed".into() }).await.unwrap();
        assert_eq!(updated.label, "renamed");
        assert_eq!(client.perform_action(id, CounterAction::Hit).await, Ok(1));
        assert_eq!(client.perform_action(id, CounterAction::Hit).await, Ok(2));

        assert_eq!(
            client.perform_action(42, CounterAction::Hit).await,
            Err(CounterError::NotFound(42))
        );
        assert_eq!(
            client.update(42, CounterPatch { label: "x".into() }).await,
            Err(CounterError::NotFound(42))
        );
    }

    #[tokio::test]
    async fn test_keyed_store_upserts_and_removes() {
        let (actor, client) = ResourceActor::<Counter>::keyed(10);
        tokio::spawn(actor.run());

        assert_eq!(client.upsert(7, label("seven"), CounterAction::Hit).await, Ok(1));
        assert_eq!(client.upsert(7, label("ignored"), CounterAction::Hit).await, Ok(2));

        let stored = client.get(7).await.unwrap().unwrap();
        assert_eq!(stored.label, "seven");

        assert_eq!(
            client.create(label("nope")).await,
            Err(CounterError::Framework(FrameworkError::NoIdGenerator))
        );

        assert_eq!(client.remove(7).await.unwrap().map(|c| c.hits), Some(2));
        assert_eq!(client.remove(7).await.unwrap(), None);
        assert_eq!(client.get(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        drop(actor);

        assert_eq!(
            client.list().await,
            Err(CounterError::Framework(FrameworkError::Closed))
        );
    }
}
