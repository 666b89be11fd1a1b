use tracing::{error, info, instrument};

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{CartClient, GameClient, OrderClient, TransactionClient, UserClient};
use crate::domain::{Cart, Game, Order, Transaction, User};
use super::error::AppError;

/// Owns every store and hands out the clients that talk to them.
pub struct VaultSystem {
    pub user_client: UserClient,
    pub game_client: GameClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub transaction_client: TransactionClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl VaultSystem {
    /// Start all stores. Must be called inside a tokio runtime.
    ///
    /// Stores with no dependencies start first; their clients are then handed
    /// to the clients that coordinate them.
    #[instrument(name = "vault_system")]
    pub fn new(channel_capacity: usize) -> Self {
        let mut handles = Vec::new();
        info!("Starting vault system");

        let (user_actor, user_inner) = ResourceActor::<User>::new(channel_capacity, sequential_ids());
        handles.push(tokio::spawn(user_actor.run()));
        let user_client = UserClient::new(user_inner);

        let (game_actor, game_inner) = ResourceActor::<Game>::new(channel_capacity, sequential_ids());
        handles.push(tokio::spawn(game_actor.run()));
        let game_client = GameClient::new(game_inner);

        let (transaction_actor, transaction_inner) =
            ResourceActor::<Transaction>::new(channel_capacity, sequential_ids());
        handles.push(tokio::spawn(transaction_actor.run()));
        let transaction_client = TransactionClient::new(transaction_inner);

        // Carts live under their owner's user id
        let (cart_actor, cart_inner) = ResourceActor::<Cart>::keyed(channel_capacity);
        handles.push(tokio::spawn(cart_actor.run()));
        let cart_client = CartClient::new(cart_inner, game_client.clone());

        let (order_actor, order_inner) = ResourceActor::<Order>::new(channel_capacity, sequential_ids());
        handles.push(tokio::spawn(order_actor.run()));
        let order_client = OrderClient::new(order_inner, user_client.clone(), cart_client.clone());

        info!("Vault system started");
        Self {
            user_client,
            game_client,
            cart_client,
            order_client,
            transaction_client,
            handles,
        }
    }

    /// Stop every store and wait for it to finish.
    ///
    /// Stores stop once all their clients are gone, so every clone handed out
    /// must have been dropped before this is awaited.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down vault system");
        let Self {
            user_client,
            game_client,
            cart_client,
            order_client,
            transaction_client,
            handles,
        } = self;
        drop(order_client);
        drop(cart_client);
        drop(transaction_client);
        drop(game_client);
        drop(user_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store shutdown error");
                return Err(e.into());
            }
        }
        info!("Vault system shutdown complete");
        Ok(())
    }
}
