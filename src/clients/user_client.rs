use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::user_actor::{UserAction, UserError};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Validates and stores a new user, returning its id.
    ///
    /// # Errors
    /// `InvalidData` for a blank email, username or password, or a negative
    /// wallet balance. Nothing is stored in that case.
    #[instrument(skip(self, user), fields(username = %user.username, email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(user).await
    }

    /// Replaces the wallet balance, returning the updated user.
    #[instrument(skip(self))]
    pub async fn update_wallet_balance(&self, id: UserId, balance: Decimal) -> Result<User, UserError> {
        debug!("Sending request");
        let patch = UserPatch { wallet_balance: Some(balance) };
        self.inner.update(id, patch).await
    }

    /// Returns the balance left after the debit.
    #[instrument(skip(self))]
    pub async fn debit_wallet(&self, id: UserId, amount: Decimal) -> Result<Decimal, UserError> {
        debug!("Sending request");
        self.inner.perform_action(id, UserAction::Debit(amount)).await
    }

    #[instrument(skip(self))]
    pub async fn credit_wallet(&self, id: UserId, amount: Decimal) -> Result<Decimal, UserError> {
        debug!("Sending request");
        self.inner.perform_action(id, UserAction::Credit(amount)).await
    }
}
