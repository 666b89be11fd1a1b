use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Transaction, TransactionCreate, TransactionId, UserId};
use crate::transaction_actor::TransactionError;

/// Client for interacting with the Transaction actor.
#[derive(Clone)]
pub struct TransactionClient {
    inner: ResourceClient<Transaction>,
}

impl_basic_client!(TransactionClient, Transaction, TransactionError, transaction);

impl TransactionClient {
    #[instrument(skip(self, transaction), fields(user_id = transaction.user_id, kind = %transaction.kind))]
    pub async fn add_transaction(&self, transaction: TransactionCreate) -> Result<TransactionId, TransactionError> {
        debug!("Sending request");
        self.inner.create(transaction).await
    }

    #[instrument(skip(self))]
    pub async fn list_transactions_for_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TransactionError> {
        let mut transactions = self.list_transactions().await?;
        transactions.retain(|t| t.user_id == user_id);
        Ok(transactions)
    }
}
