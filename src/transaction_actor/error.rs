use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::TransactionId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransactionError {
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
