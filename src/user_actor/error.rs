use rust_decimal::Decimal;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UserId;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid user data: {0}")]
    InvalidData(String),
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },
    #[error("Crediting {amount} would overflow the wallet balance {balance}")]
    BalanceOverflow { amount: Decimal, balance: Decimal },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
