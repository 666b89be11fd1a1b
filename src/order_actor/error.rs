use rust_decimal::Decimal;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{OrderId, UserId};
use crate::user_actor::UserError;
use crate::cart_actor::CartError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Cart is empty for user: {0}")]
    CartEmpty(UserId),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },
    #[error("Order total for user {0} exceeds the largest supported amount")]
    TotalOverflow(UserId),
    #[error("Order total {total} does not match the sum of its games {expected}")]
    TotalMismatch { total: Decimal, expected: Decimal },
    #[error("User store error: {0}")]
    User(UserError),
    #[error("Cart store error: {0}")]
    Cart(CartError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}

impl From<UserError> for OrderError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => OrderError::UserNotFound(id),
            UserError::InsufficientFunds { required, available } => {
                OrderError::InsufficientFunds { required, available }
            }
            other => OrderError::User(other),
        }
    }
}

impl From<CartError> for OrderError {
    fn from(err: CartError) -> Self {
        OrderError::Cart(err)
    }
}
