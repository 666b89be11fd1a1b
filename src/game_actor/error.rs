use rust_decimal::Decimal;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::GameId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GameError {
    #[error("Game not found: {0}")]
    NotFound(GameId),
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
