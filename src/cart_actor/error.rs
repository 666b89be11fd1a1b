use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{GameId, UserId};
use crate::game_actor::GameError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("No cart for user: {0}")]
    NotFound(UserId),
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error("Catalog error: {0}")]
    Catalog(GameError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
