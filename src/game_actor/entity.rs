use std::convert::Infallible;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Game, GameCreate, GameId};
use super::error::GameError;

impl Entity for Game {
    const KIND: &'static str = "game";

    type Id = GameId;
    type CreatePayload = GameCreate;
    type Patch = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Error = GameError;

    fn id(&self) -> &GameId { &self.id }

    /// Only the price is checked; text fields are taken as entered.
    fn validate(payload: &GameCreate) -> Result<(), GameError> {
        if payload.price.is_sign_negative() && !payload.price.is_zero() {
            return Err(GameError::InvalidPrice(payload.price));
        }
        Ok(())
    }

    fn from_create(id: GameId, payload: GameCreate) -> Result<Self, GameError> {
        Ok(Self {
            id,
            title: payload.title,
            description: payload.description,
            developer: payload.developer,
            platform: payload.platform,
            price: payload.price,
            added_at: Utc::now(),
        })
    }

    fn not_found(id: GameId) -> GameError {
        GameError::NotFound(id)
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), GameError> {
        match patch {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), GameError> {
        match action {}
    }
}
