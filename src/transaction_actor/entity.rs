use std::convert::Infallible;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Transaction, TransactionCreate, TransactionId};
use super::error::TransactionError;

impl Entity for Transaction {
    const KIND: &'static str = "transaction";

    type Id = TransactionId;
    type CreatePayload = TransactionCreate;
    type Patch = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Error = TransactionError;

    fn id(&self) -> &TransactionId { &self.id }

    fn from_create(id: TransactionId, payload: TransactionCreate) -> Result<Self, TransactionError> {
        Ok(Self {
            id,
            user_id: payload.user_id,
            game_id: payload.game_id,
            kind: payload.kind,
            amount: payload.amount,
            created_at: Utc::now(),
        })
    }

    fn not_found(id: TransactionId) -> TransactionError {
        TransactionError::NotFound(id)
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), TransactionError> {
        match patch {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), TransactionError> {
        match action {}
    }
}
