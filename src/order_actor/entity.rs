use std::convert::Infallible;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{total_price, Order, OrderCreate, OrderId};
use super::error::OrderError;

impl Entity for Order {
    const KIND: &'static str = "order";

    type Id = OrderId;
    type CreatePayload = OrderCreate;
    type Patch = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId { &self.id }

    /// The recorded total must equal the sum of the purchased games' prices.
    fn validate(payload: &OrderCreate) -> Result<(), OrderError> {
        let expected = total_price(&payload.games).ok_or(OrderError::TotalOverflow(payload.user_id))?;
        if payload.total_amount != expected {
            return Err(OrderError::TotalMismatch {
                total: payload.total_amount,
                expected,
            });
        }
        Ok(())
    }

    fn from_create(id: OrderId, payload: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            user_id: payload.user_id,
            games: payload.games,
            total_amount: payload.total_amount,
            order_date: Utc::now(),
        })
    }

    fn not_found(id: OrderId) -> OrderError {
        OrderError::NotFound(id)
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), OrderError> {
        match patch {}
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), OrderError> {
        match action {}
    }
}
