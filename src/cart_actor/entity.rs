use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::{Cart, UserId};
use super::actions::CartAction;
use super::error::CartError;

impl Entity for Cart {
    const KIND: &'static str = "cart";

    type Id = UserId;
    /// Carts carry nothing beyond their owner's id
    type CreatePayload = ();
    type Patch = Infallible;
    type Action = CartAction;
    type ActionResult = usize;
    type Error = CartError;

    fn id(&self) -> &UserId { &self.user_id }

    fn from_create(user_id: UserId, _payload: ()) -> Result<Self, CartError> {
        Ok(Cart::new(user_id))
    }

    fn not_found(user_id: UserId) -> CartError {
        CartError::NotFound(user_id)
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), CartError> {
        match patch {}
    }

    fn handle_action(&mut self, action: CartAction) -> Result<usize, CartError> {
        match action {
            CartAction::Add(game) => {
                self.games.push(game);
                Ok(self.games.len())
            }
        }
    }
}
