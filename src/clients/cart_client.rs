use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartError};
use crate::clients::GameClient;
use crate::domain::{Cart, Game, GameId, UserId};
use crate::game_actor::GameError;

/// Client for the per-user carts.
///
/// Games are resolved through the catalog before they are added, so a cart
/// only ever holds games that exist.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    game_client: GameClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, game_client: GameClient) -> Self {
        Self { inner, game_client }
    }

    /// Adds a catalog game to the user's cart, creating the cart on first use.
    ///
    /// Returns the game and the number of items now in the cart.
    #[instrument(skip(self))]
    pub async fn add_game_to_cart(&self, user_id: UserId, game_id: GameId) -> Result<(Game, usize), CartError> {
        let game = self.game_client.get_game(game_id).await.map_err(|e| match e {
            GameError::NotFound(id) => CartError::GameNotFound(id),
            other => CartError::Catalog(other),
        })?;

        let items = self.inner.upsert(user_id, (), CartAction::Add(game.clone())).await?;
        info!(title = %game.title, items, "Game added to cart");
        Ok((game, items))
    }

    /// A user without a cart has an empty one.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        debug!("Sending request");
        let cart = self.inner.get(user_id).await?;
        Ok(cart.unwrap_or_else(|| Cart::new(user_id)))
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: UserId) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner.remove(user_id).await?;
        Ok(())
    }
}
