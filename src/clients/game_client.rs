use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Game, GameCreate, GameId};
use crate::game_actor::GameError;

/// Client for interacting with the Game actor.
#[derive(Clone)]
pub struct GameClient {
    inner: ResourceClient<Game>,
}

impl_basic_client!(GameClient, Game, GameError, game);

impl GameClient {
    #[instrument(skip(self, game), fields(title = %game.title, price = %game.price))]
    pub async fn create_game(&self, game: GameCreate) -> Result<GameId, GameError> {
        debug!("Sending request");
        self.inner.create(game).await
    }
}
