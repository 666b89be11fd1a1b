use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub type GameId = u64;

/// A catalog entry. Never modified once added.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub developer: String,
    pub platform: String,
    pub price: Decimal,
    pub added_at: DateTime<Utc>,
}

/// Payload for adding a game to the catalog.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub title: String,
    pub description: String,
    pub developer: String,
    pub platform: String,
    pub price: Decimal,
}

impl GameCreate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        developer: impl Into<String>,
        platform: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            developer: developer.into(),
            platform: platform.into(),
            price,
        }
    }
}
