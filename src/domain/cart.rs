use rust_decimal::Decimal;

use super::{Game, UserId};

/// Games a user has picked but not yet bought, in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub user_id: UserId,
    pub games: Vec<Game>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, games: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Sum of the listed prices, or `None` if it leaves the decimal range.
    pub fn total(&self) -> Option<Decimal> {
        total_price(&self.games)
    }
}

pub fn total_price(games: &[Game]) -> Option<Decimal> {
    games
        .iter()
        .try_fold(Decimal::ZERO, |sum, game| sum.checked_add(game.price))
}
