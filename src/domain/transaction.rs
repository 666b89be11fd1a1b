use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{GameId, UserId};

pub type TransactionId = u64;

/// A financial log entry.
///
/// Not tied to any order; callers record one explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub game_id: GameId,
    /// Free text such as "Purchase" or "Refund"
    pub kind: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TransactionCreate {
    pub user_id: UserId,
    pub game_id: GameId,
    pub kind: String,
    pub amount: Decimal,
}

impl TransactionCreate {
    pub fn new(user_id: UserId, game_id: GameId, kind: impl Into<String>, amount: Decimal) -> Self {
        Self {
            user_id,
            game_id,
            kind: kind.into(),
            amount,
        }
    }
}
