use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{Game, UserId};

pub type OrderId = u64;

/// A completed purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub games: Vec<Game>,
    /// Sum of `games` prices at the moment the order was placed
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

/// Payload for recording a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub games: Vec<Game>,
    pub total_amount: Decimal,
}
