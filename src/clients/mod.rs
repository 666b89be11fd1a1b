//! Management services: typed, cloneable handles over the entity stores.

#[macro_use]
mod macros;

pub mod user_client;
pub mod game_client;
pub mod cart_client;
pub mod order_client;
pub mod transaction_client;

pub use user_client::*;
pub use game_client::*;
pub use cart_client::*;
pub use order_client::*;
pub use transaction_client::*;
