//! Storefront records, free of any store or actor concerns.

pub mod user;
pub mod game;
pub mod cart;
pub mod order;
pub mod transaction;

pub use user::*;
pub use game::*;
pub use cart::*;
pub use order::*;
pub use transaction::*;
