//! User store logic, including wallet debits and credits.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
