//! Per-user cart store, keyed by user id.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
