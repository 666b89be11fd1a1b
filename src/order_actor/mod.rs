//! Order store logic. Orders are write-once.

pub mod entity;
pub mod error;

pub use error::*;
