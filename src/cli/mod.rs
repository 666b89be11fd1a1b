//! Interactive console front end.

pub mod console;
pub mod error;
pub mod menu;
pub mod render;

pub use console::*;
pub use error::*;
pub use menu::*;
