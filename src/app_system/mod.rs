//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod vault_system;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use seed::*;
pub use vault_system::*;
