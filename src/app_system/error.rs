use thiserror::Error;

use crate::cli::CliError;
use crate::game_actor::GameError;
use crate::transaction_actor::TransactionError;
use crate::user_actor::UserError;

/// Failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Console failure: {0}")]
    Cli(#[from] CliError),
    #[error("Store task failed: {0}")]
    Shutdown(#[from] tokio::task::JoinError),
}

/// Failures while loading the demo data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeedError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
