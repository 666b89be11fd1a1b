use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input stream closed")]
    EndOfInput,
    #[error("Invalid input {0:?}. Please enter a whole number.")]
    InvalidNumber(String),
    #[error("Invalid input {0:?}. Please enter an amount such as 19.99.")]
    InvalidAmount(String),
}

impl CliError {
    /// Whether the menu can report the error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::InvalidNumber(_) | CliError::InvalidAmount(_))
    }
}
