//! CLI error model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Menu input that is not a number between 1 and 6.
    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    /// Reading from or writing to the console failed.
    #[error("console io failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
