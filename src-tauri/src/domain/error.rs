//! Domain error types

use thiserror::Error;

/// Errors that can occur in the wallet core
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Amount error: {0}")]
    Amount(String),

    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Flow error: {0}")]
    Flow(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
