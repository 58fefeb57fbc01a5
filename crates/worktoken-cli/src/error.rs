//! CLI error types.

use std::process::ExitCode;

use thiserror::Error;
use worktoken::{DecodeError, EncodeError};

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to encode: {0}")]
    Encode(#[from] EncodeError),

    #[error("failed to decode: {0}")]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 1 for codec failures, 2 for everything else.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Encode(_) | CliError::Decode(_) => ExitCode::from(1),
            CliError::Io(_) | CliError::Json(_) => ExitCode::from(2),
        }
    }
}
