// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream closed while the session was waiting for a line.
    /// The session treats this exactly like the exit command.
    #[error("End of input")]
    EndOfInput,
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
