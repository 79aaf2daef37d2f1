use thiserror::Error;

/// Errors that can occur while playing or configuring self-play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtttError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for self-play operations
pub type Result<T> = std::result::Result<T, UtttError>;
