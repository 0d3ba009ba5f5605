//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("campaign repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl game_core::GameError for RepositoryError {
    fn severity(&self) -> game_core::ErrorSeverity {
        match self {
            RepositoryError::CorruptedData(_) => game_core::ErrorSeverity::Validation,
            RepositoryError::LockPoisoned => game_core::ErrorSeverity::Internal,
            RepositoryError::Io(_) | RepositoryError::Serialization(_) => {
                game_core::ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RepositoryError::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            RepositoryError::Io(_) => "REPOSITORY_IO",
            RepositoryError::Serialization(_) => "REPOSITORY_SERIALIZATION",
            RepositoryError::CorruptedData(_) => "REPOSITORY_CORRUPTED_DATA",
        }
    }
}
