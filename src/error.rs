//! Error vocabulary for the website repository.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias using RepositoryError
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("website with this name already exists")]
    Duplicate,

    #[error("website not found")]
    NotFound,

    #[error("invalid argument: id must be non-zero")]
    InvalidArgument,

    #[error("update failed: no website with this id")]
    UpdateFailed,

    #[error("delete failed: no website with this id")]
    DeleteFailed,

    #[error("service has not been started")]
    NotStarted,

    #[error("store error: {0}")]
    Io(#[from] rusqlite::Error),
}

/// Lets a store adapter say what kind of failure it reported.
pub trait StoreFailure {
    /// True when the failure is a violated uniqueness constraint
    fn is_unique_violation(&self) -> bool;
}

impl StoreFailure for rusqlite::Error {
    fn is_unique_violation(&self) -> bool {
        match self {
            rusqlite::Error::SqliteFailure(err, _) => {
                err.code == ErrorCode::ConstraintViolation
                    && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
            }
            _ => false,
        }
    }
}
