use thiserror::Error;

/// Errors raised by record store backends.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// A record with the same zip code already exists.
    #[error("zip code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors surfaced by the zip code directory service.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("ZipCode not found: {0}")]
    NotFound(String),
    #[error("invalid zip code: {0}")]
    InvalidZipCode(String),
    /// The store reported a duplicate key but the record could not be read back.
    #[error("ZipCode not found after conflict: {0}")]
    Inconsistent(String),
    #[error("{0}")]
    Persistence(#[from] StorageError),
}
