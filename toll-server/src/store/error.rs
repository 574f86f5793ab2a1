//! Saved-toll store error types.

/// Errors from the saved-toll store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Legacy blob file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Legacy blob file could not be decoded
    #[error("legacy blob decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored identifier is not a valid UUID
    #[error("invalid saved-toll id: {0}")]
    InvalidId(#[from] uuid::Error),
}
