use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Terminal I/O failed: {0}")]
    Terminal(std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),
}

/// The log store could not be created, opened or written
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Cannot create store directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Log store unavailable: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
