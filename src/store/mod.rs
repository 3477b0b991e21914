//! Local SQLite store for brag log entries
//!
//! The store is append-only: entries are inserted by [`Store::append`] and
//! never updated or deleted. A connection is opened per operation and
//! released when the operation returns.

mod recorder;
mod schema;
mod types;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::consts::{APP_NAME, DB_FILE_NAME};
use crate::error::StoreError;

pub(crate) use recorder::EntrySink;
pub(crate) use types::LogEntry;

/// Handle to the on-disk log store
#[derive(Debug, Clone)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory, or `./log.db` when none exists
    pub(crate) fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join(APP_NAME).join(DB_FILE_NAME),
            None => PathBuf::from(".").join(DB_FILE_NAME),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the store location and `logs` table exist. Idempotent.
    pub(crate) fn ensure(&self) -> Result<(), StoreError> {
        schema::ensure(&self.path).map(drop)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        schema::ensure(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("log.db");
        let store = Store::new(&path);

        store.ensure().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn ensure_twice_keeps_a_single_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("log.db"));

        store.ensure().unwrap();
        store.ensure().unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'logs'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn ensure_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("log.db"));

        store.append("first win", None).unwrap();
        store.ensure().unwrap();

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn ensure_reports_unusable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = Store::new(blocker.join("log.db"));

        let err = store.ensure().unwrap_err();
        assert!(matches!(err, StoreError::CreateDir { .. }));
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.db");
        // A relative `log.db` has an empty parent; ensure must not try to create it
        assert_eq!(Path::new("log.db").parent(), Some(Path::new("")));

        Store::new(&path).ensure().unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn default_path_ends_with_db_file() {
        let path = Store::default_path();
        assert!(path.ends_with(DB_FILE_NAME));
    }
}
