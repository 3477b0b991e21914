use std::path::Path;

use rusqlite::Connection;

use crate::error::StoreError;
use crate::utils::debug_log;

const CREATE_LOGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    message TEXT NOT NULL,
    project TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Create the store's parent directory and the `logs` table if missing,
/// returning the open connection.
pub(super) fn ensure(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch(CREATE_LOGS_TABLE)?;
    debug_log(format_args!("store ready at {}", path.display()));
    Ok(conn)
}
