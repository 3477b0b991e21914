use rusqlite::params;

use crate::error::StoreError;
use crate::utils::debug_log;

use super::{LogEntry, Store};

/// Something that can persist an entry typed into the form
pub(crate) trait EntrySink {
    fn save_entry(&self, message: &str, project: Option<&str>) -> Result<(), StoreError>;
}

/// Trimmed project tag, or `None` when blank
fn normalize_project(project: Option<&str>) -> Option<&str> {
    project.map(str::trim).filter(|p| !p.is_empty())
}

impl Store {
    /// Append one entry. A message that is empty after trimming is ignored
    /// without touching the store.
    pub(crate) fn append(&self, message: &str, project: Option<&str>) -> Result<(), StoreError> {
        let message = message.trim();
        if message.is_empty() {
            debug_log("empty message, nothing written");
            return Ok(());
        }
        let project = normalize_project(project);

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO logs (message, project) VALUES (?1, ?2)",
            params![message, project],
        )?;
        debug_log(format_args!("inserted entry #{}", conn.last_insert_rowid()));
        Ok(())
    }

    /// Most recent entries first, at most `limit` rows when given
    pub(crate) fn recent(&self, limit: Option<usize>) -> Result<Vec<LogEntry>, StoreError> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));

        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, message, project, created_at
             FROM logs ORDER BY id DESC LIMIT ?1",
        )?;
        let entries = stmt
            .query_map([limit], |row| {
                Ok(LogEntry {
                    id: row.get(0)?,
                    message: row.get(1)?,
                    project: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    pub(crate) fn count(&self) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl EntrySink for Store {
    fn save_entry(&self, message: &str, project: Option<&str>) -> Result<(), StoreError> {
        self.append(message, project)
    }
}
