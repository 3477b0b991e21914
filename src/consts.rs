/// Directory name used under the platform config and data directories
pub(crate) const APP_NAME: &str = "braglog";

/// File name of the SQLite log store
pub(crate) const DB_FILE_NAME: &str = "log.db";

/// Display format for entry timestamps: "2025-01-15 09:30"
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
