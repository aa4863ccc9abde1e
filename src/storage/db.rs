use super::StoreResult;
use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    is_done INTEGER NOT NULL DEFAULT 0,
    due_at TEXT NOT NULL,
    alert_sent INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);
";

/// Resolve the application data directory, creating it if needed
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine user data directory")?;
    let dir = base.join("mynotes");
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Resolve the database file path
pub fn default_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("data.db"))
}

/// Open the database file and bootstrap the schema
pub fn open_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let conn = Connection::open(path.as_ref())?;
    bootstrap_connection(&conn)?;
    info!("opened database at {}", path.as_ref().display());
    Ok(conn)
}

/// Open an in-memory database with the schema applied (tests)
pub fn open_db_in_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory()?;
    bootstrap_connection(&conn)?;
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection) -> StoreResult<()> {
    // The UI and the alert daemon share this file; a busy timeout lets their
    // interleaved single-row operations wait instead of failing.
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
