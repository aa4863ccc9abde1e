pub mod db;

pub use db::{data_dir, default_db_path, open_db, open_db_in_memory};

use crate::domain::{Note, Todo};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle over the todos/notes database.
///
/// Every operation touches at most one row, so the UI process and the alert
/// daemon can share the underlying file without coordination beyond SQLite's
/// own locking.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at the given path, creating tables on first use
    pub fn open(path: impl AsRef<std::path::Path>) -> StoreResult<Self> {
        Ok(Self { conn: open_db(path)? })
    }

    /// Open an in-memory store (tests)
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self { conn: open_db_in_memory()? })
    }

    // --- Todo operations ---

    /// Insert a new todo and return its assigned id
    pub fn create_todo(&self, task: &str, due_at: DateTime<Utc>) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO todos (task, due_at) VALUES (?1, ?2)",
            params![task, due_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all todos: incomplete first ordered by due time ascending,
    /// then completed
    pub fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, task, is_done, due_at, alert_sent
             FROM todos
             ORDER BY is_done ASC, due_at ASC",
        )?;
        let rows = stmt.query_map([], todo_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Flip the completion flag relative to its current value
    pub fn toggle_todo(&self, id: i64, current: bool) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE todos SET is_done = ?1 WHERE id = ?2",
            params![!current, id],
        )?;
        Ok(())
    }

    pub fn delete_todo(&self, id: i64) -> StoreResult<()> {
        self.conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Todos that are past due, not completed, and not yet alerted
    pub fn due_unalerted(&self, now: DateTime<Utc>) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, task, is_done, due_at, alert_sent
             FROM todos
             WHERE due_at <= ?1 AND alert_sent = 0 AND is_done = 0
             ORDER BY due_at ASC",
        )?;
        let rows = stmt.query_map(params![now], todo_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Record that a notification has fired for this todo. Monotonic: there
    /// is no way to clear the flag, and re-marking is harmless.
    pub fn mark_alerted(&self, id: i64) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE todos SET alert_sent = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    }

    // --- Note operations ---

    /// Insert a new note and return its assigned id
    pub fn create_note(&self, title: &str, body: &str) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO notes (title, body, created_at) VALUES (?1, ?2, ?3)",
            params![title, body, Utc::now()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all notes, most recently created first
    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, body, created_at FROM notes ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], note_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Replace a note's body with content captured from an editor session
    pub fn update_note_body(&self, id: i64, body: &str) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE notes SET body = ?1 WHERE id = ?2",
            params![body, id],
        )?;
        Ok(())
    }

    pub fn delete_note(&self, id: i64) -> StoreResult<()> {
        self.conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(())
    }
}

#[cfg(test)]
impl Store {
    /// Drop the todos table so every later todo operation fails
    pub fn drop_todos_table(&self) {
        self.conn.execute_batch("DROP TABLE todos").unwrap();
    }
}

fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        task: row.get(1)?,
        is_done: row.get(2)?,
        due_at: row.get(3)?,
        alert_sent: row.get(4)?,
    })
}

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        created_at: row.get(3)?,
    })
}
