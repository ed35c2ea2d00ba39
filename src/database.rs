use crate::dlog;
use crate::error::StorageError;
use crate::persistence::KeyValueSlot;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Durable key-value slot in a SQLite file.
///
/// Every row is scoped by `origin`, so two origins sharing one file never see
/// each other's keys.
pub struct SqliteSlot {
    conn: Connection,
    origin: String,
}

impl SqliteSlot {
    pub fn open(path: &Path, origin: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), origin, "opened sqlite slot");
        Self::with_connection(conn, origin)
    }

    pub fn open_in_memory(origin: &str) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?, origin)
    }

    fn with_connection(conn: Connection, origin: &str) -> Result<Self, StorageError> {
        if !table_exists(&conn, "kv")? {
            dlog!("creating kv table");
        }
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS kv (
              origin  TEXT NOT NULL,
              key     TEXT NOT NULL,
              value   TEXT NOT NULL,
              PRIMARY KEY (origin, key)
            );
            ",
        )?;
        Ok(Self {
            conn,
            origin: origin.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl KeyValueSlot for SqliteSlot {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            r"
            INSERT INTO kv (origin, key, value) VALUES (?1, ?2, ?3)
            ON CONFLICT (origin, key) DO UPDATE SET value = excluded.value
            ",
            params![self.origin, key, value],
        )?;
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE origin = ?1 AND key = ?2",
                params![self.origin, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "DELETE FROM kv WHERE origin = ?1 AND key = ?2",
            params![self.origin, key],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool, StorageError> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}
