//! SQLite-backed key-value store.
//!
//! # Invariants
//! - Each key maps to at most one row in `kv_records`.
//! - Writes are single upsert statements; a reader never sees a torn value.

use crate::db::{open_db, open_db_in_memory};
use crate::storage::kv::{KeyValueStore, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Durable store owning its connection.
///
/// Owning (rather than borrowing) the connection lets the store live inside
/// a store observer for the whole session.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens or creates the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps a connection that already went through `open_db*`.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_records ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_records (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM kv_records WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}
