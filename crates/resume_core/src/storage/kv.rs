//! Key-value store contract.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a key-value backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Backend-specific failure outside SQLite (test doubles, host stores).
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named-record store, the only durable storage the host offers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Returns whether a record existed.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;
}
