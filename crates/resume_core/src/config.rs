//! Session configuration.
//!
//! Plain values with defaults; hosts fill in what they need and pass the
//! struct to `ResumeSession::open`.

use crate::persist::codec::DEFAULT_STORAGE_KEY;
use crate::persist::writer::WritePolicy;
use std::path::PathBuf;

/// File name used when a host only supplies a data directory.
pub const DEFAULT_DB_FILE_NAME: &str = "resume_builder.sqlite3";

/// Where the durable record lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageLocation {
    /// Private in-memory database; nothing survives the process.
    #[default]
    Memory,
    /// SQLite database file, created on first open.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Record key the snapshot is stored under.
    pub storage_key: String,
    pub storage: StorageLocation,
    pub write_policy: WritePolicy,
}

impl SessionConfig {
    /// File-backed configuration storing `DEFAULT_DB_FILE_NAME` in `data_dir`.
    pub fn in_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageLocation::File(data_dir.into().join(DEFAULT_DB_FILE_NAME)),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage: StorageLocation::default(),
            write_policy: WritePolicy::default(),
        }
    }
}
