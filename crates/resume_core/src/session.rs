//! Session bootstrap: one store, one durable record, one bridge.
//!
//! # Responsibility
//! - Construct the store at session start and restore into it.
//! - Keep the persistence writer subscribed for the session lifetime.
//!
//! # Invariants
//! - Each session owns an independent store; sessions never share state.
//! - A failed restore leaves the session usable with the default document.

use crate::config::{SessionConfig, StorageLocation};
use crate::export::pdf::{export_pdf, ExportError, ExportedPdf, PdfRasterizer};
use crate::persist::bridge::{PersistenceBridge, RestoreOutcome};
use crate::render::preview::{render_preview, PreviewDocument};
use crate::service::editor::ResumeEditor;
use crate::service::id::IdGenerator;
use crate::storage::kv::{KeyValueStore, StorageError};
use crate::storage::sqlite::SqliteKeyValueStore;
use crate::store::observer::SubscriptionId;
use crate::store::resume_store::ResumeStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SessionError {
    /// The durable store could not be opened.
    Storage(StorageError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to open resume storage: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// A running resume-editing session.
#[derive(Debug)]
pub struct ResumeSession {
    store: ResumeStore,
    restore: RestoreOutcome,
    persistence: SubscriptionId,
}

impl ResumeSession {
    /// Opens the SQLite store named by `config` and attaches persistence.
    pub fn open(config: &SessionConfig) -> Result<Self, SessionError> {
        let kv = match &config.storage {
            StorageLocation::Memory => SqliteKeyValueStore::open_in_memory(),
            StorageLocation::File(path) => SqliteKeyValueStore::open(path),
        }
        .map_err(|err| {
            error!("event=session_open module=session status=error error={err}");
            SessionError::from(err)
        })?;
        Ok(Self::with_storage(kv, config))
    }

    /// Starts a session over any key-value backend.
    pub fn with_storage<S>(kv: S, config: &SessionConfig) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let mut store = ResumeStore::new();
        let bridge = PersistenceBridge::new(config.storage_key.clone(), config.write_policy);
        let attached = bridge.attach(&mut store, kv);
        info!(
            "event=session_open module=session status=ok restored={} policy={:?}",
            attached.restore.is_restored(),
            config.write_policy
        );

        Self {
            store,
            restore: attached.restore,
            persistence: attached.subscription,
        }
    }

    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    /// Mutable access for direct command dispatch.
    pub fn store_mut(&mut self) -> &mut ResumeStore {
        &mut self.store
    }

    /// How the session's initial document was obtained.
    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore
    }

    /// Subscription handle of the persistence writer.
    pub fn persistence_subscription(&self) -> SubscriptionId {
        self.persistence
    }

    /// Edit-surface facade using `ids` for new entries.
    pub fn editor<G: IdGenerator>(&mut self, ids: G) -> ResumeEditor<'_, G> {
        ResumeEditor::new(&mut self.store, ids)
    }

    pub fn preview(&self) -> PreviewDocument {
        render_preview(self.store.snapshot())
    }

    pub fn export_pdf(&self, rasterizer: &dyn PdfRasterizer) -> Result<ExportedPdf, ExportError> {
        export_pdf(&self.store, rasterizer)
    }

    /// Completes deferred writes; call at idle points.
    pub fn flush(&mut self) {
        self.store.flush_observers();
    }
}

impl Drop for ResumeSession {
    fn drop(&mut self) {
        self.store.flush_observers();
    }
}
