//! Restore-then-save wiring for one session.

use crate::persist::codec::{decode_snapshot, DEFAULT_STORAGE_KEY};
use crate::persist::writer::{SnapshotWriter, WritePolicy};
use crate::storage::kv::KeyValueStore;
use crate::store::observer::SubscriptionId;
use crate::store::resume_store::ResumeStore;
use log::{info, warn};

/// Result of reading the stored record at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No record; default document kept.
    Absent,
    /// The store failed to read the record; default document kept.
    ///
    /// The record may still hold a valid resume, so it must not be
    /// overwritten until the user actually edits.
    Unreadable { reason: String },
    /// Record decoded and loaded into the store.
    Restored,
    /// Record present but not a valid snapshot; default document kept.
    Invalid { reason: String },
}

impl RestoreOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored)
    }
}

/// Restore outcome plus the writer's subscription handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedBridge {
    pub restore: RestoreOutcome,
    pub subscription: SubscriptionId,
}

/// Bridges a `ResumeStore` to one record of a `KeyValueStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceBridge {
    key: String,
    policy: WritePolicy,
}

impl PersistenceBridge {
    pub fn new(key: impl Into<String>, policy: WritePolicy) -> Self {
        Self {
            key: key.into(),
            policy,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Loads the stored record into `store` when it decodes.
    ///
    /// # Invariants
    /// - On any failure `store` keeps its current document.
    /// - Never panics; failures are logged at `warn`.
    pub fn restore<S: KeyValueStore>(&self, store: &mut ResumeStore, kv: &S) -> RestoreOutcome {
        let raw = match kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=snapshot_restore module=persist status=absent");
                return RestoreOutcome::Absent;
            }
            Err(err) => {
                warn!(
                    "event=snapshot_restore module=persist status=error error_code=store_read_failed error={err}"
                );
                return RestoreOutcome::Unreadable {
                    reason: err.to_string(),
                };
            }
        };

        match decode_snapshot(&raw) {
            Ok(document) => {
                store.load_document(document);
                info!(
                    "event=snapshot_restore module=persist status=ok bytes={} experiences={} education={} skills={}",
                    raw.len(),
                    store.snapshot().experiences.len(),
                    store.snapshot().education.len(),
                    store.snapshot().skills.len()
                );
                RestoreOutcome::Restored
            }
            Err(err) => {
                warn!(
                    "event=snapshot_restore module=persist status=error error_code=decode_failed bytes={} error={err}",
                    raw.len()
                );
                RestoreOutcome::Invalid {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Restores from `kv`, then subscribes a writer that owns `kv`.
    ///
    /// The current snapshot (restored or default) is written once right
    /// away, so an undecodable record is replaced by a valid one. An
    /// unreadable record is left alone; the first change writes.
    pub fn attach<S>(&self, store: &mut ResumeStore, kv: S) -> AttachedBridge
    where
        S: KeyValueStore + 'static,
    {
        let restore = self.restore(store, &kv);

        let mut writer = SnapshotWriter::new(kv, self.key.clone(), self.policy);
        if matches!(restore, RestoreOutcome::Unreadable { .. }) {
            info!("event=snapshot_write module=persist status=skipped reason=unreadable_record");
        } else {
            writer.write_now(store.snapshot());
        }
        let subscription = store.subscribe(Box::new(writer));

        AttachedBridge {
            restore,
            subscription,
        }
    }
}

impl Default for PersistenceBridge {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY, WritePolicy::default())
    }
}
