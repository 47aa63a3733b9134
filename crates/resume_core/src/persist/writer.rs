//! Store observer that writes snapshots to durable storage.

use crate::model::resume::ResumeDocument;
use crate::persist::codec::encode_snapshot;
use crate::storage::kv::KeyValueStore;
use crate::store::observer::DocumentObserver;
use log::{debug, error};

/// How often the writer touches durable storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Write on every change.
    #[default]
    Immediate,
    /// Remember that a write is due and perform it on `flush`.
    ///
    /// Coalesces bursts of edits into one write of the newest snapshot.
    Deferred,
}

/// Writes the full current snapshot under one record key.
pub struct SnapshotWriter<S: KeyValueStore> {
    kv: S,
    key: String,
    policy: WritePolicy,
    dirty: bool,
    last_written: Option<String>,
    writes: u64,
}

impl<S: KeyValueStore> SnapshotWriter<S> {
    pub fn new(kv: S, key: impl Into<String>, policy: WritePolicy) -> Self {
        Self {
            kv,
            key: key.into(),
            policy,
            dirty: false,
            last_written: None,
            writes: 0,
        }
    }

    /// Number of records actually written to storage.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Whether a deferred write is waiting for `flush`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Serializes `snapshot` and writes it unless it matches the last write.
    ///
    /// Failures are logged and swallowed.
    pub fn write_now(&mut self, snapshot: &ResumeDocument) {
        self.dirty = false;

        let encoded = match encode_snapshot(snapshot) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(
                    "event=snapshot_write module=persist status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };
        if self.last_written.as_deref() == Some(encoded.as_str()) {
            debug!("event=snapshot_write module=persist status=skipped reason=unchanged");
            return;
        }

        match self.kv.set(&self.key, &encoded) {
            Ok(()) => {
                self.writes += 1;
                debug!(
                    "event=snapshot_write module=persist status=ok bytes={} writes={}",
                    encoded.len(),
                    self.writes
                );
                self.last_written = Some(encoded);
            }
            Err(err) => error!(
                "event=snapshot_write module=persist status=error error_code=store_write_failed error={err}"
            ),
        }
    }
}

impl<S: KeyValueStore> DocumentObserver for SnapshotWriter<S> {
    fn on_change(&mut self, snapshot: &ResumeDocument) {
        match self.policy {
            WritePolicy::Immediate => self.write_now(snapshot),
            WritePolicy::Deferred => self.dirty = true,
        }
    }

    fn flush(&mut self, snapshot: &ResumeDocument) {
        if self.dirty {
            self.write_now(snapshot);
        }
    }
}
