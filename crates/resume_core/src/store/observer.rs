//! Change-notification contract for store listeners.

use crate::model::resume::ResumeDocument;

/// Handle returned by `ResumeStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Listener notified after every change of the store's document.
///
/// Observers see read-only snapshots and have no mutation path back into
/// the store.
pub trait DocumentObserver {
    /// Called synchronously after a command changed the document.
    fn on_change(&mut self, snapshot: &ResumeDocument);

    /// Called when the host reaches an idle point.
    ///
    /// Observers that batch work (for example deferred storage writes)
    /// finish it here. Default is a no-op.
    fn flush(&mut self, _snapshot: &ResumeDocument) {}
}

impl<F> DocumentObserver for F
where
    F: FnMut(&ResumeDocument),
{
    fn on_change(&mut self, snapshot: &ResumeDocument) {
        self(snapshot)
    }
}
