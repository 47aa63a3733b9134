//! In-memory resume store with synchronous observers.
//!
//! # Responsibility
//! - Hold the session document and expose read-only snapshots.
//! - Apply commands atomically and fan out change notifications.
//!
//! # Invariants
//! - `revision` increases by exactly one per document change.
//! - Observers are notified in subscription order.

use crate::model::command::ResumeCommand;
use crate::model::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, Theme};
use crate::store::observer::{DocumentObserver, SubscriptionId};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Owner of the session's single `ResumeDocument`.
pub struct ResumeStore {
    document: ResumeDocument,
    revision: u64,
    observers: Vec<(SubscriptionId, Box<dyn DocumentObserver>)>,
    next_subscription: u64,
}

impl ResumeStore {
    /// Creates a store holding the empty default document.
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::default())
    }

    /// Creates a store seeded with `document`.
    ///
    /// Seeding is not a change: no observers exist yet and `revision` is 0.
    pub fn with_document(document: ResumeDocument) -> Self {
        Self {
            document,
            revision: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &ResumeDocument {
        &self.document
    }

    /// Number of changes applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one command and notifies observers when it changed state.
    ///
    /// Returns whether the document changed.
    pub fn dispatch(&mut self, command: ResumeCommand) -> bool {
        let kind = command.kind();
        if !self.document.apply(command) {
            debug!("event=document_command module=store status=noop kind={kind}");
            return false;
        }

        self.revision += 1;
        debug!(
            "event=document_command module=store status=ok kind={kind} revision={} observers={}",
            self.revision,
            self.observers.len()
        );
        for (_, observer) in &mut self.observers {
            observer.on_change(&self.document);
        }
        true
    }

    /// Registers an observer; it is first called on the next change.
    pub fn subscribe(&mut self, observer: Box<dyn DocumentObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Lets batching observers finish pending work against the current
    /// snapshot.
    pub fn flush_observers(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.flush(&self.document);
        }
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) -> bool {
        self.dispatch(ResumeCommand::SetPersonalInfo(info))
    }

    /// Appends an entry; no-op when its id is already present.
    pub fn add_experience(&mut self, entry: ExperienceEntry) -> bool {
        self.dispatch(ResumeCommand::AddExperience(entry))
    }

    /// Replaces the same-id entry in place; no-op when absent.
    pub fn update_experience(&mut self, entry: ExperienceEntry) -> bool {
        self.dispatch(ResumeCommand::UpdateExperience(entry))
    }

    pub fn delete_experience(&mut self, id: &str) -> bool {
        self.dispatch(ResumeCommand::DeleteExperience(id.to_string()))
    }

    pub fn add_education(&mut self, entry: EducationEntry) -> bool {
        self.dispatch(ResumeCommand::AddEducation(entry))
    }

    pub fn update_education(&mut self, entry: EducationEntry) -> bool {
        self.dispatch(ResumeCommand::UpdateEducation(entry))
    }

    pub fn delete_education(&mut self, id: &str) -> bool {
        self.dispatch(ResumeCommand::DeleteEducation(id.to_string()))
    }

    /// Replaces the skill list verbatim. Callers dedupe beforehand.
    pub fn set_skills(&mut self, skills: Vec<String>) -> bool {
        self.dispatch(ResumeCommand::SetSkills(skills))
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.dispatch(ResumeCommand::SetTheme(theme))
    }

    /// Replaces the whole document. Reserved for session restore.
    pub fn load_document(&mut self, document: ResumeDocument) -> bool {
        self.dispatch(ResumeCommand::LoadDocument(document))
    }
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ResumeStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeStore")
            .field("document", &self.document)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
