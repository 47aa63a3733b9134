//! Use-case facade for form-driven editing.
//!
//! # Responsibility
//! - Turn drafts into entries with fresh ids and hand them to the store.
//! - Report edit-surface problems (missing fields, stale ids) to the caller.
//!
//! # Invariants
//! - New ids never collide with ids already in the target collection.
//! - The skill list written to the store never gains a duplicate here.

use crate::model::resume::{EntryId, PersonalInfo, Theme};
use crate::service::draft::{DraftError, EducationDraft, ExperienceDraft};
use crate::service::id::IdGenerator;
use crate::service::skills::{add_skill, remove_skill};
use crate::store::resume_store::ResumeStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_ID_ATTEMPTS: usize = 8;

/// Edit-surface error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    Draft(DraftError),
    /// The entry being edited no longer exists.
    EntryNotFound(EntryId),
    /// The id generator kept returning ids already in use.
    IdExhausted,
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::EntryNotFound(id) => write!(f, "entry not found: {id}"),
            Self::IdExhausted => write!(
                f,
                "id generator returned {MAX_ID_ATTEMPTS} ids that are already in use"
            ),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DraftError> for EditError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

/// Editor bound to one store and one id generator.
pub struct ResumeEditor<'store, G: IdGenerator> {
    store: &'store mut ResumeStore,
    ids: G,
}

impl<'store, G: IdGenerator> ResumeEditor<'store, G> {
    pub fn new(store: &'store mut ResumeStore, ids: G) -> Self {
        Self { store, ids }
    }

    /// Read-only access to the edited store.
    pub fn store(&self) -> &ResumeStore {
        self.store
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) -> bool {
        self.store.set_personal_info(info)
    }

    /// Validates `draft`, assigns a fresh id and appends the entry.
    pub fn add_experience(&mut self, draft: ExperienceDraft) -> Result<EntryId, EditError> {
        draft.validate()?;
        let snapshot = self.store.snapshot();
        let id = fresh_id(&mut self.ids, |id| snapshot.experience(id).is_some())?;
        let entry = draft.into_entry(id.clone())?;
        self.store.add_experience(entry);
        Ok(id)
    }

    /// Replaces the fields of entry `id` with `draft`.
    pub fn update_experience(&mut self, id: &str, draft: ExperienceDraft) -> Result<(), EditError> {
        if self.store.snapshot().experience(id).is_none() {
            return Err(EditError::EntryNotFound(id.to_string()));
        }
        let entry = draft.into_entry(id.to_string())?;
        self.store.update_experience(entry);
        Ok(())
    }

    pub fn delete_experience(&mut self, id: &str) -> bool {
        self.store.delete_experience(id)
    }

    pub fn add_education(&mut self, draft: EducationDraft) -> Result<EntryId, EditError> {
        draft.validate()?;
        let snapshot = self.store.snapshot();
        let id = fresh_id(&mut self.ids, |id| snapshot.education_entry(id).is_some())?;
        let entry = draft.into_entry(id.clone())?;
        self.store.add_education(entry);
        Ok(id)
    }

    pub fn update_education(&mut self, id: &str, draft: EducationDraft) -> Result<(), EditError> {
        if self.store.snapshot().education_entry(id).is_none() {
            return Err(EditError::EntryNotFound(id.to_string()));
        }
        let entry = draft.into_entry(id.to_string())?;
        self.store.update_education(entry);
        Ok(())
    }

    pub fn delete_education(&mut self, id: &str) -> bool {
        self.store.delete_education(id)
    }

    /// Appends a trimmed skill. Returns `false` for empty or duplicate input.
    pub fn add_skill(&mut self, label: &str) -> bool {
        match add_skill(&self.store.snapshot().skills, label) {
            Some(next) => self.store.set_skills(next),
            None => false,
        }
    }

    pub fn remove_skill(&mut self, label: &str) -> bool {
        match remove_skill(&self.store.snapshot().skills, label) {
            Some(next) => self.store.set_skills(next),
            None => false,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.store.set_theme(theme)
    }
}

fn fresh_id<G: IdGenerator>(
    ids: &mut G,
    in_use: impl Fn(&str) -> bool,
) -> Result<EntryId, EditError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.next_id();
        if !in_use(&candidate) {
            return Ok(candidate);
        }
    }
    Err(EditError::IdExhausted)
}

#[cfg(test)]
mod tests {
    use super::{EditError, ResumeEditor};
    use crate::service::draft::{DraftError, ExperienceDraft};
    use crate::service::id::SequentialIdGenerator;
    use crate::store::resume_store::ResumeStore;

    fn draft(company: &str) -> ExperienceDraft {
        ExperienceDraft {
            company: company.to_string(),
            position: "Engineer".to_string(),
            ..ExperienceDraft::default()
        }
    }

    #[test]
    fn add_rejects_missing_fields_without_touching_store() {
        let mut store = ResumeStore::new();
        let mut editor = ResumeEditor::new(&mut store, SequentialIdGenerator::new("e"));

        let err = editor
            .add_experience(ExperienceDraft::default())
            .expect_err("empty draft must fail");
        assert_eq!(err, EditError::Draft(DraftError::MissingField("company")));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_skips_ids_already_in_use() {
        let mut store = ResumeStore::new();
        let mut repeating = || "same".to_string();
        let mut editor = ResumeEditor::new(&mut store, &mut repeating);

        assert_eq!(editor.add_experience(draft("A")).expect("first add"), "same");
        assert_eq!(
            editor.add_experience(draft("B")).expect_err("ids exhausted"),
            EditError::IdExhausted
        );
        assert_eq!(editor.store().snapshot().experiences.len(), 1);
    }

    #[test]
    fn update_unknown_entry_is_reported() {
        let mut store = ResumeStore::new();
        let mut editor = ResumeEditor::new(&mut store, SequentialIdGenerator::new("e"));

        let err = editor
            .update_experience("ghost", draft("A"))
            .expect_err("unknown id");
        assert_eq!(err, EditError::EntryNotFound("ghost".to_string()));
    }

    #[test]
    fn skills_are_deduplicated_at_the_edit_surface() {
        let mut store = ResumeStore::new();
        let mut editor = ResumeEditor::new(&mut store, SequentialIdGenerator::new("e"));

        assert!(editor.add_skill("Rust"));
        assert!(!editor.add_skill("Rust"));
        assert!(editor.add_skill("Go"));
        assert!(editor.remove_skill("Rust"));
        assert!(!editor.remove_skill("Rust"));

        assert_eq!(store.snapshot().skills, vec!["Go".to_string()]);
    }
}
