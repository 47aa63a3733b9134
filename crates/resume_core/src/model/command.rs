//! Closed command set and the document transition function.
//!
//! # Responsibility
//! - Enumerate every mutation a `ResumeDocument` accepts.
//! - Apply commands as total functions: old state + command -> new state.
//!
//! # Invariants
//! - A command either applies fully or leaves the document untouched.
//! - `add_*` never introduces a duplicate id into its collection.
//! - `update_*` keeps the entry at its original position.
//! - `delete_*` does not reorder survivors.
//! - `SetSkills` stores the supplied list verbatim (no dedup, no reorder).

use crate::model::resume::{
    EducationEntry, EntryId, ExperienceEntry, PersonalInfo, ResumeDocument, Theme,
};
use serde::{Deserialize, Serialize};

/// One mutation of the resume document.
///
/// Serialized as `{ "type": "ADD_EXPERIENCE", "payload": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResumeCommand {
    /// Replaces personal info wholesale; not a partial patch.
    SetPersonalInfo(PersonalInfo),
    /// Appends an entry whose id was assigned by the caller.
    AddExperience(ExperienceEntry),
    /// Replaces the same-id entry in place.
    UpdateExperience(ExperienceEntry),
    DeleteExperience(EntryId),
    AddEducation(EducationEntry),
    UpdateEducation(EducationEntry),
    DeleteEducation(EntryId),
    /// Replaces the skill list wholesale. Callers dedupe beforehand.
    SetSkills(Vec<String>),
    SetTheme(Theme),
    /// Replaces the entire document. Used by restore only.
    LoadDocument(ResumeDocument),
}

impl ResumeCommand {
    /// Stable metadata name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetPersonalInfo(_) => "set_personal_info",
            Self::AddExperience(_) => "add_experience",
            Self::UpdateExperience(_) => "update_experience",
            Self::DeleteExperience(_) => "delete_experience",
            Self::AddEducation(_) => "add_education",
            Self::UpdateEducation(_) => "update_education",
            Self::DeleteEducation(_) => "delete_education",
            Self::SetSkills(_) => "set_skills",
            Self::SetTheme(_) => "set_theme",
            Self::LoadDocument(_) => "load_document",
        }
    }
}

impl ResumeDocument {
    /// Applies one command in place.
    ///
    /// Returns `true` when the document changed. Referential misses
    /// (unknown id on update/delete, duplicate id on add) return `false`.
    pub fn apply(&mut self, command: ResumeCommand) -> bool {
        match command {
            ResumeCommand::SetPersonalInfo(info) => {
                replace_if_changed(&mut self.personal_info, info)
            }
            ResumeCommand::AddExperience(entry) => {
                append_unique(&mut self.experiences, entry, |e| &e.id)
            }
            ResumeCommand::UpdateExperience(entry) => {
                replace_by_id(&mut self.experiences, entry, |e| &e.id)
            }
            ResumeCommand::DeleteExperience(id) => {
                remove_by_id(&mut self.experiences, &id, |e| &e.id)
            }
            ResumeCommand::AddEducation(entry) => {
                append_unique(&mut self.education, entry, |e| &e.id)
            }
            ResumeCommand::UpdateEducation(entry) => {
                replace_by_id(&mut self.education, entry, |e| &e.id)
            }
            ResumeCommand::DeleteEducation(id) => {
                remove_by_id(&mut self.education, &id, |e| &e.id)
            }
            ResumeCommand::SetSkills(skills) => replace_if_changed(&mut self.skills, skills),
            ResumeCommand::SetTheme(theme) => replace_if_changed(&mut self.theme, theme),
            ResumeCommand::LoadDocument(document) => replace_if_changed(self, document),
        }
    }
}

/// Pure transition function: returns the state after `command`.
///
/// `current` is never modified; a no-op command yields an equal copy.
pub fn reduce(current: &ResumeDocument, command: ResumeCommand) -> ResumeDocument {
    let mut next = current.clone();
    next.apply(command);
    next
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn append_unique<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &EntryId) -> bool {
    if items.iter().any(|existing| id_of(existing) == id_of(&item)) {
        return false;
    }
    items.push(item);
    true
}

fn replace_by_id<T: PartialEq>(
    items: &mut [T],
    item: T,
    id_of: impl Fn(&T) -> &EntryId,
) -> bool {
    let Some(index) = items
        .iter()
        .position(|existing| id_of(existing) == id_of(&item))
    else {
        return false;
    };
    replace_if_changed(&mut items[index], item)
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &EntryId) -> bool {
    let before = items.len();
    items.retain(|existing| id_of(existing) != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::{reduce, ResumeCommand};
    use crate::model::resume::{EducationEntry, ExperienceEntry, ResumeDocument, Theme};

    fn experience(id: &str, company: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: id.to_string(),
            company: company.to_string(),
            position: "Engineer".to_string(),
            ..ExperienceEntry::default()
        }
    }

    #[test]
    fn add_with_existing_id_is_noop() {
        let mut document = ResumeDocument::default();
        assert!(document.apply(ResumeCommand::AddExperience(experience("e1", "Acme"))));
        assert!(!document.apply(ResumeCommand::AddExperience(experience("e1", "Other"))));

        assert_eq!(document.experiences.len(), 1);
        assert_eq!(document.experiences[0].company, "Acme");
    }

    #[test]
    fn update_keeps_position_and_unknown_id_is_noop() {
        let mut document = ResumeDocument::default();
        document.apply(ResumeCommand::AddExperience(experience("a", "A")));
        document.apply(ResumeCommand::AddExperience(experience("b", "B")));
        document.apply(ResumeCommand::AddExperience(experience("c", "C")));

        assert!(document.apply(ResumeCommand::UpdateExperience(experience("b", "B2"))));
        assert!(!document.apply(ResumeCommand::UpdateExperience(experience("zz", "Z"))));

        let companies: Vec<&str> = document
            .experiences
            .iter()
            .map(|entry| entry.company.as_str())
            .collect();
        assert_eq!(companies, vec!["A", "B2", "C"]);
    }

    #[test]
    fn update_with_identical_entry_reports_no_change() {
        let mut document = ResumeDocument::default();
        document.apply(ResumeCommand::AddExperience(experience("a", "A")));
        assert!(!document.apply(ResumeCommand::UpdateExperience(experience("a", "A"))));
    }

    #[test]
    fn delete_education_does_not_reorder_survivors() {
        let mut document = ResumeDocument::default();
        for id in ["d1", "d2", "d3"] {
            document.apply(ResumeCommand::AddEducation(EducationEntry {
                id: id.to_string(),
                ..EducationEntry::default()
            }));
        }

        assert!(document.apply(ResumeCommand::DeleteEducation("d2".to_string())));
        assert!(!document.apply(ResumeCommand::DeleteEducation("d2".to_string())));

        let ids: Vec<&str> = document.education.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d3"]);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let current = ResumeDocument::default();
        let next = reduce(&current, ResumeCommand::SetTheme(Theme::Minimal));

        assert_eq!(current.theme, Theme::Modern);
        assert_eq!(next.theme, Theme::Minimal);
    }

    #[test]
    fn command_wire_shape_uses_type_and_payload() {
        let command = ResumeCommand::SetSkills(vec!["Rust".to_string()]);
        let json = serde_json::to_value(&command).expect("command should serialize");

        assert_eq!(json["type"], "SET_SKILLS");
        assert_eq!(json["payload"][0], "Rust");
        assert_eq!(command.kind(), "set_skills");
    }
}
