//! Resume document aggregate.
//!
//! # Responsibility
//! - Define the record shapes persisted under the durable storage key.
//! - Provide the empty default document used at session start.
//!
//! # Invariants
//! - Absent text is represented as `""`, never as a missing field.
//! - Dates use `YYYY-MM` text; the model stores them verbatim.
//! - `theme` only selects presentation and never changes content.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Identifier of one experience or education entry.
///
/// Unique within its own collection only; assigned by the edit surface.
pub type EntryId = String;

/// Free-text contact and summary block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Professional-network handle, e.g. `linkedin.com/in/someone`.
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// Meaningful only when `current` is `false`.
    pub end_date: String,
    /// Serialized as `current` to match the stored record shape.
    pub current: bool,
    pub description: String,
}

/// One education record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    /// Optional grade text; empty when absent.
    pub gpa: String,
}

/// Presentation theme for the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl Theme {
    /// All themes in switcher display order.
    pub const ALL: [Theme; 3] = [Theme::Modern, Theme::Classic, Theme::Minimal];

    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }

    /// Human-readable name shown by the theme switcher.
    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Classic => "Classic",
            Self::Minimal => "Minimal",
        }
    }

    /// Parses a wire value. Matching is exact, like the stored record.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == value)
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete resume state for one session.
///
/// `Default` is the empty document every session starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    /// Insertion order is display order.
    pub experiences: Vec<ExperienceEntry>,
    /// Insertion order is display order.
    pub education: Vec<EducationEntry>,
    /// Distinct labels in display order.
    pub skills: Vec<String>,
    pub theme: Theme,
}

impl ResumeDocument {
    /// Returns the experience entry with `id`, if present.
    pub fn experience(&self, id: &str) -> Option<&ExperienceEntry> {
        self.experiences.iter().find(|entry| entry.id == id)
    }

    /// Returns the education entry with `id`, if present.
    pub fn education_entry(&self, id: &str) -> Option<&EducationEntry> {
        self.education.iter().find(|entry| entry.id == id)
    }

    /// First id that appears twice within `experiences` or `education`.
    ///
    /// `None` when every entry id is unique within its collection.
    pub fn duplicate_entry_id(&self) -> Option<(&'static str, &str)> {
        let experience_ids = self.experiences.iter().map(|entry| entry.id.as_str());
        if let Some(id) = first_duplicate(experience_ids) {
            return Some(("experiences", id));
        }
        let education_ids = self.education.iter().map(|entry| entry.id.as_str());
        first_duplicate(education_ids).map(|id| ("education", id))
    }

    /// Whether this document equals the session-start default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}
