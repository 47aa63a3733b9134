//! Entry drafts and presence checks.
//!
//! # Responsibility
//! - Hold form input for one entry before it has an id.
//! - Reject drafts missing the fields a resume entry cannot do without.
//!
//! # Invariants
//! - Experience requires `company` and `position`.
//! - Education requires `institution` and `degree`.
//! - Whitespace-only text counts as missing.

use crate::model::resume::{EducationEntry, EntryId, ExperienceEntry};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Presence-check failure for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingField(&'static str),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
        }
    }
}

impl Error for DraftError {}

/// Experience form state without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceDraft {
    /// Loads an existing entry into an editable draft.
    pub fn from_entry(entry: &ExperienceEntry) -> Self {
        Self {
            company: entry.company.clone(),
            position: entry.position.clone(),
            start_date: entry.start_date.clone(),
            end_date: entry.end_date.clone(),
            current: entry.current,
            description: entry.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        require("company", &self.company)?;
        require("position", &self.position)
    }

    /// Validates and attaches `id`.
    pub fn into_entry(self, id: EntryId) -> Result<ExperienceEntry, DraftError> {
        self.validate()?;
        Ok(ExperienceEntry {
            id,
            company: self.company,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            current: self.current,
            description: self.description,
        })
    }
}

/// Education form state without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

impl EducationDraft {
    pub fn from_entry(entry: &EducationEntry) -> Self {
        Self {
            institution: entry.institution.clone(),
            degree: entry.degree.clone(),
            field: entry.field.clone(),
            start_date: entry.start_date.clone(),
            end_date: entry.end_date.clone(),
            gpa: entry.gpa.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        require("institution", &self.institution)?;
        require("degree", &self.degree)
    }

    pub fn into_entry(self, id: EntryId) -> Result<EducationEntry, DraftError> {
        self.validate()?;
        Ok(EducationEntry {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            start_date: self.start_date,
            end_date: self.end_date,
            gpa: self.gpa,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(())
}
