//! Preview document built from one snapshot.

use crate::model::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, Theme};
use crate::render::date::format_date_range;
use crate::render::theme::ThemeStyle;
use std::fmt::Write as _;

/// Shown instead of an empty full name.
pub const NAME_PLACEHOLDER: &str = "Your Name";
/// Empty-state title shown before any content exists.
pub const EMPTY_TITLE: &str = "Start filling in your details";
/// Empty-state hint under the title.
pub const EMPTY_HINT: &str = "Your resume preview will appear here";

/// Contact channel shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHeader {
    /// Full name, or `NAME_PLACEHOLDER` when empty.
    pub name: String,
    /// Non-empty contact fields in display order.
    pub contacts: Vec<ContactLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub date_range: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub heading: String,
    pub institution: String,
    pub date_range: String,
    pub gpa_line: Option<String>,
}

/// One visible section; empty sections are never produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSection {
    Summary(String),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<String>),
}

impl PreviewSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary(_) => "Summary",
            Self::Experience(_) => "Experience",
            Self::Education(_) => "Education",
            Self::Skills(_) => "Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBody {
    /// Nothing entered yet.
    Empty,
    Resume {
        header: PreviewHeader,
        sections: Vec<PreviewSection>,
    },
}

/// Themed, read-only rendering of one snapshot.
///
/// Owns all its data, so it stays a point-in-time view even while the
/// store keeps changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub theme: Theme,
    pub style: ThemeStyle,
    pub body: PreviewBody,
}

impl PreviewDocument {
    pub fn has_content(&self) -> bool {
        matches!(self.body, PreviewBody::Resume { .. })
    }

    /// Deterministic plain-text rendering, section by section.
    pub fn to_plain_text(&self) -> String {
        let (header, sections) = match &self.body {
            PreviewBody::Empty => return format!("{EMPTY_TITLE}\n{EMPTY_HINT}\n"),
            PreviewBody::Resume { header, sections } => (header, sections),
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", header.name);
        if !header.contacts.is_empty() {
            let contacts: Vec<&str> = header
                .contacts
                .iter()
                .map(|contact| contact.value.as_str())
                .collect();
            let _ = writeln!(out, "{}", contacts.join(" | "));
        }

        for section in sections {
            let title = if self.style.uppercase_titles {
                section.title().to_uppercase()
            } else {
                section.title().to_string()
            };
            let _ = writeln!(out, "\n{title}");
            match section {
                PreviewSection::Summary(text) => {
                    let _ = writeln!(out, "{text}");
                }
                PreviewSection::Experience(items) => {
                    for item in items {
                        let _ = writeln!(out, "{} ({})", item.position, item.date_range);
                        let _ = writeln!(out, "{}", item.company);
                        if let Some(description) = &item.description {
                            let _ = writeln!(out, "{description}");
                        }
                    }
                }
                PreviewSection::Education(items) => {
                    for item in items {
                        let _ = writeln!(out, "{} ({})", item.heading, item.date_range);
                        let _ = writeln!(out, "{}", item.institution);
                        if let Some(gpa) = &item.gpa_line {
                            let _ = writeln!(out, "{gpa}");
                        }
                    }
                }
                PreviewSection::Skills(skills) => {
                    let _ = writeln!(out, "{}", skills.join(", "));
                }
            }
        }
        out
    }
}

/// Whether a snapshot has anything worth rendering.
///
/// A theme change or contact details alone do not count; a name or any
/// entry or skill does.
pub fn has_content(document: &ResumeDocument) -> bool {
    !document.personal_info.full_name.is_empty()
        || !document.experiences.is_empty()
        || !document.education.is_empty()
        || !document.skills.is_empty()
}

/// Builds the preview for `document`.
pub fn render_preview(document: &ResumeDocument) -> PreviewDocument {
    let body = if has_content(document) {
        PreviewBody::Resume {
            header: render_header(&document.personal_info),
            sections: render_sections(document),
        }
    } else {
        PreviewBody::Empty
    };

    PreviewDocument {
        theme: document.theme,
        style: ThemeStyle::for_theme(document.theme),
        body,
    }
}

fn render_header(info: &PersonalInfo) -> PreviewHeader {
    let name = if info.full_name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };
    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
        (ContactKind::Linkedin, &info.linkedin),
        (ContactKind::Website, &info.website),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| ContactLine {
        kind,
        value: value.clone(),
    })
    .collect();

    PreviewHeader { name, contacts }
}

fn render_sections(document: &ResumeDocument) -> Vec<PreviewSection> {
    let mut sections = Vec::new();
    if !document.personal_info.summary.is_empty() {
        sections.push(PreviewSection::Summary(document.personal_info.summary.clone()));
    }
    if !document.experiences.is_empty() {
        sections.push(PreviewSection::Experience(
            document.experiences.iter().map(experience_item).collect(),
        ));
    }
    if !document.education.is_empty() {
        sections.push(PreviewSection::Education(
            document.education.iter().map(education_item).collect(),
        ));
    }
    if !document.skills.is_empty() {
        sections.push(PreviewSection::Skills(document.skills.clone()));
    }
    sections
}

fn experience_item(entry: &ExperienceEntry) -> ExperienceItem {
    ExperienceItem {
        position: entry.position.clone(),
        company: entry.company.clone(),
        date_range: format_date_range(&entry.start_date, &entry.end_date, entry.current),
        description: non_empty(&entry.description),
    }
}

fn education_item(entry: &EducationEntry) -> EducationItem {
    let heading = if entry.field.is_empty() {
        entry.degree.clone()
    } else {
        format!("{} in {}", entry.degree, entry.field)
    };
    EducationItem {
        heading,
        institution: entry.institution.clone(),
        date_range: format_date_range(&entry.start_date, &entry.end_date, false),
        gpa_line: non_empty(&entry.gpa).map(|gpa| format!("GPA: {gpa}")),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{render_preview, PreviewBody, PreviewSection, NAME_PLACEHOLDER};
    use crate::model::resume::{EducationEntry, ResumeDocument, Theme};

    #[test]
    fn empty_document_renders_empty_state() {
        let mut document = ResumeDocument::default();
        document.theme = Theme::Classic;
        document.personal_info.email = "only@contact.example".to_string();

        let preview = render_preview(&document);
        assert_eq!(preview.body, PreviewBody::Empty);
        assert!(!preview.has_content());
        assert!(preview.to_plain_text().starts_with("Start filling in your details"));
    }

    #[test]
    fn skills_alone_get_placeholder_name() {
        let mut document = ResumeDocument::default();
        document.skills = vec!["Rust".to_string()];

        let preview = render_preview(&document);
        let PreviewBody::Resume { header, sections } = preview.body else {
            panic!("expected resume body");
        };
        assert_eq!(header.name, NAME_PLACEHOLDER);
        assert!(header.contacts.is_empty());
        assert_eq!(sections, vec![PreviewSection::Skills(vec!["Rust".to_string()])]);
    }

    #[test]
    fn education_heading_and_gpa_line() {
        let mut document = ResumeDocument::default();
        document.education.push(EducationEntry {
            id: "d1".to_string(),
            institution: "MIT".to_string(),
            degree: "BS".to_string(),
            field: "CS".to_string(),
            start_date: "2016-09".to_string(),
            end_date: "2020-06".to_string(),
            gpa: "3.9".to_string(),
        });

        let text = render_preview(&document).to_plain_text();
        assert!(text.contains("BS in CS (Sep 2016 - Jun 2020)"));
        assert!(text.contains("GPA: 3.9"));
        assert!(text.contains("EDUCATION"));
    }
}
