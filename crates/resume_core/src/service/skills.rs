//! Skill list editing helpers.
//!
//! The store replaces the skill list wholesale and never dedupes; these
//! helpers build the next list so it stays free of duplicates.

/// Quick-add suggestions offered next to the skill input.
pub const SUGGESTED_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "SQL",
    "Git",
    "AWS",
    "Docker",
    "Agile",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Project Management",
    "Data Analysis",
];

/// Returns `current` with `label` appended.
///
/// `label` is trimmed. Returns `None` when it is empty or already present
/// (exact, case-sensitive match).
pub fn add_skill(current: &[String], label: &str) -> Option<Vec<String>> {
    let label = label.trim();
    if label.is_empty() || current.iter().any(|skill| skill == label) {
        return None;
    }
    let mut next = current.to_vec();
    next.push(label.to_string());
    Some(next)
}

/// Returns `current` without `label`, or `None` when it was not present.
pub fn remove_skill(current: &[String], label: &str) -> Option<Vec<String>> {
    if !current.iter().any(|skill| skill == label) {
        return None;
    }
    Some(
        current
            .iter()
            .filter(|skill| skill.as_str() != label)
            .cloned()
            .collect(),
    )
}

/// Suggestions not yet in `current`, in suggestion order.
pub fn available_suggestions(current: &[String]) -> Vec<&'static str> {
    SUGGESTED_SKILLS
        .iter()
        .copied()
        .filter(|suggestion| !current.iter().any(|skill| skill == suggestion))
        .collect()
}
