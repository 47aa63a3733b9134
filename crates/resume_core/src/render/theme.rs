//! Per-theme presentation tokens.
//!
//! Styles are descriptive: a renderer maps them onto its own stylesheet.

use crate::model::resume::Theme;

/// Header band treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Accent gradient with inverted (light) text.
    Gradient,
    /// Plain background with a heavy bottom rule.
    Ruled,
    Plain,
}

/// Section container treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    /// Accent-colored bar on the leading edge.
    AccentBar,
    /// Thin rule under each section.
    BottomRule,
    Plain,
}

/// Skill badge shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Pill,
    Outlined,
    Flat,
}

/// Resolved style tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Accent color as CSS hex, if the theme uses one.
    pub accent: Option<&'static str>,
    pub header: HeaderStyle,
    pub section: SectionStyle,
    pub uppercase_titles: bool,
    pub serif_titles: bool,
    pub badge: BadgeStyle,
}

impl ThemeStyle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Modern => Self {
                accent: Some("#0ea5e9"),
                header: HeaderStyle::Gradient,
                section: SectionStyle::AccentBar,
                uppercase_titles: true,
                serif_titles: false,
                badge: BadgeStyle::Pill,
            },
            Theme::Classic => Self {
                accent: None,
                header: HeaderStyle::Ruled,
                section: SectionStyle::BottomRule,
                uppercase_titles: false,
                serif_titles: true,
                badge: BadgeStyle::Outlined,
            },
            Theme::Minimal => Self {
                accent: None,
                header: HeaderStyle::Plain,
                section: SectionStyle::Plain,
                uppercase_titles: true,
                serif_titles: false,
                badge: BadgeStyle::Flat,
            },
        }
    }
}

/// One entry of the theme switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub theme: Theme,
    pub label: &'static str,
    pub selected: bool,
}

/// Switcher entries for every theme in display order, marking `current`.
pub fn theme_options(current: Theme) -> Vec<ThemeOption> {
    Theme::ALL
        .into_iter()
        .map(|theme| ThemeOption {
            theme,
            label: theme.label(),
            selected: theme == current,
        })
        .collect()
}
