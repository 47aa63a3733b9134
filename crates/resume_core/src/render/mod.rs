//! Read-only preview projection of a resume snapshot.
//!
//! # Responsibility
//! - Format `YYYY-MM` dates and entry date ranges for display.
//! - Substitute placeholder text for empty fields.
//! - Describe per-theme styling without touching document content.
//!
//! # Invariants
//! - Rendering never mutates the document and has no path back into it.
//! - Output depends only on the snapshot passed in.

pub mod date;
pub mod preview;
pub mod theme;
