//! Resume document model and its transition function.
//!
//! # Responsibility
//! - Define the canonical `ResumeDocument` aggregate and its entries.
//! - Define the closed command set that is the only way to change it.
//!
//! # Invariants
//! - Entry ids are unique within their own collection.
//! - Every command is total: it either applies fully or is a no-op.

pub mod command;
pub mod resume;
