//! Edit-surface services layered over the resume store.
//!
//! # Responsibility
//! - Generate entry ids before entries reach the store.
//! - Apply presence checks and skill de-duplication that the store leaves
//!   to its callers.
//! - Offer use-case level entry points to form-like front ends.
//!
//! # Invariants
//! - Services mutate the document only through `ResumeStore` commands.

pub mod draft;
pub mod editor;
pub mod id;
pub mod skills;
