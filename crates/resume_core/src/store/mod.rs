//! Document model component: the single owned resume state of a session.
//!
//! # Responsibility
//! - Own one `ResumeDocument` per explicitly constructed store.
//! - Route every mutation through `ResumeCommand`.
//! - Notify registered observers synchronously after each change.
//!
//! # Invariants
//! - There is no ambient/global store; callers pass the instance around.
//! - Observers run only after the command fully applied.
//! - No-op commands notify nobody.

pub mod observer;
pub mod resume_store;
