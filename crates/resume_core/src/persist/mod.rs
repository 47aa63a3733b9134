//! Persistence bridge between the resume store and durable storage.
//!
//! # Responsibility
//! - Restore the last saved snapshot into a fresh store at session start.
//! - Save the full snapshot after every change through a store observer.
//!
//! # Invariants
//! - Restore never panics and never leaves a partially loaded document.
//! - The stored record always reflects a state the store actually held.
//! - Write failures are logged and dropped; there is no retry.

pub mod bridge;
pub mod codec;
pub mod writer;
