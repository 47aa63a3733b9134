//! PDF export orchestration.
//!
//! # Responsibility
//! - Capture a point-in-time preview of the store and hand it to a
//!   rasterizer with fixed page settings.
//! - Map the outcome to a user-facing notice.
//!
//! # Invariants
//! - Export reads the store once; edits made afterwards are not exported.
//! - Export failure never touches the store.

pub mod pdf;
