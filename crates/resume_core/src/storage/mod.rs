//! Durable key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Define the string key -> string value contract the persistence bridge
//!   writes snapshots through.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `set` overwrites any previous value under the same key.
//! - A missing key reads as `Ok(None)`, never as an error.

pub mod kv;
pub mod memory;
pub mod sqlite;
