//! Snapshot wire encoding.
//!
//! The record is a direct JSON encoding of `ResumeDocument` with camelCase
//! keys. There is no version tag: a record that does not match the current
//! shape fails to decode, and so does one that repeats an entry id within
//! a collection.

use crate::model::resume::ResumeDocument;
use serde::de::Error as _;

/// Fixed record name used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "resume-builder-data";

pub fn encode_snapshot(document: &ResumeDocument) -> serde_json::Result<String> {
    serde_json::to_string(document)
}

pub fn decode_snapshot(raw: &str) -> serde_json::Result<ResumeDocument> {
    let document: ResumeDocument = serde_json::from_str(raw)?;
    if let Some((collection, id)) = document.duplicate_entry_id() {
        return Err(serde_json::Error::custom(format!(
            "duplicate id `{id}` in {collection}"
        )));
    }
    Ok(document)
}
