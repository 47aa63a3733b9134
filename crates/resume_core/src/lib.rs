//! Core document model for the resume builder.
//! This crate owns the resume invariants; front ends only dispatch commands
//! and render snapshots.

pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod persist;
pub mod render;
pub mod service;
pub mod session;
pub mod storage;
pub mod store;

pub use config::{SessionConfig, StorageLocation};
pub use export::pdf::{
    export_pdf, ExportError, ExportNotice, ExportOptions, ExportedPdf, PdfRasterizer,
    RasterizeError,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::command::{reduce, ResumeCommand};
pub use model::resume::{
    EducationEntry, EntryId, ExperienceEntry, PersonalInfo, ResumeDocument, Theme,
};
pub use persist::bridge::{PersistenceBridge, RestoreOutcome};
pub use persist::codec::{decode_snapshot, encode_snapshot, DEFAULT_STORAGE_KEY};
pub use persist::writer::{SnapshotWriter, WritePolicy};
pub use render::date::{format_date_range, format_year_month};
pub use render::preview::{render_preview, PreviewBody, PreviewDocument, PreviewSection};
pub use render::theme::{theme_options, ThemeOption};
pub use service::draft::{DraftError, EducationDraft, ExperienceDraft};
pub use service::editor::{EditError, ResumeEditor};
pub use service::id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use session::{ResumeSession, SessionError};
pub use storage::kv::{KeyValueStore, StorageError, StorageResult};
pub use storage::memory::MemoryKeyValueStore;
pub use storage::sqlite::SqliteKeyValueStore;
pub use store::observer::{DocumentObserver, SubscriptionId};
pub use store::resume_store::ResumeStore;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
