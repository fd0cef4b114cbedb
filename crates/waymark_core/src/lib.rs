//! Core domain logic for Waymark: location-anchored notes revealed only
//! when the viewer stands near the anchor and faces the recorded heading.
//! This crate is the single source of truth for the qualification rules.

pub mod engine;
pub mod geo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod share;

pub use engine::{EngineConfig, QualificationEngine, RevealId, RevealedNote};
pub use logging::{default_log_level, init_logging};
pub use model::note::{
    Note, NoteId, NoteValidationError, SharedNote, DEFAULT_UNLOCK_RADIUS_M,
    DEFAULT_UNLOCK_TOLERANCE_DEG,
};
pub use model::sample::{HeadingSample, PositionSample};
pub use repo::note_repo::{
    InMemoryNoteRepository, JsonFileNoteRepository, NoteRepository, RepoError, RepoResult,
};
pub use service::note_store::{NoteStore, NoteStoreError};
pub use share::{shared_note_from_fragment, ShareDecodeError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
