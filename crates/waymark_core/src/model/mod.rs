//! Domain model for location-anchored notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by the store, codec and engine.
//! - Define the sensor sample shapes consumed by the qualification engine.
//!
//! # Invariants
//! - Every local note is identified by a stable `NoteId`.
//! - A position is always a full lat/lon pair; "unknown position" is the
//!   absence of a sample, never a sentinel coordinate.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod note;
pub mod sample;
