//! Persistence contracts and backends for the note list.
//!
//! # Responsibility
//! - Define the repository interface the note store persists through.
//! - Provide the file-backed JSON record and in-memory implementations.
//!
//! # Invariants
//! - The persisted format is a single JSON array of notes.
//! - A missing record loads as an empty list; a corrupt record is an error
//!   for the caller to degrade from, never a panic.

pub mod note_repo;
