//! Use-case services over the persistence boundary.
//!
//! # Responsibility
//! - Own the in-memory note list and its durable mirror.
//!
//! # Invariants
//! - Persistence failures degrade the session to in-memory behavior; they
//!   are logged and never propagated to callers.

pub mod note_store;
