//! Spatial/heading qualification engine.
//!
//! # Responsibility
//! - Decide, per sensor sample, which notes are revealed in the overlay.
//! - Smooth that decision over a sticky window to suppress sensor flicker.
//!
//! # Invariants
//! - No position fix means an empty display set, unconditionally.
//! - The engine never errors: malformed note data simply never qualifies.
//! - The per-note stability timestamp only moves forward.
//!
//! # See also
//! - docs/architecture/qualification.md

pub mod qualification;

pub use qualification::{
    EngineConfig, QualificationEngine, RevealId, RevealedNote, MAX_DISPLAY, STICKY_WINDOW_MS,
};
