//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical local note record and its shared-link variant.
//! - Validate note text at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `text` is trimmed and non-empty.
//! - `created_at` is unix epoch milliseconds, non-decreasing per creation
//!   order within one store.
//! - Wire field names match the original share/persistence format
//!   (`createdAt`), so older payloads stay readable.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::sample::PositionSample;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every locally created note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Unlock radius applied to local notes and to share tokens that omit one.
pub const DEFAULT_UNLOCK_RADIUS_M: f64 = 10.0;

/// Heading tolerance applied to local notes and to share tokens that omit one.
pub const DEFAULT_UNLOCK_TOLERANCE_DEG: f64 = 35.0;

/// Validation error for note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Trimmed note text is empty.
    EmptyText,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Canonical record for a note anchored to a location and heading.
///
/// Notes are immutable after creation; the only lifecycle operation is
/// removal from the store. There is deliberately no edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for dedup, removal and stability tracking.
    pub id: NoteId,
    /// Trimmed, non-empty note body.
    pub text: String,
    /// Anchor latitude in degrees.
    pub lat: f64,
    /// Anchor longitude in degrees.
    pub lon: f64,
    /// Heading in degrees [0, 360) captured at creation. `None` = unknown.
    pub heading: Option<f64>,
    /// Creation timestamp, unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Note {
    /// Creates a note with a freshly generated stable ID.
    ///
    /// # Errors
    /// - Returns `NoteValidationError::EmptyText` when the trimmed text is
    ///   empty.
    pub fn new(
        text: impl Into<String>,
        position: PositionSample,
        heading: Option<f64>,
        created_at_ms: i64,
    ) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4(), text, position, heading, created_at_ms)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(
        id: NoteId,
        text: impl Into<String>,
        position: PositionSample,
        heading: Option<f64>,
        created_at_ms: i64,
    ) -> Result<Self, NoteValidationError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(NoteValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text,
            lat: position.lat,
            lon: position.lon,
            heading,
            created_at: created_at_ms,
        })
    }
}

/// A note received through a share link rather than created locally.
///
/// Carries its own unlock parameters from the token. Session-scoped: never
/// persisted to the store and never removable by the viewer. The `id` is
/// derived at decode time, so it must be decoded once per session and the
/// result reused; it is not a stable cross-session key.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedNote {
    /// Session-local id, `shared-<createdAt>`.
    pub id: String,
    /// Note body from the token.
    pub text: String,
    /// Anchor latitude in degrees.
    pub lat: f64,
    /// Anchor longitude in degrees.
    pub lon: f64,
    /// Heading in degrees captured by the sender. `None` = unknown.
    pub heading: Option<f64>,
    /// Creation timestamp from the token, or the decode-time clock.
    pub created_at: i64,
    /// Distance gate carried by the token. Must be > 0 to ever unlock.
    pub unlock_radius_m: f64,
    /// Heading gate carried by the token, degrees in [0, 180].
    pub unlock_tolerance_deg: f64,
}
