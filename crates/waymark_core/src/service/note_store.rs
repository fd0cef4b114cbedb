//! Note store use-case service.
//!
//! # Responsibility
//! - Provide create/remove/list APIs over the owned note list.
//! - Mirror every mutation to the repository synchronously.
//!
//! # Invariants
//! - Notes are immutable once created; there is no edit operation.
//! - `created_at` never decreases across successive `add` calls, even if
//!   the wall clock steps backward.
//! - A corrupt or unreadable record degrades startup to an empty list; a
//!   failed write degrades the session to in-memory behavior. Both are
//!   logged, neither is an error to the caller.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::model::sample::PositionSample;
use crate::repo::note_repo::NoteRepository;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Service error for note store use-cases.
///
/// Persistence failures are intentionally absent: they degrade, they do not
/// propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Note input failed validation.
    Validation(NoteValidationError),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteStoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of the durable local note set.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
    last_created_at: i64,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Opens a store over the given repository, loading the persisted list.
    ///
    /// A load failure is logged and the store starts empty rather than
    /// failing startup.
    pub fn open(repo: R) -> Self {
        let notes = match repo.load() {
            Ok(notes) => notes,
            Err(err) => {
                warn!("event=notes_load_failed module=service status=degraded error={err}");
                Vec::new()
            }
        };
        let last_created_at = notes.iter().map(|n| n.created_at).max().unwrap_or(0);
        Self {
            repo,
            notes,
            last_created_at,
        }
    }

    /// Returns the owned note list in creation order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Newest-first projection for list/map views.
    pub fn sorted_for_display(&self) -> Vec<Note> {
        let mut sorted = self.notes.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }

    /// Creates a note at the given position/heading and persists the list.
    ///
    /// Requires a full position fix: a caller without one must not create a
    /// note, so a sentinel coordinate can never enter the store.
    ///
    /// # Errors
    /// - `NoteStoreError::Validation` when the trimmed text is empty.
    pub fn add(
        &mut self,
        text: &str,
        position: PositionSample,
        heading: Option<f64>,
    ) -> Result<Note, NoteStoreError> {
        let created_at = now_unix_ms().max(self.last_created_at);
        let note = Note::new(text, position, heading, created_at)?;
        self.last_created_at = created_at;
        self.notes.push(note.clone());
        self.persist();
        Ok(note)
    }

    /// Removes the note with the given id, if present, and persists.
    /// Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() != before {
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.repo.save(&self.notes) {
            warn!("event=notes_persist_failed module=service status=degraded error={err}");
        }
    }
}

fn now_unix_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
