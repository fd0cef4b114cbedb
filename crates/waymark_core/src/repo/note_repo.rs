//! Note repository contracts, JSON-file and in-memory implementations.
//!
//! # Responsibility
//! - Load and save the whole note list as one named record.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - `save` then `load` on the same backend reproduces the same note set.
//! - File writes go through a temp file + rename so a crash mid-write never
//!   leaves a truncated record.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for note list storage.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying storage read/write failure.
    Io(std::io::Error),
    /// Stored record exists but is not a valid note list.
    Corrupt(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "note storage I/O failure: {err}"),
            Self::Corrupt(err) => write!(f, "persisted note list is corrupt: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Repository interface for whole-list note persistence.
pub trait NoteRepository {
    /// Loads the full persisted note list. A backend with no record yet
    /// returns an empty list, not an error.
    fn load(&self) -> RepoResult<Vec<Note>>;
    /// Replaces the full persisted note list.
    fn save(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// File-backed repository storing the note list as one JSON array.
pub struct JsonFileNoteRepository {
    path: PathBuf,
}

impl JsonFileNoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl NoteRepository for JsonFileNoteRepository {
    fn load(&self) -> RepoResult<Vec<Note>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(RepoError::Io(err)),
        };
        serde_json::from_str(&raw).map_err(RepoError::Corrupt)
    }

    fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        let json = serde_json::to_string(notes).map_err(RepoError::Corrupt)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory repository. Backs sessions that run without durable storage
/// and doubles as the test backend.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn load(&self) -> RepoResult<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        self.notes = notes.to_vec();
        Ok(())
    }
}
