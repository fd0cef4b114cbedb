use uuid::Uuid;
use waymark_core::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use waymark_core::{
    InMemoryNoteRepository, JsonFileNoteRepository, Note, NoteStore, NoteStoreError,
    NoteValidationError, PositionSample,
};

/// Backend whose writes always fail, for degraded-mode coverage.
struct BrokenNoteRepository;

impl NoteRepository for BrokenNoteRepository {
    fn load(&self) -> RepoResult<Vec<Note>> {
        Ok(Vec::new())
    }

    fn save(&mut self, _notes: &[Note]) -> RepoResult<()> {
        Err(RepoError::Io(std::io::Error::other("disk full")))
    }
}

fn here() -> PositionSample {
    PositionSample::new(41.3870, 2.1700)
}

#[test]
fn add_returns_the_created_note_and_lists_it() {
    let mut store = NoteStore::open(InMemoryNoteRepository::new());

    let note = store.add("  under the bench  ", here(), Some(45.0)).unwrap();
    assert_eq!(note.text, "under the bench");
    assert_eq!(note.lat, 41.3870);
    assert_eq!(note.heading, Some(45.0));

    assert_eq!(store.list(), &[note]);
}

#[test]
fn empty_text_is_rejected_and_nothing_is_stored() {
    let mut store = NoteStore::open(InMemoryNoteRepository::new());

    let err = store.add("   ", here(), None).unwrap_err();
    assert_eq!(
        err,
        NoteStoreError::Validation(NoteValidationError::EmptyText)
    );
    assert!(store.list().is_empty());
}

#[test]
fn created_at_never_decreases_across_adds() {
    let mut store = NoteStore::open(InMemoryNoteRepository::new());

    let first = store.add("first", here(), None).unwrap();
    let second = store.add("second", here(), None).unwrap();
    assert!(second.created_at >= first.created_at);
}

#[test]
fn add_then_reload_reproduces_the_note_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let (first, second) = {
        let mut store = NoteStore::open(JsonFileNoteRepository::new(&path));
        let first = store.add("first note", here(), Some(90.0)).unwrap();
        let second = store.add("second note", here(), None).unwrap();
        (first, second)
    };

    let reloaded = NoteStore::open(JsonFileNoteRepository::new(&path));
    assert_eq!(reloaded.list(), &[first, second]);
}

#[test]
fn remove_persists_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let mut store = NoteStore::open(JsonFileNoteRepository::new(&path));
    let keep = store.add("keep", here(), None).unwrap();
    let drop = store.add("drop", here(), None).unwrap();

    store.remove(drop.id);
    // Removing an id that is already gone is a no-op.
    store.remove(drop.id);
    store.remove(Uuid::new_v4());
    assert_eq!(store.list(), std::slice::from_ref(&keep));

    let reloaded = NoteStore::open(JsonFileNoteRepository::new(&path));
    assert_eq!(reloaded.list(), std::slice::from_ref(&keep));
}

#[test]
fn missing_record_opens_as_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = NoteStore::open(JsonFileNoteRepository::new(dir.path().join("absent.json")));
    assert!(store.list().is_empty());
}

#[test]
fn corrupt_record_degrades_to_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(&path, "{ definitely not a note list").unwrap();

    let store = NoteStore::open(JsonFileNoteRepository::new(&path));
    assert!(store.list().is_empty());
}

#[test]
fn failed_writes_degrade_to_in_memory_for_the_session() {
    let mut store = NoteStore::open(BrokenNoteRepository);

    let note = store.add("still works", here(), None).unwrap();
    assert_eq!(store.list(), &[note.clone()]);

    store.remove(note.id);
    assert!(store.list().is_empty());
}

#[test]
fn sorted_for_display_is_newest_first() {
    let mut seed = InMemoryNoteRepository::new();
    let old = Note::with_id(Uuid::new_v4(), "old", here(), None, 100).unwrap();
    let mid = Note::with_id(Uuid::new_v4(), "mid", here(), None, 200).unwrap();
    let new = Note::with_id(Uuid::new_v4(), "new", here(), None, 300).unwrap();
    seed.save(&[old.clone(), new.clone(), mid.clone()]).unwrap();

    let store = NoteStore::open(seed);
    assert_eq!(store.sorted_for_display(), vec![new, mid, old]);
}
