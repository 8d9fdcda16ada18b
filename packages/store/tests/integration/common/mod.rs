use ::common::{FilesystemStore, MemoryStore};
use content_store::{ContentStore, Difficulty, NewQuestion, NewSubject};

/// A store opened over a fresh in-memory backend, seeded with sample data.
pub fn seeded_store() -> ContentStore<MemoryStore> {
    ContentStore::open(MemoryStore::new())
}

/// A store whose four content collections start out empty.
pub fn empty_store() -> ContentStore<MemoryStore> {
    let mut store = seeded_store();
    store
        .import_all(r#"{"subjects":[],"contests":[],"questions":[],"quizzes":[]}"#)
        .unwrap();
    store
}

/// A filesystem-backed store in a temporary directory.
pub fn filesystem_store() -> (ContentStore<FilesystemStore>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let backend = FilesystemStore::new(dir.path().join("data"), 1024 * 1024).unwrap();
    (ContentStore::open(backend), dir)
}

pub fn subject(name: &str) -> NewSubject {
    NewSubject { name: name.into() }
}

pub fn question(contest_id: i64, title: &str) -> NewQuestion {
    NewQuestion {
        contest_id,
        title: title.into(),
        description: format!("Solve {title}."),
        tags: vec!["practice".into()],
        difficulty: Difficulty::Easy,
        link: "https://example.com/problem".into(),
    }
}
