use ::common::{FilesystemStore, KeyValueStore, MemoryStore, StorageError};
use content_store::{ContentStore, StorageKey, StoreError};

use crate::common::{filesystem_store, question, subject};

#[test]
fn filesystem_state_survives_reopen() {
    let (mut store, dir) = filesystem_store();
    store.add_subject(subject("Physics")).unwrap();
    store.delete_contest(1).unwrap();
    store.mark_question_as_visited(3).unwrap();
    let expected = store.snapshot().clone();
    drop(store);

    let backend = FilesystemStore::new(dir.path().join("data"), 1024 * 1024).unwrap();
    let reopened = ContentStore::open(backend);
    assert_eq!(reopened.snapshot(), &expected);
}

#[test]
fn each_key_has_its_own_file() {
    let (store, dir) = filesystem_store();
    for key in StorageKey::ALL {
        assert!(
            dir.path().join(format!("data/{}.json", key.as_str())).exists(),
            "{key}"
        );
    }
    drop(store);
}

#[test]
fn corrupt_file_loads_defaults_for_that_key_only() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    {
        let mut backend = FilesystemStore::new(data.clone(), 1024 * 1024).unwrap();
        backend.set("questions", "][").unwrap();
        backend.set("subjects", r#"[{"id":5,"name":"Biology"}]"#).unwrap();
    }

    let store = ContentStore::open(FilesystemStore::new(data, 1024 * 1024).unwrap());
    assert_eq!(store.questions().len(), 3);
    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0].name, "Biology");
}

#[test]
fn quota_exceeded_surfaces_as_write_error() {
    let mut store = ContentStore::open(MemoryStore::with_quota(4096));
    let mut long = question(1, "Big");
    long.description = "x".repeat(8192);

    let err = store.add_question(long).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Write {
            key: StorageKey::Questions,
            source: StorageError::QuotaExceeded { .. },
        }
    ));
    // Memory holds the record, storage does not.
    assert_eq!(store.questions().len(), 4);
    store.refresh();
    assert_eq!(store.questions().len(), 3);
}

#[test]
fn failed_cascade_recovers_with_flush() {
    let mut store = ContentStore::open(MemoryStore::new());
    store.backend_mut().fail_writes(true);
    let err = store.delete_subject(3).unwrap_err();
    assert!(err.is_retryable());

    store.backend_mut().fail_writes(false);
    store.flush().unwrap();
    store.refresh();
    assert!(store.subject(3).is_none());
    assert!(store.contest(4).is_none());
}
