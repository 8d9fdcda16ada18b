use ::common::KeyValueStore;
use content_store::{StorageKey, StoreError};

use crate::common::{seeded_store, subject};

#[test]
fn export_then_import_is_identity() {
    let mut store = seeded_store();
    store.mark_question_as_visited(1).unwrap();
    store.answer_quiz(1, "O(log n)").unwrap();
    store.add_subject(subject("Physics")).unwrap();

    let before = store.snapshot().clone();
    let exported = store.export_all().unwrap();
    let summary = store.import_all(&exported).unwrap();

    assert_eq!(summary.applied, StorageKey::ALL.to_vec());
    assert_eq!(store.snapshot(), &before);
    assert_eq!(store.export_all().unwrap(), exported);
}

#[test]
fn export_restores_into_a_fresh_store() {
    let mut source = seeded_store();
    source.delete_contest(2).unwrap();
    source.mark_question_as_visited(2).unwrap();
    let exported = source.export_all().unwrap();

    let mut target = seeded_store();
    target.import_all(&exported).unwrap();
    assert_eq!(target.snapshot(), source.snapshot());

    target.refresh();
    assert_eq!(target.snapshot(), source.snapshot());
}

#[test]
fn partial_import_leaves_other_keys_untouched() {
    let mut store = seeded_store();
    store.mark_question_as_visited(3).unwrap();
    let before = store.snapshot().clone();

    let summary = store
        .import_all(r#"{"subjects":[{"id":10,"name":"Chemistry"}]}"#)
        .unwrap();

    assert_eq!(summary.applied, vec![StorageKey::Subjects]);
    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0].name, "Chemistry");
    assert_eq!(store.contests(), before.contests.as_slice());
    assert_eq!(store.questions(), before.questions.as_slice());
    assert_eq!(store.quizzes(), before.quizzes.as_slice());
    assert_eq!(store.visited_questions(), &[3]);
    assert_eq!(store.quiz_progress(), before.quiz_progress.as_slice());

    store.refresh();
    assert_eq!(store.subjects()[0].id, 10);
}

#[test]
fn malformed_json_changes_nothing() {
    let mut store = seeded_store();
    let before = store.snapshot().clone();
    let stored_before = store.backend().clone();

    let result = store.import_all("{\"subjects\": [");

    assert!(matches!(result, Err(StoreError::InvalidImport(_))));
    assert_eq!(store.snapshot(), &before);
    for key in StorageKey::ALL {
        assert_eq!(
            store.backend().get(key.as_str()).unwrap(),
            stored_before.get(key.as_str()).unwrap()
        );
    }
}

#[test]
fn import_write_failure_is_reported_after_memory_update() {
    let mut store = seeded_store();
    store.backend_mut().fail_writes(true);

    let err = store.import_all(r#"{"visitedQuestions":[1,2,3]}"#).unwrap_err();
    assert_eq!(err.key(), Some(StorageKey::VisitedQuestions));
    assert_eq!(store.visited_questions(), &[1, 2, 3]);

    store.backend_mut().fail_writes(false);
    store.flush().unwrap();
    store.refresh();
    assert_eq!(store.visited_questions(), &[1, 2, 3]);
}

#[test]
fn ids_beyond_32_bits_survive_import() {
    let mut store = seeded_store();
    store
        .import_all(r#"{"subjects":[{"id":4294967296,"name":"Big"}],"visitedQuestions":[3000000000]}"#)
        .unwrap();

    store.refresh();
    assert_eq!(store.subjects()[0].id, 4_294_967_296);
    assert!(store.is_visited(3_000_000_000));
    assert_eq!(store.add_subject(subject("Next")).unwrap().id, 4_294_967_297);
}
