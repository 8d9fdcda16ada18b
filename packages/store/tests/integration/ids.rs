use content_store::{StorageKey, StoreError};

use crate::common::{empty_store, question, seeded_store, subject};

#[test]
fn first_item_in_empty_collection_gets_id_one() {
    let mut store = empty_store();
    assert_eq!(store.add_question(question(1, "A")).unwrap().id, 1);
    assert_eq!(store.add_question(question(1, "B")).unwrap().id, 2);
}

#[test]
fn new_item_gets_max_plus_one() {
    let mut store = seeded_store();
    let added = store.add_subject(subject("Physics")).unwrap();
    assert_eq!(added.id, 4);
    assert_eq!(store.subjects().last().unwrap(), &added);
}

#[test]
fn deleting_the_maximum_frees_its_id() {
    let mut store = seeded_store();
    store.delete_quiz(2).unwrap();
    let quiz = store
        .add_quiz(content_store::NewQuiz {
            contest_id: 4,
            question: "d/dx x²?".into(),
            options: vec!["x".into(), "2x".into()],
            correct_answer: "2x".into(),
        })
        .unwrap();
    assert_eq!(quiz.id, 2);
}

#[test]
fn deleting_a_lower_id_does_not_free_it() {
    let mut store = seeded_store();
    store.delete_question(1).unwrap();
    assert_eq!(store.add_question(question(1, "New")).unwrap().id, 4);
}

#[test]
fn ids_are_per_collection() {
    let mut store = empty_store();
    let s = store.add_subject(subject("Only")).unwrap();
    let c = store
        .add_contest(content_store::NewContest {
            subject_id: s.id,
            title: "First".into(),
        })
        .unwrap();
    assert_eq!((s.id, c.id), (1, 1));
}

#[test]
fn add_fails_when_maximum_id_is_taken() {
    let mut store = seeded_store();
    store
        .import_all(&format!(r#"{{"subjects":[{{"id":{},"name":"Max"}}]}}"#, i64::MAX))
        .unwrap();

    let err = store.add_subject(subject("Next")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::IdExhausted {
            key: StorageKey::Subjects
        }
    ));
    assert!(!err.is_retryable());
    assert_eq!(store.subjects().len(), 1);

    // Other collections are unaffected.
    assert_eq!(store.add_question(question(1, "Still fine")).unwrap().id, 4);
}
