use content_store::{ContestUpdate, DeleteSummary, SubjectUpdate};

use crate::common::seeded_store;

mod subject_delete {
    use super::*;

    #[test]
    fn removes_contests_questions_and_quizzes_of_the_subject() {
        let mut store = seeded_store();

        let summary = store.delete_subject(1).unwrap();

        assert_eq!(
            summary,
            DeleteSummary {
                subjects: vec![1],
                contests: vec![1, 2],
                questions: vec![1, 2, 3],
                quizzes: vec![1],
            }
        );
        let contests: Vec<_> = store.contests().iter().map(|c| c.id).collect();
        assert_eq!(contests, vec![3, 4]);
        assert!(store.questions().is_empty());
        let quizzes: Vec<_> = store.quizzes().iter().map(|q| q.id).collect();
        assert_eq!(quizzes, vec![2]);
        assert!(store.subject(1).is_none());
    }

    #[test]
    fn leaves_no_orphans() {
        let mut store = seeded_store();
        store.delete_subject(2).unwrap();

        assert!(store.contests().iter().all(|c| c.subject_id != 2));
        assert!(store.quizzes().iter().all(|q| q.contest_id != 3));
        assert!(store.check_integrity().is_empty());
    }

    #[test]
    fn persists_all_four_collections() {
        let mut store = seeded_store();
        store.delete_subject(1).unwrap();
        store.refresh();
        assert_eq!(store.subjects().len(), 2);
        assert_eq!(store.contests().len(), 2);
        assert!(store.questions().is_empty());
        assert_eq!(store.quizzes().len(), 1);
    }

    #[test]
    fn unknown_subject_is_a_no_op() {
        let mut store = seeded_store();
        let summary = store.delete_subject(99).unwrap();
        assert!(summary.is_empty());
        assert_eq!(store.subjects().len(), 3);
        assert_eq!(store.contests().len(), 4);
    }

    #[test]
    fn contest_moved_to_another_subject_survives() {
        let mut store = seeded_store();
        store
            .update_contest(
                2,
                ContestUpdate {
                    subject_id: Some(3),
                    ..Default::default()
                },
            )
            .unwrap();

        let summary = store.delete_subject(1).unwrap();
        assert_eq!(summary.contests, vec![1]);
        assert_eq!(summary.questions, vec![1, 2]);
        assert_eq!(store.questions()[0].id, 3);
    }
}

mod contest_delete {
    use super::*;

    #[test]
    fn removes_its_questions_and_quizzes() {
        let mut store = seeded_store();
        let summary = store.delete_contest(1).unwrap();

        assert_eq!(summary.contests, vec![1]);
        assert_eq!(summary.questions, vec![1, 2]);
        assert_eq!(summary.quizzes, vec![1]);
        assert!(summary.subjects.is_empty());
        assert_eq!(store.questions().len(), 1);
        assert_eq!(store.quizzes().len(), 1);
        assert_eq!(store.subjects().len(), 3);
    }

    #[test]
    fn contest_without_children() {
        let mut store = seeded_store();
        let summary = store.delete_contest(4).unwrap();
        assert_eq!(summary.total(), 1);
        assert_eq!(store.questions().len(), 3);
    }
}

mod updates {
    use super::*;

    #[test]
    fn update_merges_and_persists() {
        let mut store = seeded_store();
        let updated = store
            .update_subject(
                3,
                SubjectUpdate {
                    name: Some("Mathematics".into()),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Mathematics");

        store.refresh();
        assert_eq!(store.subject(3).unwrap().name, "Mathematics");
    }

    #[test]
    fn update_of_missing_id_returns_none() {
        let mut store = seeded_store();
        let result = store
            .update_contest(
                77,
                ContestUpdate {
                    title: Some("Ghost".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());
        assert!(store.contests().iter().all(|c| c.title != "Ghost"));
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut store = seeded_store();
        let before = store.question(2).unwrap().clone();
        let after = store
            .update_question(2, Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(before, after);
    }
}
