use content_store::QuizProgress;

use crate::common::seeded_store;

fn progress(quiz_id: i64, selected: &str, is_correct: bool) -> QuizProgress {
    QuizProgress {
        quiz_id,
        selected_option: selected.into(),
        is_correct,
    }
}

mod visited {
    use super::*;

    #[test]
    fn marking_twice_keeps_a_single_entry() {
        let mut store = seeded_store();
        assert!(store.mark_question_as_visited(2).unwrap());
        assert!(!store.mark_question_as_visited(2).unwrap());
        assert_eq!(store.visited_questions(), &[2]);
        assert!(store.is_visited(2));
        assert!(!store.is_visited(1));
    }

    #[test]
    fn visits_keep_insertion_order_and_persist() {
        let mut store = seeded_store();
        store.mark_question_as_visited(3).unwrap();
        store.mark_question_as_visited(1).unwrap();
        store.refresh();
        assert_eq!(store.visited_questions(), &[3, 1]);
    }
}

mod progress {
    use super::*;

    #[test]
    fn latest_attempt_replaces_earlier_one() {
        let mut store = seeded_store();
        store
            .save_quiz_progress(progress(1, "O(log n)", true))
            .unwrap();
        store.save_quiz_progress(progress(1, "O(n)", false)).unwrap();

        let entries: Vec<_> = store
            .quiz_progress()
            .iter()
            .filter(|p| p.quiz_id == 1)
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_correct);
        assert_eq!(entries[0].selected_option, "O(n)");
    }

    #[test]
    fn upsert_keeps_position_of_existing_entry() {
        let mut store = seeded_store();
        store.save_quiz_progress(progress(1, "O(n)", false)).unwrap();
        store.save_quiz_progress(progress(2, "AES", true)).unwrap();
        store
            .save_quiz_progress(progress(1, "O(log n)", true))
            .unwrap();

        let order: Vec<_> = store.quiz_progress().iter().map(|p| p.quiz_id).collect();
        assert_eq!(order, vec![1, 2]);
        assert!(store.progress_for_quiz(1).unwrap().is_correct);
    }

    #[test]
    fn answer_quiz_grades_by_exact_match() {
        let mut store = seeded_store();

        let wrong = store.answer_quiz(2, "RSA").unwrap().unwrap();
        assert!(!wrong.is_correct);

        let right = store.answer_quiz(2, "AES").unwrap().unwrap();
        assert!(right.is_correct);
        assert_eq!(store.quiz_progress().len(), 1);

        store.refresh();
        assert_eq!(store.progress_for_quiz(2), Some(&right));
    }

    #[test]
    fn answer_for_unknown_quiz_records_nothing() {
        let mut store = seeded_store();
        assert_eq!(store.answer_quiz(40, "AES").unwrap(), None);
        assert!(store.quiz_progress().is_empty());
    }
}
