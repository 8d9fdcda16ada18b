use crate::models::{Contest, Difficulty, Question, Quiz, Subject};
use crate::snapshot::ContentSnapshot;

/// Default subjects seeded on first use.
const DEFAULT_SUBJECTS: &[(i64, &str)] = &[(1, "PSP"), (2, "S&W"), (3, "Maths")];

/// Default contests seeded on first use: (id, subject_id, title).
const DEFAULT_CONTESTS: &[(i64, i64, &str)] = &[
    (1, 1, "Contest 1"),
    (2, 1, "Midsem"),
    (3, 2, "Security Basics"),
    (4, 3, "Calculus Contest"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            contest_id: 1,
            title: "Fibonacci Series".into(),
            description: "Write a program to print the first n Fibonacci numbers using both \
                          iterative and recursive approaches."
                .into(),
            tags: strings(&["loops", "recursion"]),
            difficulty: Difficulty::Easy,
            link: "https://college-playground.com/fibonacci".into(),
        },
        Question {
            id: 2,
            contest_id: 1,
            title: "Binary Search".into(),
            description: "Implement binary search algorithm to find an element in a sorted array."
                .into(),
            tags: strings(&["arrays", "searching"]),
            difficulty: Difficulty::Medium,
            link: "https://college-playground.com/binary-search".into(),
        },
        Question {
            id: 3,
            contest_id: 2,
            title: "Dynamic Programming".into(),
            description: "Solve the classic coin change problem using dynamic programming."
                .into(),
            tags: strings(&["dp", "algorithms"]),
            difficulty: Difficulty::Hard,
            link: "https://college-playground.com/coin-change".into(),
        },
    ]
}

fn default_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            contest_id: 1,
            question: "What is the time complexity of binary search?".into(),
            options: strings(&["O(n)", "O(log n)", "O(n²)", "O(1)"]),
            correct_answer: "O(log n)".into(),
        },
        Quiz {
            id: 2,
            contest_id: 3,
            question: "Which of the following is a symmetric encryption algorithm?".into(),
            options: strings(&["RSA", "AES", "ECC", "DSA"]),
            correct_answer: "AES".into(),
        },
    ]
}

/// The built-in sample dataset.
pub fn default_snapshot() -> ContentSnapshot {
    ContentSnapshot {
        subjects: DEFAULT_SUBJECTS
            .iter()
            .map(|&(id, name)| Subject {
                id,
                name: name.into(),
            })
            .collect(),
        contests: DEFAULT_CONTESTS
            .iter()
            .map(|&(id, subject_id, title)| Contest {
                id,
                subject_id,
                title: title.into(),
            })
            .collect(),
        questions: default_questions(),
        quizzes: default_quizzes(),
        visited_questions: Vec::new(),
        quiz_progress: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::StorageKey;

    #[test]
    fn seed_sizes() {
        let seed = default_snapshot();
        assert_eq!(seed.subjects.len(), 3);
        assert_eq!(seed.contests.len(), 4);
        assert_eq!(seed.questions.len(), 3);
        assert_eq!(seed.quizzes.len(), 2);
        assert!(seed.visited_questions.is_empty());
        assert!(seed.quiz_progress.is_empty());
    }

    #[test]
    fn seed_quiz_answers_are_among_options() {
        for quiz in default_snapshot().quizzes {
            assert!(quiz.options.contains(&quiz.correct_answer), "quiz {}", quiz.id);
        }
    }

    #[test]
    fn seed_encodes_empty_logs() {
        let seed = default_snapshot();
        assert_eq!(seed.encode(StorageKey::VisitedQuestions).unwrap(), "[]");
        assert_eq!(seed.encode(StorageKey::QuizProgress).unwrap(), "[]");
        assert!(
            seed.encode(StorageKey::Subjects)
                .unwrap()
                .contains(r#""name":"S&W""#)
        );
    }
}
