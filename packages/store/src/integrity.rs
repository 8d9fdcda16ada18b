use std::collections::HashSet;
use std::fmt;

use common::KeyValueStore;

use crate::store::ContentStore;

/// A record that points at something missing or is otherwise malformed.
///
/// The store accepts such records when they are written; this is the report
/// an editor can run afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    ContestWithoutSubject { contest_id: i64, subject_id: i64 },
    QuestionWithoutContest { question_id: i64, contest_id: i64 },
    QuizWithoutContest { quiz_id: i64, contest_id: i64 },
    /// The correct answer is not one of the quiz's options.
    AnswerNotAnOption { quiz_id: i64 },
    TooFewOptions { quiz_id: i64, count: usize },
    VisitedUnknownQuestion { question_id: i64 },
    ProgressForUnknownQuiz { quiz_id: i64 },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContestWithoutSubject {
                contest_id,
                subject_id,
            } => write!(f, "contest {contest_id} references missing subject {subject_id}"),
            Self::QuestionWithoutContest {
                question_id,
                contest_id,
            } => write!(
                f,
                "question {question_id} references missing contest {contest_id}"
            ),
            Self::QuizWithoutContest {
                quiz_id,
                contest_id,
            } => write!(f, "quiz {quiz_id} references missing contest {contest_id}"),
            Self::AnswerNotAnOption { quiz_id } => {
                write!(f, "quiz {quiz_id} has a correct answer that is not an option")
            }
            Self::TooFewOptions { quiz_id, count } => {
                write!(f, "quiz {quiz_id} has {count} option(s), at least 2 required")
            }
            Self::VisitedUnknownQuestion { question_id } => {
                write!(f, "visited log references missing question {question_id}")
            }
            Self::ProgressForUnknownQuiz { quiz_id } => {
                write!(f, "quiz progress references missing quiz {quiz_id}")
            }
        }
    }
}

impl<B: KeyValueStore> ContentStore<B> {
    /// Report dangling references and malformed quizzes. Changes nothing.
    pub fn check_integrity(&self) -> Vec<IntegrityIssue> {
        let subject_ids: HashSet<i64> = self.subjects().iter().map(|s| s.id).collect();
        let contest_ids: HashSet<i64> = self.contests().iter().map(|c| c.id).collect();
        let question_ids: HashSet<i64> = self.questions().iter().map(|q| q.id).collect();
        let quiz_ids: HashSet<i64> = self.quizzes().iter().map(|q| q.id).collect();

        let mut issues = Vec::new();

        for contest in self.contests() {
            if !subject_ids.contains(&contest.subject_id) {
                issues.push(IntegrityIssue::ContestWithoutSubject {
                    contest_id: contest.id,
                    subject_id: contest.subject_id,
                });
            }
        }

        for question in self.questions() {
            if !contest_ids.contains(&question.contest_id) {
                issues.push(IntegrityIssue::QuestionWithoutContest {
                    question_id: question.id,
                    contest_id: question.contest_id,
                });
            }
        }

        for quiz in self.quizzes() {
            if !contest_ids.contains(&quiz.contest_id) {
                issues.push(IntegrityIssue::QuizWithoutContest {
                    quiz_id: quiz.id,
                    contest_id: quiz.contest_id,
                });
            }
            if quiz.options.len() < 2 {
                issues.push(IntegrityIssue::TooFewOptions {
                    quiz_id: quiz.id,
                    count: quiz.options.len(),
                });
            }
            if !quiz.options.contains(&quiz.correct_answer) {
                issues.push(IntegrityIssue::AnswerNotAnOption { quiz_id: quiz.id });
            }
        }

        for &question_id in self.visited_questions() {
            if !question_ids.contains(&question_id) {
                issues.push(IntegrityIssue::VisitedUnknownQuestion { question_id });
            }
        }

        for progress in self.quiz_progress() {
            if !quiz_ids.contains(&progress.quiz_id) {
                issues.push(IntegrityIssue::ProgressForUnknownQuiz {
                    quiz_id: progress.quiz_id,
                });
            }
        }

        issues
    }
}
