//! Hierarchical content store for subjects, contests, questions and quizzes,
//! plus the learner's visited-question log and quiz progress.
//!
//! [`ContentStore`] owns the canonical in-memory state and mirrors every
//! mutation into a [`common::KeyValueStore`].

pub mod error;
pub mod ids;
pub mod integrity;
pub mod keys;
pub mod models;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use integrity::IntegrityIssue;
pub use keys::StorageKey;
pub use models::{
    Contest, ContestUpdate, Difficulty, NewContest, NewQuestion, NewQuiz, NewSubject, Question,
    QuestionUpdate, Quiz, QuizProgress, QuizUpdate, Subject, SubjectUpdate,
};
pub use snapshot::ContentSnapshot;
pub use store::{ContentStore, DeleteSummary, ImportSummary};
