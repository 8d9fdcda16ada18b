mod contest;
mod question;
mod quiz;
mod subject;
mod transfer;

use common::KeyValueStore;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::ids::Identified;
use crate::keys::StorageKey;
use crate::models::{Contest, Question, Quiz, QuizProgress, Subject};
use crate::seed::default_snapshot;
use crate::snapshot::ContentSnapshot;

pub use transfer::ImportSummary;

/// Ids removed by a delete, per collection, including cascaded children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub subjects: Vec<i64>,
    pub contests: Vec<i64>,
    pub questions: Vec<i64>,
    pub quizzes: Vec<i64>,
}

impl DeleteSummary {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.subjects.len() + self.contests.len() + self.questions.len() + self.quizzes.len()
    }
}

/// Canonical in-memory state of subjects, contests, questions, quizzes and the
/// two learner logs, mirrored into a key-value backend after every mutation.
///
/// Reads are served from memory. Mutations change memory first and then write
/// the affected keys; if a write fails the error is returned and memory keeps
/// the new state until [`flush`](Self::flush) succeeds or
/// [`refresh`](Self::refresh) discards it.
pub struct ContentStore<B: KeyValueStore> {
    backend: B,
    state: ContentSnapshot,
}

impl<B: KeyValueStore> ContentStore<B> {
    /// Seed every empty key with the built-in dataset, then load all keys.
    ///
    /// Never fails: unreadable keys fall back to their defaults.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            state: ContentSnapshot::default(),
        };
        store.seed_missing();
        store.refresh();
        store
    }

    fn seed_missing(&mut self) {
        let defaults = default_snapshot();
        let mut seeded = 0u32;

        for &key in StorageKey::ALL {
            match self.backend.get(key.as_str()) {
                Ok(Some(raw)) if !raw.is_empty() => continue,
                Ok(_) => {}
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to read storage key, skipping seed");
                    continue;
                }
            }

            let result = defaults
                .encode(key)
                .map_err(|e| e.to_string())
                .and_then(|raw| {
                    self.backend
                        .set(key.as_str(), &raw)
                        .map_err(|e| e.to_string())
                });
            match result {
                Ok(()) => seeded += 1,
                Err(e) => warn!(key = %key, error = %e, "Failed to seed storage key"),
            }
        }

        if seeded > 0 {
            info!("Seeded {} empty storage keys with sample data", seeded);
        }
    }

    /// Reload all six collections from the backend, discarding unsaved memory state.
    pub fn refresh(&mut self) {
        let defaults = default_snapshot();
        let mut state = ContentSnapshot::default();

        for &key in StorageKey::ALL {
            match self.backend.get(key.as_str()) {
                Ok(Some(raw)) if !raw.is_empty() => {
                    if let Err(e) = state.decode(key, &raw) {
                        warn!(key = %key, error = %e, "Corrupt data in storage, using defaults");
                        state.copy_key(&defaults, key);
                    }
                }
                Ok(_) => state.copy_key(&defaults, key),
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to read storage, using defaults");
                    state.copy_key(&defaults, key);
                }
            }
        }

        debug!(
            subjects = state.subjects.len(),
            contests = state.contests.len(),
            questions = state.questions.len(),
            quizzes = state.quizzes.len(),
            "Loaded content"
        );
        self.state = state;
    }

    /// Write every in-memory collection back to the backend.
    ///
    /// The retry path after a [`StoreError::Write`].
    pub fn flush(&mut self) -> Result<()> {
        self.persist_all(StorageKey::ALL)
    }

    fn persist(&mut self, key: StorageKey) -> Result<()> {
        let raw = self
            .state
            .encode(key)
            .map_err(|source| StoreError::Encode { key, source })?;
        self.backend.set(key.as_str(), &raw).map_err(|source| {
            warn!(key = %key, error = %source, "Failed to persist collection");
            StoreError::Write { key, source }
        })
    }

    /// Persist each key in turn. Every key is attempted; the first failure is
    /// returned and earlier successful writes stay in place.
    fn persist_all(&mut self, keys: &[StorageKey]) -> Result<()> {
        let mut first_error = None;
        for &key in keys {
            if let Err(e) = self.persist(key) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    pub fn subjects(&self) -> &[Subject] {
        &self.state.subjects
    }

    pub fn contests(&self) -> &[Contest] {
        &self.state.contests
    }

    pub fn questions(&self) -> &[Question] {
        &self.state.questions
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.state.quizzes
    }

    pub fn visited_questions(&self) -> &[i64] {
        &self.state.visited_questions
    }

    pub fn quiz_progress(&self) -> &[QuizProgress] {
        &self.state.quiz_progress
    }

    /// The full in-memory state.
    pub fn snapshot(&self) -> &ContentSnapshot {
        &self.state
    }

    pub fn subject(&self, id: i64) -> Option<&Subject> {
        find(&self.state.subjects, id)
    }

    pub fn contest(&self, id: i64) -> Option<&Contest> {
        find(&self.state.contests, id)
    }

    pub fn question(&self, id: i64) -> Option<&Question> {
        find(&self.state.questions, id)
    }

    pub fn quiz(&self, id: i64) -> Option<&Quiz> {
        find(&self.state.quizzes, id)
    }

    pub fn contests_for_subject(&self, subject_id: i64) -> Vec<&Contest> {
        self.state
            .contests
            .iter()
            .filter(|c| c.subject_id == subject_id)
            .collect()
    }

    pub fn questions_for_contest(&self, contest_id: i64) -> Vec<&Question> {
        self.state
            .questions
            .iter()
            .filter(|q| q.contest_id == contest_id)
            .collect()
    }

    pub fn quizzes_for_contest(&self, contest_id: i64) -> Vec<&Quiz> {
        self.state
            .quizzes
            .iter()
            .filter(|q| q.contest_id == contest_id)
            .collect()
    }

    pub fn progress_for_quiz(&self, quiz_id: i64) -> Option<&QuizProgress> {
        self.state
            .quiz_progress
            .iter()
            .find(|p| p.quiz_id == quiz_id)
    }

    pub fn is_visited(&self, question_id: i64) -> bool {
        self.state.visited_questions.contains(&question_id)
    }

    // -----------------------------------------------------------------------
    // Backend access
    // -----------------------------------------------------------------------

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable backend access. Changes made here are only seen after `refresh`.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn find<T: Identified>(items: &[T], id: i64) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

fn position<T: Identified>(items: &[T], id: i64) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
