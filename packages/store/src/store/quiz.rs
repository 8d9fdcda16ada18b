use common::KeyValueStore;
use tracing::debug;

use super::{ContentStore, DeleteSummary, position};
use crate::error::{Result, StoreError};
use crate::ids::next_id;
use crate::keys::StorageKey;
use crate::models::{NewQuiz, Quiz, QuizProgress, QuizUpdate};

impl<B: KeyValueStore> ContentStore<B> {
    /// Append a quiz. Neither the contest id nor the answer is checked; see
    /// `check_integrity`.
    pub fn add_quiz(&mut self, input: NewQuiz) -> Result<Quiz> {
        let quiz = input.with_id(
            next_id(&self.state.quizzes).ok_or(StoreError::IdExhausted {
                key: StorageKey::Quizzes,
            })?,
        );
        self.state.quizzes.push(quiz.clone());
        self.persist(StorageKey::Quizzes)?;
        Ok(quiz)
    }

    pub fn update_quiz(&mut self, id: i64, update: QuizUpdate) -> Result<Option<Quiz>> {
        let Some(idx) = position(&self.state.quizzes, id) else {
            return Ok(None);
        };
        update.apply(&mut self.state.quizzes[idx]);
        let updated = self.state.quizzes[idx].clone();
        self.persist(StorageKey::Quizzes)?;
        Ok(Some(updated))
    }

    pub fn delete_quiz(&mut self, id: i64) -> Result<DeleteSummary> {
        let mut summary = DeleteSummary::default();
        let Some(idx) = position(&self.state.quizzes, id) else {
            return Ok(summary);
        };
        self.state.quizzes.remove(idx);
        summary.quizzes.push(id);
        self.persist(StorageKey::Quizzes)?;
        Ok(summary)
    }

    /// Upsert the attempt for `progress.quiz_id`; the latest attempt wins.
    pub fn save_quiz_progress(&mut self, progress: QuizProgress) -> Result<()> {
        match self
            .state
            .quiz_progress
            .iter_mut()
            .find(|p| p.quiz_id == progress.quiz_id)
        {
            Some(existing) => *existing = progress,
            None => self.state.quiz_progress.push(progress),
        }
        self.persist(StorageKey::QuizProgress)
    }

    /// Grade `selected` against the quiz's correct answer and record the attempt.
    ///
    /// Returns `None` if the quiz does not exist.
    pub fn answer_quiz(&mut self, quiz_id: i64, selected: &str) -> Result<Option<QuizProgress>> {
        let Some(quiz) = self.quiz(quiz_id) else {
            return Ok(None);
        };
        let progress = QuizProgress {
            quiz_id,
            selected_option: selected.to_string(),
            is_correct: quiz.is_correct(selected),
        };
        debug!(quiz_id, is_correct = progress.is_correct, "Quiz answered");
        self.save_quiz_progress(progress.clone())?;
        Ok(Some(progress))
    }

    pub(super) fn remove_quizzes_in(&mut self, contest_ids: &[i64]) -> Vec<i64> {
        let mut removed = Vec::new();
        self.state.quizzes.retain(|q| {
            let keep = !contest_ids.contains(&q.contest_id);
            if !keep {
                removed.push(q.id);
            }
            keep
        });
        removed
    }
}
