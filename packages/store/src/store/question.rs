use common::KeyValueStore;
use tracing::debug;

use super::{ContentStore, DeleteSummary, position};
use crate::error::{Result, StoreError};
use crate::ids::next_id;
use crate::keys::StorageKey;
use crate::models::{NewQuestion, Question, QuestionUpdate};

impl<B: KeyValueStore> ContentStore<B> {
    /// Append a question. The contest id is not checked; see `check_integrity`.
    pub fn add_question(&mut self, input: NewQuestion) -> Result<Question> {
        let question = input.with_id(
            next_id(&self.state.questions).ok_or(StoreError::IdExhausted {
                key: StorageKey::Questions,
            })?,
        );
        self.state.questions.push(question.clone());
        self.persist(StorageKey::Questions)?;
        Ok(question)
    }

    pub fn update_question(
        &mut self,
        id: i64,
        update: QuestionUpdate,
    ) -> Result<Option<Question>> {
        let Some(idx) = position(&self.state.questions, id) else {
            return Ok(None);
        };
        update.apply(&mut self.state.questions[idx]);
        let updated = self.state.questions[idx].clone();
        self.persist(StorageKey::Questions)?;
        Ok(Some(updated))
    }

    pub fn delete_question(&mut self, id: i64) -> Result<DeleteSummary> {
        let mut summary = DeleteSummary::default();
        let Some(idx) = position(&self.state.questions, id) else {
            return Ok(summary);
        };
        self.state.questions.remove(idx);
        summary.questions.push(id);
        self.persist(StorageKey::Questions)?;
        Ok(summary)
    }

    /// Record that the learner opened a question.
    ///
    /// Returns `false` without writing if it was already marked.
    pub fn mark_question_as_visited(&mut self, id: i64) -> Result<bool> {
        if self.state.visited_questions.contains(&id) {
            return Ok(false);
        }
        self.state.visited_questions.push(id);
        debug!(question_id = id, "Marked question as visited");
        self.persist(StorageKey::VisitedQuestions)?;
        Ok(true)
    }

    pub(super) fn remove_questions_in(&mut self, contest_ids: &[i64]) -> Vec<i64> {
        let mut removed = Vec::new();
        self.state.questions.retain(|q| {
            let keep = !contest_ids.contains(&q.contest_id);
            if !keep {
                removed.push(q.id);
            }
            keep
        });
        removed
    }
}
