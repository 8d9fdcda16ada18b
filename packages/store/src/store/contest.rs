use common::KeyValueStore;
use tracing::info;

use super::{ContentStore, DeleteSummary, position};
use crate::error::{Result, StoreError};
use crate::ids::next_id;
use crate::keys::StorageKey;
use crate::models::{Contest, ContestUpdate, NewContest};

impl<B: KeyValueStore> ContentStore<B> {
    /// Append a contest. The subject id is not checked; see `check_integrity`.
    pub fn add_contest(&mut self, input: NewContest) -> Result<Contest> {
        let contest = input.with_id(
            next_id(&self.state.contests).ok_or(StoreError::IdExhausted {
                key: StorageKey::Contests,
            })?,
        );
        self.state.contests.push(contest.clone());
        self.persist(StorageKey::Contests)?;
        Ok(contest)
    }

    pub fn update_contest(&mut self, id: i64, update: ContestUpdate) -> Result<Option<Contest>> {
        let Some(idx) = position(&self.state.contests, id) else {
            return Ok(None);
        };
        update.apply(&mut self.state.contests[idx]);
        let updated = self.state.contests[idx].clone();
        self.persist(StorageKey::Contests)?;
        Ok(Some(updated))
    }

    /// Delete a contest and every question and quiz that belongs to it.
    pub fn delete_contest(&mut self, id: i64) -> Result<DeleteSummary> {
        let mut summary = DeleteSummary::default();
        if let Some(idx) = position(&self.state.contests, id) {
            self.state.contests.remove(idx);
            summary.contests.push(id);
        }
        summary.questions = self.remove_questions_in(&[id]);
        summary.quizzes = self.remove_quizzes_in(&[id]);

        if summary.is_empty() {
            return Ok(summary);
        }

        info!(
            contest_id = id,
            questions = summary.questions.len(),
            quizzes = summary.quizzes.len(),
            "Deleted contest"
        );
        self.persist_all(&[
            StorageKey::Contests,
            StorageKey::Questions,
            StorageKey::Quizzes,
        ])?;
        Ok(summary)
    }
}
