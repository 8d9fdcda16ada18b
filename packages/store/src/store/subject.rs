use common::KeyValueStore;
use tracing::info;

use super::{ContentStore, DeleteSummary, position};
use crate::error::{Result, StoreError};
use crate::ids::next_id;
use crate::keys::StorageKey;
use crate::models::{NewSubject, Subject, SubjectUpdate};

impl<B: KeyValueStore> ContentStore<B> {
    pub fn add_subject(&mut self, input: NewSubject) -> Result<Subject> {
        let subject = input.with_id(
            next_id(&self.state.subjects).ok_or(StoreError::IdExhausted {
                key: StorageKey::Subjects,
            })?,
        );
        self.state.subjects.push(subject.clone());
        self.persist(StorageKey::Subjects)?;
        Ok(subject)
    }

    /// Merge `update` into the subject with `id`. Returns `None` if there is no such subject.
    pub fn update_subject(&mut self, id: i64, update: SubjectUpdate) -> Result<Option<Subject>> {
        let Some(idx) = position(&self.state.subjects, id) else {
            return Ok(None);
        };
        update.apply(&mut self.state.subjects[idx]);
        let updated = self.state.subjects[idx].clone();
        self.persist(StorageKey::Subjects)?;
        Ok(Some(updated))
    }

    /// Delete a subject together with its contests and everything in them.
    pub fn delete_subject(&mut self, id: i64) -> Result<DeleteSummary> {
        let contest_ids: Vec<i64> = self
            .state
            .contests
            .iter()
            .filter(|c| c.subject_id == id)
            .map(|c| c.id)
            .collect();

        let mut summary = DeleteSummary::default();
        if let Some(idx) = position(&self.state.subjects, id) {
            self.state.subjects.remove(idx);
            summary.subjects.push(id);
        }
        self.state.contests.retain(|c| c.subject_id != id);
        summary.contests = contest_ids;
        summary.questions = self.remove_questions_in(&summary.contests);
        summary.quizzes = self.remove_quizzes_in(&summary.contests);

        if summary.is_empty() {
            return Ok(summary);
        }

        info!(
            subject_id = id,
            contests = summary.contests.len(),
            questions = summary.questions.len(),
            quizzes = summary.quizzes.len(),
            "Deleted subject"
        );
        self.persist_all(&[
            StorageKey::Subjects,
            StorageKey::Contests,
            StorageKey::Questions,
            StorageKey::Quizzes,
        ])?;
        Ok(summary)
    }
}
