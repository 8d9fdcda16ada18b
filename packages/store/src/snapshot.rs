use serde::{Deserialize, Serialize};

use crate::keys::StorageKey;
use crate::models::{Contest, Question, Quiz, QuizProgress, Subject};

/// All six collections of the content store.
///
/// Field order is the key order of an export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub subjects: Vec<Subject>,
    pub contests: Vec<Contest>,
    pub questions: Vec<Question>,
    pub quizzes: Vec<Quiz>,
    pub visited_questions: Vec<i64>,
    pub quiz_progress: Vec<QuizProgress>,
}

/// An import document: every key is optional, `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSnapshot {
    pub subjects: Option<Vec<Subject>>,
    pub contests: Option<Vec<Contest>>,
    pub questions: Option<Vec<Question>>,
    pub quizzes: Option<Vec<Quiz>>,
    pub visited_questions: Option<Vec<i64>>,
    pub quiz_progress: Option<Vec<QuizProgress>>,
}

impl ContentSnapshot {
    /// JSON encoding of the collection stored under `key`.
    pub fn encode(&self, key: StorageKey) -> Result<String, serde_json::Error> {
        match key {
            StorageKey::Subjects => serde_json::to_string(&self.subjects),
            StorageKey::Contests => serde_json::to_string(&self.contests),
            StorageKey::Questions => serde_json::to_string(&self.questions),
            StorageKey::Quizzes => serde_json::to_string(&self.quizzes),
            StorageKey::VisitedQuestions => serde_json::to_string(&self.visited_questions),
            StorageKey::QuizProgress => serde_json::to_string(&self.quiz_progress),
        }
    }

    /// Replace the collection under `key` with the decoded `raw` value.
    ///
    /// On a decode error the collection is left as it was.
    pub fn decode(&mut self, key: StorageKey, raw: &str) -> Result<(), serde_json::Error> {
        match key {
            StorageKey::Subjects => self.subjects = serde_json::from_str(raw)?,
            StorageKey::Contests => self.contests = serde_json::from_str(raw)?,
            StorageKey::Questions => self.questions = serde_json::from_str(raw)?,
            StorageKey::Quizzes => self.quizzes = serde_json::from_str(raw)?,
            StorageKey::VisitedQuestions => self.visited_questions = serde_json::from_str(raw)?,
            StorageKey::QuizProgress => self.quiz_progress = serde_json::from_str(raw)?,
        }
        Ok(())
    }

    /// Copy the collection under `key` from `other`.
    pub fn copy_key(&mut self, other: &ContentSnapshot, key: StorageKey) {
        match key {
            StorageKey::Subjects => self.subjects = other.subjects.clone(),
            StorageKey::Contests => self.contests = other.contests.clone(),
            StorageKey::Questions => self.questions = other.questions.clone(),
            StorageKey::Quizzes => self.quizzes = other.quizzes.clone(),
            StorageKey::VisitedQuestions => {
                self.visited_questions = other.visited_questions.clone()
            }
            StorageKey::QuizProgress => self.quiz_progress = other.quiz_progress.clone(),
        }
    }
}

impl PartialSnapshot {
    /// Keys present in the document, in export order.
    pub fn present_keys(&self) -> Vec<StorageKey> {
        StorageKey::ALL
            .iter()
            .copied()
            .filter(|key| match key {
                StorageKey::Subjects => self.subjects.is_some(),
                StorageKey::Contests => self.contests.is_some(),
                StorageKey::Questions => self.questions.is_some(),
                StorageKey::Quizzes => self.quizzes.is_some(),
                StorageKey::VisitedQuestions => self.visited_questions.is_some(),
                StorageKey::QuizProgress => self.quiz_progress.is_some(),
            })
            .collect()
    }

    /// Fill every absent key from `base`.
    pub fn merged_over(self, base: &ContentSnapshot) -> ContentSnapshot {
        ContentSnapshot {
            subjects: self.subjects.unwrap_or_else(|| base.subjects.clone()),
            contests: self.contests.unwrap_or_else(|| base.contests.clone()),
            questions: self.questions.unwrap_or_else(|| base.questions.clone()),
            quizzes: self.quizzes.unwrap_or_else(|| base.quizzes.clone()),
            visited_questions: self
                .visited_questions
                .unwrap_or_else(|| base.visited_questions.clone()),
            quiz_progress: self
                .quiz_progress
                .unwrap_or_else(|| base.quiz_progress.clone()),
        }
    }
}
