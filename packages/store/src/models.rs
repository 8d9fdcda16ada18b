use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level content category, e.g. a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// A named grouping of questions and quizzes under one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: i64,
    pub subject_id: i64,
    pub title: String,
}

/// A coding exercise with an external solve link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub contest_id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub link: String,
}

/// A multiple-choice item with one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub contest_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Quiz {
    /// Exact comparison of a selected option against the correct answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

/// The latest recorded attempt at a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    pub quiz_id: i64,
    pub selected_option: String,
    pub is_correct: bool,
}

/// Difficulty label of a coding question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid difficulty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    invalid: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid difficulty '{}'. Valid values: {}",
            self.invalid,
            Difficulty::ALL
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError {
                invalid: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Creation inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSubject {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContest {
    pub subject_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub contest_id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub contest_id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl NewSubject {
    pub(crate) fn with_id(self, id: i64) -> Subject {
        Subject {
            id,
            name: self.name,
        }
    }
}

impl NewContest {
    pub(crate) fn with_id(self, id: i64) -> Contest {
        Contest {
            id,
            subject_id: self.subject_id,
            title: self.title,
        }
    }
}

impl NewQuestion {
    pub(crate) fn with_id(self, id: i64) -> Question {
        Question {
            id,
            contest_id: self.contest_id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            difficulty: self.difficulty,
            link: self.link,
        }
    }
}

impl NewQuiz {
    pub(crate) fn with_id(self, id: i64) -> Quiz {
        Quiz {
            id,
            contest_id: self.contest_id,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
        }
    }
}

// ---------------------------------------------------------------------------
// Partial updates
//
// A supplied field overrides the stored value; an absent field keeps it.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct SubjectUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContestUpdate {
    pub subject_id: Option<i64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdate {
    pub contest_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizUpdate {
    pub contest_id: Option<i64>,
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl SubjectUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, subject: &mut Subject) {
        merge(&mut subject.name, self.name);
    }
}

impl ContestUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, contest: &mut Contest) {
        merge(&mut contest.subject_id, self.subject_id);
        merge(&mut contest.title, self.title);
    }
}

impl QuestionUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, question: &mut Question) {
        merge(&mut question.contest_id, self.contest_id);
        merge(&mut question.title, self.title);
        merge(&mut question.description, self.description);
        merge(&mut question.tags, self.tags);
        merge(&mut question.difficulty, self.difficulty);
        merge(&mut question.link, self.link);
    }
}

impl QuizUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, quiz: &mut Quiz) {
        merge(&mut quiz.contest_id, self.contest_id);
        merge(&mut quiz.question, self.question);
        merge(&mut quiz.options, self.options);
        merge(&mut quiz.correct_answer, self.correct_answer);
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
