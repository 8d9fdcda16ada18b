use std::fmt;

/// The six logical keys the content store keeps in the persistence surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    Subjects,
    Contests,
    Questions,
    Quizzes,
    VisitedQuestions,
    QuizProgress,
}

impl StorageKey {
    /// All keys, in export order.
    pub const ALL: &'static [StorageKey] = &[
        Self::Subjects,
        Self::Contests,
        Self::Questions,
        Self::Quizzes,
        Self::VisitedQuestions,
        Self::QuizProgress,
    ];

    /// The literal key used in storage and in export documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Contests => "contests",
            Self::Questions => "questions",
            Self::Quizzes => "quizzes",
            Self::VisitedQuestions => "visitedQuestions",
            Self::QuizProgress => "quizProgress",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
