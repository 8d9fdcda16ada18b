use std::path::PathBuf;

use clap::{Parser, Subcommand};
use content_store::Difficulty;

#[derive(Parser, Debug)]
#[command(version, about = "View and edit subjects, contests, questions and quizzes")]
pub struct Cli {
    /// Config file (TOML). Default: config/config.
    #[arg(short, long, env = "SYLLABUS_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Admin password for editing commands. Prompted for when omitted.
    #[arg(long, env = "SYLLABUS_ADMIN_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed empty storage with the sample dataset and print collection sizes.
    Init,
    /// Manage subjects.
    Subjects {
        #[command(subcommand)]
        action: SubjectAction,
    },
    /// Manage contests.
    Contests {
        #[command(subcommand)]
        action: ContestAction,
    },
    /// Manage coding questions.
    Questions {
        #[command(subcommand)]
        action: QuestionAction,
    },
    /// Manage quizzes.
    Quizzes {
        #[command(subcommand)]
        action: QuizAction,
    },
    /// Mark a coding question as visited.
    Visit { question_id: i64 },
    /// Answer a quiz and record the attempt.
    Answer { quiz_id: i64, option: String },
    /// Show recorded quiz attempts.
    Progress,
    /// Write all content as a JSON document.
    Export {
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace content with the collections found in a JSON document.
    Import { file: PathBuf },
    /// Report dangling references and malformed quizzes.
    Check,
}

#[derive(Subcommand, Debug)]
pub enum SubjectAction {
    List,
    Add {
        name: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a subject with all of its contests, questions and quizzes.
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContestAction {
    List {
        /// Only contests of this subject.
        #[arg(long)]
        subject: Option<i64>,
    },
    Add {
        #[arg(long)]
        subject: i64,
        title: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        subject: Option<i64>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a contest with all of its questions and quizzes.
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuestionAction {
    List {
        /// Only questions of this contest.
        #[arg(long)]
        contest: Option<i64>,
    },
    Add {
        #[arg(long)]
        contest: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "Easy")]
        difficulty: Difficulty,
        #[arg(long, default_value = "")]
        link: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        contest: Option<i64>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        link: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuizAction {
    List {
        /// Only quizzes of this contest.
        #[arg(long)]
        contest: Option<i64>,
    },
    Add {
        #[arg(long)]
        contest: i64,
        #[arg(long)]
        question: String,
        /// An answer option. Repeat for each option (at least two).
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        /// The correct option.
        #[arg(long)]
        answer: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        contest: Option<i64>,
        #[arg(long)]
        question: Option<String>,
        /// Replaces all options when given. Repeat for each option.
        #[arg(long = "option")]
        options: Vec<String>,
        #[arg(long)]
        answer: Option<String>,
    },
    Delete {
        id: i64,
    },
}

impl Command {
    /// Whether the command edits content and therefore needs the admin password.
    pub fn requires_admin(&self) -> bool {
        match self {
            Command::Subjects { action } => !matches!(action, SubjectAction::List),
            Command::Contests { action } => !matches!(action, ContestAction::List { .. }),
            Command::Questions { action } => !matches!(action, QuestionAction::List { .. }),
            Command::Quizzes { action } => !matches!(action, QuizAction::List { .. }),
            Command::Export { .. } | Command::Import { .. } => true,
            Command::Init
            | Command::Visit { .. }
            | Command::Answer { .. }
            | Command::Progress
            | Command::Check => false,
        }
    }
}
