use std::io::Write;

use common::KeyValueStore;
use content_store::models::parse_tags;
use content_store::{
    Contest, ContestUpdate, ContentStore, DeleteSummary, NewContest, NewQuestion, NewQuiz,
    NewSubject, Question, QuestionUpdate, Quiz, QuizUpdate, StoreError, SubjectUpdate,
};
use tracing::error;

use crate::cli::{Command, ContestAction, QuestionAction, QuizAction, SubjectAction};
use crate::error::{CliError, Result};

/// Execute one command against the store, writing user-facing output to `out`.
pub fn run<B: KeyValueStore, W: Write>(
    command: Command,
    store: &mut ContentStore<B>,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Init => {
            writeln!(
                out,
                "{} subjects, {} contests, {} questions, {} quizzes",
                store.subjects().len(),
                store.contests().len(),
                store.questions().len(),
                store.quizzes().len()
            )?;
        }
        Command::Subjects { action } => subjects(action, store, out)?,
        Command::Contests { action } => contests(action, store, out)?,
        Command::Questions { action } => questions(action, store, out)?,
        Command::Quizzes { action } => quizzes(action, store, out)?,
        Command::Visit { question_id } => {
            if store.question(question_id).is_none() {
                return Err(CliError::NotFound(format!("Question {question_id}")));
            }
            if store.mark_question_as_visited(question_id)? {
                writeln!(out, "Marked question {question_id} as visited")?;
            } else {
                writeln!(out, "Question {question_id} was already visited")?;
            }
        }
        Command::Answer { quiz_id, option } => {
            let progress = store
                .answer_quiz(quiz_id, &option)?
                .ok_or_else(|| CliError::NotFound(format!("Quiz {quiz_id}")))?;
            if progress.is_correct {
                writeln!(out, "Correct!")?;
            } else {
                let answer = store
                    .quiz(quiz_id)
                    .map(|q| q.correct_answer.as_str())
                    .unwrap_or_default();
                writeln!(out, "Incorrect. The correct answer is: {answer}")?;
            }
        }
        Command::Progress => {
            for p in store.quiz_progress() {
                let verdict = if p.is_correct { "correct" } else { "incorrect" };
                writeln!(out, "quiz {}: {} ({verdict})", p.quiz_id, p.selected_option)?;
            }
        }
        Command::Export { output } => {
            let document = store.export_all()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    writeln!(out, "Exported to {}", path.display())?;
                }
                None => writeln!(out, "{document}")?,
            }
        }
        Command::Import { file } => {
            let document = std::fs::read_to_string(&file)?;
            match store.import_all(&document) {
                Ok(_) => writeln!(out, "Data imported successfully!")?,
                Err(e @ StoreError::InvalidImport(_)) => {
                    error!(file = %file.display(), error = %e, "Import failed");
                    writeln!(out, "Error importing data. Please check the file format.")?;
                    return Err(e.into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Check => {
            let issues = store.check_integrity();
            if issues.is_empty() {
                writeln!(out, "No issues found")?;
            }
            for issue in issues {
                writeln!(out, "{issue}")?;
            }
        }
    }
    Ok(())
}

fn subjects<B: KeyValueStore, W: Write>(
    action: SubjectAction,
    store: &mut ContentStore<B>,
    out: &mut W,
) -> Result<()> {
    match action {
        SubjectAction::List => {
            for s in store.subjects() {
                let contests = store.contests_for_subject(s.id).len();
                writeln!(out, "{}\t{}\t({contests} contests)", s.id, s.name)?;
            }
        }
        SubjectAction::Add { name } => {
            let subject = store.add_subject(NewSubject { name })?;
            writeln!(out, "Added subject {}", subject.id)?;
        }
        SubjectAction::Update { id, name } => {
            let update = SubjectUpdate { name };
            require_changes(update.is_empty())?;
            store
                .update_subject(id, update)?
                .ok_or_else(|| CliError::NotFound(format!("Subject {id}")))?;
            writeln!(out, "Updated subject {id}")?;
        }
        SubjectAction::Delete { id } => {
            let summary = store.delete_subject(id)?;
            report_delete(out, "subject", id, &summary)?;
        }
    }
    Ok(())
}

fn contests<B: KeyValueStore, W: Write>(
    action: ContestAction,
    store: &mut ContentStore<B>,
    out: &mut W,
) -> Result<()> {
    match action {
        ContestAction::List { subject } => {
            let contests: Vec<&Contest> = match subject {
                Some(id) => store.contests_for_subject(id),
                None => store.contests().iter().collect(),
            };
            for c in contests {
                writeln!(out, "{}\t{}\tsubject {}", c.id, c.title, c.subject_id)?;
            }
        }
        ContestAction::Add { subject, title } => {
            let contest = store.add_contest(NewContest {
                subject_id: subject,
                title,
            })?;
            warn_if_missing(out, store.subject(subject).is_none(), "subject", subject)?;
            writeln!(out, "Added contest {}", contest.id)?;
        }
        ContestAction::Update { id, subject, title } => {
            let update = ContestUpdate {
                subject_id: subject,
                title,
            };
            require_changes(update.is_empty())?;
            store
                .update_contest(id, update)?
                .ok_or_else(|| CliError::NotFound(format!("Contest {id}")))?;
            writeln!(out, "Updated contest {id}")?;
        }
        ContestAction::Delete { id } => {
            let summary = store.delete_contest(id)?;
            report_delete(out, "contest", id, &summary)?;
        }
    }
    Ok(())
}

fn questions<B: KeyValueStore, W: Write>(
    action: QuestionAction,
    store: &mut ContentStore<B>,
    out: &mut W,
) -> Result<()> {
    match action {
        QuestionAction::List { contest } => {
            let questions: Vec<&Question> = match contest {
                Some(id) => store.questions_for_contest(id),
                None => store.questions().iter().collect(),
            };
            for q in questions {
                let visited = if store.is_visited(q.id) { " [visited]" } else { "" };
                writeln!(
                    out,
                    "{}\t{}\t{}\t[{}]\t{}{visited}",
                    q.id,
                    q.title,
                    q.difficulty,
                    q.tags.join(", "),
                    q.link
                )?;
            }
        }
        QuestionAction::Add {
            contest,
            title,
            description,
            tags,
            difficulty,
            link,
        } => {
            let question = store.add_question(NewQuestion {
                contest_id: contest,
                title,
                description,
                tags: parse_tags(&tags),
                difficulty,
                link,
            })?;
            warn_if_missing(out, store.contest(contest).is_none(), "contest", contest)?;
            writeln!(out, "Added question {}", question.id)?;
        }
        QuestionAction::Update {
            id,
            contest,
            title,
            description,
            tags,
            difficulty,
            link,
        } => {
            let update = QuestionUpdate {
                contest_id: contest,
                title,
                description,
                tags: tags.as_deref().map(parse_tags),
                difficulty,
                link,
            };
            require_changes(update.is_empty())?;
            store
                .update_question(id, update)?
                .ok_or_else(|| CliError::NotFound(format!("Question {id}")))?;
            writeln!(out, "Updated question {id}")?;
        }
        QuestionAction::Delete { id } => {
            let summary = store.delete_question(id)?;
            report_delete(out, "question", id, &summary)?;
        }
    }
    Ok(())
}

fn quizzes<B: KeyValueStore, W: Write>(
    action: QuizAction,
    store: &mut ContentStore<B>,
    out: &mut W,
) -> Result<()> {
    match action {
        QuizAction::List { contest } => {
            let quizzes: Vec<&Quiz> = match contest {
                Some(id) => store.quizzes_for_contest(id),
                None => store.quizzes().iter().collect(),
            };
            for q in quizzes {
                writeln!(out, "{}\t{}\t{}", q.id, q.question, q.options.join(" | "))?;
            }
        }
        QuizAction::Add {
            contest,
            question,
            options,
            answer,
        } => {
            validate_options(&options, &answer)?;
            let quiz = store.add_quiz(NewQuiz {
                contest_id: contest,
                question,
                options,
                correct_answer: answer,
            })?;
            warn_if_missing(out, store.contest(contest).is_none(), "contest", contest)?;
            writeln!(out, "Added quiz {}", quiz.id)?;
        }
        QuizAction::Update {
            id,
            contest,
            question,
            options,
            answer,
        } => {
            let current = store
                .quiz(id)
                .ok_or_else(|| CliError::NotFound(format!("Quiz {id}")))?;
            let update = QuizUpdate {
                contest_id: contest,
                question,
                options: (!options.is_empty()).then_some(options),
                correct_answer: answer,
            };
            require_changes(update.is_empty())?;
            validate_options(
                update.options.as_ref().unwrap_or(&current.options),
                update
                    .correct_answer
                    .as_ref()
                    .unwrap_or(&current.correct_answer),
            )?;
            store.update_quiz(id, update)?;
            writeln!(out, "Updated quiz {id}")?;
        }
        QuizAction::Delete { id } => {
            let summary = store.delete_quiz(id)?;
            report_delete(out, "quiz", id, &summary)?;
        }
    }
    Ok(())
}

/// Editing-form rules: at least two options, and the answer is one of them.
fn validate_options(options: &[String], answer: &str) -> Result<()> {
    if options.len() < 2 {
        return Err(CliError::InvalidInput(
            "A quiz needs at least two options".into(),
        ));
    }
    if !options.iter().any(|o| o == answer) {
        return Err(CliError::InvalidInput(format!(
            "Answer '{answer}' is not one of the options"
        )));
    }
    Ok(())
}

fn require_changes(empty: bool) -> Result<()> {
    if empty {
        return Err(CliError::InvalidInput("nothing to update".into()));
    }
    Ok(())
}

fn warn_if_missing<W: Write>(out: &mut W, missing: bool, kind: &str, id: i64) -> Result<()> {
    if missing {
        writeln!(out, "Warning: {kind} {id} does not exist")?;
    }
    Ok(())
}

fn report_delete<W: Write>(
    out: &mut W,
    kind: &str,
    id: i64,
    summary: &DeleteSummary,
) -> Result<()> {
    if summary.is_empty() {
        return Err(CliError::NotFound(format!("{kind} {id}")));
    }
    writeln!(
        out,
        "Deleted {kind} {id} ({} contests, {} questions, {} quizzes removed)",
        summary.contests.len(),
        summary.questions.len(),
        summary.quizzes.len()
    )?;
    Ok(())
}
