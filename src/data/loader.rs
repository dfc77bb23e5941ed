use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::{QuestionId, Quiz};

/// Option labels run A to Z, which caps how many options a question
/// can carry.
const MAX_OPTIONS: usize = 26;

/// Error type for loading quiz definitions.
#[derive(Debug)]
pub enum LoadError {
    /// Could not read the file.
    Io(io::Error),
    /// The file is not valid JSON for a quiz definition.
    Json(serde_json::Error),
    /// The definition has no questions.
    NoQuestions,
    /// The pass threshold is a percentage and must not exceed 100.
    PassingScoreOutOfRange(u32),
    /// Two questions share the same id.
    DuplicateQuestionId(QuestionId),
    /// A question needs at least two options.
    TooFewOptions(QuestionId),
    /// A question has more options than can be labelled.
    TooManyOptions(QuestionId),
    /// A question marks a correct answer outside its option list.
    CorrectAnswerOutOfRange(QuestionId),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read quiz file: {}", e),
            LoadError::Json(e) => write!(f, "failed to parse quiz definition: {}", e),
            LoadError::NoQuestions => write!(f, "quiz definition has no questions"),
            LoadError::PassingScoreOutOfRange(score) => {
                write!(f, "passing score {} exceeds 100", score)
            }
            LoadError::DuplicateQuestionId(id) => write!(f, "duplicate question id {}", id),
            LoadError::TooFewOptions(id) => {
                write!(f, "question {} has fewer than two options", id)
            }
            LoadError::TooManyOptions(id) => {
                write!(f, "question {} has more than {} options", id, MAX_OPTIONS)
            }
            LoadError::CorrectAnswerOutOfRange(id) => {
                write!(f, "question {} marks a correct answer outside its options", id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

/// Load and validate a quiz definition from a JSON file.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<Quiz, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_quiz(&content)
}

/// Parse and validate a quiz definition from a JSON string.
///
/// A `time_limit` of 0 means untimed and is normalized to `None`.
pub fn parse_quiz(json: &str) -> Result<Quiz, LoadError> {
    let mut quiz: Quiz = serde_json::from_str(json)?;
    validate_quiz(&quiz)?;

    if quiz.time_limit == Some(0) {
        quiz.time_limit = None;
    }

    Ok(quiz)
}

fn validate_quiz(quiz: &Quiz) -> Result<(), LoadError> {
    if quiz.questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    if quiz.passing_score > 100 {
        return Err(LoadError::PassingScoreOutOfRange(quiz.passing_score));
    }

    let mut seen = HashSet::new();
    for question in &quiz.questions {
        if !seen.insert(question.id) {
            return Err(LoadError::DuplicateQuestionId(question.id));
        }
        if question.options.len() < 2 {
            return Err(LoadError::TooFewOptions(question.id));
        }
        if question.options.len() > MAX_OPTIONS {
            return Err(LoadError::TooManyOptions(question.id));
        }
        if question.correct_answer >= question.options.len() {
            return Err(LoadError::CorrectAnswerOutOfRange(question.id));
        }
    }

    Ok(())
}
