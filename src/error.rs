//! Error types for the few fallible edges of the crate.
//!
//! Question generation itself is total. Errors only arise when parsing
//! user-supplied identifiers, loading a [`QuizConfig`](crate::QuizConfig), or
//! driving a [`QuizSession`](crate::QuizSession) out of order.

use thiserror::Error;

/// Failure to parse a topic, difficulty, language or chapter identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("unknown language '{0}' (expected en or vi)")]
    UnknownLanguage(String),
    #[error("invalid chapter {0} (expected 1 or 2)")]
    InvalidChapter(u8),
}

/// Failure to build a [`QuizConfig`](crate::QuizConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid quiz config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("questions_per_quiz must be at least 1")]
    EmptyQuiz,
}

/// Misuse of a [`QuizSession`](crate::QuizSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("the quiz is already finished")]
    Finished,
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("question {index} has not been answered yet")]
    NotAnswered { index: usize },
    #[error("an empty answer cannot be submitted")]
    EmptyAnswer,
}
