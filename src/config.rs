//! Quiz configuration, from defaults, JSON, or the environment.

use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{Chapter, Language};
use crate::error::ConfigError;

/// Number of questions in a quiz unless configured otherwise.
pub const QUESTIONS_PER_QUIZ: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub language: Language,
    /// Restricts calculations quizzes to one chapter.
    pub chapter: Option<Chapter>,
    /// Fixed seed for a reproducible quiz; entropy when absent.
    pub rng_seed: Option<u64>,
    pub questions_per_quiz: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            language: Language::DEFAULT,
            chapter: None,
            rng_seed: None,
            questions_per_quiz: QUESTIONS_PER_QUIZ,
        }
    }
}

impl QuizConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Defaults overridden by `MATH_DRILL_LANG`, `MATH_DRILL_SEED`,
    /// `MATH_DRILL_CHAPTER` and `MATH_DRILL_QUESTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = lookup("MATH_DRILL_LANG") {
            self.language = v.parse()?;
        }
        if let Some(v) = lookup("MATH_DRILL_SEED") {
            self.rng_seed = Some(parse_env("MATH_DRILL_SEED", v)?);
        }
        if let Some(v) = lookup("MATH_DRILL_CHAPTER") {
            let n: u8 = parse_env("MATH_DRILL_CHAPTER", v)?;
            self.chapter = Some(Chapter::try_from(n)?);
        }
        if let Some(v) = lookup("MATH_DRILL_QUESTIONS") {
            self.questions_per_quiz = parse_env("MATH_DRILL_QUESTIONS", v)?;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.questions_per_quiz == 0 {
            return Err(ConfigError::EmptyQuiz);
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_)     => Err(ConfigError::InvalidEnv { var, value }),
    }
}
