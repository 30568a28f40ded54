//! Core drill engine: question generation, localization and the quiz flow.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: topics, tiers, chapters, languages, questions, answers |
//! | `random`    | Bounded ints, Fisher-Yates shuffle, weighted picks, distinct option sets |
//! | `i18n`      | English / Vietnamese text table with fallback |
//! | `helpers`   | Shared builder functions that eliminate boilerplate across topics |
//! | `generator` | Entry points `generate_question()` / `generate_with_rng()` |
//! | `topics`    | 7 topic generators |
//! | `quiz`      | Quiz session, verdicts, player ranks |

pub mod generator;
pub mod helpers;
pub mod i18n;
pub mod models;
pub mod quiz;
pub mod random;
pub mod topics;

// Re-export the public API surface so callers can use
// `drill_engine::generate_question` without reaching into sub-modules.
pub use generator::{generate_question, generate_with_rng};
pub use i18n::translate;
pub use models::{
    Answer, Chapter, ColumnLayout, ColumnOperator, Difficulty, InteractionMode,
    Language, Question, QuestionRequest, Topic,
};
pub use quiz::{difficulty_for_step, Feedback, Player, QuizSession, QuizSummary, Rank, Verdict};
