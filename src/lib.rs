//! # math_drill_gen
//!
//! An offline, deterministic maths drill generator for young learners.
//!
//! This library generates randomised practice questions across 7 topics
//! (counting, number sense, 3D shapes, addition and subtraction, times
//! tables, money, and column calculations). Each question comes with either
//! four distinct options or a free-input box, a hint, a decorative glyph, and
//! text in English or Vietnamese.
//!
//! ## How it works
//!
//! 1. Create a [`QuestionRequest`] with a topic, difficulty, optional chapter,
//!    language and RNG seed.
//! 2. Call [`generate_question`]; the engine picks a question shape for the
//!    topic, draws operands from the tier's ranges, builds a distinct option
//!    set around the answer, and fills the localized templates.
//! 3. The returned [`Question`] is plain data, ready to display in any UI and
//!    to check answers with [`Question::is_correct`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   question every time, useful for tests and progress tracking.
//! - **Tiers**: easy, medium and hard widen operand ranges; hard drops the
//!   options on most shapes so the answer has to be typed.
//! - **Kinds**: each question carries a `kind` (e.g. `"column_addition"`)
//!   that identifies its shape, stable across seeds.
//! - **Quizzes**: [`QuizSession`] runs ten questions from easy to hard and
//!   scores them; [`Player`] tracks the rank ladder.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{
//!     generate_question, Chapter, Difficulty, Language, QuestionRequest, Topic,
//! };
//!
//! // Minimal: only the topic is required (defaults: easy, English, entropy):
//! let q = generate_question(QuestionRequest::new(Topic::Counting));
//! println!("Q: {}", q.prompt);
//!
//! // Full control:
//! let q = generate_question(QuestionRequest {
//!     topic: Topic::Calculations,
//!     difficulty: Difficulty::Medium,
//!     chapter: Some(Chapter::ColumnMethods),
//!     language: Language::Vi,
//!     rng_seed: Some(42),
//! });
//!
//! println!("{}: {}", q.id, q.display_text());
//! if let Some(choices) = &q.choices {
//!     for c in choices {
//!         let mark = if *c == q.correct_answer { "+" } else { " " };
//!         println!("[{mark}] {c}");
//!     }
//! }
//! assert!(q.is_correct(&q.correct_answer.to_string()));
//! ```

pub mod config;
pub mod drill_engine;
pub mod error;

// Convenience re-exports so callers can use `math_drill_gen::generate_question`
// directly without reaching into `drill_engine::`.
pub use config::{QuizConfig, QUESTIONS_PER_QUIZ};
pub use drill_engine::{
    generate_question, generate_with_rng, translate, Answer, Chapter, ColumnLayout,
    ColumnOperator, Difficulty, Feedback, InteractionMode, Language, Player, Question,
    QuestionRequest, QuizSession, QuizSummary, Rank, Topic, Verdict,
};
pub use error::{ConfigError, ParseError, QuizError};
