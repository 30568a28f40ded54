//! Topic generators, one module per topic.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     difficulty: Difficulty,
//!     lang: Language,
//! ) -> Draft
//! ```
//!
//! `calculations::generate` additionally takes an `Option<Chapter>`.
//! The generator dispatches to these via `generator.rs`.

/// CT: count on, count back, skip count
pub mod counting;
/// NU: place value, expanded form, number words
pub mod numbers;
/// SH: identify, real-world objects, properties
pub mod shapes;
/// AR: addition and subtraction within 100
pub mod arithmetic;
/// MD: times tables 1/2/5/10, equal groups, division
pub mod multiply;
/// MO: coins, reading prices, change
pub mod money;
/// CA: column methods (chapter 1), number relationships (chapter 2)
pub mod calculations;
