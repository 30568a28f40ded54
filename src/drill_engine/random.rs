//! Randomization utilities shared by every topic generator.
//!
//! All functions take the caller's RNG so a seeded [`StdRng`](rand::rngs::StdRng)
//! reproduces the exact same question.

use std::collections::HashSet;

use log::trace;
use rand::Rng;

/// Number of options on every multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Uniform integer in `[min, max]`; panics if `min > max`.
pub fn random_int<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    assert!(min <= max, "random_int: empty range {min}..={max}");
    rng.gen_range(min..=max)
}

/// Return a shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<R: Rng, T: Clone>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    // Fisher-Yates
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Uniformly chosen element; panics on an empty slice.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "pick: empty slice");
    &items[rng.gen_range(0..items.len())]
}

/// Choose a value from `(value, weight)` pairs with probability proportional
/// to its weight. Panics if the total weight is zero.
pub fn weighted_pick<R: Rng, T: Copy>(rng: &mut R, table: &[(T, u32)]) -> T {
    let total: u32 = table.iter().map(|&(_, w)| w).sum();
    assert!(total > 0, "weighted_pick: table has no weight");
    let mut roll = rng.gen_range(0..total);
    for &(value, weight) in table {
        if roll < weight {
            return value;
        }
        roll -= weight;
    }
    unreachable!("roll is always below the total weight")
}

/// Exactly four distinct numeric options, one of which is `correct`.
///
/// `preferred` distractors are taken in order; non-positive values, the
/// correct answer itself and repeats are skipped. Any remaining slots are
/// filled with `correct ± 1..=10`. The result is shuffled.
pub fn build_distinct_options<R: Rng>(rng: &mut R, correct: u32, preferred: &[i64]) -> Vec<u32> {
    let mut options = vec![correct];

    for &wrong in preferred {
        if options.len() == OPTION_COUNT {
            break;
        }
        if wrong <= 0 || wrong > u32::MAX as i64 {
            continue;
        }
        let wrong = wrong as u32;
        if !options.contains(&wrong) {
            options.push(wrong);
        }
    }

    if options.len() < OPTION_COUNT {
        trace!("synthesizing {} distractor(s) around {correct}", OPTION_COUNT - options.len());
    }
    while options.len() < OPTION_COUNT {
        let offset = random_int(rng, 1, 10) as i64;
        let wrong = if rng.gen_bool(0.5) {
            correct as i64 - offset
        } else {
            correct as i64 + offset
        };
        if wrong > 0 && !options.contains(&(wrong as u32)) {
            options.push(wrong as u32);
        }
    }

    shuffle(rng, &options)
}

/// Exactly four distinct text options, one of which is `correct`.
///
/// Candidates are deduplicated by exact text in order. Callers must provide
/// at least three candidates that differ from the answer and each other;
/// a short set panics.
pub fn distinct_text_options<R: Rng>(rng: &mut R, correct: String, candidates: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::from([correct.clone()]);
    let mut options = vec![correct];

    for candidate in candidates {
        if options.len() == OPTION_COUNT {
            break;
        }
        if seen.insert(candidate.clone()) {
            options.push(candidate);
        }
    }
    assert_eq!(options.len(), OPTION_COUNT, "not enough distinct text distractors");

    shuffle(rng, &options)
}
