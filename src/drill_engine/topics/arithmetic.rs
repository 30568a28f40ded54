use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, random_int},
};

/// Story contexts: (noun key in `items`, emoji, gain verb, loss verb).
/// Verbs are keys in `arithmetic`.
const CONTEXTS: &[(&str, &str, &str, &str)] = &[
    ("apples",   "🍎", "picked",    "ate"),
    ("stars",    "⭐", "collected", "gave_away"),
    ("flowers",  "🌸", "found",     "wilted"),
    ("cupcakes", "🧁", "baked",     "shared"),
    ("gems",     "💎", "found",     "lost"),
    ("balloons", "🎈", "got",       "popped"),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    if rng.gen_bool(0.5) {
        addition(rng, difficulty, lang)
    } else {
        subtraction(rng, difficulty, lang)
    }
}

/// Operands for `a + b`; the hard tier stays below 100.
fn addition_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy => (random_int(rng, 2, 9), random_int(rng, 2, 9)),
        Difficulty::Medium => (random_int(rng, 10, 50), random_int(rng, 3, 9)),
        Difficulty::Hard => {
            let a = random_int(rng, 20, 60);
            (a, random_int(rng, 10, 99 - a))
        }
    }
}

/// Operands for `a - b` with `b < a`.
fn subtraction_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (random_int(rng, 10, 15), random_int(rng, 1, 5)),
        Difficulty::Medium => (random_int(rng, 20, 50), random_int(rng, 5, 15)),
        Difficulty::Hard   => (random_int(rng, 50, 99), random_int(rng, 10, 30)),
    }
}

fn addition<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let &(items_key, emoji, action, _) = pick(rng, CONTEXTS);
    let (a, b) = addition_operands(rng, difficulty);
    let answer = a + b;
    let word_problem = rng.gen_bool(0.5);

    let prompt = if word_problem {
        let items = t(lang, "items", items_key);
        let action = t(lang, "arithmetic", action);
        text(lang, "arithmetic", "add_word", &[
            ("a", &a), ("items", &items), ("emoji", &emoji), ("action", &action), ("b", &b),
        ])
    } else {
        text(lang, "arithmetic", "add_bare", &[("a", &a), ("b", &b)])
    };
    let n = answer as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[n + 1, n - 1, n + 10]));
    let hint = text(lang, "arithmetic", "hint_add", &[("a", &a), ("b", &b)]);
    let glyph = if word_problem { emoji } else { "➕" };

    Draft::new("addition", prompt, choices, Answer::Number(answer), hint, glyph)
}

fn subtraction<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let &(items_key, emoji, _, remove) = pick(rng, CONTEXTS);
    let (a, b) = subtraction_operands(rng, difficulty);
    let answer = a - b;
    let word_problem = rng.gen_bool(0.5);

    let prompt = if word_problem {
        let items = t(lang, "items", items_key);
        let remove = t(lang, "arithmetic", remove);
        text(lang, "arithmetic", "sub_word", &[
            ("a", &a), ("items", &items), ("emoji", &emoji), ("remove", &remove), ("b", &b),
        ])
    } else {
        text(lang, "arithmetic", "sub_bare", &[("a", &a), ("b", &b)])
    };
    let n = answer as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[n + 1, n - 1, a as i64]));
    let hint = text(lang, "arithmetic", "hint_sub", &[("a", &a), ("b", &b)]);
    let glyph = if word_problem { emoji } else { "➖" };

    Draft::new("subtraction", prompt, choices, Answer::Number(answer), hint, glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_addition_uses_single_digits() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..500 {
            let (a, b) = addition_operands(&mut rng, Difficulty::Easy);
            assert!((2..=9).contains(&a) && (2..=9).contains(&b), "{a} + {b}");
        }
    }

    #[test]
    fn hard_addition_stays_below_one_hundred() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = addition_operands(&mut rng, Difficulty::Hard);
            assert!(b >= 10);
            assert!(a + b < 100, "{a} + {b}");
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(43);
        for diff in Difficulty::ALL {
            for _ in 0..300 {
                let (a, b) = subtraction_operands(&mut rng, diff);
                assert!(b < a);
            }
        }
    }

    #[test]
    fn bare_equations_use_operator_glyphs() {
        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = generate(&mut rng, Difficulty::Medium, Language::En);
            if d.prompt.ends_with("= ?") {
                assert!(d.glyph == "➕" || d.glyph == "➖", "{}", d.glyph);
            } else {
                assert!(CONTEXTS.iter().any(|c| c.1 == d.glyph), "{}", d.glyph);
            }
        }
    }

    #[test]
    fn hard_arithmetic_is_free_input() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..20 {
            assert!(generate(&mut rng, Difficulty::Hard, Language::En).choices.is_none());
        }
    }
}
