use log::debug;
use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, text_choices, unless_hard, Draft},
    i18n::t,
    models::{Answer, Chapter, ColumnLayout, ColumnOperator, Difficulty, Language},
    random::{pick, random_int, shuffle, weighted_pick},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    // Chapter 1
    ColumnAddition,
    ColumnSubtraction,
    ColumnExchange,
    TwoDigitExchange,
    // Chapter 2
    FactFamilyAddSub,
    InverseAddSub,
    MissingNumber,
    FactFamilyMultDiv,
    RepeatedAddition,
    Doubling,
    Halving,
    DoubleThenHalve,
}

const COLUMN_SHAPES: &[(Shape, u32)] = &[
    (Shape::ColumnAddition, 1),
    (Shape::ColumnSubtraction, 1),
    (Shape::ColumnExchange, 1),
    (Shape::TwoDigitExchange, 1),
];

const RELATIONSHIP_SHAPES: &[(Shape, u32)] = &[
    (Shape::FactFamilyAddSub, 1),
    (Shape::InverseAddSub, 1),
    (Shape::MissingNumber, 1),
    (Shape::FactFamilyMultDiv, 1),
    (Shape::RepeatedAddition, 1),
    (Shape::Doubling, 1),
    (Shape::Halving, 1),
    (Shape::DoubleThenHalve, 1),
];

fn shapes(chapter: Chapter) -> &'static [(Shape, u32)] {
    match chapter {
        Chapter::ColumnMethods => COLUMN_SHAPES,
        Chapter::Relationships => RELATIONSHIP_SHAPES,
    }
}

pub fn generate<R: Rng>(
    rng: &mut R, difficulty: Difficulty, chapter: Option<Chapter>, lang: Language,
) -> Draft {
    let chapter = chapter.unwrap_or_else(|| {
        let c = *pick(rng, &Chapter::ALL);
        debug!("no chapter requested, using {c}");
        c
    });

    match weighted_pick(rng, shapes(chapter)) {
        Shape::ColumnAddition    => column_addition(rng, difficulty, lang),
        Shape::ColumnSubtraction => column_subtraction(rng, difficulty, lang),
        Shape::ColumnExchange    => column_exchange(rng, difficulty, lang),
        Shape::TwoDigitExchange  => two_digit_exchange(rng, difficulty, lang),
        Shape::FactFamilyAddSub  => fact_family_add_sub(rng, difficulty, lang),
        Shape::InverseAddSub     => inverse_add_sub(rng, difficulty, lang),
        Shape::MissingNumber     => missing_number(rng, difficulty, lang),
        Shape::FactFamilyMultDiv => fact_family_mult_div(rng, difficulty, lang),
        Shape::RepeatedAddition  => repeated_addition(rng, difficulty, lang),
        Shape::Doubling          => doubling(rng, difficulty, lang),
        Shape::Halving           => halving(rng, difficulty, lang),
        Shape::DoubleThenHalve   => double_then_halve(rng, difficulty, lang),
    }
}

// ---------------------------------------------------------------------------
// Chapter 1: column methods
// ---------------------------------------------------------------------------

/// Two-digit number from its digits.
fn from_digits(tens: u32, ones: u32) -> u32 {
    tens * 10 + ones
}

/// Operands for a column sum below 100. Easy never carries, hard always does.
fn addition_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy => {
            let ones_a = random_int(rng, 1, 4);
            let a = from_digits(random_int(rng, 1, 4), ones_a);
            let b = from_digits(random_int(rng, 1, 4), random_int(rng, 1, 9 - ones_a));
            (a, b)
        }
        Difficulty::Medium => (random_int(rng, 20, 50), random_int(rng, 15, 40)),
        Difficulty::Hard => {
            let (tens_a, ones_a) = (random_int(rng, 3, 6), random_int(rng, 5, 9));
            let tens_b = random_int(rng, 2, 8 - tens_a);
            let ones_b = random_int(rng, 10 - ones_a, 9);
            (from_digits(tens_a, ones_a), from_digits(tens_b, ones_b))
        }
    }
}

/// Operands for `a − b` where no column needs a borrow.
fn plain_subtraction_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    let (tens_a, min_tens_b, min_ones_b) = match difficulty {
        Difficulty::Easy   => (random_int(rng, 3, 5), 1, 1),
        Difficulty::Medium => (random_int(rng, 5, 8), 2, 0),
        Difficulty::Hard   => (random_int(rng, 6, 9), 3, 0),
    };
    let ones_a = random_int(rng, 5, 9);
    let tens_b = random_int(rng, min_tens_b, tens_a - 1);
    let ones_b = random_int(rng, min_ones_b, ones_a);
    (from_digits(tens_a, ones_a), from_digits(tens_b, ones_b))
}

/// Operands for `a − b` where the ones column must borrow: `ones(a) < ones(b)`.
fn exchange_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    // (tens of a, ones of a, least tens of b, least gap between the ones)
    let (tens_a, ones_a, min_tens_b, gap) = match difficulty {
        Difficulty::Easy   => (random_int(rng, 3, 5), random_int(rng, 0, 4), 1, 1),
        Difficulty::Medium => (random_int(rng, 5, 7), random_int(rng, 0, 5), 2, 1),
        Difficulty::Hard   => (random_int(rng, 6, 9), random_int(rng, 0, 4), 3, 2),
    };
    let tens_b = random_int(rng, min_tens_b, tens_a - 2);
    let ones_b = random_int(rng, ones_a + gap, 9);
    (from_digits(tens_a, ones_a), from_digits(tens_b, ones_b))
}

/// Like [`exchange_operands`] with a wider spread between the ones digits.
fn two_digit_exchange_operands<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    let (tens_a, ones_a, min_tens_b, gap) = match difficulty {
        Difficulty::Easy   => (random_int(rng, 4, 6), random_int(rng, 1, 4), 1, 1),
        Difficulty::Medium => (random_int(rng, 5, 7), random_int(rng, 0, 4), 2, 2),
        Difficulty::Hard   => (random_int(rng, 7, 9), random_int(rng, 0, 3), 3, 3),
    };
    let tens_b = random_int(rng, min_tens_b, tens_a - 2);
    let ones_b = random_int(rng, ones_a + gap, 9);
    (from_digits(tens_a, ones_a), from_digits(tens_b, ones_b))
}

fn column_choices<R: Rng>(rng: &mut R, difficulty: Difficulty, answer: u32) -> Option<Vec<Answer>> {
    let n = answer as i64;
    unless_hard(difficulty, || numeric_choices(rng, answer, &[n + 1, n - 1, n + 10]))
}

fn column_addition<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = addition_operands(rng, difficulty);
    let answer = a + b;

    let prompt = t(lang, "calc", "column_add").to_string();
    let choices = column_choices(rng, difficulty, answer);
    let hint = text(lang, "calc", "hint_column_add", &[("a", &a), ("b", &b)]);

    Draft::new("column_addition", prompt, choices, Answer::Number(answer), hint, "📊")
        .with_column(ColumnLayout { top: a, bottom: b, operator: ColumnOperator::Plus })
}

fn column_subtraction<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = plain_subtraction_operands(rng, difficulty);
    let answer = a - b;

    let prompt = t(lang, "calc", "column_sub").to_string();
    let choices = column_choices(rng, difficulty, answer);
    let hint = text(lang, "calc", "hint_column_sub", &[("a", &a), ("b", &b)]);

    Draft::new("column_subtraction", prompt, choices, Answer::Number(answer), hint, "📊")
        .with_column(ColumnLayout { top: a, bottom: b, operator: ColumnOperator::Minus })
}

fn column_exchange<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = exchange_operands(rng, difficulty);
    let answer = a - b;

    let prompt = t(lang, "calc", "column_exchange").to_string();
    let choices = column_choices(rng, difficulty, answer);
    let hint = text(lang, "calc", "hint_exchange", &[("tens", &(a / 10)), ("ones", &(a % 10))]);

    Draft::new("column_subtraction_exchange", prompt, choices, Answer::Number(answer), hint, "🔄")
        .with_column(ColumnLayout { top: a, bottom: b, operator: ColumnOperator::Minus })
}

fn two_digit_exchange<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = two_digit_exchange_operands(rng, difficulty);
    let answer = a - b;

    let borrowed = a % 10 + 10;
    let tens_left = a / 10 - 1;
    let (b_tens, b_ones) = (b / 10, b % 10);

    let prompt = t(lang, "calc", "two_digit_exchange").to_string();
    let choices = column_choices(rng, difficulty, answer);
    let hint = text(lang, "calc", "hint_two_digit", &[
        ("borrowed", &borrowed), ("b_ones", &b_ones), ("ones_result", &(borrowed - b_ones)),
        ("tens_left", &tens_left), ("b_tens", &b_tens), ("tens_result", &(tens_left - b_tens)),
    ]);

    Draft::new("two_digit_subtraction_exchange", prompt, choices, Answer::Number(answer), hint, "🧮")
        .with_column(ColumnLayout { top: a, bottom: b, operator: ColumnOperator::Minus })
}

// ---------------------------------------------------------------------------
// Chapter 2: number relationships
// ---------------------------------------------------------------------------

/// Addends of a fact family `a + b = c`.
fn addends<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    let (lo, hi) = match difficulty {
        Difficulty::Easy   => (2, 9),
        Difficulty::Medium => (5, 20),
        Difficulty::Hard   => (10, 50),
    };
    (random_int(rng, lo, hi), random_int(rng, lo, hi))
}

/// Factors of a fact family `a × b = c`.
fn factors<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (*pick(rng, &[2, 5, 10]), random_int(rng, 2, 5)),
        Difficulty::Medium => (*pick(rng, &[2, 5, 10]), random_int(rng, 2, 10)),
        Difficulty::Hard   => (random_int(rng, 3, 9), random_int(rng, 3, 9)),
    }
}

/// `(value, count)` for `value + value + ...` written `count` times.
fn repeated_terms<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (2, random_int(rng, 2, 4)),
        Difficulty::Medium => (5, random_int(rng, 3, 5)),
        Difficulty::Hard   => (random_int(rng, 3, 10), random_int(rng, 4, 6)),
    }
}

/// Base number for doubling and halving.
fn base_number<R: Rng>(rng: &mut R, difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy   => random_int(rng, 1, 10),
        Difficulty::Medium => random_int(rng, 10, 25),
        Difficulty::Hard   => random_int(rng, 25, 50),
    }
}

/// Pick one true equation and three false ones built from the same numbers.
fn equation_choice<R: Rng>(rng: &mut R, right: &[String], wrong: &[String]) -> (String, Vec<Answer>) {
    let answer = pick(rng, right).clone();
    let wrong = shuffle(rng, wrong);
    let choices = text_choices(rng, &answer, wrong);
    (answer, choices)
}

fn fact_family_add_sub<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = addends(rng, difficulty);
    let c = a + b;

    let right = [
        format!("{a} + {b} = {c}"),
        format!("{b} + {a} = {c}"),
        format!("{c} − {a} = {b}"),
        format!("{c} − {b} = {a}"),
    ];
    let wrong = [
        format!("{a} − {b} = {c}"),
        format!("{c} + {a} = {b}"),
        format!("{b} − {c} = {a}"),
        format!("{a} + {c} = {b}"),
    ];
    let (answer, choices) = equation_choice(rng, &right, &wrong);
    let prompt = text(lang, "calc", "fact_family_addsub_q", &[("a", &a), ("b", &b), ("c", &c)]);
    let hint = t(lang, "calc", "hint_fact_family_addsub").to_string();

    Draft::new("fact_family_add_sub", prompt, Some(choices), Answer::Text(answer), hint, "👨‍👩‍👧")
}

fn inverse_add_sub<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = addends(rng, difficulty);
    let c = a + b;
    let fact = format!("{a} + {b} = {c}");

    let right = [format!("{c} − {b} = {a}"), format!("{c} − {a} = {b}")];
    let wrong = [
        format!("{a} − {b} = {c}"),
        format!("{c} + {b} = {a}"),
        format!("{b} − {a} = {c}"),
        format!("{c} − {a} = {c}"),
    ];
    let (answer, choices) = equation_choice(rng, &right, &wrong);
    let prompt = text(lang, "calc", "inverse_q", &[("fact", &fact)]);
    let hint = t(lang, "calc", "hint_inverse_addsub").to_string();

    Draft::new("inverse_add_sub", prompt, Some(choices), Answer::Text(answer), hint, "🔄")
}

fn missing_number<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (equation, inverse, answer, whole) = if rng.gen_bool(0.5) {
        let (a, b) = addends(rng, difficulty);
        let c = a + b;
        (format!("{a} + ? = {c}"), format!("{c} − {a} = ?"), b, c)
    } else {
        let (a, b) = factors(rng, difficulty);
        let c = a * b;
        (format!("{a} × ? = {c}"), format!("{c} ÷ {a} = ?"), b, c)
    };

    let prompt = text(lang, "calc", "find_missing", &[("equation", &equation)]);
    let n = answer as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[n + 1, n - 1, whole as i64]));
    let hint = text(lang, "calc", "hint_use_inverse", &[("inverse", &inverse)]);

    Draft::new("missing_number", prompt, choices, Answer::Number(answer), hint, "❓")
}

fn fact_family_mult_div<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (a, b) = factors(rng, difficulty);
    let c = a * b;

    let right = [
        format!("{a} × {b} = {c}"),
        format!("{b} × {a} = {c}"),
        format!("{c} ÷ {a} = {b}"),
        format!("{c} ÷ {b} = {a}"),
    ];
    let wrong = [
        format!("{a} ÷ {b} = {c}"),
        format!("{c} × {a} = {b}"),
        format!("{b} ÷ {c} = {a}"),
        format!("{a} × {c} = {b}"),
    ];
    let (answer, choices) = equation_choice(rng, &right, &wrong);
    let prompt = text(lang, "calc", "fact_family_multdiv_q", &[("a", &a), ("b", &b), ("c", &c)]);
    let hint = t(lang, "calc", "hint_fact_family_multdiv").to_string();

    Draft::new("fact_family_mult_div", prompt, Some(choices), Answer::Text(answer), hint, "👨‍👩‍👧")
}

fn repeated_addition<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (value, count) = repeated_terms(rng, difficulty);
    let sum = vec![value.to_string(); count as usize].join(" + ");

    let answer = format!("{count} × {value}");
    // Each candidate changes one factor of the answer, so none can match it
    // even when value == count. count is at least 2.
    let candidates = vec![
        format!("{} × {value}", count + 1),
        format!("{count} × {}", value + 1),
        format!("{} × {value}", count - 1),
        format!("{} × {value}", count + 2),
    ];
    let choices = text_choices(rng, &answer, candidates);
    let prompt = text(lang, "calc", "repeated_addition", &[("sum", &sum)]);
    let hint = text(lang, "calc", "hint_repeated", &[("value", &value), ("count", &count)]);

    Draft::new("repeated_addition", prompt, Some(choices), Answer::Text(answer), hint, "🔁")
}

fn doubling<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let n = base_number(rng, difficulty);
    let answer = n * 2;

    let prompt = text(lang, "calc", "double_of", &[("n", &n)]);
    let a = answer as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[a + 2, a - 2, n as i64]));
    let hint = text(lang, "calc", "hint_double", &[("n", &n)]);

    Draft::new("doubling", prompt, choices, Answer::Number(answer), hint, "✌️")
}

fn halving<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let half = base_number(rng, difficulty);
    let n = half * 2;

    let prompt = text(lang, "calc", "half_of", &[("n", &n)]);
    let h = half as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, half, &[h + 1, h - 1, n as i64]));
    let hint = text(lang, "calc", "hint_half", &[("n", &n)]);

    Draft::new("halving", prompt, choices, Answer::Number(half), hint, "✂️")
}

fn double_then_halve<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let n = base_number(rng, difficulty);

    let prompt = text(lang, "calc", "double_then_half", &[("n", &n)]);
    let a = n as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, n, &[a * 2, a + 1, a - 1]));
    let hint = t(lang, "calc", "hint_double_halve_inverse").to_string();

    Draft::new("double_then_halve", prompt, choices, Answer::Number(n), hint, "🔄")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CHAPTER_ONE_KINDS: &[&str] = &[
        "column_addition",
        "column_subtraction",
        "column_subtraction_exchange",
        "two_digit_subtraction_exchange",
    ];

    #[test]
    fn exchange_always_needs_a_borrow() {
        let mut rng = StdRng::seed_from_u64(71);
        for diff in Difficulty::ALL {
            for _ in 0..500 {
                for (a, b) in [exchange_operands(&mut rng, diff), two_digit_exchange_operands(&mut rng, diff)] {
                    assert!(a % 10 < b % 10, "{diff}: {a} − {b}");
                    assert!(b < a, "{diff}: {a} − {b}");
                    assert!(b >= 10, "{diff}: {b} is not two digits");
                }
            }
        }
    }

    #[test]
    fn plain_subtraction_never_borrows() {
        let mut rng = StdRng::seed_from_u64(72);
        for diff in Difficulty::ALL {
            for _ in 0..500 {
                let (a, b) = plain_subtraction_operands(&mut rng, diff);
                assert!(a % 10 >= b % 10 && b < a, "{diff}: {a} − {b}");
            }
        }
    }

    #[test]
    fn column_addition_carries_only_when_expected() {
        let mut rng = StdRng::seed_from_u64(73);
        for _ in 0..500 {
            let (a, b) = addition_operands(&mut rng, Difficulty::Easy);
            assert!(a % 10 + b % 10 < 10, "easy: {a} + {b}");

            let (a, b) = addition_operands(&mut rng, Difficulty::Hard);
            assert!(a % 10 + b % 10 >= 10, "hard: {a} + {b}");
            assert!(a + b < 100, "hard: {a} + {b}");

            let (a, b) = addition_operands(&mut rng, Difficulty::Medium);
            assert!(a + b < 100, "medium: {a} + {b}");
        }
    }

    #[test]
    fn chapter_selects_the_question_family() {
        let mut rng = StdRng::seed_from_u64(74);
        for _ in 0..50 {
            let d = generate(&mut rng, Difficulty::Medium, Some(Chapter::ColumnMethods), Language::En);
            assert!(CHAPTER_ONE_KINDS.contains(&d.kind), "{}", d.kind);
            assert!(d.column.is_some());

            let d = generate(&mut rng, Difficulty::Medium, Some(Chapter::Relationships), Language::En);
            assert!(!CHAPTER_ONE_KINDS.contains(&d.kind), "{}", d.kind);
            assert!(d.column.is_none());
        }
    }

    #[test]
    fn column_layout_matches_the_hint() {
        let mut rng = StdRng::seed_from_u64(75);
        let d = column_subtraction(&mut rng, Difficulty::Easy, Language::En);
        let col = d.column.expect("column questions carry a layout");
        assert_eq!(col.operator, ColumnOperator::Minus);
        assert!(d.hint.contains(&format!("{} − {}", col.top, col.bottom)), "{}", d.hint);
        assert_eq!(d.correct, Answer::Number(col.top - col.bottom));
    }

    #[test]
    fn two_digit_hint_walks_through_the_borrow() {
        let mut rng = StdRng::seed_from_u64(76);
        let d = two_digit_exchange(&mut rng, Difficulty::Medium, Language::En);
        let col = d.column.expect("column questions carry a layout");
        let borrowed = col.top % 10 + 10;
        assert!(d.hint.starts_with(&format!("Step 1: Borrow → {borrowed} − {}", col.bottom % 10)), "{}", d.hint);
    }

    #[test]
    fn fact_family_answers_are_true_equations() {
        let mut rng = StdRng::seed_from_u64(77);
        for diff in Difficulty::ALL {
            for _ in 0..50 {
                for d in [
                    fact_family_add_sub(&mut rng, diff, Language::En),
                    inverse_add_sub(&mut rng, diff, Language::En),
                    fact_family_mult_div(&mut rng, diff, Language::En),
                ] {
                    let Answer::Text(eq) = &d.correct else { panic!("text answer expected") };
                    assert!(holds(eq), "{eq}");
                    for choice in d.choices.as_ref().expect("equations are multiple choice") {
                        if choice != &d.correct {
                            let Answer::Text(other) = choice else { panic!("text option expected") };
                            assert!(!holds(other), "distractor {other} is true");
                        }
                    }
                }
            }
        }
    }

    /// Evaluate `x op y = z`.
    fn holds(eq: &str) -> bool {
        let parts: Vec<&str> = eq.split_whitespace().collect();
        let [x, op, y, "=", z] = parts.as_slice() else { panic!("malformed equation {eq}") };
        let (x, y, z): (u32, u32, u32) = (x.parse().unwrap(), y.parse().unwrap(), z.parse().unwrap());
        match *op {
            "+" => x + y == z,
            "−" => x.checked_sub(y) == Some(z),
            "×" => x * y == z,
            "÷" => y != 0 && x % y == 0 && x / y == z,
            other => panic!("unknown operator {other}"),
        }
    }

    #[test]
    fn repeated_addition_has_four_options_even_for_squares() {
        let mut rng = StdRng::seed_from_u64(78);
        for diff in Difficulty::ALL {
            for _ in 0..300 {
                let d = repeated_addition(&mut rng, diff, Language::En);
                let choices = d.choices.expect("repeated addition is multiple choice");
                let unique: std::collections::HashSet<_> = choices.iter().collect();
                assert_eq!(unique.len(), 4, "{}: {:?}", d.prompt, choices);
                assert!(choices.contains(&d.correct));
            }
        }
    }

    #[test]
    fn repeated_addition_square_keeps_its_own_sum_out_of_the_options() {
        // Easy always adds 2s, so count 2 gives the square 2 + 2.
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = repeated_addition(&mut rng, Difficulty::Easy, Language::En);
            let choices = d.choices.expect("repeated addition is multiple choice");
            assert_eq!(choices.len(), 4);
            assert!(choices.iter().all(|c| !c.to_string().contains('+')), "{choices:?}");
        }
    }

    #[test]
    fn halving_always_splits_evenly() {
        let mut rng = StdRng::seed_from_u64(79);
        for diff in Difficulty::ALL {
            let d = halving(&mut rng, diff, Language::En);
            let Answer::Number(half) = d.correct else { panic!("numeric answer expected") };
            assert!(d.prompt.contains(&(half * 2).to_string()));
        }
    }
}
