use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, random_int, weighted_pick},
};

/// Things to group or share: (key in `items`, emoji).
const ITEMS: &[(&str, &str)] = &[
    ("flowers", "🌸"),
    ("stars", "⭐"),
    ("candies", "🍬"),
    ("gems", "💎"),
    ("balloons", "🎈"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Multiply,
    EqualGroups,
    Divide,
}

const SHAPES: &[(Shape, u32)] = &[
    (Shape::Multiply, 1),
    (Shape::EqualGroups, 1),
    (Shape::Divide, 1),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match weighted_pick(rng, SHAPES) {
        Shape::Multiply    => multiply(rng, difficulty, lang),
        Shape::EqualGroups => equal_groups(rng, difficulty, lang),
        Shape::Divide      => divide(rng, difficulty, lang),
    }
}

/// Times tables drilled at each tier, drawn from 1, 2, 5 and 10.
fn tables(difficulty: Difficulty) -> &'static [u32] {
    match difficulty {
        Difficulty::Easy   => &[1, 2],
        Difficulty::Medium => &[2, 5],
        Difficulty::Hard   => &[5, 10],
    }
}

/// Size of one group, also the divisor when sharing.
fn group_size(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy   => 2,
        Difficulty::Medium => 5,
        Difficulty::Hard   => 10,
    }
}

fn multiply<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let table = *pick(rng, tables(difficulty));
    let multiplier = random_int(rng, 1, 10);
    let answer = table * multiplier;

    let prompt = text(lang, "multiply", "times_bare", &[("table", &table), ("multiplier", &multiplier)]);
    let (n, step) = (answer as i64, table as i64);
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[n + step, n - step, n + 1]));
    let hint = text(lang, "multiply", "hint_times", &[("table", &table), ("multiplier", &multiplier)]);

    Draft::new("multiply", prompt, choices, Answer::Number(answer), hint, "✖️")
}

fn equal_groups<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let groups = match difficulty {
        Difficulty::Easy   => random_int(rng, 2, 4),
        Difficulty::Medium => random_int(rng, 3, 6),
        Difficulty::Hard   => random_int(rng, 5, 10),
    };
    let per = group_size(difficulty);
    let answer = groups * per;
    let &(items_key, emoji) = pick(rng, ITEMS);
    let items = t(lang, "items", items_key);

    let prompt = text(lang, "multiply", "groups", &[
        ("groups", &groups), ("per", &per), ("emoji", &emoji), ("items", &items),
    ]);
    let (n, p) = (answer as i64, per as i64);
    let choices = numeric_choices(rng, answer, &[n + p, n - p, (groups + per) as i64]);
    let hint = text(lang, "multiply", "hint_groups", &[("groups", &groups), ("per", &per)]);

    Draft::new("equal_groups", prompt, Some(choices), Answer::Number(answer), hint, "🛍️")
}

fn divide<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let divisor = group_size(difficulty);
    let quotient = random_int(rng, 1, 10);
    let dividend = divisor * quotient;
    let word_problem = !difficulty.is_hard() && rng.gen_bool(0.5);

    let prompt = if word_problem {
        let &(items_key, emoji) = pick(rng, ITEMS);
        let items = t(lang, "items", items_key);
        text(lang, "multiply", "share", &[
            ("dividend", &dividend), ("emoji", &emoji), ("items", &items), ("divisor", &divisor),
        ])
    } else {
        text(lang, "multiply", "divide_bare", &[("dividend", &dividend), ("divisor", &divisor)])
    };
    let q = quotient as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, quotient, &[q + 1, q - 1, divisor as i64]));
    let hint = text(lang, "multiply", "hint_divide", &[("divisor", &divisor), ("dividend", &dividend)]);
    let glyph = if word_problem { "🤝" } else { "➗" };

    Draft::new("divide", prompt, choices, Answer::Number(quotient), hint, glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tables_step_up_with_difficulty() {
        assert_eq!(tables(Difficulty::Easy), &[1, 2]);
        assert_eq!(tables(Difficulty::Medium), &[2, 5]);
        assert_eq!(tables(Difficulty::Hard), &[5, 10]);
    }

    #[test]
    fn products_come_from_the_tier_tables() {
        let mut rng = StdRng::seed_from_u64(51);
        for diff in Difficulty::ALL {
            for _ in 0..100 {
                let d = multiply(&mut rng, diff, Language::En);
                let Answer::Number(n) = d.correct else { panic!("numeric answer expected") };
                assert!(tables(diff).iter().any(|t| n % t == 0 && n / t <= 10), "{diff}: {n}");
            }
        }
    }

    #[test]
    fn division_is_exact() {
        let mut rng = StdRng::seed_from_u64(52);
        for diff in Difficulty::ALL {
            for _ in 0..50 {
                let d = divide(&mut rng, diff, Language::En);
                let Answer::Number(q) = d.correct else { panic!("numeric answer expected") };
                assert!((1..=10).contains(&q));
                let dividend = q * group_size(diff);
                assert!(d.prompt.contains(&dividend.to_string()), "{}", d.prompt);
            }
        }
    }

    #[test]
    fn hard_division_is_a_bare_equation() {
        let mut rng = StdRng::seed_from_u64(53);
        for _ in 0..30 {
            let d = divide(&mut rng, Difficulty::Hard, Language::En);
            assert_eq!(d.glyph, "➗");
            assert!(d.choices.is_none());
        }
    }

    #[test]
    fn equal_groups_stay_multiple_choice_at_hard() {
        let mut rng = StdRng::seed_from_u64(54);
        assert!(equal_groups(&mut rng, Difficulty::Hard, Language::En).choices.is_some());
    }
}
