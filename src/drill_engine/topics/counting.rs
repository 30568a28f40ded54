use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, random_int, weighted_pick},
};

/// Things to count: (localization key in `items`, emoji).
const CONTEXTS: &[(&str, &str)] = &[
    ("apples", "🍎"),
    ("stars", "⭐"),
    ("flowers", "🌸"),
    ("butterflies", "🦋"),
    ("balloons", "🎈"),
    ("candies", "🍬"),
    ("gems", "💎"),
    ("bunnies", "🐰"),
];

const COUNT_BACK_TEMPLATES: &[&str] = &["count_back_fly", "count_back_give", "count_back_vanish"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    CountOn,
    CountBack,
    SkipCount,
}

const SHAPES: &[(Shape, u32)] = &[
    (Shape::CountOn, 1),
    (Shape::CountBack, 1),
    (Shape::SkipCount, 1),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match weighted_pick(rng, SHAPES) {
        Shape::CountOn   => count_on(rng, difficulty, lang),
        Shape::CountBack => count_back(rng, difficulty, lang),
        Shape::SkipCount => skip_count(rng, difficulty, lang),
    }
}

/// `(start, step)` for counting forward.
fn count_on_range<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (random_int(rng, 5, 15), random_int(rng, 1, 3)),
        Difficulty::Medium => (random_int(rng, 20, 50), random_int(rng, 3, 7)),
        Difficulty::Hard   => (random_int(rng, 50, 90), random_int(rng, 5, 10)),
    }
}

/// `(start, step)` for counting back; `step < start` at every tier.
fn count_back_range<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (random_int(rng, 10, 20), random_int(rng, 1, 4)),
        Difficulty::Medium => (random_int(rng, 30, 60), random_int(rng, 4, 10)),
        Difficulty::Hard   => (random_int(rng, 60, 99), random_int(rng, 8, 15)),
    }
}

fn skip_size(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy   => 2,
        Difficulty::Medium => 5,
        Difficulty::Hard   => 10,
    }
}

fn count_on<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let &(items_key, emoji) = pick(rng, CONTEXTS);
    let (start, step) = count_on_range(rng, difficulty);
    let answer = start + step;
    let items = t(lang, "items", items_key);

    let prompt = text(lang, "counting", "count_on", &[
        ("start", &start), ("items", &items), ("emoji", &emoji), ("step", &step),
    ]);
    let a = answer as i64;
    let choices = numeric_choices(rng, answer, &[a + 1, a - 1, start as i64]);
    let hint = text(lang, "counting", "hint_count_on", &[("start", &start), ("step", &step)]);

    Draft::new("count_on", prompt, Some(choices), Answer::Number(answer), hint, emoji)
}

fn count_back<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let &(items_key, emoji) = pick(rng, CONTEXTS);
    let (start, step) = count_back_range(rng, difficulty);
    let answer = start - step;
    let items = t(lang, "items", items_key);
    let template = *pick(rng, COUNT_BACK_TEMPLATES);

    let prompt = text(lang, "counting", template, &[
        ("start", &start), ("items", &items), ("emoji", &emoji), ("step", &step),
    ]);
    let a = answer as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, answer, &[a + 1, a - 1, start as i64]));
    let hint = text(lang, "counting", "hint_count_back", &[("start", &start), ("step", &step)]);

    Draft::new("count_back", prompt, choices, Answer::Number(answer), hint, "➖")
}

fn skip_count<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let skip = skip_size(difficulty);
    let start = skip * random_int(rng, 1, 5);
    let sequence = [start, start + skip, start + skip * 2]
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let answer = start + skip * 3;

    let prompt = text(lang, "counting", "skip_count", &[("skip", &skip), ("sequence", &sequence)]);
    let (a, s) = (answer as i64, skip as i64);
    let choices = numeric_choices(rng, answer, &[a + s, a - s, a + 1]);
    let hint = text(lang, "counting", "hint_skip", &[("skip", &skip)]);

    Draft::new("skip_count", prompt, Some(choices), Answer::Number(answer), hint, "🔢")
}
