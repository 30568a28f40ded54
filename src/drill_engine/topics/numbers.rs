use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, random_int, weighted_pick},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    PlaceValue,
    ExpandedForm,
    WordToNumber,
}

const SHAPES: &[(Shape, u32)] = &[
    (Shape::PlaceValue, 1),
    (Shape::ExpandedForm, 1),
    (Shape::WordToNumber, 1),
];

/// Numbers with a spelled-out form in the `numbers` table, per tier.
const EASY_WORDS: &[u32] = &[11, 12, 15, 20, 30];
const MEDIUM_WORDS: &[u32] = &[25, 37, 42, 58, 64];
const HARD_WORDS: &[u32] = &[73, 81, 99, 44, 66];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match weighted_pick(rng, SHAPES) {
        Shape::PlaceValue   => place_value(rng, difficulty, lang),
        Shape::ExpandedForm => expanded_form(rng, difficulty, lang),
        Shape::WordToNumber => word_to_number(rng, difficulty, lang),
    }
}

fn place_value_number<R: Rng>(rng: &mut R, difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy   => random_int(rng, 10, 50),
        Difficulty::Medium => random_int(rng, 50, 80),
        Difficulty::Hard   => random_int(rng, 80, 99),
    }
}

fn expanded_number<R: Rng>(rng: &mut R, difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy   => random_int(rng, 11, 39),
        Difficulty::Medium => random_int(rng, 40, 69),
        Difficulty::Hard   => random_int(rng, 70, 99),
    }
}

fn word_list(difficulty: Difficulty) -> &'static [u32] {
    match difficulty {
        Difficulty::Easy   => EASY_WORDS,
        Difficulty::Medium => MEDIUM_WORDS,
        Difficulty::Hard   => HARD_WORDS,
    }
}

fn place_value<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let num = place_value_number(rng, difficulty);
    let (tens, ones) = (num / 10, num % 10);
    let ask_tens = rng.gen_bool(0.5);
    let (answer, other) = if ask_tens { (tens, ones) } else { (ones, tens) };

    let key = if ask_tens { "how_many_tens" } else { "how_many_ones" };
    let prompt = text(lang, "numbers", key, &[("num", &num)]);
    let noise = random_int(rng, 0, 9) as i64;
    let choices = numeric_choices(rng, answer, &[other as i64, answer as i64 + 1, noise]);
    let hint = text(lang, "numbers", "hint_place", &[("num", &num), ("tens", &tens), ("ones", &ones)]);

    Draft::new("place_value", prompt, Some(choices), Answer::Number(answer), hint, "🔟")
}

fn expanded_form<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let num = expanded_number(rng, difficulty);
    let tens = num / 10 * 10;
    let ones = num % 10;

    if rng.gen_bool(0.5) {
        let prompt = text(lang, "numbers", "blank_tens", &[("num", &num), ("ones", &ones)]);
        let tn = tens as i64;
        let choices = numeric_choices(rng, tens, &[tn + 10, tn - 10, num as i64]);
        let hint = text(lang, "numbers", "hint_blank_tens", &[("ones", &ones), ("num", &num)]);
        Draft::new("expanded_tens", prompt, Some(choices), Answer::Number(tens), hint, "➕")
    } else {
        let prompt = text(lang, "numbers", "blank_ones", &[("num", &num), ("tens", &tens)]);
        let choices = unless_hard(difficulty, || {
            let noise = random_int(rng, 0, 9) as i64;
            numeric_choices(rng, ones, &[ones as i64 + 1, tens as i64, noise])
        });
        let hint = text(lang, "numbers", "hint_blank_ones", &[("num", &num), ("tens", &tens)]);
        Draft::new("expanded_ones", prompt, choices, Answer::Number(ones), hint, "➕")
    }
}

fn word_to_number<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let list = word_list(difficulty);
    let selected = *pick(rng, list);
    let key = format!("word_{selected}");
    let word = t(lang, "numbers", &key);

    let prompt = text(lang, "numbers", "write_as_number", &[("word", &word)]);
    let choices = unless_hard(difficulty, || {
        let others: Vec<i64> = list.iter().filter(|&&n| n != selected).map(|&n| n as i64).collect();
        numeric_choices(rng, selected, &others)
    });
    let hint = t(lang, "numbers", "hint_sound").to_string();

    Draft::new("word_to_number", prompt, choices, Answer::Number(selected), hint, "📝")
}
