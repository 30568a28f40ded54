use rand::Rng;

use crate::drill_engine::{
    helpers::{dollar_choices, numeric_choices, text, text_choices, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, random_int, weighted_pick},
};

#[derive(Debug, Clone, Copy)]
struct Coin {
    /// Singular key in `money`.
    name: &'static str,
    plural: &'static str,
    cents: u32,
}

const COINS: &[Coin] = &[
    Coin { name: "penny",   plural: "pennies",  cents: 1 },
    Coin { name: "nickel",  plural: "nickels",  cents: 5 },
    Coin { name: "dime",    plural: "dimes",    cents: 10 },
    Coin { name: "quarter", plural: "quarters", cents: 25 },
];

/// Shop items: (key in `money`, emoji).
const ITEMS: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("book", "📚"),
    ("teddy_bear", "🧸"),
    ("pizza_slice", "🍕"),
    ("balloon", "🎈"),
    ("candy_bar", "🍬"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Coins,
    PriceReading,
    Change,
}

const SHAPES: &[(Shape, u32)] = &[
    (Shape::Coins, 1),
    (Shape::PriceReading, 1),
    (Shape::Change, 1),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match weighted_pick(rng, SHAPES) {
        Shape::Coins if difficulty == Difficulty::Easy => coin_value(rng, lang),
        Shape::Coins        => coin_total(rng, difficulty, lang),
        Shape::PriceReading => price_reading(rng, difficulty, lang),
        Shape::Change       => change(rng, difficulty, lang),
    }
}

fn coin_value<R: Rng>(rng: &mut R, lang: Language) -> Draft {
    let coin = *pick(rng, COINS);
    let name = t(lang, "money", coin.name);

    let prompt = text(lang, "money", "coin_worth", &[("coin", &name)]);
    let others: Vec<i64> = COINS
        .iter()
        .filter(|c| c.name != coin.name)
        .map(|c| c.cents as i64)
        .collect();
    let choices = numeric_choices(rng, coin.cents, &others);
    let hint = text(lang, "money", "hint_coin", &[("coin", &name), ("value", &coin.cents)]);

    Draft::new("coin_value", prompt, Some(choices), Answer::Number(coin.cents), hint, "🪙")
}

fn coin_total<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let coin = *pick(rng, COINS);
    let count = if difficulty.is_hard() { random_int(rng, 3, 6) } else { random_int(rng, 2, 4) };
    let total = coin.cents * count;
    let coins = t(lang, "money", coin.plural);

    let prompt = text(lang, "money", "coins_total", &[("count", &count), ("coins", &coins)]);
    let (n, v) = (total as i64, coin.cents as i64);
    let choices = unless_hard(difficulty, || numeric_choices(rng, total, &[n + v, n - v, count as i64]));
    let hint = text(lang, "money", "hint_coins_total", &[("count", &count), ("value", &coin.cents)]);

    Draft::new("coin_total", prompt, choices, Answer::Number(total), hint, "🪙")
}

/// `(dollars, cents)` of a shop price.
fn price<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (random_int(rng, 1, 5), 0),
        Difficulty::Medium => (random_int(rng, 1, 9), *pick(rng, &[25, 50, 75])),
        Difficulty::Hard   => (random_int(rng, 5, 15), random_int(rng, 1, 99)),
    }
}

/// `$3` for whole dollars, `$3.05` otherwise.
fn format_price(dollars: u32, cents: u32) -> String {
    if cents == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

fn price_reading<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (dollars, cents) = price(rng, difficulty);
    let &(item_key, emoji) = pick(rng, ITEMS);
    let item = t(lang, "money", item_key);
    let spoken = |d: u32, c: u32| text(lang, "money", "dollars_and_cents", &[("dollars", &d), ("cents", &c)]);

    let prompt = text(lang, "money", "price_read", &[
        ("item", &item), ("emoji", &emoji), ("price", &format_price(dollars, cents)),
    ]);
    let answer = spoken(dollars, cents);
    // The swapped reading repeats the answer when dollars == cents; the last
    // candidate covers that case.
    let candidates = vec![
        spoken(dollars + 1, cents),
        spoken(cents, dollars),
        text(lang, "money", "dollars_only", &[("dollars", &dollars)]),
        spoken(dollars, cents + 1),
    ];
    let choices = text_choices(rng, &answer, candidates);
    let hint = t(lang, "money", "hint_before_dot").to_string();

    Draft::new("price_reading", prompt, Some(choices), Answer::Text(answer), hint, emoji)
}

/// `(paid, cost)` in whole dollars with `cost < paid`.
fn change_amounts<R: Rng>(rng: &mut R, difficulty: Difficulty) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy   => (5, random_int(rng, 1, 4)),
        Difficulty::Medium => (10, random_int(rng, 3, 8)),
        Difficulty::Hard   => (20, random_int(rng, 5, 18)),
    }
}

fn change<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let (paid, cost) = change_amounts(rng, difficulty);
    let owed = paid - cost;
    let &(item_key, emoji) = pick(rng, ITEMS);
    let item = t(lang, "money", item_key);

    let prompt = text(lang, "money", "change", &[
        ("item", &item), ("emoji", &emoji), ("cost", &cost), ("paid", &paid),
    ]);
    let n = owed as i64;
    let choices = unless_hard(difficulty, || dollar_choices(rng, owed, &[n + 1, n - 1, paid as i64]));
    let hint = text(lang, "money", "hint_change", &[("paid", &paid), ("cost", &cost)]);

    Draft::new("change", prompt, choices, Answer::Dollars(owed), hint, "💵")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_change_is_from_five_dollars() {
        let mut rng = StdRng::seed_from_u64(61);
        for _ in 0..200 {
            let (paid, cost) = change_amounts(&mut rng, Difficulty::Easy);
            assert_eq!(paid, 5);
            assert!((1..=4).contains(&cost));
        }
    }

    #[test]
    fn change_answer_is_paid_minus_cost() {
        let mut rng = StdRng::seed_from_u64(62);
        for diff in Difficulty::ALL {
            for _ in 0..50 {
                let d = change(&mut rng, diff, Language::En);
                let Answer::Dollars(owed) = d.correct else { panic!("dollar answer expected") };
                assert!(owed >= 1);
                assert!(d.correct.matches(&format!("${owed}")));
                assert!(d.correct.matches(&owed.to_string()));
            }
        }
    }

    #[test]
    fn prices_are_formatted_with_two_cent_digits() {
        assert_eq!(format_price(3, 0), "$3");
        assert_eq!(format_price(3, 5), "$3.05");
        assert_eq!(format_price(12, 75), "$12.75");
    }

    #[test]
    fn easy_coin_questions_ask_for_one_coin() {
        let mut rng = StdRng::seed_from_u64(63);
        for _ in 0..30 {
            let d = generate(&mut rng, Difficulty::Easy, Language::En);
            assert_ne!(d.kind, "coin_total");
        }
    }

    #[test]
    fn coin_value_options_are_the_four_coins() {
        let mut rng = StdRng::seed_from_u64(64);
        let d = coin_value(&mut rng, Language::En);
        let mut values: Vec<u32> = d
            .choices
            .expect("coin value is multiple choice")
            .iter()
            .map(|a| match a {
                Answer::Number(n) => *n,
                other => panic!("unexpected option {other:?}"),
            })
            .collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 5, 10, 25]);
    }

    #[test]
    fn price_reading_survives_matching_dollars_and_cents() {
        let mut rng = StdRng::seed_from_u64(65);
        for _ in 0..300 {
            let d = price_reading(&mut rng, Difficulty::Hard, Language::En);
            assert_eq!(d.choices.expect("price reading is multiple choice").len(), 4);
        }
    }
}
