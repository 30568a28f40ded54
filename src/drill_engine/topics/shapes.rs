use rand::Rng;

use crate::drill_engine::{
    helpers::{numeric_choices, text, text_choices, unless_hard, Draft},
    i18n::t,
    models::{Answer, Difficulty, Language},
    random::{pick, shuffle, weighted_pick},
};

// ---------------------------------------------------------------------------
// Solid catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Solid {
    /// Localization key in `shapes`.
    key: &'static str,
    faces: u32,
    vertices: u32,
    can_roll: bool,
    icon: &'static str,
    examples: &'static [&'static str],
}

const SOLIDS: &[Solid] = &[
    Solid { key: "cube",     faces: 6, vertices: 8, can_roll: false, icon: "🧊", examples: &["ex_dice", "ex_ice_cube", "ex_rubiks_cube"] },
    Solid { key: "cuboid",   faces: 6, vertices: 8, can_roll: false, icon: "📦", examples: &["ex_box", "ex_brick", "ex_book"] },
    Solid { key: "sphere",   faces: 0, vertices: 0, can_roll: true,  icon: "⚽", examples: &["ex_ball", "ex_globe", "ex_marble"] },
    Solid { key: "cylinder", faces: 3, vertices: 0, can_roll: true,  icon: "🥫", examples: &["ex_can", "ex_pipe", "ex_log"] },
    Solid { key: "pyramid",  faces: 5, vertices: 5, can_roll: false, icon: "🔺", examples: &["ex_egyptian_pyramid", "ex_tent"] },
];

impl Solid {
    fn name(&self, lang: Language) -> &'static str {
        t(lang, "shapes", self.key)
    }
}

/// English indefinite article for `word`; other languages do not use one.
fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _                                 => "a",
    }
}

/// Localized names of the solids other than `solid` that `clue` can tell
/// apart from it, in random order.
fn other_names<R: Rng>(
    rng: &mut R, solid: &Solid, lang: Language, clue: impl Fn(&Solid) -> bool,
) -> Vec<String> {
    let others: Vec<&Solid> = SOLIDS
        .iter()
        .filter(|s| s.key != solid.key && clue(*s))
        .collect();
    shuffle(rng, &others)
        .into_iter()
        .map(|s| s.name(lang).to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Question shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Identify,
    RealWorld,
    Properties,
}

const SHAPES: &[(Shape, u32)] = &[
    (Shape::Identify, 1),
    (Shape::RealWorld, 1),
    (Shape::Properties, 1),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match weighted_pick(rng, SHAPES) {
        Shape::Identify   => identify(rng, difficulty, lang),
        Shape::RealWorld  => real_world(rng, lang),
        Shape::Properties => properties(rng, difficulty, lang),
    }
}

fn identify<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let solid = *pick(rng, SOLIDS);
    let example = t(lang, "shapes", solid.examples[0]);

    let (prompt, hint) = match difficulty {
        Difficulty::Easy => (
            text(lang, "shapes", "what_is", &[("icon", &solid.icon)]),
            text(lang, "shapes", "hint_think", &[("article", &article(example)), ("example", &example)]),
        ),
        Difficulty::Medium => (
            text(lang, "shapes", "has_faces", &[("faces", &solid.faces)]),
            text(lang, "shapes", "hint_think", &[("article", &article(example)), ("example", &example)]),
        ),
        Difficulty::Hard if solid.can_roll => (
            t(lang, "shapes", "can_roll_no_corners").to_string(),
            t(lang, "shapes", "hint_curved").to_string(),
        ),
        Difficulty::Hard => (
            text(lang, "shapes", "has_vertices", &[("vertices", &solid.vertices)]),
            t(lang, "shapes", "hint_flat").to_string(),
        ),
    };

    // A clue shared by two solids would make both of them right.
    let name = solid.name(lang);
    let others = other_names(rng, &solid, lang, |s| match difficulty {
        Difficulty::Easy                   => true,
        Difficulty::Medium                 => s.faces != solid.faces,
        Difficulty::Hard if solid.can_roll => !s.can_roll,
        Difficulty::Hard                   => s.can_roll || s.vertices != solid.vertices,
    });
    let choices = text_choices(rng, name, others);

    Draft::new("identify", prompt, Some(choices), Answer::Text(name.to_string()), hint, solid.icon)
}

fn real_world<R: Rng>(rng: &mut R, lang: Language) -> Draft {
    let solid = *pick(rng, SOLIDS);
    let example = t(lang, "shapes", *pick(rng, solid.examples));
    let art = article(example);

    let prompt = text(lang, "shapes", "what_3d", &[("article", &art), ("example", &example)]);
    let hint = text(lang, "shapes", "hint_overall", &[("article", &art), ("example", &example)]);
    let name = solid.name(lang);
    let others = other_names(rng, &solid, lang, |_| true);
    let choices = text_choices(rng, name, others);

    Draft::new("real_world", prompt, Some(choices), Answer::Text(name.to_string()), hint, solid.icon)
}

fn properties<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    match difficulty {
        Difficulty::Easy => rolls(rng, lang),
        _                => faces(rng, difficulty, lang),
    }
}

/// One rolling solid among the three that cannot roll.
fn rolls<R: Rng>(rng: &mut R, lang: Language) -> Draft {
    let rollers: Vec<Solid> = SOLIDS.iter().copied().filter(|s| s.can_roll).collect();
    let solid = *pick(rng, &rollers);
    let name = solid.name(lang);
    let flat: Vec<String> = SOLIDS
        .iter()
        .filter(|s| !s.can_roll)
        .map(|s| s.name(lang).to_string())
        .collect();

    let prompt = t(lang, "shapes", "which_rolls").to_string();
    let yes = t(lang, "shapes", "yes");
    let hint = text(lang, "shapes", "hint_rolls", &[("shape", &name), ("yes", &yes)]);
    let choices = text_choices(rng, name, flat);

    Draft::new("rolls", prompt, Some(choices), Answer::Text(name.to_string()), hint, solid.icon)
}

fn faces<R: Rng>(rng: &mut R, difficulty: Difficulty, lang: Language) -> Draft {
    let solid = *pick(rng, SOLIDS);
    let name = solid.name(lang);

    let prompt = if difficulty.is_hard() {
        text(lang, "shapes", "how_many_faces", &[("shape", &name)])
    } else {
        text(lang, "shapes", "a_has_faces", &[("shape", &name), ("icon", &solid.icon)])
    };
    let f = solid.faces as i64;
    let choices = unless_hard(difficulty, || numeric_choices(rng, solid.faces, &[f + 1, f - 1, 4]));
    let hint = t(lang, "shapes", "hint_count").to_string();

    Draft::new("faces", prompt, choices, Answer::Number(solid.faces), hint, solid.icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn articles_follow_the_first_letter() {
        assert_eq!(article("ice cube"), "an");
        assert_eq!(article("Egyptian pyramid"), "an");
        assert_eq!(article("ball"), "a");
    }

    #[test]
    fn rolling_question_has_exactly_one_roller() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = rolls(&mut rng, Language::En);
            let choices = d.choices.expect("rolling question is multiple choice");
            let rollers = choices
                .iter()
                .filter(|c| matches!(c, Answer::Text(s) if s == "Sphere" || s == "Cylinder"))
                .count();
            assert_eq!(rollers, 1, "{choices:?}");
        }
    }

    #[test]
    fn shape_names_are_localized() {
        let mut rng = StdRng::seed_from_u64(31);
        let d = real_world(&mut rng, Language::Vi);
        let Answer::Text(name) = d.correct else { panic!("text answer expected") };
        assert!(name.starts_with("Hình"), "{name}");
    }

    #[test]
    fn hard_face_questions_are_free_input() {
        let mut rng = StdRng::seed_from_u64(32);
        assert!(faces(&mut rng, Difficulty::Hard, Language::En).choices.is_none());
        assert!(faces(&mut rng, Difficulty::Medium, Language::En).choices.is_some());
    }
}
