//! Shared builder functions that eliminate boilerplate across topic generators.
//!
//! Every topic generator assembles the same pieces: fill a localized
//! template, build a distinct option set, decide between multiple choice and
//! free input, and wrap the result in a [`Question`]. These helpers centralise
//! that work so topic files focus on the maths only.

use std::fmt::Display;

use rand::Rng;

use crate::drill_engine::{
    i18n::t,
    models::{Answer, ColumnLayout, Difficulty, Language, Question, Topic},
    random::{build_distinct_options, distinct_text_options},
};

/// A question as produced by a topic module, before the dispatcher stamps
/// it with an id, topic and difficulty.
#[derive(Debug, Clone)]
pub struct Draft {
    pub kind: &'static str,
    pub prompt: String,
    pub column: Option<ColumnLayout>,
    pub choices: Option<Vec<Answer>>,
    pub correct: Answer,
    pub hint: String,
    pub glyph: &'static str,
}

impl Draft {
    pub fn new(
        kind: &'static str, prompt: String, choices: Option<Vec<Answer>>,
        correct: Answer, hint: String, glyph: &'static str,
    ) -> Self {
        Draft { kind, prompt, column: None, choices, correct, hint, glyph }
    }

    pub fn with_column(mut self, column: ColumnLayout) -> Self {
        self.column = Some(column);
        self
    }
}

/// Replace every `{name}` in `template` with its value.
pub fn fill(template: &str, vars: &[(&str, &dyn Display)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), &value.to_string());
    }
    out
}

/// Look up a template and fill it in one go.
pub fn text(lang: Language, module: &str, key: &str, vars: &[(&str, &dyn Display)]) -> String {
    fill(t(lang, module, key), vars)
}

/// Four distinct numeric options around `correct`.
pub fn numeric_choices<R: Rng>(rng: &mut R, correct: u32, preferred: &[i64]) -> Vec<Answer> {
    build_distinct_options(rng, correct, preferred)
        .into_iter()
        .map(Answer::Number)
        .collect()
}

/// Four distinct dollar options around `correct`.
pub fn dollar_choices<R: Rng>(rng: &mut R, correct: u32, preferred: &[i64]) -> Vec<Answer> {
    build_distinct_options(rng, correct, preferred)
        .into_iter()
        .map(Answer::Dollars)
        .collect()
}

/// Four distinct text options including `correct`.
pub fn text_choices<R: Rng>(rng: &mut R, correct: &str, candidates: Vec<String>) -> Vec<Answer> {
    distinct_text_options(rng, correct.to_string(), candidates)
        .into_iter()
        .map(Answer::Text)
        .collect()
}

/// Multiple choice below hard, free input at hard.
///
/// `build` is only invoked when options are needed, so hard questions do
/// not consume randomness for options nobody sees.
pub fn unless_hard(difficulty: Difficulty, build: impl FnOnce() -> Vec<Answer>) -> Option<Vec<Answer>> {
    if difficulty.is_hard() {
        None
    } else {
        Some(build())
    }
}

/// Assemble the final [`Question`] from a topic draft.
pub fn finish(draft: Draft, id: String, topic: Topic, difficulty: Difficulty) -> Question {
    Question {
        id,
        topic,
        difficulty,
        kind: draft.kind.to_string(),
        prompt: draft.prompt,
        column: draft.column,
        choices: draft.choices,
        correct_answer: draft.correct,
        hint: draft.hint,
        visual_glyph: draft.glyph.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_every_placeholder_occurrence() {
        let s = fill("{a} + {a} = {b}, not ${b}", &[("a", &3), ("b", &"six")]);
        assert_eq!(s, "3 + 3 = six, not $six");
    }

    #[test]
    fn fill_leaves_unknown_placeholders_alone() {
        assert_eq!(fill("{x} and {y}", &[("x", &1)]), "1 and {y}");
    }

    #[test]
    fn hard_questions_skip_option_building() {
        let mut built = false;
        let choices = unless_hard(Difficulty::Hard, || {
            built = true;
            vec![Answer::Number(1)]
        });
        assert!(choices.is_none());
        assert!(!built);
        assert!(unless_hard(Difficulty::Medium, || vec![Answer::Number(1)]).is_some());
    }
}
