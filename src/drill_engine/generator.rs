use log::{debug, warn};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::drill_engine::{
    helpers::{finish, Draft},
    models::{Chapter, Difficulty, Language, Question, QuestionRequest, Topic},
    topics,
};

/// Generate a unique question ID from topic + seed.
fn make_question_id(topic: Topic, rng: &mut impl RngCore) -> String {
    let prefix = match topic {
        Topic::Counting     => "CT",
        Topic::Numbers      => "NU",
        Topic::Shapes       => "SH",
        Topic::Arithmetic   => "AR",
        Topic::Multiply     => "MD",
        Topic::Money        => "MO",
        Topic::Calculations => "CA",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: seeds the RNG from the request and routes to the topic.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    generate_with_rng(&mut rng, request.topic, request.difficulty, request.chapter, request.language)
}

/// Same as [`generate_question`] with a caller-owned RNG, so a sequence of
/// questions can share one seed.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    topic: Topic,
    difficulty: Difficulty,
    chapter: Option<Chapter>,
    lang: Language,
) -> Question {
    match chapter {
        Some(c) if topic != Topic::Calculations => warn!("{c} ignored for topic {}", topic.id()),
        _ => {}
    }

    let id = make_question_id(topic, rng);

    let draft: Draft = match topic {
        Topic::Counting =>
            topics::counting::generate(rng, difficulty, lang),

        Topic::Numbers =>
            topics::numbers::generate(rng, difficulty, lang),

        Topic::Shapes =>
            topics::shapes::generate(rng, difficulty, lang),

        Topic::Arithmetic =>
            topics::arithmetic::generate(rng, difficulty, lang),

        Topic::Multiply =>
            topics::multiply::generate(rng, difficulty, lang),

        Topic::Money =>
            topics::money::generate(rng, difficulty, lang),

        Topic::Calculations =>
            topics::calculations::generate(rng, difficulty, chapter, lang),
    };

    debug!("{id}: {} {difficulty} {} ({lang})", topic.id(), draft.kind);
    finish(draft, id, topic, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_the_topic_prefix_and_eight_hex_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = make_question_id(Topic::Money, &mut rng);
        let (prefix, hex) = id.split_once('-').expect("prefix separator");
        assert_eq!(prefix, "MO");
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn seeded_requests_are_reproducible() {
        let mut req = QuestionRequest::new(Topic::Calculations);
        req.rng_seed = Some(99);
        req.difficulty = Difficulty::Hard;
        assert_eq!(generate_question(req.clone()), generate_question(req));
    }
}
