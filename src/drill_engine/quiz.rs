//! Quiz flow on top of the generators: a fixed run of questions with rising
//! difficulty, scoring, an end-of-quiz verdict and the player's rank ladder.
//!
//! Nothing here renders or stores anything; callers own presentation and
//! persistence.

use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::QuizConfig;
use crate::drill_engine::{
    generator::generate_with_rng,
    helpers::text,
    i18n::t,
    models::{Answer, Difficulty, InteractionMode, Language, Question, Topic},
};
use crate::error::QuizError;

/// Difficulty of the question at `step` (0-based): four easy, four medium,
/// then hard.
pub fn difficulty_for_step(step: usize) -> Difficulty {
    match step {
        0..=3 => Difficulty::Easy,
        4..=7 => Difficulty::Medium,
        _     => Difficulty::Hard,
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub correct_answer: Answer,
    pub hint: String,
    /// Localized line to show the player.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    topic: Topic,
    language: Language,
    questions: Vec<Question>,
    index: usize,
    correct: usize,
    answered: bool,
}

impl QuizSession {
    /// Start a quiz seeded from `config.rng_seed`, or from entropy.
    pub fn start(config: &QuizConfig, topic: Topic) -> Self {
        let mut rng: StdRng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::start_with_rng(&mut rng, config, topic)
    }

    pub fn start_with_rng<R: Rng>(rng: &mut R, config: &QuizConfig, topic: Topic) -> Self {
        let chapter = match config.chapter {
            Some(c) if topic != Topic::Calculations => {
                warn!("{c} ignored for a {} quiz", topic.id());
                None
            }
            other => other,
        };

        let questions = (0..config.questions_per_quiz)
            .map(|step| generate_with_rng(rng, topic, difficulty_for_step(step), chapter, config.language))
            .collect::<Vec<_>>();

        info!("quiz started: {} x{} ({})", topic.id(), questions.len(), config.language);
        QuizSession {
            topic,
            language: config.language,
            questions,
            index: 0,
            correct: 0,
            answered: false,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 0-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// `None` once every question has been advanced past.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Check `candidate` against the current question. Each question takes
    /// exactly one answer.
    pub fn submit(&mut self, candidate: &str) -> Result<Feedback, QuizError> {
        let question = self.questions.get(self.index).ok_or(QuizError::Finished)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered { index: self.index });
        }
        if candidate.trim().is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let correct = question.is_correct(candidate);
        let lang = self.language;
        let message = if correct {
            t(lang, "quiz", "correct").to_string()
        } else {
            match question.interaction_mode() {
                InteractionMode::MultipleChoice => text(lang, "quiz", "not_quite", &[("hint", &question.hint)]),
                InteractionMode::FreeInput => text(lang, "quiz", "answer_was", &[
                    ("answer", &question.correct_answer), ("hint", &question.hint),
                ]),
            }
        };
        let feedback = Feedback {
            correct,
            correct_answer: question.correct_answer.clone(),
            hint: question.hint.clone(),
            message,
        };

        self.answered = true;
        if correct {
            self.correct += 1;
        }
        Ok(feedback)
    }

    /// Move to the next question once the current one is answered.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        if !self.answered {
            return Err(QuizError::NotAnswered { index: self.index });
        }
        self.index += 1;
        self.answered = false;

        if self.is_finished() {
            let s = self.summary();
            info!("quiz finished: {} {}/{} ({:?})", self.topic.id(), s.correct, s.total, s.verdict);
        }
        Ok(())
    }

    /// Score so far; final once [`is_finished`](Self::is_finished).
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::new(self.correct, self.questions.len())
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Outstanding,
    Great,
    GoodEffort,
}

impl Verdict {
    pub fn from_percent(percent: u32) -> Verdict {
        match percent {
            80.. => Verdict::Outstanding,
            60.. => Verdict::Great,
            _    => Verdict::GoodEffort,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Outstanding => "👑",
            Verdict::Great       => "⭐",
            Verdict::GoodEffort  => "🌸",
        }
    }

    pub fn message(self, lang: Language) -> &'static str {
        let key = match self {
            Verdict::Outstanding => "verdict_outstanding",
            Verdict::Great       => "verdict_great",
            Verdict::GoodEffort  => "verdict_effort",
        };
        t(lang, "quiz", key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percent: u32,
    pub verdict: Verdict,
}

impl QuizSummary {
    pub fn new(correct: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (correct as f64 * 100.0 / total as f64).round() as u32
        };
        QuizSummary { correct, total, percent, verdict: Verdict::from_percent(percent) }
    }

    /// e.g. "8/10 Correct!"
    pub fn score_line(&self, lang: Language) -> String {
        text(lang, "quiz", "score_line", &[("correct", &self.correct), ("total", &self.total)])
    }
}

// ---------------------------------------------------------------------------
// Ranks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    LittleSeedling,
    PrettyBlossom,
    FlowerPrincess,
    MagicFairy,
    MathQueen,
}

impl Rank {
    /// Lowest rank first.
    pub const LADDER: [Rank; 5] = [
        Rank::LittleSeedling,
        Rank::PrettyBlossom,
        Rank::FlowerPrincess,
        Rank::MagicFairy,
        Rank::MathQueen,
    ];

    /// Total score needed to hold this rank.
    pub fn min_score(self) -> u32 {
        match self {
            Rank::LittleSeedling => 0,
            Rank::PrettyBlossom  => 21,
            Rank::FlowerPrincess => 51,
            Rank::MagicFairy     => 101,
            Rank::MathQueen      => 201,
        }
    }

    pub fn for_score(score: u32) -> Rank {
        Rank::LADDER
            .iter()
            .rev()
            .copied()
            .find(|r| score >= r.min_score())
            .unwrap_or(Rank::LittleSeedling)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Rank::LittleSeedling => "🌱",
            Rank::PrettyBlossom  => "🌷",
            Rank::FlowerPrincess => "🌸",
            Rank::MagicFairy     => "✨",
            Rank::MathQueen      => "👑",
        }
    }

    pub fn name(self, lang: Language) -> &'static str {
        let key = match self {
            Rank::LittleSeedling => "rank_seedling",
            Rank::PrettyBlossom  => "rank_blossom",
            Rank::FlowerPrincess => "rank_princess",
            Rank::MagicFairy     => "rank_fairy",
            Rank::MathQueen      => "rank_queen",
        };
        t(lang, "quiz", key)
    }

    pub fn rank_up_message(self, lang: Language) -> String {
        text(lang, "quiz", "rank_up", &[("rank", &self.name(lang))])
    }
}

/// A student and their cumulative score across quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub total_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into(), total_score: 0 }
    }

    pub fn rank(&self) -> Rank {
        Rank::for_score(self.total_score)
    }

    /// Count one correct answer. Returns the new rank when it changes.
    pub fn record_correct(&mut self) -> Option<Rank> {
        let before = self.rank();
        self.total_score = self.total_score.saturating_add(1);
        let after = self.rank();
        if after > before {
            info!("{} reached {:?} at {} points", self.name, after, self.total_score);
            Some(after)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(topic: Topic, seed: u64) -> QuizSession {
        let config = QuizConfig { rng_seed: Some(seed), ..QuizConfig::default() };
        QuizSession::start(&config, topic)
    }

    #[test]
    fn schedule_is_four_easy_four_medium_then_hard() {
        let tiers: Vec<Difficulty> = (0..10).map(difficulty_for_step).collect();
        assert_eq!(&tiers[..4], &[Difficulty::Easy; 4]);
        assert_eq!(&tiers[4..8], &[Difficulty::Medium; 4]);
        assert_eq!(&tiers[8..], &[Difficulty::Hard; 2]);
    }

    #[test]
    fn session_questions_follow_the_schedule() {
        let quiz = seeded(Topic::Counting, 5);
        assert_eq!(quiz.total(), 10);
        for (i, q) in quiz.questions().iter().enumerate() {
            assert_eq!(q.difficulty, difficulty_for_step(i));
            assert_eq!(q.topic, Topic::Counting);
        }
    }

    #[test]
    fn answering_everything_correctly_is_outstanding() {
        let mut quiz = seeded(Topic::Money, 6);
        while let Some(q) = quiz.current() {
            let answer = q.correct_answer.to_string();
            let fb = quiz.submit(&answer).unwrap();
            assert!(fb.correct, "{answer}");
            quiz.advance().unwrap();
        }
        let s = quiz.summary();
        assert_eq!((s.correct, s.total, s.percent), (10, 10, 100));
        assert_eq!(s.verdict, Verdict::Outstanding);
        assert_eq!(s.score_line(Language::En), "10/10 Correct!");
    }

    #[test]
    fn session_rejects_out_of_order_calls() {
        let mut quiz = seeded(Topic::Numbers, 7);
        assert_eq!(quiz.advance(), Err(QuizError::NotAnswered { index: 0 }));
        assert_eq!(quiz.submit("   "), Err(QuizError::EmptyAnswer));
        quiz.submit("1000").unwrap();
        assert_eq!(quiz.submit("1000"), Err(QuizError::AlreadyAnswered { index: 0 }));
        quiz.advance().unwrap();
        assert_eq!(quiz.index(), 1);

        while !quiz.is_finished() {
            quiz.submit("x").unwrap();
            quiz.advance().unwrap();
        }
        assert_eq!(quiz.submit("1"), Err(QuizError::Finished));
        assert_eq!(quiz.advance(), Err(QuizError::Finished));
    }

    #[test]
    fn wrong_answers_explain_themselves() {
        let mut quiz = seeded(Topic::Arithmetic, 8);
        let fb = quiz.submit("1000").unwrap();
        assert!(!fb.correct);
        assert!(fb.message.contains(&fb.hint), "{}", fb.message);
        assert_eq!(quiz.correct_count(), 0);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(QuizSummary::new(8, 10).verdict, Verdict::Outstanding);
        assert_eq!(QuizSummary::new(7, 10).verdict, Verdict::Great);
        assert_eq!(QuizSummary::new(6, 10).verdict, Verdict::Great);
        assert_eq!(QuizSummary::new(5, 10).verdict, Verdict::GoodEffort);
        assert_eq!(QuizSummary::new(2, 3).percent, 67);
        assert_eq!(QuizSummary::new(0, 0).verdict, Verdict::GoodEffort);
    }

    #[test]
    fn rank_ladder_boundaries() {
        assert_eq!(Rank::for_score(0), Rank::LittleSeedling);
        assert_eq!(Rank::for_score(20), Rank::LittleSeedling);
        assert_eq!(Rank::for_score(21), Rank::PrettyBlossom);
        assert_eq!(Rank::for_score(51), Rank::FlowerPrincess);
        assert_eq!(Rank::for_score(100), Rank::FlowerPrincess);
        assert_eq!(Rank::for_score(101), Rank::MagicFairy);
        assert_eq!(Rank::for_score(201), Rank::MathQueen);
        assert_eq!(Rank::for_score(u32::MAX), Rank::MathQueen);
    }

    #[test]
    fn record_correct_reports_rank_ups_only() {
        let mut p = Player { name: "Ana".into(), total_score: 19 };
        assert_eq!(p.record_correct(), None);
        assert_eq!(p.record_correct(), Some(Rank::PrettyBlossom));
        assert_eq!(p.record_correct(), None);
        assert_eq!(p.total_score, 22);
        assert_eq!(
            Rank::PrettyBlossom.rank_up_message(Language::En),
            "🎉 Rank Up! 🎉 You are now a \"Pretty Blossom\"! Amazing!"
        );
    }
}
