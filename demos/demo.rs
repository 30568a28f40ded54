//! Full demo of all 7 topics and a scripted quiz.
//!
//! Run with: `cargo run --example demo`
//! (`RUST_LOG=debug` shows dispatch logging, `MATH_DRILL_LANG=vi` switches
//! the quiz to Vietnamese.)
//!
//! 1. **Language comparison**: the same seeded question in English and
//!    Vietnamese. Same seed = same numbers, only the text changes.
//!
//! 2. **All 7 topics**: one question per topic and tier with fixed seeds, so
//!    the output is deterministic and reproducible.
//!
//! 3. **Quiz**: a ten-question session configured from the environment,
//!    answered by a student who gets every third question wrong.

use math_drill_gen::{
    generate_question, Chapter, Difficulty, Language, Player, QuestionRequest, QuizConfig,
    QuizSession, Topic,
};

/// Generate and pretty-print one question.
fn print_question(topic: Topic, difficulty: Difficulty, chapter: Option<Chapter>, lang: Language, seed: u64) {
    let q = generate_question(QuestionRequest {
        topic,
        difficulty,
        chapter,
        language: lang,
        rng_seed: Some(seed),
    });

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {} [{} — {}]  {}  ID: {}  Kind: {}",
        topic.icon(), topic, difficulty, lang, q.id, q.kind);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", q.visual_glyph);
    for line in q.display_text().lines() {
        println!("  {line}");
    }
    println!();
    match &q.choices {
        Some(choices) => {
            for c in choices {
                let marker = if *c == q.correct_answer { "✓" } else { " " };
                println!("  [{marker}] {c}");
            }
        }
        None => println!("  (type the answer: {})", q.correct_answer),
    }
    println!("  💡 {}", q.hint);
    println!();
}

fn main() {
    pretty_env_logger::init();

    // ── Language comparison ────────────────────────────────────────────────
    println!();
    println!("══ Same seed, two languages ══");
    println!();
    print_question(Topic::Money, Difficulty::Easy, None, Language::En, 7);
    print_question(Topic::Money, Difficulty::Easy, None, Language::Vi, 7);

    // ── All topics ─────────────────────────────────────────────────────────
    println!("══ All topics ══");
    println!();
    for (i, topic) in Topic::ALL.into_iter().enumerate() {
        for difficulty in Difficulty::ALL {
            print_question(topic, difficulty, None, Language::En, 100 + i as u64);
        }
    }

    println!("══ Calculations by chapter ══");
    println!();
    for chapter in Chapter::ALL {
        print_question(Topic::Calculations, Difficulty::Medium, Some(chapter), Language::En, 3);
    }

    // ── Quiz ───────────────────────────────────────────────────────────────
    println!("══ Quiz ══");
    println!();
    let config = match QuizConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ignoring environment: {e}");
            QuizConfig::default()
        }
    };
    let lang = config.language;
    let mut player = Player { name: "Linh".to_string(), total_score: 15 };
    let mut quiz = QuizSession::start(&config, Topic::Arithmetic);

    while let Some(q) = quiz.current() {
        let step = quiz.index();
        println!("  Q{} ({}): {}", step + 1, q.difficulty, q.prompt);
        let answer = if step % 3 == 2 { "0".to_string() } else { q.correct_answer.to_string() };
        println!("     → {answer}");

        match quiz.submit(&answer) {
            Ok(fb) => {
                println!("     {}", fb.message);
                if fb.correct {
                    if let Some(rank) = player.record_correct() {
                        println!("     {} {}", rank.icon(), rank.rank_up_message(lang));
                    }
                }
            }
            Err(e) => println!("     error: {e}"),
        }
        if let Err(e) = quiz.advance() {
            println!("     error: {e}");
            break;
        }
    }

    let summary = quiz.summary();
    println!();
    println!("  {} {}", summary.verdict.icon(), summary.score_line(lang));
    println!("  {}", summary.verdict.message(lang));
    let rank = player.rank();
    println!("  {}: {} {} ({} points)", player.name, rank.icon(), rank.name(lang), player.total_score);
    println!();
}
