//! Unit tests for the `times_tables_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical quiz; different seeds → varied order |
//! | Distinctness | No two questions in a quiz are the same, for every kind combination |
//! | Count / index | Exactly `count` questions with contiguous 0-based indices |
//! | Kinds | Only enabled kinds appear; harder vulgars only with the flag |
//! | Answers | The expected answer for every generated question is marked correct |
//! | Flow | Snapshot → quiz → layout → marking |
//! | Serde | Questions survive a JSON round-trip with numerators intact |

use std::collections::HashMap;

use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::generator::build_candidates;
use crate::quiz_engine::{
    arrange, generate_questions, generate_quiz, mark, AnswerStatus, OperationType, Operand, Question,
    QuestionCategory, QuizConfig, QuizRequest,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn config(tables: &[u32], count: usize) -> QuizConfig {
    QuizConfig { count, ..QuizConfig::new(tables.to_vec()) }
}

/// Every combination of the four kind flags with at least one enabled,
/// each with and without harder vulgars.
fn kind_combinations(tables: &[u32], count: usize) -> Vec<QuizConfig> {
    let mut out = Vec::new();
    for bits in 1u8..16 {
        for harder in [false, true] {
            let c = QuizConfig {
                include_plain: bits & 1 != 0,
                include_squares: bits & 2 != 0,
                include_decimals: bits & 4 != 0,
                include_vulgars: bits & 8 != 0,
                include_harder_in_vulgars: harder,
                ..config(tables, count)
            };
            out.push(c.normalised());
        }
    }
    out
}

fn quiz(config: QuizConfig, seed: u64) -> Vec<Question> {
    generate_quiz(QuizRequest::seeded(config, seed))
        .unwrap_or_else(|e| panic!("generation failed for seed {seed}: {e}"))
        .questions
}

/// The answer a pupil would type, built from the same labels a renderer shows.
fn expected_answer(q: &Question) -> f64 {
    let c = &q.configuration;
    let label = |o: Operand| q.preview_label(o).parse::<f64>().unwrap();
    match c.category() {
        QuestionCategory::Plain | QuestionCategory::DecimalX | QuestionCategory::DecimalY => {
            match c.operation {
                OperationType::Divide   => label(Operand::Result) / label(Operand::First),
                OperationType::Multiply => label(Operand::First) * label(Operand::Second),
            }
        }
        QuestionCategory::Square => match c.operation {
            OperationType::Divide   => f64::from(c.x),
            OperationType::Multiply => f64::from(c.x * c.x),
        },
        QuestionCategory::Vulgar => {
            let n = f64::from(q.numerator().unwrap());
            n / f64::from(c.x) * label(Operand::Result)
        }
    }
}

fn assert_pairwise_distinct(questions: &[Question], context: &str) {
    for (i, a) in questions.iter().enumerate() {
        for b in &questions[i + 1..] {
            assert!(!a.is_same(b), "{context}: duplicate questions {a} / {b}");
        }
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_quiz() {
    let c = QuizConfig {
        include_squares: true,
        include_decimals: true,
        include_vulgars: true,
        ..config(&[4, 6, 9], 40)
    };
    let a = generate_quiz(QuizRequest::seeded(c.clone(), 12345)).unwrap();
    let b = generate_quiz(QuizRequest::seeded(c, 12345)).unwrap();
    assert_eq!(a.quiz_id, b.quiz_id);
    for (x, y) in a.questions.iter().zip(&b.questions) {
        assert_eq!(x.to_string(), y.to_string());
        assert_eq!(x.index(), y.index());
        assert_eq!(x.numerator(), y.numerator());
    }
}

#[test]
fn different_seeds_produce_varied_order() {
    let mut same = 0usize;
    for seed in 0..20u64 {
        let a = quiz(config(&[7, 8], 20), seed);
        let b = quiz(config(&[7, 8], 20), seed + 500);
        let render = |qs: &[Question]| qs.iter().map(|q| q.to_string()).collect::<Vec<_>>();
        if render(&a) == render(&b) {
            same += 1;
        }
    }
    assert!(same < 2, "too many identical quizzes across seeds ({same}/20)");
}

#[test]
fn entropy_seed_produces_a_valid_quiz() {
    let q = generate_quiz(QuizRequest::new(config(&[5], 12))).unwrap();
    assert_eq!(q.questions.len(), 12);
    assert!(q.quiz_id.starts_with("TT-"));
}

// ── distinctness / count ─────────────────────────────────────────────────────

#[test]
fn no_duplicates_for_any_kind_combination() {
    for c in kind_combinations(&[3, 12], 30) {
        for seed in SEEDS {
            // Same seed, same stream: the candidate pools are the ones the quiz draws from.
            let (base, variants) = build_candidates(&c, &mut StdRng::seed_from_u64(seed)).unwrap();
            let qs = generate_questions(&c, &mut StdRng::seed_from_u64(seed)).unwrap();
            // Narrow kinds can have fewer than 30 candidates; only the part
            // drawn before variants are recycled must be distinct.
            let distinct_prefix = qs.len().min(base.len() + variants.len());
            let context = format!("{} seed={seed}", c.to_snapshot());
            assert_pairwise_distinct(&qs[..distinct_prefix], &context);
        }
    }
}

#[test]
fn single_table_full_kinds_is_fully_distinct() {
    let c = QuizConfig {
        include_squares: true,
        include_decimals: true,
        include_vulgars: true,
        include_harder_in_vulgars: true,
        ..config(&[6], 40)
    };
    for seed in SEEDS {
        let qs = quiz(c.clone(), seed);
        assert_eq!(qs.len(), 40);
        assert_pairwise_distinct(&qs, &format!("seed={seed}"));
    }
}

#[test]
fn indices_are_contiguous_and_match_order() {
    for seed in SEEDS {
        let qs = quiz(config(&[2, 5, 11], 33), seed);
        assert_eq!(qs.len(), 33);
        for (i, q) in qs.iter().enumerate() {
            assert_eq!(q.index(), Some(i), "seed={seed}");
            assert_eq!(q.id("Q"), Some(format!("Q_{i}")));
        }
    }
}

#[test]
fn zero_count_gives_empty_quiz() {
    assert!(quiz(config(&[4], 0), 1).is_empty());
}

// ── kinds ────────────────────────────────────────────────────────────────────

#[test]
fn only_enabled_kinds_appear() {
    let c = QuizConfig {
        include_plain: false,
        include_decimals: true,
        ..config(&[4, 7], 40)
    };
    for seed in SEEDS {
        for q in quiz(c.clone(), seed) {
            assert!(
                q.configuration.question_type.is_decimal(),
                "unexpected {} question {q}",
                q.configuration.question_type
            );
        }
    }
}

#[test]
fn harder_vulgars_only_with_flag() {
    let easy = QuizConfig { include_plain: false, include_vulgars: true, ..config(&[3, 8], 200) };
    for q in quiz(easy.clone(), 3) {
        let t = q.configuration.question_type;
        assert!(!t.vulgar_of_decimal && !t.vulgar_of_10, "{q} should be a simple vulgar");
    }

    let hard = QuizConfig { include_harder_in_vulgars: true, ..easy };
    let qs = quiz(hard, 3);
    assert!(qs.iter().any(|q| q.configuration.question_type.vulgar_of_decimal));
    assert!(qs.iter().any(|q| q.configuration.question_type.vulgar_of_10));
    assert!(qs
        .iter()
        .filter(|q| q.configuration.question_type.vulgar_of_10)
        .all(|q| q.configuration.z() < 100));
}

#[test]
fn primary_base_questions_come_before_variants() {
    // Plain only, one table: the 11 base questions are one framing per fact,
    // so the first 11 questions cover 11 different facts.
    for seed in SEEDS {
        let qs = quiz(config(&[9], 11), seed);
        let mut facts: Vec<(u32, u32)> = qs
            .iter()
            .map(|q| {
                let c = q.configuration;
                (c.x.min(c.y), c.x.max(c.y))
            })
            .collect();
        facts.sort_unstable();
        facts.dedup();
        assert_eq!(facts.len(), 11, "seed={seed}");
    }
}

// ── answers ──────────────────────────────────────────────────────────────────

#[test]
fn every_generated_question_accepts_its_answer() {
    let c = QuizConfig {
        include_squares: true,
        include_decimals: true,
        include_vulgars: true,
        include_harder_in_vulgars: true,
        ..config(&[1, 2, 5, 10, 12], 300)
    };
    for seed in SEEDS {
        for q in quiz(c.clone(), seed) {
            let answer = expected_answer(&q);
            assert!(q.check_answer(answer).unwrap(), "{q} should accept {answer}");
            assert!(!q.check_answer(answer + 1.0).unwrap(), "{q} should reject {}", answer + 1.0);
        }
    }
}

// ── end-to-end flow ──────────────────────────────────────────────────────────

#[test]
fn snapshot_to_marked_quiz() {
    let config = QuizConfig::from_snapshot(
        "selectedTables={3,4}; count=9; includePlain=true; includeSquares=true; columnCount=3",
    )
    .unwrap();
    let quiz = generate_quiz(QuizRequest::seeded(config, 77)).unwrap();
    assert_eq!(quiz.column_count, 3);

    let grid = arrange(&quiz.questions, quiz.column_count);
    assert_eq!(grid.len(), 3);
    assert!(grid.iter().all(|row| row.len() == 3));

    let answers: HashMap<String, String> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let id = q.id("Q").unwrap();
            // Answer every other question correctly.
            let value = if i % 2 == 0 { expected_answer(q) } else { -1.0 };
            (id, value.to_string())
        })
        .collect();

    let report = mark(&quiz.questions, &answers).unwrap();
    assert_eq!(report.total, 9);
    assert_eq!(report.correct, 5);
    assert_eq!(report.statuses[1], AnswerStatus::Incorrect);
    assert_eq!(report.summary(), "You got 5 out of 9 questions right.");
}

// ── serde ────────────────────────────────────────────────────────────────────

#[test]
fn questions_survive_json_round_trip() {
    let c = QuizConfig { include_vulgars: true, ..config(&[6, 7], 25) };
    let quiz = generate_quiz(QuizRequest::seeded(c, 5)).unwrap();
    let json = serde_json::to_string(&quiz).unwrap();
    let back: crate::Quiz = serde_json::from_str(&json).unwrap();
    assert_eq!(back.quiz_id, quiz.quiz_id);
    for (a, b) in quiz.questions.iter().zip(&back.questions) {
        assert!(a.is_same(b));
        assert_eq!(a.index(), b.index());
        assert_eq!(a.to_string(), b.to_string());
    }
}

#[test]
fn config_json_fills_defaults() {
    let c: QuizConfig = serde_json::from_str(r#"{ "selected_tables": [2, 3] }"#).unwrap();
    assert_eq!(c, QuizConfig::new(vec![2, 3]));
}
