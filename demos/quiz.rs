//! End-to-end demo: load a snapshot, generate a seeded quiz, lay it out in
//! columns, then mark a set of answers.
//!
//! Run with: `cargo run --example quiz`
//!
//! Set `RUST_LOG=times_tables_gen=debug` to see the generator's tracing output.

use std::collections::HashMap;

use times_tables_gen::quiz_engine::grading::ANSWER_PREFIX;
use times_tables_gen::{
    arrange, generate_quiz, mark, AnswerStatus, Question, QuizConfig, QuizRequest,
};

const SNAPSHOT: &str = "selectedTables={3,6,7}; count=16; includePlain=true; includeSquares=true; \
                        includeDecimals=true; includeVulgars=true; includeHarderInVulgars=false; columnCount=4";

/// A pupil who skips every fifth question and slips up on every third.
fn pupil_answer(q: &Question, i: usize) -> Option<String> {
    if i % 5 == 4 {
        return None;
    }
    // Every answer in this quiz is a multiple of 0.1 no larger than 144.
    let right = (1..=1440)
        .map(|n| f64::from(n) / 10.0)
        .find(|v| q.check_answer(*v).unwrap_or(false))?;
    let given = if i % 3 == 2 { right + 1.0 } else { right };
    Some(given.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("times_tables_gen=info".parse().unwrap()),
        )
        .init();

    let config = match QuizConfig::from_snapshot(SNAPSHOT) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bad settings: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!("══ Settings ══");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());

    let quiz = match generate_quiz(QuizRequest::seeded(config, 2024)) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!("══ Quiz {} ══", quiz.quiz_id);
    println!();
    for row in arrange(&quiz.questions, quiz.column_count) {
        let cells: Vec<String> = row
            .iter()
            .map(|q| format!("{:>2}) {:<14}", q.index().map_or(0, |i| i + 1), format!("{q} =")))
            .collect();
        println!("  {}", cells.join("  "));
    }

    let answers: HashMap<String, String> = quiz
        .questions
        .iter()
        .enumerate()
        .filter_map(|(i, q)| Some((q.id(ANSWER_PREFIX)?, pupil_answer(q, i)?)))
        .collect();

    let report = match mark(&quiz.questions, &answers) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("marking failed: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!("══ Marking ══");
    println!();
    for (q, status) in quiz.questions.iter().zip(&report.statuses) {
        let given = q
            .id(ANSWER_PREFIX)
            .and_then(|id| answers.get(&id))
            .map_or("", String::as_str);
        let marker = match status {
            AnswerStatus::Correct    => "✓",
            AnswerStatus::Incorrect  => "✗",
            AnswerStatus::Unanswered => "·",
        };
        println!("  {marker} {q} = {given}");
    }
    println!();
    println!("  {}", report.summary());
}
