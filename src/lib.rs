//! # times_tables_gen
//!
//! Randomised times-tables practice quizzes with free-text answer marking.
//!
//! A quiz is built from a handful of selected times tables. Each base fact
//! `x × y = z` is turned into several kinds of question through a fixed set of
//! mutations (swapped arguments, the reverse operation, squares and square
//! roots, decimal fractions, vulgar fractions) and the generator picks a
//! requested number of *distinct* questions, preferring the primary framing of
//! each fact over its variants.
//!
//! ## How it works
//!
//! 1. Build a [`QuizConfig`] (or load one with [`QuizConfig::from_snapshot`]).
//! 2. Call [`generate_quiz`] with a [`QuizRequest`]. Pass `rng_seed: Some(u64)`
//!    to get the same quiz every time.
//! 3. Show each [`Question`] (its `Display` impl, or
//!    [`Question::preview_label`] for a custom layout) and grade the answers
//!    with [`Question::classify_input`] or [`mark`].
//!
//! ## Quick start
//!
//! ```rust
//! use times_tables_gen::{generate_quiz, AnswerStatus, QuizConfig, QuizRequest};
//!
//! let mut config = QuizConfig::new(vec![3, 7]);
//! config.count = 10;
//! config.include_decimals = true;
//!
//! let quiz = generate_quiz(QuizRequest::seeded(config, 42)).unwrap();
//! assert_eq!(quiz.questions.len(), 10);
//!
//! for q in &quiz.questions {
//!     println!("{}) {} =", q.index().unwrap() + 1, q);
//! }
//!
//! let first = &quiz.questions[0];
//! assert_eq!(first.classify_input("").unwrap(), AnswerStatus::Unanswered);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `times_tables_gen::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    all_answered, arrange, generate_questions, generate_quiz, mark, AnswerStatus, ConfigError,
    MarkReport, Mutation, NumeratorPool, OperationType, Operand, QuestionCategory,
    QuestionConfiguration, QuestionType, Question, Quiz, QuizConfig, QuizError, QuizRequest,
};

#[cfg(test)]
mod tests;
