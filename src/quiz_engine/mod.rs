//! Core quiz engine: question model, mutation catalog, generation and grading.
//!
//! ## Module overview
//!
//! | Module          | Purpose |
//! |-----------------|---------|
//! | `models`        | Shared vocabulary: operations, categories, question types, mutations |
//! | `error`         | `QuizError` (domain / sequence / invariant) and `ConfigError` |
//! | `numerators`    | Per-denominator numerator supply for vulgar fractions |
//! | `configuration` | `QuestionConfiguration`: one fact, its mutations and equality |
//! | `question`      | `Question`: answer checking, operand labels, text prompt |
//! | `helpers`       | Random draw-without-replacement, balanced pools, number formatting |
//! | `generator`     | `generate_questions()` / `generate_quiz()` |
//! | `settings`      | `QuizConfig`, validation, key/value snapshot, `QuizRequest` |
//! | `grading`       | Marking answers and the correct-count summary |
//! | `layout`        | Column-major grid arrangement |

pub mod configuration;
pub mod error;
pub mod generator;
pub mod grading;
pub mod helpers;
pub mod layout;
pub mod models;
pub mod numerators;
pub mod question;
pub mod settings;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_quiz` without reaching into sub-modules.
pub use configuration::QuestionConfiguration;
pub use error::{ConfigError, QuizError};
pub use generator::{generate_questions, generate_quiz, Quiz};
pub use grading::{all_answered, mark, MarkReport};
pub use layout::arrange;
pub use models::{
    AnswerStatus, Mutation, OperationType, Operand, QuestionCategory, QuestionType,
};
pub use numerators::NumeratorPool;
pub use question::Question;
pub use settings::{QuizConfig, QuizRequest};
