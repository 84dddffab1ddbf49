//! Error types.
//!
//! [`QuizError`] covers programming and domain faults inside the engine; none
//! of them are retried. A mutation that is merely *not applicable* is not an
//! error at all: `mutate` returns `Ok(None)` for it.

use thiserror::Error;

/// Faults raised by the question engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An out-of-domain value reached a core operation (e.g. a denominator
    /// outside 2..=12).
    #[error("domain error: {0}")]
    Domain(String),

    /// A mutation was applied before the mutation it depends on
    /// (e.g. `DECIMAL_10` before `DECIMAL_X`), or an unknown mutation was named.
    #[error("mutation out of sequence: {0}")]
    Sequence(String),

    /// An impossible category/operation combination was reached.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

/// Problems with a quiz configuration or its stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no times tables selected")]
    NoSelection,

    #[error("times table {0} is outside 1..=12")]
    TableOutOfRange(u32),

    #[error("no question kind is enabled")]
    NothingEnabled,

    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}
