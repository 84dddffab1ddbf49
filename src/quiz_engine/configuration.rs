//! A single arithmetic fact `x op y` plus its question type.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::QuizError,
    models::{Mutation, OperationType, QuestionCategory, QuestionType},
};

/// The fact behind a question: `x * y = z`, asked as `operation`, framed by
/// `question_type`.
///
/// Configurations are values. Every transformation goes through
/// [`mutate`](Self::mutate), which returns a new configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuestionConfiguration {
    pub x: u32,
    pub y: u32,
    pub operation: OperationType,
    #[serde(default)]
    pub question_type: QuestionType,
}

impl QuestionConfiguration {
    /// A plain question. With `swap` the arguments are exchanged once, here.
    pub fn new(x: u32, y: u32, operation: OperationType, swap: bool) -> Self {
        let (x, y) = if swap { (y, x) } else { (x, y) };
        QuestionConfiguration {
            x,
            y,
            operation,
            question_type: QuestionType::PLAIN,
        }
    }

    pub fn z(&self) -> u32 {
        self.x * self.y
    }

    pub fn category(&self) -> QuestionCategory {
        self.question_type.category
    }

    pub fn is_vulgar(&self) -> bool {
        self.question_type.contains(QuestionCategory::Vulgar)
    }

    /// Apply `mutations` in order to a copy of this configuration.
    ///
    /// Returns `Ok(None)` when the result is not a sensible question:
    /// a square whose arguments differ, a decimal shift of an argument that is
    /// already 10, or a "vulgar of 10" question whose `z` reaches 100.
    /// Applying a modifier before the category it refines is a
    /// [`QuizError::Sequence`].
    pub fn mutate(&self, mutations: &[Mutation]) -> Result<Option<Self>, QuizError> {
        let mut next = *self;

        for &mutation in mutations {
            match mutation {
                Mutation::SwapArguments => std::mem::swap(&mut next.x, &mut next.y),
                Mutation::SwapOperation => next.operation = next.operation.swapped(),
                Mutation::Square   => next.question_type = QuestionType::of(QuestionCategory::Square),
                Mutation::DecimalX => next.question_type = QuestionType::of(QuestionCategory::DecimalX),
                Mutation::DecimalY => next.question_type = QuestionType::of(QuestionCategory::DecimalY),
                Mutation::Decimal10 => {
                    if !next.question_type.is_decimal() {
                        return Err(QuizError::Sequence(
                            "using 'DECIMAL_10' prior to 'DECIMAL_X' or 'DECIMAL_Y'".into(),
                        ));
                    }
                    next.question_type.decimal_10 = true;
                }
                Mutation::Vulgar => next.question_type = QuestionType::of(QuestionCategory::Vulgar),
                Mutation::VulgarOfDecimal => {
                    if !next.is_vulgar() {
                        return Err(QuizError::Sequence(
                            "using 'VULGAR_OF_DECIMAL' prior to 'VULGAR'".into(),
                        ));
                    }
                    next.question_type.vulgar_of_decimal = true;
                }
                Mutation::VulgarOf10 => {
                    if !next.is_vulgar() {
                        return Err(QuizError::Sequence(
                            "using 'VULGAR_OF_10' prior to 'VULGAR'".into(),
                        ));
                    }
                    next.question_type.vulgar_of_10 = true;
                }
            }
        }

        Ok(next.is_applicable().then_some(next))
    }

    /// Parse mutation tokens (e.g. `"DECIMAL_X"`) and apply them.
    pub fn mutate_tokens(&self, tokens: &[&str]) -> Result<Option<Self>, QuizError> {
        let mutations = tokens
            .iter()
            .map(|t| t.parse::<Mutation>())
            .collect::<Result<Vec<_>, _>>()?;
        self.mutate(&mutations)
    }

    fn is_applicable(&self) -> bool {
        let t = self.question_type;

        if t.contains(QuestionCategory::Square) && self.x != self.y {
            return false;
        }
        if (t.contains(QuestionCategory::DecimalX) && self.x == 10)
            || (t.contains(QuestionCategory::DecimalY) && self.y == 10)
        {
            return false;
        }
        // Keep "of 10x" magnitudes readable.
        if t == QuestionType::of(QuestionCategory::Vulgar).with_vulgar_of_10() && self.z() >= 100 {
            return false;
        }
        true
    }

    /// Semantic equality: same arguments and type, and the same operation
    /// unless this is a vulgar fraction (where the operation is not visible).
    pub fn is_same(&self, other: &QuestionConfiguration) -> bool {
        if self.x != other.x || self.y != other.y || self.question_type != other.question_type {
            return false;
        }
        self.is_vulgar() || self.operation == other.operation
    }
}
