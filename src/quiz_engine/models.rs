use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Operation / question kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Multiply,
    Divide,
}

impl OperationType {
    /// The inverse operation: multiply becomes divide and vice versa.
    pub fn swapped(self) -> Self {
        match self {
            OperationType::Multiply => OperationType::Divide,
            OperationType::Divide   => OperationType::Multiply,
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Multiply => write!(f, "×"),
            OperationType::Divide   => write!(f, "÷"),
        }
    }
}

/// The structural kind of a question. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuestionCategory {
    #[default]
    Plain,
    /// Square (multiply) or square root (divide); needs `x == y`.
    Square,
    /// `x` is shown as a decimal fraction (x / 10).
    DecimalX,
    /// `y` is shown as a decimal fraction (y / 10).
    DecimalY,
    /// "n/x of z" where the numerator comes from a [`NumeratorPool`](crate::quiz_engine::numerators::NumeratorPool).
    Vulgar,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionCategory::Plain    => "Plain",
            QuestionCategory::Square   => "Square",
            QuestionCategory::DecimalX => "DecimalX",
            QuestionCategory::DecimalY => "DecimalY",
            QuestionCategory::Vulgar   => "Vulgar",
        };
        write!(f, "{}", s)
    }
}

/// A category plus the modifier flags layered on top of it.
///
/// `decimal_10` is only meaningful with `DecimalX`/`DecimalY`; the two vulgar
/// flags only with `Vulgar`. [`QuestionConfiguration::mutate`] enforces this;
/// a hand-built or deserialised value may not, see [`QuestionType::is_consistent`].
///
/// [`QuestionConfiguration::mutate`]: crate::quiz_engine::configuration::QuestionConfiguration::mutate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuestionType {
    pub category: QuestionCategory,
    /// The other argument is scaled up by 10 so the answer is not a decimal.
    #[serde(default)]
    pub decimal_10: bool,
    /// The fraction is taken of a decimal (z / 10).
    #[serde(default)]
    pub vulgar_of_decimal: bool,
    /// The fraction is taken of a number ten times bigger (z * 10).
    #[serde(default)]
    pub vulgar_of_10: bool,
}

impl QuestionType {
    pub const PLAIN: QuestionType = QuestionType::of(QuestionCategory::Plain);

    /// A bare category with no modifiers set.
    pub const fn of(category: QuestionCategory) -> Self {
        QuestionType {
            category,
            decimal_10: false,
            vulgar_of_decimal: false,
            vulgar_of_10: false,
        }
    }

    pub fn with_decimal_10(mut self) -> Self {
        self.decimal_10 = true;
        self
    }

    pub fn with_vulgar_of_decimal(mut self) -> Self {
        self.vulgar_of_decimal = true;
        self
    }

    pub fn with_vulgar_of_10(mut self) -> Self {
        self.vulgar_of_10 = true;
        self
    }

    /// True if the category matches, whatever modifiers are set.
    pub fn contains(self, category: QuestionCategory) -> bool {
        self.category == category
    }

    /// True if this is exactly `category` with no modifiers.
    pub fn is_exactly(self, category: QuestionCategory) -> bool {
        self == QuestionType::of(category)
    }

    pub fn is_decimal(self) -> bool {
        matches!(self.category, QuestionCategory::DecimalX | QuestionCategory::DecimalY)
    }

    /// Modifiers only appear on the categories they belong to.
    pub fn is_consistent(self) -> bool {
        let decimal_ok = !self.decimal_10 || self.is_decimal();
        let vulgar_ok = !(self.vulgar_of_decimal || self.vulgar_of_10)
            || self.category == QuestionCategory::Vulgar;
        decimal_ok && vulgar_ok
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if self.decimal_10 {
            write!(f, "+Decimal10")?;
        }
        if self.vulgar_of_decimal {
            write!(f, "+OfDecimal")?;
        }
        if self.vulgar_of_10 {
            write!(f, "+Of10")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// One structural change applied by `QuestionConfiguration::mutate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    SwapArguments,
    SwapOperation,
    Square,
    DecimalX,
    DecimalY,
    /// Requires `DecimalX` or `DecimalY` first.
    Decimal10,
    Vulgar,
    /// Requires `Vulgar` first.
    VulgarOfDecimal,
    /// Requires `Vulgar` first.
    VulgarOf10,
}

impl Mutation {
    pub fn token(self) -> &'static str {
        match self {
            Mutation::SwapArguments   => "SWAP_ARGUMENTS",
            Mutation::SwapOperation   => "SWAP_OPERATION",
            Mutation::Square          => "SQUARE",
            Mutation::DecimalX        => "DECIMAL_X",
            Mutation::DecimalY        => "DECIMAL_Y",
            Mutation::Decimal10       => "DECIMAL_10",
            Mutation::Vulgar          => "VULGAR",
            Mutation::VulgarOfDecimal => "VULGAR_OF_DECIMAL",
            Mutation::VulgarOf10      => "VULGAR_OF_10",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Mutation {
    type Err = QuizError;

    /// Unknown tokens are a caller bug, so they surface as `QuizError::Sequence`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SWAP_ARGUMENTS"    => Ok(Mutation::SwapArguments),
            "SWAP_OPERATION"    => Ok(Mutation::SwapOperation),
            "SQUARE"            => Ok(Mutation::Square),
            "DECIMAL_X"         => Ok(Mutation::DecimalX),
            "DECIMAL_Y"         => Ok(Mutation::DecimalY),
            "DECIMAL_10"        => Ok(Mutation::Decimal10),
            "VULGAR"            => Ok(Mutation::Vulgar),
            "VULGAR_OF_DECIMAL" => Ok(Mutation::VulgarOfDecimal),
            "VULGAR_OF_10"      => Ok(Mutation::VulgarOf10),
            _ => Err(QuizError::Sequence(format!("unexpected mutation '{s}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation / grading vocabulary
// ---------------------------------------------------------------------------

/// The logical argument slots of `x op y = z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// `x`
    First,
    /// `y`
    Second,
    /// `z = x * y`
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Unanswered,
    Correct,
    Incorrect,
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStatus::Unanswered => write!(f, "unanswered"),
            AnswerStatus::Correct    => write!(f, "correct"),
            AnswerStatus::Incorrect  => write!(f, "incorrect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_modifiers() {
        let t = QuestionType::of(QuestionCategory::DecimalX).with_decimal_10();
        assert!(t.contains(QuestionCategory::DecimalX));
        assert!(!t.contains(QuestionCategory::DecimalY));
        assert!(!t.contains(QuestionCategory::Square));
        assert!(!t.is_exactly(QuestionCategory::DecimalX));
        assert!(QuestionType::PLAIN.is_exactly(QuestionCategory::Plain));
    }

    #[test]
    fn inconsistent_modifiers_are_detected() {
        assert!(QuestionType::of(QuestionCategory::DecimalY).with_decimal_10().is_consistent());
        assert!(QuestionType::of(QuestionCategory::Vulgar).with_vulgar_of_10().is_consistent());
        assert!(!QuestionType::PLAIN.with_decimal_10().is_consistent());
        assert!(!QuestionType::of(QuestionCategory::Square).with_vulgar_of_decimal().is_consistent());
    }

    #[test]
    fn mutation_tokens_parse() {
        assert_eq!("decimal_10".parse::<Mutation>(), Ok(Mutation::Decimal10));
        assert_eq!(Mutation::VulgarOf10.token().parse::<Mutation>(), Ok(Mutation::VulgarOf10));
        assert!(matches!("CUBE".parse::<Mutation>(), Err(QuizError::Sequence(_))));
    }

    #[test]
    fn operation_swaps_both_ways() {
        assert_eq!(OperationType::Multiply.swapped(), OperationType::Divide);
        assert_eq!(OperationType::Divide.swapped(), OperationType::Multiply);
    }
}
