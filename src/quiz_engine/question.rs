//! A question: a configuration plus (for vulgar fractions) its numerator and
//! its slot in the final quiz.
//!
//! Everything that depends on the question's category (answer checking, the
//! value shown for each operand, the plain-text prompt) is a `match` on
//! [`QuestionCategory`] here rather than behaviour attached per instance.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    configuration::QuestionConfiguration,
    error::QuizError,
    helpers::{approx_eq, parse_leading_number, tenths},
    models::{AnswerStatus, OperationType, Operand, QuestionCategory, QuestionType},
    numerators::NumeratorPool,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub configuration: QuestionConfiguration,
    /// Only present for vulgar fraction questions.
    numerator: Option<u32>,
    /// Position in the generated quiz; `None` until selection places it.
    index: Option<usize>,
}

impl Question {
    /// Build a question, drawing a numerator for vulgar fractions
    /// (denominator = `configuration.x`).
    pub fn new<R: Rng + ?Sized>(
        configuration: QuestionConfiguration,
        numerators: &mut NumeratorPool,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let numerator = if configuration.is_vulgar() {
            Some(numerators.draw_for(configuration.x, rng)?)
        } else {
            None
        };
        Ok(Question { configuration, numerator, index: None })
    }

    /// Build a question with a known numerator, e.g. when restoring a stored
    /// quiz. The numerator is ignored for non-vulgar configurations.
    pub fn with_numerator(configuration: QuestionConfiguration, numerator: u32) -> Result<Self, QuizError> {
        if !configuration.is_vulgar() {
            return Ok(Question { configuration, numerator: None, index: None });
        }
        let denominator = configuration.x;
        if !NumeratorPool::accepts(denominator) {
            return Err(QuizError::Domain(format!("denominator {denominator} is outside 2..=12")));
        }
        if numerator == 0 || numerator >= denominator {
            return Err(QuizError::Domain(format!(
                "numerator {numerator} is outside 1..{denominator}"
            )));
        }
        Ok(Question { configuration, numerator: Some(numerator), index: None })
    }

    pub fn numerator(&self) -> Option<u32> {
        self.numerator
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn place_at(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Stable element identifier, e.g. `id("Q")` → `"Q_3"`. `None` until placed.
    pub fn id(&self, prefix: &str) -> Option<String> {
        self.index.map(|i| format!("{prefix}_{i}"))
    }

    /// Same question: equal configurations and, for vulgar fractions, equal
    /// numerators. The index is never compared.
    pub fn is_same(&self, other: &Question) -> bool {
        if !self.configuration.is_same(&other.configuration) {
            return false;
        }
        !self.configuration.is_vulgar() || self.numerator == other.numerator
    }

    /// Compare `candidate` with the expected answer (tolerance 1e-6).
    pub fn check_answer(&self, candidate: f64) -> Result<bool, QuizError> {
        let c = &self.configuration;
        let t = c.question_type;
        if !t.is_consistent() {
            return Err(QuizError::Invariant(format!("inconsistent question type {t}")));
        }

        let x = f64::from(c.x);
        let y = f64::from(c.y);
        let z = f64::from(c.z());

        let correct = match t.category {
            QuestionCategory::Plain | QuestionCategory::DecimalX | QuestionCategory::DecimalY => {
                match c.operation {
                    OperationType::Divide => {
                        let answer = if t.contains(QuestionCategory::DecimalY) {
                            candidate * 10.0
                        } else if t == QuestionType::of(QuestionCategory::DecimalX).with_decimal_10() {
                            // The answer was scaled up along with y.
                            candidate / 10.0
                        } else {
                            candidate
                        };
                        approx_eq(x * answer, z)
                    }
                    OperationType::Multiply => {
                        let answer = if t.is_exactly(QuestionCategory::DecimalX)
                            || t.is_exactly(QuestionCategory::DecimalY)
                        {
                            candidate * 10.0
                        } else {
                            candidate
                        };
                        approx_eq(x * y, answer)
                    }
                }
            }
            QuestionCategory::Square => match c.operation {
                OperationType::Divide   => approx_eq(x * candidate, z),
                OperationType::Multiply => approx_eq(x * x, candidate),
            },
            QuestionCategory::Vulgar => {
                let numerator = self.numerator.ok_or_else(|| {
                    QuizError::Invariant("vulgar fraction question without a numerator".into())
                })?;
                let mut expected = f64::from(numerator) * y;
                if t.vulgar_of_decimal {
                    expected /= 10.0;
                } else if t.vulgar_of_10 {
                    expected *= 10.0;
                }
                approx_eq(expected, candidate)
            }
        };
        Ok(correct)
    }

    /// Grade an answer that may be missing. `None` and NaN count as unanswered.
    pub fn classify_answer(&self, candidate: Option<f64>) -> Result<AnswerStatus, QuizError> {
        match candidate {
            Some(value) if !value.is_nan() => Ok(if self.check_answer(value)? {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Incorrect
            }),
            _ => Ok(AnswerStatus::Unanswered),
        }
    }

    /// Grade raw user input. Only the leading number is read, so `"4.2 "`
    /// and `"4.2cm"` both mean 4.2; text with no leading number is unanswered.
    pub fn classify_input(&self, input: &str) -> Result<AnswerStatus, QuizError> {
        self.classify_answer(parse_leading_number(input))
    }

    /// The text a renderer should show for one operand slot, with the decimal
    /// shift or x10 scaling of this question's type already applied.
    pub fn preview_label(&self, operand: Operand) -> String {
        let c = &self.configuration;
        let t = c.question_type;
        match operand {
            Operand::First => {
                if t.contains(QuestionCategory::DecimalX) {
                    tenths(c.x)
                } else if t == QuestionType::of(QuestionCategory::DecimalY).with_decimal_10() {
                    (c.x * 10).to_string()
                } else {
                    c.x.to_string()
                }
            }
            Operand::Second => {
                if t.contains(QuestionCategory::DecimalY) {
                    tenths(c.y)
                } else if t == QuestionType::of(QuestionCategory::DecimalX).with_decimal_10() {
                    (c.y * 10).to_string()
                } else {
                    c.y.to_string()
                }
            }
            Operand::Result => {
                // With DECIMAL_10 the result is shown unshifted.
                if t.is_exactly(QuestionCategory::DecimalX)
                    || t.is_exactly(QuestionCategory::DecimalY)
                    || t == QuestionType::of(QuestionCategory::Vulgar).with_vulgar_of_decimal()
                {
                    tenths(c.z())
                } else if t == QuestionType::of(QuestionCategory::Vulgar).with_vulgar_of_10() {
                    (c.z() * 10).to_string()
                } else {
                    c.z().to_string()
                }
            }
        }
    }
}

/// Plain-text prompt, e.g. `42 ÷ 6`, `0.6 × 7`, `4²`, `√16`, `5/6 of 42`.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.configuration;
        match c.category() {
            QuestionCategory::Plain | QuestionCategory::DecimalX | QuestionCategory::DecimalY => {
                match c.operation {
                    OperationType::Divide => write!(
                        f, "{} ÷ {}",
                        self.preview_label(Operand::Result), self.preview_label(Operand::First)
                    ),
                    OperationType::Multiply => write!(
                        f, "{} × {}",
                        self.preview_label(Operand::First), self.preview_label(Operand::Second)
                    ),
                }
            }
            QuestionCategory::Square => match c.operation {
                OperationType::Divide   => write!(f, "√{}", self.preview_label(Operand::Result)),
                OperationType::Multiply => write!(f, "{}²", self.preview_label(Operand::First)),
            },
            QuestionCategory::Vulgar => match self.numerator {
                Some(n) => write!(f, "{}/{} of {}", n, c.x, self.preview_label(Operand::Result)),
                None    => write!(f, "?/{} of {}", c.x, self.preview_label(Operand::Result)),
            },
        }
    }
}
