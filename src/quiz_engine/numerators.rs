use rand::Rng;
use crate::quiz_engine::{error::QuizError, helpers::take_random};

pub const MIN_DENOMINATOR: u32 = 2;
pub const MAX_DENOMINATOR: u32 = 12;

/// Per-denominator supply of unused numerators for vulgar fraction questions.
///
/// Each denominator `d` hands out `1..d` without replacement. A denominator's
/// list is filled on first use and refilled once it runs dry, so a long run of
/// questions over the same denominator cycles through every numerator before
/// repeating one.
#[derive(Debug, Clone, Default)]
pub struct NumeratorPool {
    // Index `d - MIN_DENOMINATOR`.
    by_denominator: [Vec<u32>; (MAX_DENOMINATOR - MIN_DENOMINATOR + 1) as usize],
}

impl NumeratorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `denominator` is one this pool can serve.
    pub fn accepts(denominator: u32) -> bool {
        (MIN_DENOMINATOR..=MAX_DENOMINATOR).contains(&denominator)
    }

    /// Draw a random unused numerator for `denominator`.
    pub fn draw_for<R: Rng + ?Sized>(&mut self, denominator: u32, rng: &mut R) -> Result<u32, QuizError> {
        if !Self::accepts(denominator) {
            return Err(QuizError::Domain(format!(
                "denominator {denominator} is outside {MIN_DENOMINATOR}..={MAX_DENOMINATOR}"
            )));
        }
        let remaining = &mut self.by_denominator[(denominator - MIN_DENOMINATOR) as usize];
        if remaining.is_empty() {
            remaining.extend(1..denominator);
        }
        take_random(remaining, rng).ok_or_else(|| {
            QuizError::Invariant(format!("no numerators available for denominator {denominator}"))
        })
    }

    /// Numerators still unused for `denominator` in the current cycle.
    /// Zero before the first draw as well as right after the last one.
    pub fn remaining(&self, denominator: u32) -> usize {
        if !Self::accepts(denominator) {
            return 0;
        }
        self.by_denominator[(denominator - MIN_DENOMINATOR) as usize].len()
    }
}
