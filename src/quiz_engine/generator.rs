//! Quiz generation.
//!
//! 1. Every `(x, table)` pair for `x` in 2..=12 and each selected table is a
//!    base fact.
//! 2. Operation, argument swap, decimal style and harder-vulgar style are each
//!    handed out half/half from their own pools, so the quiz is balanced
//!    between multiply and divide, `DECIMAL_X` and `DECIMAL_Y`, and so on.
//! 3. For each fact (drawn at random) a primary configuration is built and
//!    mutated per enabled kind. Results are filed as *base* or *variant*
//!    questions, skipping any that match an existing question.
//! 4. The quiz draws base questions first, then copies of the variants.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::quiz_engine::{
    configuration::QuestionConfiguration,
    error::QuizError,
    helpers::{split_pool, take_random},
    models::{Mutation, OperationType},
    numerators::{NumeratorPool, MIN_DENOMINATOR},
    question::Question,
    settings::{QuizConfig, QuizRequest, MAX_TABLE, MIN_TABLE},
};

/// The multiplier paired with every selected table.
const FACT_RANGE: std::ops::RangeInclusive<u32> = 2..=12;

/// A generated quiz, ready for a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz_id: String,
    pub column_count: usize,
    /// In presentation order; `questions[i].index() == Some(i)`.
    pub questions: Vec<Question>,
}

/// Seeded entry point: builds the RNG from `rng_seed` (or entropy), then
/// generates the questions.
pub fn generate_quiz(request: QuizRequest) -> Result<Quiz, QuizError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let quiz_id = format!("TT-{:08X}", rng.next_u32());
    let questions = generate_questions(&request.config, &mut rng)?;
    debug!(%quiz_id, questions = questions.len(), "generated quiz");

    Ok(Quiz {
        quiz_id,
        column_count: request.config.column_count,
        questions,
    })
}

/// Generate `config.count` distinct questions (see module docs).
///
/// Returns fewer only when no kind produced any question at all. A table
/// outside 1..=12 is a [`QuizError::Domain`] error.
pub fn generate_questions<R: Rng + ?Sized>(
    config: &QuizConfig,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    if let Some(&table) = config
        .selected_tables
        .iter()
        .find(|t| !(MIN_TABLE..=MAX_TABLE).contains(*t))
    {
        return Err(QuizError::Domain(format!(
            "times table {table} is outside {MIN_TABLE}..={MAX_TABLE}"
        )));
    }
    let (base, variants) = build_candidates(config, rng)?;
    debug!(base = base.len(), variants = variants.len(), "candidate questions built");
    Ok(select(base, variants, config.count, rng))
}

// ---------------------------------------------------------------------------
// Candidate production
// ---------------------------------------------------------------------------

/// Per-fact structural choices, each drawn from its own balanced pool.
#[derive(Debug, Clone, Copy)]
struct Assignment {
    operation: OperationType,
    swap: bool,
    decimal_style: Mutation,
    harder_vulgar: Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Base,
    Variant,
}

/// Base and variant questions collected so far, plus the numerator supply.
struct Candidates {
    base: Vec<Question>,
    variants: Vec<Question>,
    numerators: NumeratorPool,
}

impl Candidates {
    fn new() -> Self {
        Candidates {
            base: Vec::new(),
            variants: Vec::new(),
            numerators: NumeratorPool::new(),
        }
    }

    /// Turn `candidate` into a question and file it under `target`, unless it
    /// was not applicable or an equal question already exists.
    fn offer<R: Rng + ?Sized>(
        &mut self,
        candidate: Option<QuestionConfiguration>,
        target: Target,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        let Some(configuration) = candidate else {
            return Ok(());
        };
        // The 1 times table has no proper fraction with denominator 1.
        if configuration.is_vulgar() && configuration.x < MIN_DENOMINATOR {
            trace!(x = configuration.x, "skipping vulgar fraction over 1");
            return Ok(());
        }

        let question = Question::new(configuration, &mut self.numerators, rng)?;
        let duplicate = self
            .base
            .iter()
            .chain(self.variants.iter())
            .any(|existing| question.is_same(existing));
        if duplicate {
            trace!(%question, "duplicate skipped");
            return Ok(());
        }

        match target {
            Target::Base    => self.base.push(question),
            Target::Variant => self.variants.push(question),
        }
        Ok(())
    }

    /// All mutations of one primary configuration. With `reversed`, every
    /// result is a variant.
    fn add_family<R: Rng + ?Sized>(
        &mut self,
        primary: &QuestionConfiguration,
        assignment: Assignment,
        config: &QuizConfig,
        reversed: bool,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        use Mutation::*;

        let prefer = |t: Target| if reversed { Target::Variant } else { t };

        if config.include_plain {
            self.offer(Some(*primary), prefer(Target::Base), rng)?;
            self.offer(primary.mutate(&[SwapArguments])?, Target::Variant, rng)?;
        }

        if config.include_squares {
            // Squares are symmetric; no swapped counterpart.
            self.offer(primary.mutate(&[Square])?, prefer(Target::Base), rng)?;
        }

        if config.include_decimals {
            let style = assignment.decimal_style;
            if let Some(decimal) = primary.mutate(&[style])? {
                self.offer(Some(decimal), prefer(Target::Base), rng)?;
                self.offer(decimal.mutate(&[Decimal10])?, Target::Variant, rng)?;
            }
            if let Some(decimal) = primary.mutate(&[SwapArguments, style])? {
                self.offer(Some(decimal), Target::Variant, rng)?;
                self.offer(decimal.mutate(&[Decimal10])?, Target::Variant, rng)?;
            }
        }

        if config.include_vulgars {
            let harder = config.include_harder_in_vulgars;
            let style = assignment.harder_vulgar;
            if let Some(vulgar) = primary.mutate(&[Vulgar])? {
                self.offer(Some(vulgar), prefer(Target::Base), rng)?;
                if harder {
                    // Swapped, to keep it apart from the plain vulgar above.
                    let swapped = primary.mutate(&[SwapArguments, Vulgar, style])?;
                    self.offer(swapped, prefer(Target::Base), rng)?;
                }
            }
            if let Some(vulgar) = primary.mutate(&[SwapArguments, Vulgar])? {
                self.offer(Some(vulgar), Target::Variant, rng)?;
                if harder {
                    // Not swapped, to keep it apart from the swapped vulgar above.
                    self.offer(primary.mutate(&[Vulgar, style])?, Target::Variant, rng)?;
                }
            }
        }
        Ok(())
    }
}

/// Base and variant questions for `config`, before selection.
pub(crate) fn build_candidates<R: Rng + ?Sized>(
    config: &QuizConfig,
    rng: &mut R,
) -> Result<(Vec<Question>, Vec<Question>), QuizError> {
    let mut facts: Vec<(u32, u32)> = FACT_RANGE
        .flat_map(|x| config.selected_tables.iter().map(move |&table| (x, table)))
        .collect();

    let n = facts.len();
    let mut operations = split_pool(n, OperationType::Multiply, OperationType::Divide);
    let mut swaps = split_pool(n, true, false);
    let mut decimal_styles = split_pool(n, Mutation::DecimalX, Mutation::DecimalY);
    let mut harder_vulgars = split_pool(n, Mutation::VulgarOfDecimal, Mutation::VulgarOf10);

    let mut candidates = Candidates::new();

    while let Some((x, y)) = take_random(&mut facts, rng) {
        let assignment = match (
            take_random(&mut operations, rng),
            take_random(&mut swaps, rng),
            take_random(&mut decimal_styles, rng),
            take_random(&mut harder_vulgars, rng),
        ) {
            (Some(operation), Some(swap), Some(decimal_style), Some(harder_vulgar)) => Assignment {
                operation,
                swap,
                decimal_style,
                harder_vulgar,
            },
            _ => return Err(QuizError::Invariant("assignment pools ran out before facts".into())),
        };

        let primary = QuestionConfiguration::new(x, y, assignment.operation, assignment.swap);
        candidates.add_family(&primary, assignment, config, false, rng)?;

        // The reverse-operation framing only ever supplies variants.
        if let Some(reversed) = primary.mutate(&[Mutation::SwapOperation])? {
            candidates.add_family(&reversed, assignment, config, true, rng)?;
        }
    }

    Ok((candidates.base, candidates.variants))
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Draw `count` questions: base first, then fresh copies of the variants,
/// recycling the variants as often as needed.
fn select<R: Rng + ?Sized>(
    base: Vec<Question>,
    variants: Vec<Question>,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut available = base;
    let mut refills = 0usize;
    let mut selected = Vec::with_capacity(count);

    for i in 0..count {
        if available.is_empty() {
            if variants.is_empty() {
                warn!(wanted = count, got = i, "no questions left to draw from");
                break;
            }
            refills += 1;
            if refills == 2 {
                warn!(wanted = count, distinct = i, "recycling variant questions; quiz will repeat");
            }
            available = variants.clone();
        }

        let Some(mut question) = take_random(&mut available, rng) else {
            break;
        };
        question.place_at(i);
        selected.push(question);
    }
    selected
}
