//! Quiz configuration, its validation, and the key/value snapshot used to
//! persist it between sessions.
//!
//! The snapshot is a single line of `key=value` pairs separated by `;`:
//!
//! ```text
//! selectedTables={2,5,7}; count=40; includePlain=true; includeSquares=false;
//! includeDecimals=false; includeVulgars=true; includeHarderInVulgars=false; columnCount=4
//! ```
//!
//! Missing keys fall back to the defaults. `includePlain` defaults to `true`
//! so snapshots written before the other kinds existed still load.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::error::ConfigError;

pub const MIN_TABLE: u32 = 1;
pub const MAX_TABLE: u32 = 12;
pub const DEFAULT_COUNT: usize = 40;
pub const DEFAULT_COLUMNS: usize = 4;

/// What to put in a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Times tables to practise; each is paired with every number 2..=12.
    pub selected_tables: Vec<u32>,
    /// Number of questions wanted.
    pub count: usize,
    pub include_plain: bool,
    pub include_squares: bool,
    pub include_decimals: bool,
    pub include_vulgars: bool,
    /// Vulgar fractions of decimals and of 10x numbers. Only honoured with
    /// `include_vulgars`.
    pub include_harder_in_vulgars: bool,
    /// Columns used when laying the quiz out.
    pub column_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            selected_tables: Vec::new(),
            count: DEFAULT_COUNT,
            include_plain: true,
            include_squares: false,
            include_decimals: false,
            include_vulgars: false,
            include_harder_in_vulgars: false,
            column_count: DEFAULT_COLUMNS,
        }
    }
}

impl QuizConfig {
    /// Default settings over the given tables.
    pub fn new(selected_tables: impl Into<Vec<u32>>) -> Self {
        QuizConfig {
            selected_tables: selected_tables.into(),
            ..QuizConfig::default()
        }
    }

    /// True if at least one question kind is switched on.
    pub fn any_kind_enabled(&self) -> bool {
        self.include_plain || self.include_squares || self.include_decimals || self.include_vulgars
    }

    /// Clears `include_harder_in_vulgars` when vulgars are off.
    pub fn normalised(mut self) -> Self {
        if !self.include_vulgars {
            self.include_harder_in_vulgars = false;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selected_tables.is_empty() {
            return Err(ConfigError::NoSelection);
        }
        if let Some(&bad) = self
            .selected_tables
            .iter()
            .find(|n| !(MIN_TABLE..=MAX_TABLE).contains(*n))
        {
            return Err(ConfigError::TableOutOfRange(bad));
        }
        if !self.any_kind_enabled() {
            return Err(ConfigError::NothingEnabled);
        }
        if self.column_count == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }

    /// Render as a key/value snapshot (see module docs).
    pub fn to_snapshot(&self) -> String {
        let tables = self
            .selected_tables
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "selectedTables={{{tables}}}; count={}; includePlain={}; includeSquares={}; \
             includeDecimals={}; includeVulgars={}; includeHarderInVulgars={}; columnCount={}",
            self.count,
            self.include_plain,
            self.include_squares,
            self.include_decimals,
            self.include_vulgars,
            self.include_harder_in_vulgars,
            self.column_count,
        )
    }

    /// Load a snapshot. Unknown keys are ignored; unreadable numbers and
    /// booleans fall back to their defaults. The result is validated.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, ConfigError> {
        let mut config = QuizConfig::default();
        let mut tables = None;

        for pair in snapshot.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key.to_ascii_lowercase().as_str() {
                "selectedtables" => tables = Some(parse_tables(value)?),
                "count" => config.count = parse_or(key, value, DEFAULT_COUNT),
                "includeplain" => config.include_plain = parse_or(key, value, true),
                "includesquares" => config.include_squares = parse_or(key, value, false),
                "includedecimals" => config.include_decimals = parse_or(key, value, false),
                "includevulgars" => config.include_vulgars = parse_or(key, value, false),
                "includeharderinvulgars" => config.include_harder_in_vulgars = parse_or(key, value, false),
                "columncount" => config.column_count = parse_or(key, value, DEFAULT_COLUMNS),
                _ => debug!(key, "ignoring unknown snapshot key"),
            }
        }

        config.selected_tables = tables.ok_or(ConfigError::NoSelection)?;
        let config = config.normalised();
        config.validate()?;
        Ok(config)
    }
}

/// `{2,5,7}` → `[2, 5, 7]`. Braces are required and the list must be non-empty.
fn parse_tables(value: &str) -> Result<Vec<u32>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: "selectedTables".into(),
        value: value.into(),
    };
    let inner = value
        .strip_prefix('{')
        .and_then(|v| v.strip_suffix('}'))
        .ok_or_else(invalid)?;
    if inner.trim().is_empty() {
        return Err(ConfigError::NoSelection);
    }
    inner
        .split(',')
        .map(|n| n.trim().parse::<u32>().map_err(|_| invalid()))
        .collect()
}

trait SnapshotValue: Sized {
    fn parse_value(value: &str) -> Option<Self>;
}

impl SnapshotValue for bool {
    fn parse_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl SnapshotValue for usize {
    fn parse_value(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

fn parse_or<T: SnapshotValue>(key: &str, value: &str, default: T) -> T {
    T::parse_value(value).unwrap_or_else(|| {
        debug!(key, value, "unreadable snapshot value, using default");
        default
    })
}

/// A configuration plus an optional RNG seed for reproducible quizzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub config: QuizConfig,
    /// `Some` for a deterministic quiz, `None` for fresh entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Unseeded request.
    pub fn new(config: QuizConfig) -> Self {
        QuizRequest { config, rng_seed: None }
    }

    pub fn seeded(config: QuizConfig, seed: u64) -> Self {
        QuizRequest { config, rng_seed: Some(seed) }
    }
}
