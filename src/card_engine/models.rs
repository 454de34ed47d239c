use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card_engine::checks::RuleViolation;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Rows per card.
pub const ROWS: usize = 3;
/// Columns per card.
pub const COLUMNS: usize = 9;
/// Cards in one set (one "player's" bundle).
pub const CARDS_PER_SET: usize = 6;
/// Non-empty cells per card.
pub const NUMBERS_PER_CARD: usize = 15;
/// Non-empty cells per row.
pub const NUMBERS_PER_ROW: usize = 5;
/// Highest number in play.
pub const MAX_NUMBER: u8 = 90;

// ---------------------------------------------------------------------------
// Card / set types
// ---------------------------------------------------------------------------

/// A card face: 3 rows × 9 columns, `None` for empty cells.
/// Row-major, row 0 is the top row.
pub type Grid = [[Option<u8>; COLUMNS]; ROWS];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within a generated batch: `(set_number - 1) * 6 + card_number`.
    pub id: u32,
    pub set_number: u32,
    /// Position within the set, 1–6.
    pub card_number: u8,
    pub grid: Grid,
}

impl Card {
    /// All numbers on the card, scanned row by row.
    pub fn numbers(&self) -> Vec<u8> {
        self.grid
            .iter()
            .flat_map(|row| row.iter().filter_map(|cell| *cell))
            .collect()
    }

    /// Occupied cells in one row.
    pub fn row_count(&self, row: usize) -> usize {
        self.grid[row].iter().filter(|cell| cell.is_some()).count()
    }

    /// Occupied values in one column, top to bottom.
    pub fn column_values(&self, col: usize) -> Vec<u8> {
        self.grid.iter().filter_map(|row| row[col]).collect()
    }
}

impl fmt::Display for Card {
    /// Box-drawn card frame, suitable for terminal output and print sheets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔════╤════╤════╤════╤════╤════╤════╤════╤════╗")?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "║")?;
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Some(n) => write!(f, " {n:>2} ")?,
                    None => write!(f, "    ")?,
                }
                if c < COLUMNS - 1 {
                    write!(f, "│")?;
                }
            }
            writeln!(f, "║")?;
            if r < ROWS - 1 {
                writeln!(f, "╟────┼────┼────┼────┼────┼────┼────┼────┼────╢")?;
            }
        }
        write!(f, "╚════╧════╧════╧════╧════╧════╧════╧════╧════╝")
    }
}

/// One player's bundle of six cards.
///
/// Under [`GenerationStrategy::ExactPartition`] the six cards together cover
/// 1–90 exactly once each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub set_number: u32,
    pub cards: Vec<Card>,
}

/// Card id unique within a batch and increasing in (set, card) order.
pub fn card_id(set_number: u32, card_index: usize) -> u32 {
    (set_number - 1) * CARDS_PER_SET as u32 + card_index as u32 + 1
}

// ---------------------------------------------------------------------------
// Request / config / errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStrategy {
    /// Partition 1–90 exactly over the six cards of each set. Primary.
    ExactPartition,
    /// Sample each card on its own, padding/trimming to 15 numbers.
    /// No cross-card coverage guarantee; kept for output compatibility
    /// with earlier deployments.
    IndependentSampling,
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStrategy::ExactPartition => write!(f, "exact-partition"),
            GenerationStrategy::IndependentSampling => write!(f, "independent-sampling"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// How many sets (players) to generate.
    pub sets: u32,
    pub strategy: GenerationStrategy,
    /// `Some(seed)` makes the output fully deterministic; `None` seeds from
    /// OS entropy.
    pub rng_seed: Option<u64>,
}

impl GenerateRequest {
    /// Request with defaults: exact partition, entropy seed.
    pub fn new(sets: u32) -> Self {
        GenerateRequest {
            sets,
            strategy: GenerationStrategy::ExactPartition,
            rng_seed: None,
        }
    }
}

/// Deployment-level bounds, passed explicitly rather than read from ambient
/// state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on `GenerateRequest::sets`.
    pub max_sets: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig { max_sets: 600 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Client error: the requested set count is outside `[1, max]`.
    #[error("set count must be between 1 and {max} (got {requested})")]
    InvalidCount { requested: u32, max: u32 },
    /// Server error: a generated set failed the structural post-check.
    /// Never expected in normal operation; trips loudly on a logic
    /// regression instead of shipping malformed cards.
    #[error("generated cards failed a structural check: {0}")]
    Corrupt(RuleViolation),
}
