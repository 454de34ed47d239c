//! Structural rule verification for generated cards and sets.
//!
//! The generator runs these checks on its own output before returning it
//! (tombola rules are cheap to verify: O(27) cells per card), and the test
//! suite reuses them as its oracle.

use std::fmt;

use crate::card_engine::models::{
    Card, CardSet, CARDS_PER_SET, COLUMNS, MAX_NUMBER, NUMBERS_PER_CARD, NUMBERS_PER_ROW, ROWS,
};
use crate::card_engine::pools::COLUMN_RANGES;

/// A violated tombola rule, with enough context to point at the broken cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    CardCount { set_number: u32, found: usize },
    CellCount { card_id: u32, found: usize },
    RowCount { card_id: u32, row: usize, found: usize },
    OutOfRange { card_id: u32, row: usize, col: usize, value: u8 },
    ColumnOrder { card_id: u32, col: usize },
    Coverage { set_number: u32, missing: Vec<u8>, duplicated: Vec<u8> },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::CardCount { set_number, found } => {
                write!(f, "set {set_number} holds {found} cards instead of {CARDS_PER_SET}")
            }
            RuleViolation::CellCount { card_id, found } => {
                write!(f, "card {card_id} holds {found} numbers instead of {NUMBERS_PER_CARD}")
            }
            RuleViolation::RowCount { card_id, row, found } => {
                write!(
                    f,
                    "card {card_id} row {row} holds {found} numbers instead of {NUMBERS_PER_ROW}"
                )
            }
            RuleViolation::OutOfRange { card_id, row, col, value } => {
                write!(
                    f,
                    "card {card_id} cell ({row},{col}) holds {value}, outside its column range"
                )
            }
            RuleViolation::ColumnOrder { card_id, col } => {
                write!(f, "card {card_id} column {col} is not ascending top-to-bottom")
            }
            RuleViolation::Coverage { set_number, missing, duplicated } => {
                write!(
                    f,
                    "set {set_number} does not partition 1-{MAX_NUMBER}: \
                     missing {missing:?}, duplicated {duplicated:?}"
                )
            }
        }
    }
}

/// Check one card: 15 numbers, 5 per row, column-range membership, strict
/// ascending order within each column.
pub fn verify_card(card: &Card) -> Result<(), RuleViolation> {
    let total = card.numbers().len();
    if total != NUMBERS_PER_CARD {
        return Err(RuleViolation::CellCount { card_id: card.id, found: total });
    }

    for row in 0..ROWS {
        let found = card.row_count(row);
        if found != NUMBERS_PER_ROW {
            return Err(RuleViolation::RowCount { card_id: card.id, row, found });
        }
    }

    for col in 0..COLUMNS {
        let (lo, hi) = COLUMN_RANGES[col];
        for row in 0..ROWS {
            if let Some(value) = card.grid[row][col] {
                if !(lo..=hi).contains(&value) {
                    return Err(RuleViolation::OutOfRange { card_id: card.id, row, col, value });
                }
            }
        }
        let values = card.column_values(col);
        if values.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(RuleViolation::ColumnOrder { card_id: card.id, col });
        }
    }

    Ok(())
}

/// Check every card of a set, without the cross-card coverage rule.
/// This is the full contract of the independent-sampling strategy.
pub fn verify_cards(set: &CardSet) -> Result<(), RuleViolation> {
    if set.cards.len() != CARDS_PER_SET {
        return Err(RuleViolation::CardCount {
            set_number: set.set_number,
            found: set.cards.len(),
        });
    }
    for card in &set.cards {
        verify_card(card)?;
    }
    Ok(())
}

/// Check a whole set: every card, plus the exact 1–90 partition across the
/// six cards. This is the full contract of the exact-partition strategy.
pub fn verify_set(set: &CardSet) -> Result<(), RuleViolation> {
    verify_cards(set)?;

    let mut hits = [0u8; MAX_NUMBER as usize + 1];
    for card in &set.cards {
        for n in card.numbers() {
            hits[n as usize] += 1;
        }
    }
    let missing: Vec<u8> = (1..=MAX_NUMBER).filter(|&n| hits[n as usize] == 0).collect();
    let duplicated: Vec<u8> = (1..=MAX_NUMBER).filter(|&n| hits[n as usize] > 1).collect();
    if !missing.is_empty() || !duplicated.is_empty() {
        return Err(RuleViolation::Coverage {
            set_number: set.set_number,
            missing,
            duplicated,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_engine::models::Grid;

    /// A hand-built legal card: columns 0-4 hold triples, rest empty.
    fn legal_card() -> Card {
        let mut grid: Grid = [[None; COLUMNS]; ROWS];
        for col in 0..5 {
            let (lo, _) = COLUMN_RANGES[col];
            for row in 0..ROWS {
                grid[row][col] = Some(lo + row as u8);
            }
        }
        Card { id: 1, set_number: 1, card_number: 1, grid }
    }

    #[test]
    fn accepts_a_legal_card() {
        assert_eq!(verify_card(&legal_card()), Ok(()));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let mut card = legal_card();
        card.grid[0][0] = None;
        assert!(matches!(
            verify_card(&card),
            Err(RuleViolation::CellCount { found: 14, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_value() {
        let mut card = legal_card();
        card.grid[0][0] = Some(10); // column 0 is 1-9
        assert!(matches!(
            verify_card(&card),
            Err(RuleViolation::OutOfRange { row: 0, col: 0, value: 10, .. })
        ));
    }

    #[test]
    fn rejects_descending_column() {
        let mut card = legal_card();
        let top = card.grid[0][1];
        card.grid[0][1] = card.grid[2][1];
        card.grid[2][1] = top;
        assert!(matches!(
            verify_card(&card),
            Err(RuleViolation::ColumnOrder { col: 1, .. })
        ));
    }

    #[test]
    fn rejects_equal_values_in_a_column() {
        let mut card = legal_card();
        card.grid[1][0] = card.grid[0][0];
        assert!(matches!(
            verify_card(&card),
            Err(RuleViolation::ColumnOrder { col: 0, .. })
        ));
    }

    #[test]
    fn rejects_a_set_with_missing_numbers() {
        let set = CardSet { set_number: 3, cards: vec![legal_card(); CARDS_PER_SET] };
        // Six identical cards: massive duplication, most of 1-90 missing.
        match verify_set(&set) {
            Err(RuleViolation::Coverage { set_number, missing, duplicated }) => {
                assert_eq!(set_number, 3);
                assert!(!missing.is_empty());
                assert!(!duplicated.is_empty());
            }
            other => panic!("expected a coverage violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_a_short_set() {
        let set = CardSet { set_number: 1, cards: vec![legal_card(); 5] };
        assert!(matches!(
            verify_cards(&set),
            Err(RuleViolation::CardCount { found: 5, .. })
        ));
    }
}
