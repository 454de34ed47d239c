//! Independent-sampling strategy: every card is drawn on its own.
//!
//! Per column the card samples zero to three numbers from the column's
//! range, then pads or trims the draw to exactly 15 numbers before placing
//! and balancing rows with the shared layout helpers. Cards satisfy all
//! per-card tombola rules, but a set gives no 1–90 coverage guarantee —
//! numbers repeat across cards and others never appear. Kept only for
//! output compatibility with deployments of the older single-card
//! generator.

use rand::Rng;

use crate::card_engine::layout::{balance_rows, place_in_column};
use crate::card_engine::models::{
    card_id, Card, Grid, CARDS_PER_SET, COLUMNS, NUMBERS_PER_CARD, ROWS,
};
use crate::card_engine::pools::{shuffle, COLUMN_RANGES};

/// Sample zero to three distinct numbers from one column's range.
fn sample_column<R: Rng>(rng: &mut R, col: usize) -> Vec<u8> {
    let (lo, hi) = COLUMN_RANGES[col];
    let mut candidates: Vec<u8> = (lo..=hi).collect();
    shuffle(rng, &mut candidates);
    let quantity = rng.gen_range(0..=3);
    candidates.truncate(quantity);
    candidates
}

/// Add numbers to random columns until the card holds 15.
///
/// Only columns with free capacity and unused range values are eligible;
/// the older generator padded without the capacity cap and could overflow
/// a column past its three rows.
fn pad_to_quota<R: Rng>(rng: &mut R, columns: &mut [Vec<u8>; COLUMNS], missing: usize) {
    for _ in 0..missing {
        loop {
            let col = rng.gen_range(0..COLUMNS);
            if columns[col].len() >= ROWS {
                continue;
            }
            let (lo, hi) = COLUMN_RANGES[col];
            let unused: Vec<u8> = (lo..=hi).filter(|n| !columns[col].contains(n)).collect();
            if unused.is_empty() {
                continue;
            }
            columns[col].push(unused[rng.gen_range(0..unused.len())]);
            break;
        }
    }
}

/// Drop numbers from random non-empty columns until the card holds 15.
fn trim_to_quota<R: Rng>(rng: &mut R, columns: &mut [Vec<u8>; COLUMNS], excess: usize) {
    for _ in 0..excess {
        let occupied: Vec<usize> = (0..COLUMNS).filter(|&c| !columns[c].is_empty()).collect();
        let col = occupied[rng.gen_range(0..occupied.len())];
        let victim = rng.gen_range(0..columns[col].len());
        columns[col].swap_remove(victim);
    }
}

/// Generate one card, ignoring every other card in the batch.
pub fn generate_card<R: Rng>(rng: &mut R, set_number: u32, card_index: usize) -> Card {
    let mut columns: [Vec<u8>; COLUMNS] = std::array::from_fn(|col| sample_column(rng, col));

    let total: usize = columns.iter().map(Vec::len).sum();
    if total < NUMBERS_PER_CARD {
        pad_to_quota(rng, &mut columns, NUMBERS_PER_CARD - total);
    } else if total > NUMBERS_PER_CARD {
        trim_to_quota(rng, &mut columns, total - NUMBERS_PER_CARD);
    }

    let mut grid: Grid = [[None; COLUMNS]; ROWS];
    for (col, numbers) in columns.iter_mut().enumerate() {
        place_in_column(rng, &mut grid, col, numbers);
    }
    balance_rows(&mut grid);

    Card {
        id: card_id(set_number, card_index),
        set_number,
        card_number: card_index as u8 + 1,
        grid,
    }
}

/// Generate six independent cards labelled as one set.
pub fn generate_set<R: Rng>(rng: &mut R, set_number: u32) -> Vec<Card> {
    (0..CARDS_PER_SET)
        .map(|index| generate_card(rng, set_number, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_engine::checks::verify_card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_card_satisfies_the_per_card_rules() {
        let mut rng = StdRng::seed_from_u64(31);
        for set_number in 1..=30 {
            for card in generate_set(&mut rng, set_number) {
                verify_card(&card).unwrap_or_else(|v| panic!("card {}: {v}", card.id));
            }
        }
    }

    #[test]
    fn pad_respects_column_capacity_and_uniqueness() {
        let mut rng = StdRng::seed_from_u64(32);
        // Start from an empty draw and pad all the way up to 15.
        let mut columns: [Vec<u8>; COLUMNS] = Default::default();
        pad_to_quota(&mut rng, &mut columns, NUMBERS_PER_CARD);
        let total: usize = columns.iter().map(Vec::len).sum();
        assert_eq!(total, NUMBERS_PER_CARD);
        for (col, numbers) in columns.iter().enumerate() {
            assert!(numbers.len() <= ROWS, "column {col} over capacity");
            let mut unique = numbers.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), numbers.len(), "column {col} has duplicates");
        }
    }

    #[test]
    fn trim_stops_at_the_quota() {
        let mut rng = StdRng::seed_from_u64(33);
        // Fully loaded columns: 27 numbers, trim down to 15.
        let mut columns: [Vec<u8>; COLUMNS] = std::array::from_fn(|col| {
            let (lo, _) = COLUMN_RANGES[col];
            vec![lo, lo + 1, lo + 2]
        });
        trim_to_quota(&mut rng, &mut columns, 27 - NUMBERS_PER_CARD);
        let total: usize = columns.iter().map(Vec::len).sum();
        assert_eq!(total, NUMBERS_PER_CARD);
    }
}
