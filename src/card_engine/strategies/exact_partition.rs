//! Exact-partition strategy: the six cards of a set share out the numbers
//! 1–90 with no repeats and no omissions.
//!
//! Every card takes one number from every column (9 numbers) plus exactly
//! six second numbers spread over the columns, ending at 15. The six counts
//! for a column always sum to its pool size (9, 10 or 11), so draining the
//! pools partitions 1–90 across the set. Each card's slice is sorted and
//! placed into its column, then the card's rows are balanced to five
//! numbers each.

use rand::Rng;

use crate::card_engine::layout::{balance_rows, place_in_column};
use crate::card_engine::models::{
    card_id, Card, Grid, CARDS_PER_SET, COLUMNS, NUMBERS_PER_CARD, ROWS,
};
use crate::card_engine::pools::{shuffle, ColumnPools};

/// Decide how many numbers of each column go to each card.
///
/// Base count is one per column per card; a column with a pool of `n` then
/// hands out `n - 6` second numbers. Handing them to the cards with the most
/// remaining capacity (random tie-break, columns visited in random order)
/// keeps the per-card totals exact: splitting each column's remainder
/// independently, as the original row-game generators do, can leave a card
/// at 13 or 17 numbers, which no row repair can fix.
fn column_counts<R: Rng>(
    rng: &mut R,
    pool_sizes: [usize; COLUMNS],
) -> [[usize; COLUMNS]; CARDS_PER_SET] {
    let mut counts = [[1usize; COLUMNS]; CARDS_PER_SET];
    let mut wanted = [NUMBERS_PER_CARD - COLUMNS; CARDS_PER_SET];

    let mut col_order: Vec<usize> = (0..COLUMNS).collect();
    shuffle(rng, &mut col_order);

    for col in col_order {
        let extras = pool_sizes[col] - CARDS_PER_SET;
        let mut card_order: Vec<usize> = (0..CARDS_PER_SET).collect();
        shuffle(rng, &mut card_order);
        // Stable sort after the shuffle: highest remaining capacity first,
        // ties in random order.
        card_order.sort_by_key(|&card| std::cmp::Reverse(wanted[card]));
        for &card in card_order.iter().take(extras) {
            counts[card][col] = 2;
            wanted[card] -= 1;
        }
    }

    counts
}

/// Generate the six cards of one set.
pub fn generate_set<R: Rng>(rng: &mut R, set_number: u32) -> Vec<Card> {
    let mut pools = ColumnPools::new_shuffled(rng);
    let pool_sizes = std::array::from_fn(|col| pools.remaining(col));
    let counts = column_counts(rng, pool_sizes);

    let mut grids: Vec<Grid> = vec![[[None; COLUMNS]; ROWS]; CARDS_PER_SET];
    for col in 0..COLUMNS {
        for (card, grid) in grids.iter_mut().enumerate() {
            let mut numbers = pools.take(col, counts[card][col]);
            place_in_column(rng, grid, col, &mut numbers);
        }
    }

    for grid in &mut grids {
        balance_rows(grid);
    }

    grids
        .into_iter()
        .enumerate()
        .map(|(index, grid)| Card {
            id: card_id(set_number, index),
            set_number,
            card_number: index as u8 + 1,
            grid,
        })
        .collect()
}
