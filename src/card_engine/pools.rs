use rand::Rng;

use crate::card_engine::models::{COLUMNS, MAX_NUMBER};

/// Inclusive number range of each of the nine columns.
pub const COLUMN_RANGES: [(u8, u8); COLUMNS] = [
    (1, 9),
    (10, 19),
    (20, 29),
    (30, 39),
    (40, 49),
    (50, 59),
    (60, 69),
    (70, 79),
    (80, 90),
];

/// Column a number belongs to. `number` must be in 1..=90.
pub fn column_of(number: u8) -> usize {
    debug_assert!((1..=MAX_NUMBER).contains(&number));
    match number {
        1..=9 => 0,
        80..=90 => 8,
        n => (n / 10) as usize,
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The numbers 1–90 split into the nine column ranges, every pool in random
/// order. Draining all pools consumes each number exactly once, which is what
/// gives the exact-partition strategy its full-coverage guarantee.
pub struct ColumnPools {
    pools: [Vec<u8>; COLUMNS],
}

impl ColumnPools {
    /// Shuffle 1..=90 with `rng`, partition by column range, then shuffle
    /// each pool again. Pool sizes are fixed: 9, 10×7, 11.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut numbers: Vec<u8> = (1..=MAX_NUMBER).collect();
        shuffle(rng, &mut numbers);

        let mut pools: [Vec<u8>; COLUMNS] = Default::default();
        for n in numbers {
            pools[column_of(n)].push(n);
        }
        for pool in &mut pools {
            shuffle(rng, pool);
        }

        ColumnPools { pools }
    }

    /// Remaining numbers in one column's pool.
    pub fn remaining(&self, col: usize) -> usize {
        self.pools[col].len()
    }

    /// Draw `n` numbers from one column's pool; panics if the pool is short.
    pub fn take(&mut self, col: usize, n: usize) -> Vec<u8> {
        assert!(n <= self.pools[col].len(), "column pool exhausted");
        self.pools[col].drain(..n).collect()
    }
}
