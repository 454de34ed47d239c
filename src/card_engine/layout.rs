//! Row placement and repair for a single card.
//!
//! Columns are filled independently, so after placement the three rows rarely
//! hold five numbers each. [`balance_rows`] repairs the counts by moving
//! cells between rows, then re-sorts every column top-to-bottom so the
//! column-ascending invariant survives the repair.

use rand::Rng;

use crate::card_engine::models::{Grid, COLUMNS, NUMBERS_PER_ROW, ROWS};
use crate::card_engine::pools::shuffle;

/// Place up to three numbers into one column of a card.
///
/// One number goes to a uniformly random row; two go to two distinct rows
/// taken from a shuffled row permutation; three fill the column. Occupied
/// rows always read ascending top-to-bottom.
pub fn place_in_column<R: Rng>(rng: &mut R, grid: &mut Grid, col: usize, numbers: &mut Vec<u8>) {
    numbers.sort_unstable();
    match numbers.len() {
        0 => {}
        1 => {
            let row = rng.gen_range(0..ROWS);
            grid[row][col] = Some(numbers[0]);
        }
        2 => {
            let mut rows = [0usize, 1, 2];
            shuffle(rng, &mut rows);
            let mut picked = [rows[0], rows[1]];
            picked.sort_unstable();
            grid[picked[0]][col] = Some(numbers[0]);
            grid[picked[1]][col] = Some(numbers[1]);
        }
        3 => {
            for row in 0..ROWS {
                grid[row][col] = Some(numbers[row]);
            }
        }
        n => unreachable!("a column never receives more than 3 numbers (got {n})"),
    }
}

/// Occupied cells per row.
pub fn row_counts(grid: &Grid) -> [usize; ROWS] {
    let mut counts = [0usize; ROWS];
    for (row, cells) in grid.iter().enumerate() {
        counts[row] = cells.iter().filter(|cell| cell.is_some()).count();
    }
    counts
}

/// Force every row to exactly five occupied cells.
///
/// Repeatedly moves one cell from the fullest row to the emptiest row,
/// through any column where the target cell is free. The grid must hold 15
/// numbers in total, at most three per column; under those conditions a
/// movable cell always exists and the loop terminates. Columns are re-sorted
/// afterwards because a cross-row move can break their ordering.
pub fn balance_rows(grid: &mut Grid) {
    let mut counts = row_counts(grid);

    while counts.iter().any(|&c| c != NUMBERS_PER_ROW) {
        let over = (0..ROWS).max_by_key(|&r| counts[r]).unwrap();
        let under = (0..ROWS).min_by_key(|&r| counts[r]).unwrap();

        let col = (0..COLUMNS)
            .find(|&c| grid[over][c].is_some() && grid[under][c].is_none())
            .expect("an over-filled row always has a column free in the under-filled row");

        grid[under][col] = grid[over][col].take();
        counts[over] -= 1;
        counts[under] += 1;
    }

    resort_columns(grid);
}

/// Re-sort every column so occupied cells read ascending top-to-bottom,
/// without changing which cells are occupied.
pub fn resort_columns(grid: &mut Grid) {
    for col in 0..COLUMNS {
        let mut values: Vec<u8> = grid.iter().filter_map(|row| row[col]).collect();
        values.sort_unstable();
        let mut next = values.into_iter();
        for row in 0..ROWS {
            if grid[row][col].is_some() {
                grid[row][col] = next.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_grid() -> Grid {
        [[None; COLUMNS]; ROWS]
    }

    #[test]
    fn place_two_numbers_keeps_column_ascending() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let mut grid = empty_grid();
            let mut numbers = vec![27, 21];
            place_in_column(&mut rng, &mut grid, 2, &mut numbers);
            let values: Vec<u8> = grid.iter().filter_map(|row| row[2]).collect();
            assert_eq!(values, vec![21, 27]);
        }
    }

    #[test]
    fn place_three_numbers_fills_the_column_in_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut grid = empty_grid();
        let mut numbers = vec![85, 80, 90];
        place_in_column(&mut rng, &mut grid, 8, &mut numbers);
        assert_eq!(grid[0][8], Some(80));
        assert_eq!(grid[1][8], Some(85));
        assert_eq!(grid[2][8], Some(90));
    }

    #[test]
    fn balance_rows_reaches_five_per_row() {
        // Worst case: 6 numbers in row 0, 5 in row 1, 4 in row 2.
        let mut grid = empty_grid();
        let mut n = 1u8;
        for col in 0..6 {
            grid[0][col] = Some(n);
            n += 10;
        }
        n = 2;
        for col in 0..5 {
            grid[1][col] = Some(n);
            n += 10;
        }
        n = 3;
        for col in 0..4 {
            grid[2][col] = Some(n);
            n += 10;
        }
        balance_rows(&mut grid);
        assert_eq!(row_counts(&grid), [5, 5, 5]);
    }

    #[test]
    fn balance_rows_restores_column_order() {
        // 7/5/3 split forces moves that would break ordering without the
        // re-sort pass.
        let mut grid = empty_grid();
        for col in 0..7 {
            grid[0][col] = Some(9 + col as u8 * 10);
        }
        for col in 0..5 {
            grid[1][col] = Some(5 + col as u8 * 10);
        }
        for col in 0..3 {
            grid[2][col] = Some(1 + col as u8 * 10);
        }
        balance_rows(&mut grid);
        assert_eq!(row_counts(&grid), [5, 5, 5]);
        for col in 0..COLUMNS {
            let values: Vec<u8> = grid.iter().filter_map(|row| row[col]).collect();
            let mut sorted = values.clone();
            sorted.sort_unstable();
            assert_eq!(values, sorted, "column {col} out of order after repair");
        }
    }

    #[test]
    fn resort_columns_preserves_occupancy() {
        let mut grid = empty_grid();
        grid[0][4] = Some(49);
        grid[2][4] = Some(41);
        resort_columns(&mut grid);
        assert_eq!(grid[0][4], Some(41));
        assert_eq!(grid[1][4], None);
        assert_eq!(grid[2][4], Some(49));
    }
}
