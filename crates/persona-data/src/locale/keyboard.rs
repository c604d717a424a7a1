//! Keyboard adjacency derived from physical key rows.
//!
//! Rows are listed top to bottom with each row offset half a key to the right
//! of the one above it, as on a standard staggered keyboard. A key at column
//! `c` therefore touches columns `c` and `c + 1` on the row above and columns
//! `c - 1` and `c` on the row below.

use std::collections::HashMap;

/// Builds a key-to-neighbours table from staggered keyboard rows.
pub(super) fn adjacency_from_rows(rows: &[&str]) -> HashMap<char, Box<[char]>> {
    let grid: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    let mut table = HashMap::new();

    for (row, keys) in grid.iter().enumerate() {
        for (column, key) in keys.iter().enumerate() {
            let above = row.checked_sub(1);
            let below = row.checked_add(1);
            let candidates = [
                (Some(row), column.checked_sub(1)),
                (Some(row), column.checked_add(1)),
                (above, Some(column)),
                (above, column.checked_add(1)),
                (below, column.checked_sub(1)),
                (below, Some(column)),
            ];
            let neighbours: Box<[char]> = candidates
                .into_iter()
                .filter_map(|(r, c)| key_at(&grid, r, c))
                .filter(|neighbour| neighbour != key)
                .collect();
            table.insert(*key, neighbours);
        }
    }

    table
}

fn key_at(grid: &[Vec<char>], row: Option<usize>, column: Option<usize>) -> Option<char> {
    grid.get(row?)?.get(column?).copied()
}
