//! Property-based tests for the day 12 height-map search

use advent_solutions::year_2022::day_12::{HeightMap, SearchError};
use proptest::prelude::*;

/// Random rectangular grids with exactly one `S` and one `E`.
fn grid_strategy() -> impl Strategy<Value = String> {
    (1usize..=8, 2usize..=8)
        .prop_flat_map(|(rows, cols)| {
            (
                prop::collection::vec(prop::char::range('a', 'z'), rows * cols),
                0..rows * cols,
                0..rows * cols,
                Just(cols),
            )
        })
        .prop_filter_map("markers need two distinct cells", |(mut cells, s, e, cols)| {
            if s == e {
                return None;
            }
            cells[s] = 'S';
            cells[e] = 'E';
            let grid = cells
                .chunks(cols)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            Some(grid)
        })
}

/// Cost from one origin, computed on a fresh map whose start marker has been
/// moved to that origin.
fn cost_from(grid: &str, origin_row: usize, origin_col: usize) -> Option<u32> {
    let map = HeightMap::parse(grid).unwrap();
    let start = map.start();
    let mut rows: Vec<Vec<char>> = grid.lines().map(|l| l.chars().collect()).collect();
    rows[start.row][start.col] = 'a';
    rows[origin_row][origin_col] = 'S';
    let moved = rows
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    HeightMap::parse(&moved).unwrap().start_to_end_cost().ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Fixed grid, fixed origin: the searches answer the same every time.
    #[test]
    fn queries_are_deterministic(grid in grid_strategy()) {
        let map = HeightMap::parse(&grid).unwrap();
        prop_assert_eq!(map.start_to_end_cost(), map.start_to_end_cost());
        prop_assert_eq!(map.lowest_starting_cost(), map.lowest_starting_cost());
    }

    /// The start is one of the lowest cells, so the all-origins query can
    /// only match or improve on the start-to-end cost.
    #[test]
    fn all_origins_cost_never_exceeds_start_cost(grid in grid_strategy()) {
        let map = HeightMap::parse(&grid).unwrap();
        prop_assert!(map.lowest().contains(&map.start()));

        if let Ok(from_start) = map.start_to_end_cost() {
            let lowest = map.lowest_starting_cost();
            prop_assert!(lowest.is_ok());
            prop_assert!(lowest.unwrap() <= from_start);
        }
    }

    /// The all-origins query equals the minimum over independent per-origin
    /// searches, with unreachable origins discarded; it fails only when
    /// every origin is unreachable.
    #[test]
    fn all_origins_matches_independent_searches(grid in grid_strategy()) {
        let map = HeightMap::parse(&grid).unwrap();
        let best = map
            .lowest()
            .iter()
            .filter_map(|p| cost_from(&grid, p.row, p.col))
            .min();

        match (best, map.lowest_starting_cost()) {
            (Some(expected), Ok(actual)) => prop_assert_eq!(expected, actual),
            (None, Err(SearchError::NoValidPath)) => {}
            (expected, actual) => {
                prop_assert!(false, "expected {:?}, got {:?}", expected, actual)
            }
        }
    }

    /// Any reported cost is at least the Manhattan distance between start
    /// and end, and a shortest path never revisits a cell.
    #[test]
    fn cost_is_bounded_by_geometry(grid in grid_strategy()) {
        let map = HeightMap::parse(&grid).unwrap();
        if let Ok(cost) = map.start_to_end_cost() {
            let (start, end) = (map.start(), map.end());
            let manhattan =
                start.row.abs_diff(end.row) as u32 + start.col.abs_diff(end.col) as u32;
            let cells = grid.lines().map(str::len).sum::<usize>() as u32;
            prop_assert!(cost >= manhattan);
            prop_assert!(cost < cells);
        }
    }
}
