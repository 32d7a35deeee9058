//! Day 12: fewest steps across an elevation grid
//!
//! The map is a rectangular grid of elevations `a..=z` with one start marker
//! `S` (elevation `a`) and one end marker `E` (elevation `z`). A step may
//! climb at most one elevation level; descending is unrestricted. Both
//! queries are breadth-first searches over unit-cost moves.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};
use rayon::prelude::*;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 12, tags = ["2022", "grid", "search"])]
pub struct Solver;

/// A grid cell, identified by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// Construction-time errors: the input is not a well-formed height map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("height map is empty")]
    Empty,
    #[error("row {row} has length {len}, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid cell {0:?} at row {1}, column {2}")]
    InvalidCell(char, usize, usize),
    #[error("missing {0:?} marker")]
    MissingMarker(char),
    #[error("more than one {0:?} marker")]
    DuplicateMarker(char),
}

/// Query-time outcomes when no route exists. These are reported results,
/// not defects: many low cells legitimately cannot reach the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no path from start to end")]
    NoPath,
    #[error("no lowest-elevation cell can reach the end")]
    NoValidPath,
}

/// An immutable elevation grid with its designated start and end cells.
///
/// Elevations are stored normalized (`0` for `a` through `25` for `z`, the
/// markers rewritten to their elevations) and never change after
/// construction; every query runs an independent search over the same grid.
#[derive(Debug, Clone)]
pub struct HeightMap {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    start: Point,
    end: Point,
    lowest: Vec<Point>,
}

impl HeightMap {
    /// Parse the raw multi-line grid text.
    ///
    /// Every row must have the same length, and exactly one `S` and one `E`
    /// must appear. `S` is recorded as the start and normalized to elevation
    /// `a`; `E` is recorded as the end and normalized to `z`. Every cell at
    /// elevation `a` after normalization (the start included) is collected
    /// as a candidate origin for [`HeightMap::lowest_starting_cost`].
    pub fn parse(input: &str) -> Result<Self, MapError> {
        let mut cells = Vec::new();
        let mut start = None;
        let mut end = None;
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in input.lines().map(str::trim_end).enumerate() {
            if row == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(MapError::Ragged {
                    row,
                    len: line.len(),
                    expected: cols,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let elevation = match c {
                    'S' => {
                        if start.replace(Point { row, col }).is_some() {
                            return Err(MapError::DuplicateMarker('S'));
                        }
                        0
                    }
                    'E' => {
                        if end.replace(Point { row, col }).is_some() {
                            return Err(MapError::DuplicateMarker('E'));
                        }
                        25
                    }
                    'a'..='z' => c as u8 - b'a',
                    _ => return Err(MapError::InvalidCell(c, row, col)),
                };
                cells.push(elevation);
            }
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(MapError::Empty);
        }
        let start = start.ok_or(MapError::MissingMarker('S'))?;
        let end = end.ok_or(MapError::MissingMarker('E'))?;

        let lowest = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Point { row, col }))
            .filter(|&p| cells[p.row * cols + p.col] == 0)
            .collect();

        Ok(Self {
            rows,
            cols,
            cells,
            start,
            end,
            lowest,
        })
    }

    /// The designated start cell (the original `S`).
    pub fn start(&self) -> Point {
        self.start
    }

    /// The designated end cell (the original `E`).
    pub fn end(&self) -> Point {
        self.end
    }

    /// Every cell at the lowest elevation, the start included.
    pub fn lowest(&self) -> &[Point] {
        &self.lowest
    }

    /// Fewest steps from the designated start to the end.
    pub fn start_to_end_cost(&self) -> Result<u32, SearchError> {
        self.shortest_path(self.start).ok_or(SearchError::NoPath)
    }

    /// Fewest steps to the end from any lowest-elevation cell.
    ///
    /// Each origin is searched independently (the searches share no mutable
    /// state, so they fan out across the rayon pool); origins that cannot
    /// reach the end are discarded, and only a grid where every origin is
    /// stuck reports an error.
    pub fn lowest_starting_cost(&self) -> Result<u32, SearchError> {
        self.lowest
            .par_iter()
            .filter_map(|&origin| self.shortest_path(origin))
            .min()
            .ok_or(SearchError::NoValidPath)
    }

    /// Breadth-first search from `origin`, returning the fewest steps to the
    /// end, or `None` when the frontier empties first.
    ///
    /// Points are marked visited when dequeued, not when enqueued, so the
    /// frontier may hold duplicates; with unit edge weights the first
    /// dequeue of a point is still along a shortest path, and later
    /// duplicates are skipped.
    fn shortest_path(&self, origin: Point) -> Option<u32> {
        let mut visited = vec![false; self.cells.len()];
        let mut frontier = VecDeque::new();
        frontier.push_back((origin, 0u32));

        while let Some((point, distance)) = frontier.pop_front() {
            let index = self.index(point);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            if point == self.end {
                return Some(distance);
            }
            for next in self.neighbors(point) {
                if self.can_step(point, next) {
                    frontier.push_back((next, distance + 1));
                }
            }
        }
        None
    }

    fn index(&self, point: Point) -> usize {
        point.row * self.cols + point.col
    }

    fn elevation(&self, point: Point) -> u8 {
        self.cells[self.index(point)]
    }

    /// A step may rise by at most one level; any descent is allowed.
    fn can_step(&self, from: Point, to: Point) -> bool {
        self.elevation(to) <= self.elevation(from) + 1
    }

    /// The up to four orthogonally adjacent in-bounds cells.
    fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        const STEPS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        STEPS.iter().filter_map(move |&(dr, dc)| {
            let row = point.row.checked_add_signed(dr)?;
            let col = point.col.checked_add_signed(dc)?;
            (row < self.rows && col < self.cols).then_some(Point { row, col })
        })
    }
}

impl PuzzleParser for Solver {
    type Shared<'a> = HeightMap;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        HeightMap::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .start_to_end_cost()
            .map(|cost| cost.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .lowest_starting_cost()
            .map(|cost| cost.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn sample_start_to_end() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.start_to_end_cost().unwrap(), 31);
    }

    #[test]
    fn sample_cheapest_lowest_origin() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.lowest_starting_cost().unwrap(), 29);
    }

    #[test]
    fn markers_are_normalized_and_recorded() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.start(), Point { row: 0, col: 0 });
        assert_eq!(map.end(), Point { row: 2, col: 5 });
        assert_eq!(map.elevation(map.start()), 0);
        assert_eq!(map.elevation(map.end()), 25);
        assert!(map.lowest().contains(&map.start()));
    }

    #[test]
    fn full_ramp_is_walkable_one_level_at_a_time() {
        // S, then b..=y, then E: 25 unit climbs.
        let mut ramp = String::from("S");
        ramp.extend('b'..='y');
        ramp.push('E');
        let map = HeightMap::parse(&ramp).unwrap();
        assert_eq!(map.start_to_end_cost().unwrap(), 25);
    }

    #[test]
    fn adjacent_cliff_is_unreachable() {
        // E sits 25 levels above the adjacent start; no route exists.
        let map = HeightMap::parse("SE").unwrap();
        assert_eq!(map.start_to_end_cost(), Err(SearchError::NoPath));
        assert_eq!(map.lowest_starting_cost(), Err(SearchError::NoValidPath));
    }

    #[test]
    fn walled_end_is_unreachable_from_every_origin() {
        let walled = "\
Saa
zzz
zEz";
        let map = HeightMap::parse(walled).unwrap();
        assert_eq!(map.start_to_end_cost(), Err(SearchError::NoPath));
        assert_eq!(map.lowest_starting_cost(), Err(SearchError::NoValidPath));
    }

    #[test]
    fn steps_climb_at_most_one_level_but_drop_freely() {
        let map = HeightMap::parse("Sz\naE").unwrap();
        let s = Point { row: 0, col: 0 };
        let z = Point { row: 0, col: 1 };
        let a = Point { row: 1, col: 0 };
        assert!(map.can_step(z, a), "a 25-level drop is a legal step");
        assert!(map.can_step(s, a), "level ground is a legal step");
        assert!(!map.can_step(s, z), "a 25-level climb is not");
        assert!(!map.can_step(a, Point { row: 1, col: 1 }));
    }

    #[test]
    fn queries_are_deterministic() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let first = map.start_to_end_cost().unwrap();
        for _ in 0..10 {
            assert_eq!(map.start_to_end_cost().unwrap(), first);
        }
    }

    #[test]
    fn lowest_origin_never_beats_start_by_losing() {
        // The start is itself a lowest cell, so the all-origins query can
        // only match or improve on the start-to-end cost.
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert!(map.lowest_starting_cost().unwrap() <= map.start_to_end_cost().unwrap());
    }

    #[test]
    fn rejects_missing_and_duplicate_markers() {
        assert!(matches!(
            HeightMap::parse("abc\ndef"),
            Err(MapError::MissingMarker('S'))
        ));
        assert!(matches!(
            HeightMap::parse("Sab\nabc"),
            Err(MapError::MissingMarker('E'))
        ));
        assert!(matches!(
            HeightMap::parse("SSE"),
            Err(MapError::DuplicateMarker('S'))
        ));
        assert!(matches!(
            HeightMap::parse("SEE"),
            Err(MapError::DuplicateMarker('E'))
        ));
    }

    #[test]
    fn rejects_ragged_and_invalid_grids() {
        assert!(matches!(
            HeightMap::parse("Sab\nab"),
            Err(MapError::Ragged { row: 1, .. })
        ));
        assert!(matches!(
            HeightMap::parse("Sa!\nabE"),
            Err(MapError::InvalidCell('!', 0, 2))
        ));
        assert!(matches!(HeightMap::parse(""), Err(MapError::Empty)));
    }

    #[test]
    fn solver_surfaces_search_failures_as_solve_errors() {
        let mut shared = Solver::parse("SE").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
        assert!(<Solver as PartSolver<2>>::solve(&mut shared).is_err());
    }

    #[test]
    fn solver_answers_match_the_map_queries() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "31");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "29");
    }
}
