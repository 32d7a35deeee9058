//! Day 8: tree visibility and scenic scores on a height grid

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Forest {
    heights: Vec<Vec<u8>>,
}

impl Forest {
    fn rows(&self) -> usize {
        self.heights.len()
    }

    fn cols(&self) -> usize {
        self.heights.first().map_or(0, Vec::len)
    }

    /// Heights along each of the four lines of sight from (row, col),
    /// ordered nearest tree first.
    fn sight_lines(&self, row: usize, col: usize) -> [Vec<u8>; 4] {
        let line = &self.heights[row];
        let left = line[..col].iter().rev().copied().collect();
        let right = line[col + 1..].to_vec();
        let up = self.heights[..row].iter().rev().map(|r| r[col]).collect();
        let down = self.heights[row + 1..].iter().map(|r| r[col]).collect();
        [left, right, up, down]
    }

    fn is_visible(&self, row: usize, col: usize) -> bool {
        let height = self.heights[row][col];
        self.sight_lines(row, col)
            .iter()
            .any(|line| line.iter().all(|&tree| tree < height))
    }

    /// Trees visible looking along one line until a tree at least as tall
    /// blocks the view, counting the blocking tree.
    fn viewing_distance(line: &[u8], height: u8) -> usize {
        let mut distance = 0;
        for &tree in line {
            distance += 1;
            if tree >= height {
                break;
            }
        }
        distance
    }

    fn scenic_score(&self, row: usize, col: usize) -> usize {
        let height = self.heights[row][col];
        self.sight_lines(row, col)
            .iter()
            .map(|line| Self::viewing_distance(line, height))
            .product()
    }
}

impl PuzzleParser for Solver {
    type Shared<'a> = Forest;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let heights: Vec<Vec<u8>> = util::lines(input)
            .map(|line| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            ParseError::InvalidFormat(format!("expected a digit, got {:?}", c))
                        })
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;

        if heights.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        let cols = heights[0].len();
        if heights.iter().any(|row| row.len() != cols) {
            return Err(ParseError::InvalidFormat(
                "grid rows have unequal lengths".to_string(),
            ));
        }
        Ok(Forest { heights })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let visible = (0..shared.rows())
            .flat_map(|row| (0..shared.cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| shared.is_visible(row, col))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let best = (0..shared.rows())
            .flat_map(|row| (0..shared.cols()).map(move |col| (row, col)))
            .map(|(row, col)| shared.scenic_score(row, col))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
