//! Day 1: calorie totals carried by each elf

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 1, tags = ["2022", "arithmetic"])]
pub struct Solver;

impl PuzzleParser for Solver {
    /// Total calories per elf, one entry per blank-line-separated group.
    type Shared<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(group, block)| {
                block
                    .lines()
                    .map(|line| {
                        line.trim().parse::<u64>().map_err(|_| {
                            ParseError::InvalidFormat(format!(
                                "group {}: expected a calorie count, got {:?}",
                                group + 1,
                                line
                            ))
                        })
                    })
                    .sum()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|max| max.to_string())
            .ok_or_else(|| SolveError::failed(EmptyInventory))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared.sort_unstable_by(|a, b| b.cmp(a));
        if shared.is_empty() {
            return Err(SolveError::failed(EmptyInventory));
        }
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no calorie groups in input")]
struct EmptyInventory;
