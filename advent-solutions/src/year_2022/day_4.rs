//! Day 4: overlapping section-assignment ranges

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 4, tags = ["2022", "ranges"])]
pub struct Solver;

/// An inclusive section range claimed by one elf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    first: u32,
    last: u32,
}

impl Assignment {
    fn contains(&self, other: &Assignment) -> bool {
        self.first <= other.first && self.last >= other.last
    }

    fn overlaps(&self, other: &Assignment) -> bool {
        self.first <= other.last && other.first <= self.last
    }
}

fn parse_assignment(text: &str) -> Option<Assignment> {
    let (first, last) = text.split_once('-')?;
    let first = first.parse().ok()?;
    let last = last.parse().ok()?;
    (first <= last).then_some(Assignment { first, last })
}

impl PuzzleParser for Solver {
    type Shared<'a> = Vec<(Assignment, Assignment)>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        util::lines(input)
            .map(|line| {
                let pair = line.split_once(',').and_then(|(left, right)| {
                    Some((parse_assignment(left)?, parse_assignment(right)?))
                });
                pair.ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected 'a-b,c-d', got {:?}", line))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let contained = shared
            .iter()
            .filter(|(a, b)| a.contains(b) || b.contains(a))
            .count();
        Ok(contained.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let overlapping = shared.iter().filter(|(a, b)| a.overlaps(b)).count();
        Ok(overlapping.to_string())
    }
}
