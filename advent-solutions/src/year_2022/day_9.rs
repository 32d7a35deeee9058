//! Day 9: rope physics, counting cells the tail visits

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};
use std::collections::HashSet;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 9, tags = ["2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    direction: Direction,
    steps: u32,
}

fn parse_motion(line: &str) -> Option<Motion> {
    let (direction, steps) = line.split_once(' ')?;
    let direction = match direction {
        "U" => Direction::Up,
        "D" => Direction::Down,
        "L" => Direction::Left,
        "R" => Direction::Right,
        _ => return None,
    };
    let steps = steps.parse().ok()?;
    Some(Motion { direction, steps })
}

fn touching(a: (i32, i32), b: (i32, i32)) -> bool {
    (a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1
}

/// Run the rope with the given knot count and return how many distinct
/// cells the last knot visits.
fn tail_coverage(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0i32, 0i32); knots];
    let mut visited = HashSet::new();
    visited.insert((0, 0));

    for motion in motions {
        let (dx, dy) = motion.direction.delta();
        for _ in 0..motion.steps {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for knot in 1..rope.len() {
                let lead = rope[knot - 1];
                let follow = &mut rope[knot];
                if touching(lead, *follow) {
                    break;
                }
                follow.0 += (lead.0 - follow.0).signum();
                follow.1 += (lead.1 - follow.1).signum();
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

impl PuzzleParser for Solver {
    type Shared<'a> = Vec<Motion>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        util::lines(input)
            .map(|line| {
                parse_motion(line).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected '<U|D|L|R> <n>', got {:?}", line))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(tail_coverage(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(tail_coverage(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2";

    const LARGER_SAMPLE: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20";

    #[test]
    fn part1_two_knot_tail_coverage() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "13");
    }

    #[test]
    fn part2_ten_knot_tail_coverage() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");
    }

    #[test]
    fn part2_larger_sample() {
        let mut shared = Solver::parse(LARGER_SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "36");
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(Solver::parse("X 3").is_err());
    }
}
