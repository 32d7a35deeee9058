//! Day 10: CPU signal strengths and the CRT image they draw

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 10, tags = ["2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    Addx(i64),
}

impl Instruction {
    fn parse(line: &str) -> Option<Instruction> {
        if line == "noop" {
            return Some(Instruction::Noop);
        }
        let value = line.strip_prefix("addx ")?;
        Some(Instruction::Addx(value.parse().ok()?))
    }
}

/// Register values per cycle: `trace[i]` is X during cycle `i + 1`.
fn register_trace(program: &[Instruction]) -> Vec<i64> {
    let mut x = 1i64;
    let mut trace = vec![x];
    for instruction in program {
        match instruction {
            Instruction::Noop => trace.push(x),
            Instruction::Addx(value) => {
                trace.push(x);
                x += value;
                trace.push(x);
            }
        }
    }
    trace
}

fn value_during(trace: &[i64], cycle: usize) -> Result<i64, SolveError> {
    trace
        .get(cycle - 1)
        .copied()
        .ok_or_else(|| SolveError::failed(ProgramTooShort(cycle)))
}

#[derive(Debug, thiserror::Error)]
#[error("program ends before cycle {0}")]
struct ProgramTooShort(usize);

impl PuzzleParser for Solver {
    type Shared<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        util::lines(input)
            .map(|line| {
                Instruction::parse(line).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("unsupported instruction: {:?}", line))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let trace = register_trace(shared);
        let mut total = 0i64;
        for cycle in [20, 60, 100, 140, 180, 220] {
            total += value_during(&trace, cycle)? * cycle as i64;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let trace = register_trace(shared);
        let mut screen = String::with_capacity((CRT_WIDTH + 1) * CRT_HEIGHT);
        for row in 0..CRT_HEIGHT {
            screen.push('\n');
            for col in 0..CRT_WIDTH {
                let sprite = value_during(&trace, row * CRT_WIDTH + col + 1)?;
                let lit = (sprite - col as i64).abs() <= 1;
                screen.push(if lit { '#' } else { '.' });
            }
        }
        Ok(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("fixtures/day_10_sample.txt");

    const SAMPLE_SCREEN: &str = "
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

    #[test]
    fn part1_sums_signal_strengths() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "13140"
        );
    }

    #[test]
    fn part2_renders_the_crt() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            SAMPLE_SCREEN
        );
    }

    #[test]
    fn short_program_reports_missing_cycles() {
        let mut shared = Solver::parse("noop\naddx 3").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn rejects_unknown_instruction() {
        assert!(Solver::parse("jmp 4").is_err());
    }
}
