//! Day 11: monkeys throwing items, ranked by inspection count

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};
use anyhow::{Context, anyhow};
use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 11, tags = ["2022", "simulation"])]
pub struct Solver;

static OPERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new = old ([*+]) (\d+|old)").unwrap());
static DIVISOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"divisible by (\d+)").unwrap());
static TARGET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"throw to monkey (\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Literal(u64),
}

impl Operand {
    fn value(self, old: u64) -> u64 {
        match self {
            Operand::Old => old,
            Operand::Literal(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    fn apply(self, worry: u64) -> u64 {
        match self {
            Operation::Add(operand) => worry + operand.value(worry),
            Operation::Mul(operand) => worry * operand.value(worry),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    divisor: u64,
    on_pass: usize,
    on_fail: usize,
    inspected: u64,
}

impl Monkey {
    fn from_description(block: &str) -> anyhow::Result<Monkey> {
        let mut lines = block.lines().map(str::trim);
        let header = lines.next().context("empty monkey description")?;
        if !header.starts_with("Monkey ") {
            return Err(anyhow!("expected a monkey header, got {:?}", header));
        }

        let items = lines
            .next()
            .and_then(|l| l.strip_prefix("Starting items:"))
            .context("missing starting items")?
            .split(',')
            .map(|item| item.trim().parse::<u64>().context("bad item worry level"))
            .collect::<anyhow::Result<VecDeque<u64>>>()?;

        let op_line = lines.next().context("missing operation")?;
        let captures = OPERATION
            .captures(op_line)
            .with_context(|| format!("invalid operation: {:?}", op_line))?;
        let operand = match &captures[2] {
            "old" => Operand::Old,
            n => Operand::Literal(n.parse()?),
        };
        let operation = match &captures[1] {
            "+" => Operation::Add(operand),
            _ => Operation::Mul(operand),
        };

        let divisor = capture_number(&DIVISOR, lines.next().context("missing test")?)?;
        let on_pass = capture_number(&TARGET, lines.next().context("missing pass target")?)?;
        let on_fail = capture_number(&TARGET, lines.next().context("missing fail target")?)?;

        Ok(Monkey {
            items,
            operation,
            divisor,
            on_pass: on_pass as usize,
            on_fail: on_fail as usize,
            inspected: 0,
        })
    }
}

fn capture_number(regex: &Regex, line: &str) -> anyhow::Result<u64> {
    let captures = regex
        .captures(line)
        .with_context(|| format!("unexpected line: {:?}", line))?;
    Ok(captures[1].parse()?)
}

/// Worry relief applied after each inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relief {
    DivideByThree,
    None,
}

fn play_rounds(monkeys: &mut [Monkey], rounds: u32, relief: Relief) -> Result<(), SolveError> {
    // Worry levels only matter modulo the product of all divisors.
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();

    for _ in 0..rounds {
        for index in 0..monkeys.len() {
            while let Some(worry) = monkeys[index].items.pop_front() {
                let monkey = &mut monkeys[index];
                monkey.inspected += 1;
                let mut worry = monkey.operation.apply(worry);
                if relief == Relief::DivideByThree {
                    worry /= 3;
                }
                worry %= modulus;
                let target = if worry % monkey.divisor == 0 {
                    monkey.on_pass
                } else {
                    monkey.on_fail
                };
                if target >= monkeys.len() {
                    return Err(SolveError::failed(MissingMonkey(target)));
                }
                monkeys[target].items.push_back(worry);
            }
        }
    }
    Ok(())
}

/// Product of the two highest inspection counts.
fn monkey_business(monkeys: &[Monkey]) -> u64 {
    let mut counts: Vec<u64> = monkeys.iter().map(|m| m.inspected).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.iter().take(2).product()
}

#[derive(Debug, thiserror::Error)]
#[error("item thrown to missing monkey {0}")]
struct MissingMonkey(usize);

impl PuzzleParser for Solver {
    type Shared<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .trim()
            .split("\n\n")
            .map(|block| {
                Monkey::from_description(block)
                    .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let mut monkeys = shared.clone();
        play_rounds(&mut monkeys, 20, Relief::DivideByThree)?;
        Ok(monkey_business(&monkeys).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let mut monkeys = shared.clone();
        play_rounds(&mut monkeys, 10_000, Relief::None)?;
        Ok(monkey_business(&monkeys).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    #[test]
    fn part1_twenty_rounds_with_relief() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "10605"
        );
    }

    #[test]
    fn part2_ten_thousand_restless_rounds() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "2713310158"
        );
    }

    #[test]
    fn parts_do_not_disturb_the_parsed_state() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let first = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        let second = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_malformed_operation() {
        let broken = SAMPLE.replace("new = old * 19", "new = old / 19");
        assert!(Solver::parse(&broken).is_err());
    }

    #[test]
    fn squaring_operation_parses_as_old_times_old() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared[2].operation, Operation::Mul(Operand::Old));
    }
}
