use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError, Solver};
use advent_solver_macros::PuzzleSolver;

#[derive(PuzzleSolver)]
#[puzzle_solver(parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type Shared<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn generated_impl_declares_parts() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}

#[test]
fn dispatches_to_part_solvers() {
    let mut shared = TestSolver::parse("1\n2\n3\n4\n5").unwrap();

    let part1 = TestSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(part1, "15");

    let part2 = TestSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(part2, "120");
}

#[test]
fn unknown_part_is_not_implemented() {
    let mut shared = TestSolver::parse("1\n2").unwrap();

    for part in [0u8, 3, 25, 255] {
        match TestSolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => assert_eq!(p, part),
            other => panic!("expected PartNotImplemented, got {:?}", other),
        }
    }
}
