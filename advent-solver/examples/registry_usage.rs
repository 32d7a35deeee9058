//! Registering and running a solver through the registry.
//!
//! Run with: cargo run --example registry_usage

use advent_solver::{
    ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegisterSolver, RegistryBuilder,
    SolveError,
};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 1, tags = ["example"])]
struct Totals;

impl PuzzleParser for Totals {
    type Shared<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Totals {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or(0).to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    let mut solver = registry.create_solver(2022, 1, "100\n200\n300")?;
    for part in 1..=solver.parts() {
        let report = solver.solve(part)?;
        println!("part {part}: {} ({:?})", report.answer, report.duration());
    }
    Ok(())
}
