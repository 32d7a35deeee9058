use advent_solver::{ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 1)]
#[puzzle(year = 2020, day = 25, tags = ["test", "register"])]
struct RegisteredSolver;

impl PuzzleParser for RegisteredSolver {
    type Shared<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for RegisteredSolver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn plugin_is_collected_and_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.contains(2020, 25));
    let info = registry.info(2020, 25).unwrap();
    assert_eq!(info.parts, 1);

    let mut solver = registry.create_solver(2020, 25, "abcde\n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "5");
}

#[test]
fn tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_plugins_where(|p| p.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(registry.is_empty());

    let registry = RegistryBuilder::new()
        .register_plugins_where(|p| p.tags.contains(&"register"))
        .unwrap()
        .build();
    assert!(registry.contains(2020, 25));
}
