//! Registry behavior: registration, lookup, duplicate and range errors

use advent_solver::{
    ParseError, PuzzleParser, RegistrationError, RegistryBuilder, SolveError, Solver,
    SolverError, SolverInstance,
};

struct CountLines;

impl PuzzleParser for CountLines {
    type Shared<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl Solver for CountLines {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn count_lines_factory(
    builder: RegistryBuilder,
    year: u16,
    day: u8,
) -> Result<RegistryBuilder, RegistrationError> {
    builder.register(year, day, CountLines::PARTS, move |input: &str| {
        let instance = SolverInstance::<CountLines>::new(year, day, input)?;
        Ok(Box::new(instance))
    })
}

#[test]
fn create_and_solve_roundtrip() {
    let registry = count_lines_factory(RegistryBuilder::new(), 2022, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2022, 3, "ab\ncdef\ng").unwrap();
    assert_eq!(solver.year(), 2022);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "7");
}

#[test]
fn duplicate_registration_is_rejected() {
    let builder = count_lines_factory(RegistryBuilder::new(), 2022, 3).unwrap();

    match count_lines_factory(builder, 2022, 3) {
        Err(RegistrationError::Duplicate(2022, 3)) => {}
        other => panic!("expected Duplicate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn out_of_range_date_is_rejected() {
    match count_lines_factory(RegistryBuilder::new(), 1999, 3) {
        Err(RegistrationError::InvalidDate(1999, 3)) => {}
        other => panic!("expected InvalidDate, got {:?}", other.map(|_| ())),
    }

    match count_lines_factory(RegistryBuilder::new(), 2022, 26) {
        Err(RegistrationError::InvalidDate(2022, 26)) => {}
        other => panic!("expected InvalidDate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_solver_is_not_found() {
    let registry = RegistryBuilder::new().build();

    match registry.create_solver(2022, 3, "") {
        Err(SolverError::NotFound(2022, 3)) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    match registry.create_solver(1999, 3, "") {
        Err(SolverError::InvalidDate(1999, 3)) => {}
        other => panic!("expected InvalidDate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn info_reports_registered_metadata() {
    let registry = count_lines_factory(RegistryBuilder::new(), 2022, 3)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert!(registry.contains(2022, 3));
    assert!(!registry.contains(2022, 4));

    let info = registry.info(2022, 3).unwrap();
    assert_eq!((info.year, info.day, info.parts), (2022, 3, 2));

    let collected: Vec<_> = registry.iter_info().collect();
    assert_eq!(collected, vec![info]);
}
