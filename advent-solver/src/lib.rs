//! Daily puzzle solver framework
//!
//! A type-safe framework for implementing daily advent puzzle solvers across
//! multiple years. Each puzzle is a solver with its own input parsing that
//! can answer multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - Per-part solving with compile-time part dispatch
//! - Type-safe parsing and result handling
//! - A registry mapping `(year, day)` to solvers, with automatic plugin
//!   registration via `inventory`
//! - Parse and solve timing on every instance
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, Solver,
//! };
//!
//! struct Echo;
//!
//! impl PuzzleParser for Echo {
//!     type Shared<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
//!         Ok(input.trim())
//!     }
//! }
//!
//! impl PartSolver<1> for Echo {
//!     fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
//!         Ok(shared.to_string())
//!     }
//! }
//!
//! impl Solver for Echo {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Echo as PartSolver<1>>::solve(shared),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2022, 1, Echo::PARTS, |input: &str| {
//!         let instance = advent_solver::SolverInstance::<Echo>::new(2022, 1, input)?;
//!         Ok(Box::new(instance))
//!     })
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "hello").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "hello");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver traits
//!
//! [`PuzzleParser`] defines the shared data type and parsing. [`PartSolver`]
//! implements one part each. [`Solver`] dispatches part numbers; derive it
//! with `#[derive(PuzzleSolver)]` from `advent-solver-macros` rather than
//! writing the dispatch by hand:
//!
//! ```ignore
//! #[derive(PuzzleSolver, RegisterSolver)]
//! #[puzzle_solver(parts = 2)]
//! #[puzzle(year = 2022, day = 12, tags = ["grid"])]
//! pub struct Solver;
//! ```
//!
//! ## DynSolver
//!
//! [`DynSolver`] erases the concrete solver type so the registry and callers
//! can treat all solvers uniformly. `solve(part)` returns the answer together
//! with timing.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveReport, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{PuzzleSolver, RegisterSolver};
