//! Daily advent puzzle solutions with automatic registration
//!
//! Each solution is one module implementing the solver traits from
//! `advent-solver` and registering itself with the plugin system via the
//! `RegisterSolver` derive macro.

pub mod year_2022;

mod util;
