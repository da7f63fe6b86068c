//! Command implementations

pub mod benchmark;
mod error;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use error::LadderError;
pub use neighbors::{NeighborsResult, list_neighbors};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_ladder};
