//! Command implementations

pub mod benchmark;
pub mod check;
pub mod find;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, pick_inputs, run_benchmark};
pub use check::{CASES, CheckReport, run_checks};
pub use find::{FindConfig, FindReport, run_find};
pub use simple::run_simple;
