//! Processing pipeline components.

mod report;
mod runner;

pub use report::{ExcludedRow, RunReport};
pub use runner::{RunOptions, run_pipeline};
