//! Orchestration: the collection loop and the report artifact.

pub mod report;
pub mod runner;

pub use report::ValidationReport;
pub use runner::{run_validation, summarize};
