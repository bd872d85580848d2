//! Command-line workflow.

pub mod orchestration;

pub use orchestration::{run, run_with_confirmation, RunArgs, RunSummary};
