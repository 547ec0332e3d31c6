//! Terminal output formatting
//!
//! Display utilities for CLI results and the CSV tables a sweep produces.

pub mod display;
pub mod formatters;
pub mod tables;

pub use display::{print_solve_result, print_sweep_report};
pub use formatters::outcome_message;
pub use tables::write_tables;
