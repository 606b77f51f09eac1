//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod filter;

pub use filter::run_filter;
