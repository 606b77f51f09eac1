//! Business logic services
//!
//! Services operate on domain types only and never touch the filesystem.

pub mod filter_service;

pub use filter_service::{FilterReport, FilterService};
