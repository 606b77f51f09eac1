//! ccfilter - compilation database filter
//!
//! Removes entries from a `compile_commands.json` whose source path
//! contains any substring listed on the first `#` comment line of a
//! clang-tidy config, then rewrites the database atomically.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Ignore-list extraction from the clang-tidy config
//! - [`domain`]: Ignore patterns and compile command types
//! - [`error`]: Error types
//! - [`services`]: Filtering logic
//! - [`storage`]: File reads and atomic writes

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod storage;

pub use error::{AppError, Result};
