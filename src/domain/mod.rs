//! Domain models
//!
//! Ignore patterns and compilation database entries.

pub mod compile_command;
pub mod pattern;

pub use compile_command::{CompilationDatabase, CompileCommand};
pub use pattern::{IgnoreList, IgnorePattern};
