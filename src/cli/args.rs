//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Remove ignored translation units from a compilation database
///
/// The ignore list is the first line of the clang-tidy config that starts
/// with '#', e.g. `#third_party/,generated.cpp`. Every entry whose "file"
/// contains one of the comma-separated substrings is dropped and the
/// database is rewritten in place.
#[derive(Parser, Debug)]
#[command(name = "ccfilter")]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the clang-tidy config holding the ignore comment
    #[arg(value_name = "CLANG_TIDY_CONFIG")]
    pub config: PathBuf,

    /// Path to the compile_commands.json to rewrite
    #[arg(value_name = "COMPILE_COMMANDS")]
    pub compile_commands: PathBuf,
}
