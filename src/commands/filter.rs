//! Filter command implementation
//!
//! Reads the ignore list, filters the compilation database and writes it
//! back over the original file.

use crate::config::ConfigFile;
use crate::domain::CompilationDatabase;
use crate::error::Result;
use crate::services::{FilterReport, FilterService};
use crate::storage;

use std::path::Path;

/// Execute the filter command
pub fn run_filter(config_path: &Path, compile_commands_path: &Path) -> Result<FilterReport> {
    let config = ConfigFile::load(config_path)?;
    log::info!(
        "Ignoring {} pattern(s) from {}: {}",
        config.ignore.len(),
        config_path.display(),
        config.ignore
    );

    storage::ensure_writable(compile_commands_path)?;
    let content = storage::read_to_string(compile_commands_path)?;
    let database = CompilationDatabase::from_json(&content)?;

    let (filtered, report) = FilterService::new(&config.ignore).apply(database);

    for pattern in report.unused_patterns() {
        log::warn!("Pattern '{}' did not match any entry", pattern);
    }

    let rendered = filtered.to_json_pretty()?;
    storage::write_atomic(compile_commands_path, &rendered)?;

    log::info!(
        "Kept {} of {} entries in {} ({} removed)",
        report.kept,
        report.total,
        compile_commands_path.display(),
        report.removed.len()
    );

    Ok(report)
}
