//! Filter service
//!
//! Drops every database entry whose path contains an ignore pattern.

use crate::domain::{CompilationDatabase, IgnoreList};

/// What a filter pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Entries in the input
    pub total: usize,
    /// Entries kept
    pub kept: usize,
    /// Paths of removed entries, in input order
    pub removed: Vec<String>,
    /// Entries removed per pattern, in pattern order
    ///
    /// An entry counts only against the first pattern that matched it.
    pub hits: Vec<(String, usize)>,
}

impl FilterReport {
    /// Patterns that removed nothing
    pub fn unused_patterns(&self) -> impl Iterator<Item = &str> {
        self.hits
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(pattern, _)| pattern.as_str())
    }
}

/// Applies an ignore list to a compilation database
pub struct FilterService<'a> {
    ignore: &'a IgnoreList,
}

impl<'a> FilterService<'a> {
    pub fn new(ignore: &'a IgnoreList) -> Self {
        Self { ignore }
    }

    /// Keep entries matching no pattern, preserving order
    pub fn apply(&self, database: CompilationDatabase) -> (CompilationDatabase, FilterReport) {
        let patterns = self.ignore.patterns();
        let mut report = FilterReport {
            total: database.len(),
            hits: patterns.iter().map(|p| (p.to_string(), 0)).collect(),
            ..FilterReport::default()
        };

        let mut kept = Vec::with_capacity(database.len());
        for entry in database.into_entries() {
            match patterns.iter().position(|p| p.matches(entry.file())) {
                Some(idx) => {
                    log::debug!(
                        "Dropping {} in {} (matched '{}')",
                        entry.file(),
                        entry.directory().unwrap_or("?"),
                        patterns[idx]
                    );
                    report.hits[idx].1 += 1;
                    report.removed.push(entry.file().to_string());
                }
                None => kept.push(entry),
            }
        }

        report.kept = kept.len();
        (CompilationDatabase::new(kept), report)
    }
}
