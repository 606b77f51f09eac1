//! Ignore pattern types
//!
//! Patterns are plain substrings matched anywhere in a source path.

use std::fmt;

/// A single non-empty substring that excludes matching paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IgnorePattern(String);

impl IgnorePattern {
    /// Create a pattern from a raw token, trimming whitespace
    ///
    /// Returns `None` for tokens that are empty after trimming, since an
    /// empty substring would match every path.
    pub fn new(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Case-sensitive, unanchored substring match against the full path
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of ignore patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    /// Create a list from already-built patterns
    pub fn new(patterns: Vec<IgnorePattern>) -> Self {
        Self { patterns }
    }

    /// Split a comma-separated payload into patterns, dropping empty tokens
    pub fn parse(payload: &str) -> Self {
        Self::new(payload.trim().split(',').filter_map(IgnorePattern::new).collect())
    }

    /// First pattern matching `path`, if any
    pub fn first_match(&self, path: &str) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    /// Whether any pattern matches `path`
    pub fn is_ignored(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Display for IgnoreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .patterns
            .iter()
            .map(IgnorePattern::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", joined)
    }
}
