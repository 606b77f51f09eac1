//! Ignore-list configuration
//!
//! The ignore list lives in the clang-tidy config itself: the first line
//! starting with [`COMMENT_MARKER`] holds a comma-separated list of path
//! substrings. Everything else in the file is ignored.

pub mod file;

pub use file::ConfigFile;

use crate::domain::IgnoreList;
use crate::error::ConfigError;

/// Character that introduces the ignore-list comment line
pub const COMMENT_MARKER: char = '#';

/// Ignore list extracted from a clang-tidy config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreConfig {
    /// 1-based line number the list was read from
    pub line_number: usize,
    /// Parsed patterns
    pub ignore: IgnoreList,
}

impl IgnoreConfig {
    /// Scan `content` for the first marker line and parse its payload
    ///
    /// `source` only names the input in error messages.
    pub fn parse(content: &str, source: &str) -> Result<Self, ConfigError> {
        content
            .lines()
            .enumerate()
            .find_map(|(idx, line)| {
                line.strip_prefix(COMMENT_MARKER).map(|payload| Self {
                    line_number: idx + 1,
                    ignore: IgnoreList::parse(payload),
                })
            })
            .ok_or_else(|| ConfigError::MissingCommentLine {
                path: source.to_string(),
                marker: COMMENT_MARKER,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIDY: &str = "# vermicelli_simd.cpp, shufti.cpp\n\
                        Checks: '-*,clang-analyzer-*'\n\
                        # second comment\n";

    #[test]
    fn test_first_comment_line() {
        let config = IgnoreConfig::parse(TIDY, ".clang-tidy").unwrap();
        assert_eq!(config.line_number, 1);
        assert_eq!(config.ignore, IgnoreList::parse("vermicelli_simd.cpp,shufti.cpp"));
    }

    #[test]
    fn test_comment_after_other_lines() {
        let content = "Checks: '*'\nWarningsAsErrors: ''\n#foo.cpp,bar.cpp\n#other\n";
        let config = IgnoreConfig::parse(content, "cfg").unwrap();
        assert_eq!(config.line_number, 3);
        assert_eq!(config.ignore.len(), 2);
    }

    #[test]
    fn test_indented_hash_is_not_a_marker_line() {
        let content = "  # not this\n#this\n";
        let config = IgnoreConfig::parse(content, "cfg").unwrap();
        assert_eq!(config.line_number, 2);
        assert_eq!(config.ignore, IgnoreList::parse("this"));
    }

    #[test]
    fn test_bare_marker_is_empty_list() {
        let config = IgnoreConfig::parse("#\nChecks: '*'\n", "cfg").unwrap();
        assert!(config.ignore.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let config = IgnoreConfig::parse("#a.cpp,b.cpp\r\nChecks: '*'\r\n", "cfg").unwrap();
        assert_eq!(config.ignore, IgnoreList::parse("a.cpp,b.cpp"));
    }

    #[test]
    fn test_missing_comment_line() {
        let result = IgnoreConfig::parse("Checks: '*'\n", "cfg");
        assert_eq!(
            result,
            Err(ConfigError::MissingCommentLine {
                path: "cfg".to_string(),
                marker: '#',
            })
        );
    }

    #[test]
    fn test_empty_file() {
        assert!(IgnoreConfig::parse("", "cfg").is_err());
    }
}
