//! Configuration file loading
//!
//! Reads the clang-tidy config from disk. The file is never written.

use crate::config::IgnoreConfig;
use crate::error::Result;
use crate::storage;

use std::path::Path;

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load the ignore list from a clang-tidy config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<IgnoreConfig> {
        let path = path.as_ref();
        let content = storage::read_to_string(path)?;

        let config = IgnoreConfig::parse(&content, &path.display().to_string())?;
        log::debug!(
            "Read ignore list from {} line {}",
            path.display(),
            config.line_number
        );
        Ok(config)
    }
}
