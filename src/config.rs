use std::path::Path;

use serde::Deserialize;

use crate::error::WildError;
use crate::types::Mode;

/// Defaults for a filter run, read from a TOML file. CLI flags override.
///
/// ```toml
/// ignore_case = true
/// mode = "find"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ignore_case: bool,
    pub literal: bool,
    pub mode: Mode,
    pub json: bool,
}

impl Config {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, WildError> {
        let content = std::fs::read_to_string(path).map_err(|source| WildError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse config text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, WildError> {
        toml::from_str(content).map_err(|e| WildError::ParseError {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }
}
