//! Optional TOML configuration file for arena runs.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::match_runner::MatchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("games must be at least 1")]
    ZeroGames,

    #[error("depth must be at least 1")]
    ZeroDepth,
}

/// On-disk mirror of `MatchConfig`; every field is optional and falls back
/// to the `MatchConfig` default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaConfig {
    pub games: Option<u32>,
    pub depth: Option<u8>,
    pub pruning: Option<bool>,
    pub alternate_colors: Option<bool>,
    pub random_opening_plies: Option<u32>,
    pub verbose: Option<bool>,
}

impl ArenaConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = toml::from_str(contents)?;
        if config.games == Some(0) {
            return Err(ConfigError::ZeroGames);
        }
        if config.depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(config)
    }

    /// Overlay the file's settings onto defaults.
    pub fn into_match_config(self) -> MatchConfig {
        let base = MatchConfig::default();
        MatchConfig {
            num_games: self.games.unwrap_or(base.num_games),
            depth: self.depth.unwrap_or(base.depth),
            pruning: self.pruning.unwrap_or(base.pruning),
            alternate_colors: self.alternate_colors.unwrap_or(base.alternate_colors),
            random_opening_plies: self
                .random_opening_plies
                .unwrap_or(base.random_opening_plies),
            verbose: self.verbose.unwrap_or(base.verbose),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
