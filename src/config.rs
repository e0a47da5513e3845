//! Application configuration loaded from JSON
//!
//! Every field has a default, so a missing file (or a partial one) is fine.
//! A file that exists but cannot be parsed is an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default delay before a failed attempt is cleared
pub const DEFAULT_FAIL_RESET_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// External command used to play a scare video
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Executable name or path (e.g. "mpv")
    pub command: String,
    /// Arguments; `{file}` and `{volume}` are substituted at play time
    #[serde(default = "default_player_args")]
    pub args: Vec<String>,
}

fn default_player_args() -> Vec<String> {
    vec!["{file}".to_string()]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scare videos are resolved against
    pub media_dir: PathBuf,
    /// Scare video file names
    pub scares: Vec<String>,
    /// Player for scare videos; without one the scare is only announced
    pub player: Option<PlayerConfig>,
    /// Initial volume (0.0-1.0)
    pub volume: f32,
    /// How long a failed knock attempt stays on screen
    pub fail_reset_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            media_dir: PathBuf::from("."),
            scares: vec!["download.MP4".to_string(), "the.MP4".to_string()],
            player: None,
            volume: 1.0,
            fail_reset_delay_ms: DEFAULT_FAIL_RESET_DELAY_MS,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::info!(path = %path.display(), scares = config.scares.len(), "config loaded");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Invalid(format!(
                "volume must be within 0.0-1.0, got {}",
                self.volume
            )));
        }
        if self.scares.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("scare file names must not be empty".into()));
        }
        if let Some(player) = &self.player {
            if player.command.trim().is_empty() {
                return Err(ConfigError::Invalid("player command must not be empty".into()));
            }
        }
        Ok(())
    }
}
