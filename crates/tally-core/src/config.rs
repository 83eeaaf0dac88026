//! Configuration file management for Tally.
//!
//! Reads optional settings from `~/.config/tally/config.toml`. The file only
//! tunes presentation and input validation; game state is never stored.

use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// REPL presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colored output
    #[serde(default = "default_color")]
    pub color: bool,
    /// Prompt shown before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    ">> ".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            prompt: default_prompt(),
        }
    }
}

/// Optional tightening of user input checks.
///
/// The defaults accept everything the scoreboard has always accepted:
/// blank names and negative custom scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub reject_blank_names: bool,
    #[serde(default = "default_allow_negative")]
    pub allow_negative_custom_scores: bool,
}

fn default_allow_negative() -> bool {
    true
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            reject_blank_names: false,
            allow_negative_custom_scores: default_allow_negative(),
        }
    }
}

impl ValidationPolicy {
    /// The strictest policy: no blank names, no negative custom scores.
    pub fn strict() -> Self {
        Self {
            reject_blank_names: true,
            allow_negative_custom_scores: false,
        }
    }
}

/// Returns the path to the configuration file: ~/.config/tally/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| TallyError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("tally").join("config.toml"))
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<TallyConfig> {
    load_config_from(&config_path()?)
}

/// Loads the configuration from `path`, falling back to defaults if absent.
pub fn load_config_from(path: &Path) -> Result<TallyConfig> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(TallyConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: TallyConfig = toml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Writes `config` to `path` as TOML, creating parent directories.
pub fn save_config_to(config: &TallyConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
