//! Configuration management for the application.
//!
//! Handles loading and saving tool preferences in TOML format with
//! platform-specific directory resolution. Only presentation preferences
//! live here; the decoding core takes no configuration at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Plain-text output preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Use `Ω` and `±` in plain output; with `false`, fall back to
    /// `ohm` and `+/-` for terminals without those glyphs.
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

/// Application configuration.
///
/// JSON output is deliberately not configurable; scripts get a stable
/// format regardless of user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Plain-text output preferences.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/bandcode/`
    /// - macOS: `~/Library/Application Support/bandcode/`
    /// - Windows: `%APPDATA%\bandcode\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("bandcode"))
    }

    /// Gets the full path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().is_ok_and(|p| p.exists())
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid TOML. Call
    /// sites that can run unconfigured should fall back with
    /// `Config::load().unwrap_or_default()`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to the default location, creating the
    /// config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
