// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[gallery]` - Image list, shuffle behavior and tile spacing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_MOSAIC_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_mosaic::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//!
//! let gap = config.gallery.gap_px();
//! # let _ = gap;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key pushed to the user when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Image wall settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Images shown on the wall when none are given on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<PathBuf>,

    /// Shuffle the images once after loading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,

    /// Fixed seed for a reproducible shuffle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,

    /// Spacing between tiles in logical pixels.
    #[serde(default = "default_gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            shuffle: Some(false),
            shuffle_seed: None,
            gap: default_gap(),
        }
    }
}

impl GalleryConfig {
    /// Tile gap, clamped to the supported range.
    #[must_use]
    pub fn gap_px(&self) -> f32 {
        clamp_gap(self.gap.unwrap_or(DEFAULT_IMAGE_GAP_PX))
    }

    /// Whether the wall should be shuffled after loading.
    #[must_use]
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle.unwrap_or(false)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Image wall settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_gap() -> Option<f32> {
    Some(DEFAULT_IMAGE_GAP_PX)
}

/// Keeps persisted gaps inside the supported range so a hand-edited config
/// cannot collapse or explode the grid.
#[must_use]
pub fn clamp_gap(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_IMAGE_GAP_PX, MAX_IMAGE_GAP_PX)
    } else {
        DEFAULT_IMAGE_GAP_PX
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
