// SPDX-License-Identifier: MPL-2.0
//! Persisted viewing preferences.
//!
//! Preferences live in a `settings.toml` under the platform config
//! directory. On disk every field is optional; loading merges the stored
//! values field-by-field over [`ViewerSettings::default`], so configs
//! written by older versions keep working. Settings survive across archive
//! loads; the cursor position is deliberately not persisted.

use crate::error::{Error, Result};
use crate::transform::{FitMode, FlipState, ReadingDirection, Rotation, ScrollReset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "comiced";

/// Effective view settings after merging the stored config over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerSettings {
    pub flip: FlipState,
    pub rotation: Rotation,
    pub fit_mode: FitMode,
    pub direction: ReadingDirection,
    pub scroll_reset: ScrollReset,
    pub show_scrollbar: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            flip: FlipState::Normal,
            rotation: Rotation::Deg0,
            fit_mode: FitMode::Best,
            direction: ReadingDirection::LeftToRight,
            scroll_reset: ScrollReset::ResetTop,
            show_scrollbar: true,
        }
    }
}

/// On-disk representation: every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hflip: Option<bool>,
    #[serde(default)]
    pub vflip: Option<bool>,
    #[serde(default)]
    pub rotation: Option<Rotation>,
    #[serde(default)]
    pub fit_mode: Option<FitMode>,
    #[serde(default)]
    pub direction: Option<ReadingDirection>,
    #[serde(default)]
    pub scroll_reset: Option<ScrollReset>,
    #[serde(default)]
    pub show_scrollbar: Option<bool>,
}

impl Config {
    /// Merges the stored fields over the default settings.
    #[must_use]
    pub fn merge_over_defaults(&self) -> ViewerSettings {
        let defaults = ViewerSettings::default();
        ViewerSettings {
            flip: FlipState::from_flags(
                self.hflip.unwrap_or_else(|| defaults.flip.hflip()),
                self.vflip.unwrap_or_else(|| defaults.flip.vflip()),
            ),
            rotation: self.rotation.unwrap_or(defaults.rotation),
            fit_mode: self.fit_mode.unwrap_or(defaults.fit_mode),
            direction: self.direction.unwrap_or(defaults.direction),
            scroll_reset: self.scroll_reset.unwrap_or(defaults.scroll_reset),
            show_scrollbar: self.show_scrollbar.unwrap_or(defaults.show_scrollbar),
        }
    }

    /// Snapshot of the live settings for saving.
    #[must_use]
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        Self {
            hflip: Some(settings.flip.hflip()),
            vflip: Some(settings.flip.vflip()),
            rotation: Some(settings.rotation),
            fit_mode: Some(settings.fit_mode),
            direction: Some(settings.direction),
            scroll_reset: Some(settings.scroll_reset),
            show_scrollbar: Some(settings.show_scrollbar),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the stored config, or the empty config when none exists yet.
///
/// # Errors
///
/// Returns [`Error::Config`] when a stored file exists but cannot be
/// parsed; the caller surfaces this once and continues with defaults.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| Error::Config(err.to_string()))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
