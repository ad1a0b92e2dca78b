// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[preview]` - Hover intent and preview popup timings
//! - `[hero]` - Featured carousel behavior
//! - `[search]` - Search debounce
//! - `[content]` - Catalog location
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `EYESON_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use eyeson::config;
//!
//! let (mut config, _warning) = config::load();
//! config.preview.hover_confirm_ms = Some(350);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced to the user when an existing config cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "Settings file could not be read; using defaults";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Hover preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Dwell time before a hovered thumbnail opens its preview.
    #[serde(
        default = "default_hover_confirm_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_confirm_ms: Option<u64>,

    /// Grace period before a preview closes once the pointer leaves.
    #[serde(
        default = "default_hover_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_dismiss_ms: Option<u64>,

    /// Delay before the player surface replaces the static thumbnail.
    #[serde(
        default = "default_reveal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_delay_ms: Option<u64>,

    /// Quiet period after scrolling before the preview may come back.
    #[serde(
        default = "default_scroll_settle_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_settle_ms: Option<u64>,

    /// Start playback as soon as the player is revealed.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            hover_confirm_ms: default_hover_confirm_ms(),
            hover_dismiss_ms: default_hover_dismiss_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            scroll_settle_ms: default_scroll_settle_ms(),
            autoplay: default_autoplay(),
        }
    }
}

/// Featured carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Seconds between automatic slides (0 disables auto-advance).
    #[serde(
        default = "default_hero_auto_advance_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_secs: Option<u32>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: default_hero_auto_advance_secs(),
        }
    }
}

impl HeroConfig {
    /// Auto-advance interval, or `None` when disabled.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        match self
            .auto_advance_secs
            .unwrap_or(DEFAULT_HERO_AUTO_ADVANCE_SECS)
            .min(MAX_HERO_AUTO_ADVANCE_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Typing pause before the query filters the feed.
    #[serde(
        default = "default_search_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub debounce_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl SearchConfig {
    /// Typing pause, clamped; zero commits on every keystroke.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(
            self.debounce_ms
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
                .min(MAX_SEARCH_DEBOUNCE_MS),
        )
    }
}

/// Content source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// JSON catalog to browse instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_hover_confirm_ms() -> Option<u64> {
    Some(DEFAULT_HOVER_CONFIRM_MS)
}

fn default_hover_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_HOVER_DISMISS_MS)
}

fn default_reveal_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_scroll_settle_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_SETTLE_MS)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_PREVIEW_AUTOPLAY)
}

fn default_hero_auto_advance_secs() -> Option<u32> {
    Some(DEFAULT_HERO_AUTO_ADVANCE_SECS)
}

fn default_search_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    log::warn!("failed to load {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
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

// =============================================================================
// Tests
// =============================================================================
