// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Default display duration and fade animation length
//! - `[style]` - Colors, font, corner radius, insets and position of the label
//! - `[diagnostics]` - Lifecycle event buffer size
//!
//! Styling only affects the rendering layer; the queue reads nothing but the
//! default duration.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, see [`crate::paths`]
//! 3. Set `ICED_TOASTER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Edge};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Move toasts to the top of the window
//! config.style.position = Some(config::PositionConfig {
//!     edge: Edge::Top,
//!     portrait_offset: 64.0,
//!     landscape_offset: 44.0,
//! });
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Container edge toasts are anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Top,
    #[default]
    Bottom,
}

impl std::str::FromStr for Edge {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown position '{other}' (expected top or bottom)")),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Display duration (seconds) for toasts shown without an explicit one.
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Fade in/out animation length (milliseconds).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration_secs(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl TimingConfig {
    /// Returns the default display duration, clamped to the valid range.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let secs = self
            .default_duration_secs
            .filter(|secs| secs.is_finite())
            .unwrap_or(DEFAULT_DURATION_SECS)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Duration::from_secs_f64(secs)
    }

    /// Returns the fade animation length, clamped to the valid range.
    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms.unwrap_or(DEFAULT_FADE_MS).min(MAX_FADE_MS))
    }
}

/// Toast anchoring: which edge, and how far from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PositionConfig {
    pub edge: Edge,
    /// Offset from the edge when the container is taller than wide.
    pub portrait_offset: f32,
    /// Offset from the edge when the container is wider than tall.
    pub landscape_offset: f32,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Bottom,
            portrait_offset: DEFAULT_OFFSET_PORTRAIT,
            landscape_offset: DEFAULT_OFFSET_LANDSCAPE,
        }
    }
}

/// Toast label appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    /// Background color as `#rrggbb` or `#rrggbbaa`.
    #[serde(
        default = "default_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,

    /// Text color as `#rrggbb` or `#rrggbbaa`.
    #[serde(
        default = "default_text_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_color: Option<String>,

    /// Font size in logical pixels.
    #[serde(default = "default_font_size", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Whether the text is rendered in bold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Background corner radius.
    #[serde(
        default = "default_corner_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub corner_radius: Option<f32>,

    /// Text insets as `[top, left, bottom, right]`.
    #[serde(
        default = "default_text_insets",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_insets: Option<[f32; 4]>,

    /// Anchoring edge and offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionConfig>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            text_color: default_text_color(),
            font_size: default_font_size(),
            bold: Some(false),
            corner_radius: default_corner_radius(),
            text_insets: default_text_insets(),
            position: Some(PositionConfig::default()),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_DURATION_SECS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_background_color() -> Option<String> {
    Some(DEFAULT_BACKGROUND_COLOR.to_string())
}

fn default_text_color() -> Option<String> {
    Some(DEFAULT_TEXT_COLOR.to_string())
}

fn default_font_size() -> Option<f32> {
    Some(DEFAULT_FONT_SIZE)
}

fn default_corner_radius() -> Option<f32> {
    Some(DEFAULT_CORNER_RADIUS)
}

fn default_text_insets() -> Option<[f32; 4]> {
    Some(DEFAULT_TEXT_INSETS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
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
