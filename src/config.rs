//! Application configuration loaded from RON.

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "responsive-panel";
const CONFIG_FILE_NAME: &str = "config.ron";
const DEFAULT_CONFIG_ASSET: &str = "default_config.ron";

/// Embeds the shipped default configuration.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("default_config.ron not found in embedded assets")]
    DefaultMissing,
    #[error("invalid UTF-8 in configuration: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("configuration must define at least one size preset")]
    NoPresets,
    #[error("preset '{0}' must have a finite, positive width and height")]
    InvalidPreset(String),
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f32),
    #[error("bottom margin must be finite and not negative, got {0}")]
    InvalidBottomMargin(f32),
    #[error("notice duration must be finite and positive, got {0}")]
    InvalidNoticeDuration(f64),
}

/// Target size carried by a preset button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PresetSize {
    /// Fill the available width and auto-fit the height.
    Full,
    Fixed { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub size: PresetSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address loaded on startup
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
    pub presets: Vec<Preset>,
    /// Panel height as a fraction of its width in responsive mode
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f32,
    /// Space kept free below the panel in responsive mode
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f32,
    /// How long a notification stays on screen
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: f64,
}

fn default_aspect_ratio() -> f32 {
    0.5625
}

fn default_bottom_margin() -> f32 {
    20.0
}

fn default_notice_seconds() -> f64 {
    3.0
}

impl Config {
    /// Loads the configuration from `path`, the user config directory, or
    /// the embedded default, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            log::info!("Loading configuration from {}", user_path.display());
            return Self::from_file(&user_path);
        }

        Self::embedded_default()
    }

    pub fn embedded_default() -> Result<Self, ConfigError> {
        let file = Assets::get(DEFAULT_CONFIG_ASSET).ok_or(ConfigError::DefaultMissing)?;
        Self::parse(std::str::from_utf8(&file.data)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/responsive-panel/config.ron`
    pub fn user_config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::NoPresets);
        }

        for preset in &self.presets {
            if let PresetSize::Fixed { width, height } = preset.size
                && !(is_positive(width) && is_positive(height))
            {
                return Err(ConfigError::InvalidPreset(preset.label.clone()));
            }
        }

        if !is_positive(self.aspect_ratio) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }

        if !(self.bottom_margin.is_finite() && self.bottom_margin >= 0.0) {
            return Err(ConfigError::InvalidBottomMargin(self.bottom_margin));
        }

        // Toast durations go through `Duration::from_secs_f64`, which panics
        // on negative or non-finite input.
        if !(self.notice_seconds.is_finite() && self.notice_seconds > 0.0) {
            return Err(ConfigError::InvalidNoticeDuration(self.notice_seconds));
        }

        Ok(())
    }
}

/// Finite and strictly greater than zero; NaN fails.
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
