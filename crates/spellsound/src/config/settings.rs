use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How overlapping sound effects are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SfxOverlap {
    /// Every requested clip plays, clips may overlap freely
    #[default]
    Unlimited,
    /// A new clip stops the still-playing clip of the same category
    OnePerCategory,
}

/// Plugin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub enable: bool,
    pub log_music_debug: bool,
    pub log_sfx_debug: bool,
    pub autoplay: bool,
    pub repeat: bool,
    /// Initial music volume in [0, 1]
    pub volume: f32,
    pub sfx_overlap: SfxOverlap,
}

/// Music volume used when none, or an unusable one, is given
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Clamp `volume` to [0, 1]. NaN and infinities fall back to [`DEFAULT_VOLUME`].
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        DEFAULT_VOLUME
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable: true,
            log_music_debug: true,
            log_sfx_debug: false,
            autoplay: true,
            repeat: false,
            volume: DEFAULT_VOLUME,
            sfx_overlap: SfxOverlap::Unlimited,
        }
    }
}

impl Settings {
    /// Parse settings from TOML; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        settings.volume = clamp_volume(settings.volume);
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
