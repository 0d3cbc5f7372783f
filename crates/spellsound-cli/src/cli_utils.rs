//! Helpers shared by the CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use spellsound::{RegionLayer, RegionName, Settings};
use tracing::{debug, warn};

/// Parse a layer name for clap
pub fn parse_layer(s: &str) -> std::result::Result<RegionLayer, String> {
    s.parse()
        .map_err(|_| format!("unknown layer '{}' (underworld, overworld, sky, title)", s))
}

/// Parse a region name for clap, accepting the display names case-insensitively
pub fn parse_region(s: &str) -> std::result::Result<RegionName, String> {
    s.parse().map_err(|_| format!("unknown region '{}'", s))
}

/// Load settings from `path`.
///
/// No path, or a path that does not exist, gives the defaults. A file that
/// exists but does not parse is an error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        warn!("Settings file {} not found, using defaults", path.display());
        return Ok(Settings::default());
    }
    let settings = Settings::load(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
