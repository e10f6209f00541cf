//! Trail configuration management.
//!
//! This module provides configuration loading, saving, and default values
//! for the cursor trail animation.

use crate::defaults;
use crate::error::ConfigError;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Cursor trail animation settings.
///
/// All timing values are in seconds, thicknesses in pixels, and the start
/// threshold in whole cells. Every field has a default so partial config
/// files deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay after a client-initiated cursor move before the trail follows
    #[serde(default = "defaults::trail_delay")]
    pub trail_delay: f32,

    /// Decay time constant for corners leading the motion
    #[serde(default = "defaults::decay_fast")]
    pub decay_fast: f32,

    /// Decay time constant for corners trailing the motion
    #[serde(default = "defaults::decay_slow")]
    pub decay_slow: f32,

    /// Cell-distance threshold below which an idle trail snaps instead of
    /// animating (0 disables suppression)
    #[serde(default = "defaults::start_threshold")]
    pub start_threshold: u32,

    /// Beam cursor thickness in pixels
    #[serde(default = "defaults::beam_thickness")]
    pub beam_thickness: f32,

    /// Underline cursor thickness in pixels
    #[serde(default = "defaults::underline_thickness")]
    pub underline_thickness: f32,

    /// Enable cross-window trail hand-off on focus change
    #[serde(default = "defaults::choreographed")]
    pub choreographed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trail_delay: defaults::trail_delay(),
            decay_fast: defaults::decay_fast(),
            decay_slow: defaults::decay_slow(),
            start_threshold: defaults::start_threshold(),
            beam_thickness: defaults::beam_thickness(),
            underline_thickness: defaults::underline_thickness(),
            choreographed: defaults::choreographed(),
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from the default path, creating it with defaults if it
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Trail config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Trail config not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default trail config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to an explicit path, creating parent directories.
    ///
    /// Validates first so a saved file always loads back: `load_from`
    /// rejects invalid values, and persisting one would poison the next
    /// startup.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;
        log::info!("Saved trail config to {:?}", path);
        Ok(())
    }

    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cursor-trail")
            .join("trail.yaml")
    }

    /// Check field values for semantic validity.
    ///
    /// Every float field must be finite: the delay feeds a `Duration`
    /// conversion and the decay pair divides the easing step, so NaN and
    /// infinity are rejected here rather than handled downstream. The
    /// decay pair must additionally be positive and non-decreasing (the
    /// fast constant applies to leading corners, so it may not exceed the
    /// slow one), thicknesses positive, and the delay non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay_fast.is_finite() && self.decay_fast > 0.0) {
            return Err(ConfigError::Validation(format!(
                "decay_fast must be finite and positive, got {}",
                self.decay_fast
            )));
        }
        if !(self.decay_slow.is_finite() && self.decay_slow >= self.decay_fast) {
            return Err(ConfigError::Validation(format!(
                "decay_slow ({}) must be finite and >= decay_fast ({})",
                self.decay_slow, self.decay_fast
            )));
        }
        if !(self.trail_delay.is_finite() && self.trail_delay >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "trail_delay must be finite and non-negative, got {}",
                self.trail_delay
            )));
        }
        if !(self.beam_thickness.is_finite() && self.beam_thickness > 0.0) {
            return Err(ConfigError::Validation(format!(
                "beam_thickness must be finite and positive, got {}",
                self.beam_thickness
            )));
        }
        if !(self.underline_thickness.is_finite() && self.underline_thickness > 0.0) {
            return Err(ConfigError::Validation(format!(
                "underline_thickness must be finite and positive, got {}",
                self.underline_thickness
            )));
        }
        Ok(())
    }
}
