//! # Card Configuration
//!
//! One TOML file describes a card: the recipient name, the session seed,
//! and optional tuning overrides (one table per scene system, every field
//! optional). Loading is the only fallible surface in the workspace;
//! everything downstream of a loaded config degrades silently.
//!
//! Out-of-range numbers are clamped with a warning rather than rejected.
//! The card must render with whatever it is given; only values that no
//! clamp can repair (non-finite floats) are errors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yule_scene::SceneTuning;

/// Recipient used when the card file names nobody.
const DEFAULT_NAME: &str = "Amy";

/// Session seed used when the card file does not pick one.
const DEFAULT_SEED: u64 = 2024;

/// Hard cap on any single population's particle count.
const MAX_COUNT: usize = 1_000_000;

/// Smallest usable spatial extent for sampled volumes.
const MIN_EXTENT: f32 = 0.1;

/// Smallest usable burst lifetime.
const MIN_LIFETIME: f32 = 0.1;

/// Smallest usable launch interval band.
const MIN_INTERVAL_RANGE: f32 = 0.01;

/// Errors that can occur while loading a card file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The card file could not be read.
    #[error("card file error: {0}")]
    Io(#[from] std::io::Error),

    /// The card file is not valid TOML.
    #[error("card file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value survived parsing but no clamp can repair it.
    #[error("invalid card file: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything needed to build one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Recipient name, drawn in the sky and on the side panel.
    pub name: String,
    /// Session seed. Same seed, same name: same card, every time.
    pub seed: u64,
    /// Scene tuning overrides.
    pub tuning: SceneTuning,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            seed: DEFAULT_SEED,
            tuning: SceneTuning::default(),
        }
    }
}

impl CardConfig {
    /// Parses a card from TOML text, then validates and sanitizes it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for non-finite numbers.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.validate()?;
        config.sanitize();
        Ok(config)
    }

    /// Loads a card file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus
    /// everything [`Self::from_toml_str`] can return.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads a card file, falling back to defaults on any failure.
    ///
    /// The failure is logged, never raised. A missing card file is the
    /// normal first-run experience.
    #[must_use]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("loaded card file {}", path.as_ref().display());
                config
            }
            Err(err) => {
                tracing::warn!(
                    "card file {}: {err}; using defaults",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    /// Rejects values no clamp can repair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first non-finite field.
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.tuning;
        let fields = [
            (t.tree.height, "tuning.tree.height"),
            (t.tree.base_radius, "tuning.tree.base_radius"),
            (t.tree.spin_rate, "tuning.tree.spin_rate"),
            (t.topper.pulse_rate, "tuning.topper.pulse_rate"),
            (t.floor.speed_active, "tuning.floor.speed_active"),
            (t.floor.speed_idle, "tuning.floor.speed_idle"),
            (t.floor.amplitude_active, "tuning.floor.amplitude_active"),
            (t.floor.amplitude_idle, "tuning.floor.amplitude_idle"),
            (t.snow.half_extent, "tuning.snow.half_extent"),
            (t.fireworks.lifetime, "tuning.fireworks.lifetime"),
            (t.fireworks.interval_min, "tuning.fireworks.interval_min"),
            (t.fireworks.interval_range, "tuning.fireworks.interval_range"),
            (t.sequence.launch_delay, "tuning.sequence.launch_delay"),
            (t.sequence.launch_height, "tuning.sequence.launch_height"),
            (t.sequence.form_delay, "tuning.sequence.form_delay"),
        ];
        for (value, field) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{field} is not finite")));
            }
        }
        Ok(())
    }

    /// Clamps out-of-range values in place, warning per repair.
    ///
    /// Counts are capped so a typo cannot allocate gigabytes; spans that
    /// feed random sampling are floored so they stay nonempty; waits are
    /// floored at zero.
    pub fn sanitize(&mut self) {
        let t = &mut self.tuning;
        cap_count(&mut t.tree.particles, "tuning.tree.particles");
        cap_count(&mut t.ornaments.large_count, "tuning.ornaments.large_count");
        cap_count(&mut t.ornaments.small_count, "tuning.ornaments.small_count");
        cap_count(&mut t.topper.particles, "tuning.topper.particles");
        cap_count(&mut t.floor.particles, "tuning.floor.particles");
        cap_count(&mut t.snow.particles, "tuning.snow.particles");
        cap_count(
            &mut t.fireworks.burst_particles,
            "tuning.fireworks.burst_particles",
        );
        cap_count(
            &mut t.sequence.max_particles,
            "tuning.sequence.max_particles",
        );

        floor_value(&mut t.tree.height, MIN_EXTENT, "tuning.tree.height");
        floor_value(&mut t.snow.half_extent, MIN_EXTENT, "tuning.snow.half_extent");
        floor_value(
            &mut t.fireworks.lifetime,
            MIN_LIFETIME,
            "tuning.fireworks.lifetime",
        );
        floor_value(
            &mut t.fireworks.interval_range,
            MIN_INTERVAL_RANGE,
            "tuning.fireworks.interval_range",
        );
        floor_value(
            &mut t.fireworks.interval_min,
            0.0,
            "tuning.fireworks.interval_min",
        );
        floor_value(
            &mut t.sequence.launch_delay,
            0.0,
            "tuning.sequence.launch_delay",
        );
        floor_value(
            &mut t.sequence.form_delay,
            0.0,
            "tuning.sequence.form_delay",
        );
    }
}

/// Caps a particle count, warning when the card file overshot.
fn cap_count(value: &mut usize, field: &str) {
    if *value > MAX_COUNT {
        tracing::warn!("{field} = {value} capped to {MAX_COUNT}");
        *value = MAX_COUNT;
    }
}

/// Floors a float field, warning when the card file undershot.
fn floor_value(value: &mut f32, min: f32, field: &str) {
    if *value < min {
        tracing::warn!("{field} = {value} raised to {min}");
        *value = min;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.name, "Amy");
        assert_eq!(config.tuning.tree.particles, 32_000);
        assert_eq!(config.tuning.sequence.max_particles, 7_000);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = CardConfig::from_toml_str(
            "name = \"Noa\"\nseed = 7\n\n[tuning.tree]\nparticles = 500\n",
        )
        .unwrap();
        assert_eq!(config.name, "Noa");
        assert_eq!(config.seed, 7);
        assert_eq!(config.tuning.tree.particles, 500);
        assert_eq!(config.tuning.floor.particles, 35_000);
        assert!((config.tuning.sequence.form_delay - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CardConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = CardConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.name, config.name);
        assert_eq!(parsed.seed, config.seed);
        assert_eq!(parsed.tuning.snow.particles, config.tuning.snow.particles);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CardConfig::load("/no/such/card.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = CardConfig::from_toml_str("name = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_non_finite_float_is_invalid() {
        let err =
            CardConfig::from_toml_str("[tuning.fireworks]\nlifetime = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("tuning.fireworks.lifetime"));
    }

    #[test]
    fn test_sanitize_caps_runaway_counts() {
        let config = CardConfig::from_toml_str(
            "[tuning.floor]\nparticles = 50000000\n",
        )
        .unwrap();
        assert_eq!(config.tuning.floor.particles, 1_000_000);
    }

    #[test]
    fn test_sanitize_floors_degenerate_spans() {
        let config = CardConfig::from_toml_str(
            "[tuning.snow]\nhalf_extent = 0.0\n\n[tuning.fireworks]\nlifetime = 0.0\ninterval_range = -1.0\n",
        )
        .unwrap();
        assert!((config.tuning.snow.half_extent - 0.1).abs() < f32::EPSILON);
        assert!((config.tuning.fireworks.lifetime - 0.1).abs() < f32::EPSILON);
        assert!((config.tuning.fireworks.interval_range - 0.01).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_waits_are_floored() {
        let config = CardConfig::from_toml_str(
            "[tuning.sequence]\nlaunch_delay = -2.0\nform_delay = -0.5\n",
        )
        .unwrap();
        assert_eq!(config.tuning.sequence.launch_delay, 0.0);
        assert_eq!(config.tuning.sequence.form_delay, 0.0);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = CardConfig::load_or_default("/no/such/card.toml");
        assert_eq!(config.name, "Amy");
        assert_eq!(config.seed, 2024);
    }
}
