//! Tuning knobs for the scene systems.
//!
//! Every config defaults to the production values in
//! [`yule_shared::constants`]; the card file may override a subset.
//! Counts are capacities: changing one changes how much a system
//! allocates at construction, never how it allocates per tick.

use serde::{Deserialize, Serialize};
use yule_shared::constants;

/// Tree body tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Particle count.
    pub particles: usize,
    /// Cone height, world units.
    pub height: f32,
    /// Cone radius at the base.
    pub base_radius: f32,
    /// Spin rate, radians per second.
    pub spin_rate: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            particles: constants::TREE_PARTICLES,
            height: constants::TREE_HEIGHT,
            base_radius: constants::TREE_MAX_BASE_RADIUS,
            spin_rate: constants::TREE_SPIN_RATE,
        }
    }
}

/// Ornament tier tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrnamentConfig {
    /// Large bauble count.
    pub large_count: usize,
    /// Small bauble count.
    pub small_count: usize,
}

impl Default for OrnamentConfig {
    fn default() -> Self {
        Self {
            large_count: constants::ORNAMENT_LARGE_COUNT,
            small_count: constants::ORNAMENT_SMALL_COUNT,
        }
    }
}

/// Heart topper tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopperConfig {
    /// Particle count.
    pub particles: usize,
    /// Heartbeat frequency, radians per second.
    pub pulse_rate: f32,
}

impl Default for TopperConfig {
    fn default() -> Self {
        Self {
            particles: constants::TOPPER_PARTICLES,
            pulse_rate: constants::TOPPER_PULSE_RATE,
        }
    }
}

/// Floor ripple tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    /// Particle count.
    pub particles: usize,
    /// Ripple phase speed while activated.
    pub speed_active: f32,
    /// Ripple phase speed while idle.
    pub speed_idle: f32,
    /// Ripple amplitude while activated.
    pub amplitude_active: f32,
    /// Ripple amplitude while idle.
    pub amplitude_idle: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            particles: constants::FLOOR_PARTICLES,
            speed_active: constants::FLOOR_SPEED_ACTIVE,
            speed_idle: constants::FLOOR_SPEED_IDLE,
            amplitude_active: constants::FLOOR_AMPLITUDE_ACTIVE,
            amplitude_idle: constants::FLOOR_AMPLITUDE_IDLE,
        }
    }
}

/// Snowfall tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    /// Flake count.
    pub particles: usize,
    /// Horizontal half-extent of the snow volume.
    pub half_extent: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            particles: constants::SNOW_PARTICLES,
            half_extent: constants::SNOW_HALF_EXTENT,
        }
    }
}

/// Ambient firework tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworkConfig {
    /// Particles per burst.
    pub burst_particles: usize,
    /// Burst lifetime, time units.
    pub lifetime: f32,
    /// Shortest wait between launches.
    pub interval_min: f32,
    /// Width of the launch wait band.
    pub interval_range: f32,
}

impl Default for FireworkConfig {
    fn default() -> Self {
        Self {
            burst_particles: constants::BURST_PARTICLES,
            lifetime: constants::BURST_LIFETIME,
            interval_min: constants::BURST_INTERVAL_MIN,
            interval_range: constants::BURST_INTERVAL_RANGE,
        }
    }
}

/// Name-formation sequence tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Particle buffer capacity.
    pub max_particles: usize,
    /// Delay between activation and rocket launch.
    pub launch_delay: f32,
    /// Detonation height.
    pub launch_height: f32,
    /// Hang time between detonation and text formation.
    pub form_delay: f32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_particles: constants::SEQUENCE_MAX_PARTICLES,
            launch_delay: constants::SEQUENCE_LAUNCH_DELAY,
            launch_height: constants::SEQUENCE_LAUNCH_HEIGHT,
            form_delay: constants::SEQUENCE_FORM_DELAY,
        }
    }
}

/// Full scene tuning, one table per system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneTuning {
    /// Tree body.
    pub tree: TreeConfig,
    /// Ornament tiers.
    pub ornaments: OrnamentConfig,
    /// Heart topper.
    pub topper: TopperConfig,
    /// Floor ripples.
    pub floor: FloorConfig,
    /// Snowfall.
    pub snow: SnowConfig,
    /// Ambient fireworks.
    pub fireworks: FireworkConfig,
    /// Name-formation sequence.
    pub sequence: SequenceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_constants() {
        let tuning = SceneTuning::default();
        assert_eq!(tuning.tree.particles, 32_000);
        assert_eq!(tuning.ornaments.large_count, 140);
        assert_eq!(tuning.ornaments.small_count, 250);
        assert_eq!(tuning.topper.particles, 1_200);
        assert_eq!(tuning.floor.particles, 35_000);
        assert_eq!(tuning.snow.particles, 2_500);
        assert_eq!(tuning.fireworks.burst_particles, 300);
        assert_eq!(tuning.sequence.max_particles, 7_000);
    }

    #[test]
    fn test_sequence_delays_default() {
        let seq = SequenceConfig::default();
        assert!((seq.launch_delay - 1.0).abs() < f32::EPSILON);
        assert!((seq.form_delay - 1.5).abs() < f32::EPSILON);
        assert!((seq.launch_height - 12.0).abs() < f32::EPSILON);
    }
}
