//! Endless snowfall over the whole scene.
//!
//! Flakes fall at a per-particle speed and drift sideways on a sine of
//! their own height, so columns of snow never move in lockstep. A flake
//! below the kill plane respawns at the top with fresh horizontal
//! coordinates and keeps its speed. Snow runs whether or not the card
//! has been activated.

use yule_core::{ParticleBuffer, SceneRng};
use yule_shared::constants::{
    SNOW_DRIFT, SNOW_FLOOR_Y, SNOW_RESPAWN_Y, SNOW_SPAWN_MIN_Y, SNOW_SPAWN_RANGE_Y,
    SNOW_SPEED_MIN, SNOW_SPEED_RANGE, SNOW_STYLE,
};
use yule_shared::{Color, Vec3};

use crate::config::SnowConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// Falling snow volume.
pub struct Snowfall {
    buffer: ParticleBuffer,
    /// Fall speed per particle, units per tick, fixed for life.
    speeds: Box<[f32]>,
    /// Owned stream; respawns draw fresh horizontal coordinates.
    rng: SceneRng,
    half_extent: f32,
    dirty: DirtyFlags,
}

impl Snowfall {
    /// Seeds the volume. The stream stays owned for respawn draws.
    #[must_use]
    pub fn generate(config: &SnowConfig, mut rng: SceneRng) -> Self {
        let mut buffer = ParticleBuffer::new(config.particles);
        buffer.set_len(config.particles);
        let mut speeds = vec![0.0_f32; config.particles].into_boxed_slice();
        let half = config.half_extent;

        for i in 0..config.particles {
            let x = rng.range(-half, half);
            let y = rng.range(SNOW_SPAWN_MIN_Y, SNOW_SPAWN_MIN_Y + SNOW_SPAWN_RANGE_Y);
            let z = rng.range(-half, half);
            buffer.positions_mut()[i] = Vec3::new(x, y, z);
            buffer.colors_mut()[i] = Color::WHITE;
            speeds[i] = rng.range(SNOW_SPEED_MIN, SNOW_SPEED_MIN + SNOW_SPEED_RANGE);
        }

        Self {
            buffer,
            speeds,
            rng,
            half_extent: half,
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// One tick of fall, drift, and wrap.
    pub fn update(&mut self) {
        let positions = self.buffer.positions_mut();
        for (pos, &speed) in positions.iter_mut().zip(self.speeds.iter()) {
            pos.y -= speed;
            // Drift reads the height after the fall step.
            pos.x += pos.y.sin() * SNOW_DRIFT;

            if pos.y < SNOW_FLOOR_Y {
                pos.y = SNOW_RESPAWN_Y;
                pos.x = self.rng.range(-self.half_extent, self.half_extent);
                pos.z = self.rng.range(-self.half_extent, self.half_extent);
            }
        }
        self.dirty = DirtyFlags::POSITIONS;
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::Snow,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: PointTransform::IDENTITY,
            style: PointStyle::uniform(SNOW_STYLE.0, SNOW_STYLE.1, Color::WHITE),
            dirty: self.dirty,
        }
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when there is no snow.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yule_core::SceneSeed;

    fn test_snow(seed: u64, particles: usize) -> Snowfall {
        let config = SnowConfig {
            particles,
            ..SnowConfig::default()
        };
        Snowfall::generate(&config, SceneSeed::new(seed).rng())
    }

    #[test]
    fn test_spawn_bounds() {
        let snow = test_snow(51, 800);
        for p in snow.view().positions {
            assert!(p.x.abs() < 25.0 && p.z.abs() < 25.0);
            assert!((5.0..35.0).contains(&p.y));
        }
        for &s in snow.speeds.iter() {
            assert!((0.02..0.07).contains(&s));
        }
    }

    #[test]
    fn test_every_flake_falls() {
        let mut snow = test_snow(52, 400);
        let before: Vec<Vec3> = snow.view().positions.to_vec();
        snow.update();
        for (a, b) in before.iter().zip(snow.view().positions.iter()) {
            assert!(b.y < a.y);
        }
        assert!(snow.view().dirty.positions);
    }

    #[test]
    fn test_drift_follows_moved_height() {
        let mut snow = test_snow(53, 400);
        let before: Vec<Vec3> = snow.view().positions.to_vec();
        snow.update();
        // One tick never wraps from the spawn band, so drift is the only
        // horizontal change and it samples the post-fall height.
        for (a, b) in before.iter().zip(snow.view().positions.iter()) {
            assert!((b.x - a.x - b.y.sin() * SNOW_DRIFT).abs() < 1e-5);
            assert!((b.z - a.z).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wrap_keeps_snow_inside_the_volume() {
        let mut snow = test_snow(54, 300);
        for _ in 0..2_600 {
            snow.update();
        }
        // 2600 ticks outlive the slowest possible fall from the top of
        // the spawn band, so every flake has wrapped at least once.
        for p in snow.view().positions {
            assert!(p.y >= SNOW_FLOOR_Y - 1e-6 && p.y <= SNOW_RESPAWN_Y + 1e-6);
            assert!(p.x.abs() < 27.0, "drift carried a flake too far: {}", p.x);
            assert!(p.z.abs() < 25.0);
        }
    }

    #[test]
    fn test_same_seed_same_flurry() {
        let mut a = test_snow(55, 300);
        let mut b = test_snow(55, 300);
        for _ in 0..100 {
            a.update();
            b.update();
        }
        assert_eq!(a.view().positions, b.view().positions);
    }
}
