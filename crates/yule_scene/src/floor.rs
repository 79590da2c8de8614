//! Rippling particle floor under the tree.
//!
//! Particles are scattered in a ring and never move horizontally; every
//! tick rewrites only the heights from a radial wave whose speed and
//! amplitude step up when the card is activated. Radial distances are
//! baked at generation so the tick path stays trigonometry over cached
//! floats.

use yule_core::{ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    FLOOR_COLOR_FALLOFF_RADIUS, FLOOR_INNER_RADIUS, FLOOR_LEVEL, FLOOR_OPACITY,
    FLOOR_RADIUS_RANGE, FLOOR_SIZE, FLOOR_WAVE_DECAY, FLOOR_WAVE_FREQUENCY,
};
use yule_shared::{palette, Color, Vec3};

use crate::config::FloorConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// The rippling ground plane.
pub struct FloorRipples {
    buffer: ParticleBuffer,
    /// Radial distance per particle, fixed at generation.
    distances: Box<[f32]>,
    style: PointStyle,
    dirty: DirtyFlags,
    config: FloorConfig,
}

impl FloorRipples {
    /// Scatters the ring and bakes colors and radial distances.
    #[must_use]
    pub fn generate(config: &FloorConfig, rng: &mut SceneRng) -> Self {
        let mut buffer = ParticleBuffer::new(config.particles);
        buffer.set_len(config.particles);
        let mut distances = vec![0.0_f32; config.particles].into_boxed_slice();

        for i in 0..config.particles {
            let radius = rng.range(FLOOR_INNER_RADIUS, FLOOR_INNER_RADIUS + FLOOR_RADIUS_RANGE);
            let theta = rng.azimuth();
            distances[i] = radius;

            buffer.positions_mut()[i] =
                Vec3::new(theta.cos() * radius, FLOOR_LEVEL, theta.sin() * radius);

            // White near the tree, fading to ice blue at the rim.
            let fade = (radius / FLOOR_COLOR_FALLOFF_RADIUS).min(1.0);
            buffer.colors_mut()[i] = Color::WHITE.lerp(palette::FLOOR, fade);
        }

        Self {
            buffer,
            distances,
            style: PointStyle::vertex_colored(FLOOR_SIZE, FLOOR_OPACITY.1),
            dirty: DirtyFlags::CLEAN,
            config: config.clone(),
        }
    }

    /// Rewrites particle heights from the radial wave.
    pub fn update(&mut self, clock: &SceneClock, activated: bool) {
        let t = clock.elapsed();
        let (speed, amplitude) = if activated {
            (self.config.speed_active, self.config.amplitude_active)
        } else {
            (self.config.speed_idle, self.config.amplitude_idle)
        };

        let positions = self.buffer.positions_mut();
        for (pos, &distance) in positions.iter_mut().zip(self.distances.iter()) {
            let falloff = (-FLOOR_WAVE_DECAY * distance).exp();
            let phase = FLOOR_WAVE_FREQUENCY * distance - t * speed;
            pos.y = FLOOR_LEVEL + phase.sin() * amplitude * falloff;
        }

        self.style = PointStyle::vertex_colored(
            FLOOR_SIZE,
            if activated { FLOOR_OPACITY.0 } else { FLOOR_OPACITY.1 },
        );
        self.dirty = DirtyFlags::POSITIONS;
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::Floor,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: PointTransform::IDENTITY,
            style: self.style,
            dirty: self.dirty,
        }
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the floor holds no particles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
