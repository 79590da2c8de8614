//! Heart-shaped tree topper with a heartbeat pulse.
//!
//! The volume is filled by rejection sampling a cube against the classic
//! implicit heart surface `(x^2 + 9/4 z^2 + y^2 - 1)^3 < x^2 y^3 + 9/80 z^2 y^3`,
//! with the vertical axis stretched before the test so the lobes read
//! clearly from the card's camera. Accepted samples shrink and lift into
//! place; the whole population then rides a rotating, pulsing transform.

use yule_core::{ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    TOPPER_HEIGHT, TOPPER_LIFT, TOPPER_PULSE_AMPLITUDE, TOPPER_SAMPLE_HALF_EXTENT, TOPPER_SHRINK,
    TOPPER_STYLE, TOPPER_VERTICAL_STRETCH,
};
use yule_shared::{palette, Vec3};

use crate::config::TopperConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// The heart above the tree.
pub struct HeartTopper {
    /// Static heart volume, local frame.
    buffer: ParticleBuffer,
    /// Rotation and heartbeat scale; position is fixed above the tree.
    transform: PointTransform,
    /// Heartbeat frequency, radians per second.
    pulse_rate: f32,
}

/// Implicit heart test in stretched sample space.
///
/// `a` is the sample x, `b` the sample z, `c` the stretched sample y.
/// Negative values are inside the heart.
fn heart_field(a: f32, b: f32, c: f32) -> f32 {
    let p = a * a + (9.0 / 4.0) * b * b + c * c - 1.0;
    p * p * p - a * a * c * c * c - (9.0 / 80.0) * b * b * c * c * c
}

impl HeartTopper {
    /// Fills the heart volume by rejection sampling.
    #[must_use]
    pub fn generate(config: &TopperConfig, rng: &mut SceneRng) -> Self {
        let mut buffer = ParticleBuffer::new(config.particles);
        buffer.set_len(config.particles);

        let mut placed = 0;
        while placed < config.particles {
            let x = rng.range(-TOPPER_SAMPLE_HALF_EXTENT, TOPPER_SAMPLE_HALF_EXTENT);
            let y = rng.range(-TOPPER_SAMPLE_HALF_EXTENT, TOPPER_SAMPLE_HALF_EXTENT);
            let z = rng.range(-TOPPER_SAMPLE_HALF_EXTENT, TOPPER_SAMPLE_HALF_EXTENT);

            if heart_field(x, z, y * TOPPER_VERTICAL_STRETCH) < 0.0 {
                buffer.positions_mut()[placed] = Vec3::new(
                    x * TOPPER_SHRINK,
                    y * TOPPER_SHRINK + TOPPER_LIFT,
                    z * TOPPER_SHRINK,
                );
                buffer.colors_mut()[placed] = palette::HEART;
                placed += 1;
            }
        }

        Self {
            buffer,
            transform: PointTransform::at(Vec3::new(0.0, TOPPER_HEIGHT, 0.0)),
            pulse_rate: config.pulse_rate,
        }
    }

    /// Advances the rotation and the heartbeat.
    pub fn update(&mut self, clock: &SceneClock) {
        let t = clock.elapsed();
        // One radian per second around the vertical axis.
        self.transform.rotation_y = t;
        let beat = (t * self.pulse_rate).sin();
        self.transform.scale = 1.0 + beat * beat * TOPPER_PULSE_AMPLITUDE;
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::Topper,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: self.transform,
            style: PointStyle::uniform(TOPPER_STYLE.0, TOPPER_STYLE.1, palette::HEART),
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the heart holds no particles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
