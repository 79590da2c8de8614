//! Main tree body: a layered particle cone with a slow spin.
//!
//! Generation runs once per session. The cone is stacked in eight branch
//! layers; within a layer, particles extend further near the layer's lower
//! edge, which reads as drooping pine branches. After generation the
//! arrays never change; only the view transform rotates.

use yule_core::{ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    TREE_BASE_DROP, TREE_DROOP, TREE_GOLD_THRESHOLD, TREE_JITTER_LIGHTNESS,
    TREE_JITTER_SATURATION, TREE_LAYERS, TREE_OPACITY, TREE_RADIAL_EXPONENT, TREE_RED_THRESHOLD,
    TREE_SIZE,
};
use yule_shared::{palette, Vec3};

use crate::config::TreeConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// The tree's particle population.
pub struct TreeBody {
    /// Static particle data, written once at generation.
    buffer: ParticleBuffer,
    /// Whole-tree placement; rotation carries the spin.
    transform: PointTransform,
    /// Current style preset.
    style: PointStyle,
    /// Always clean after generation.
    dirty: DirtyFlags,
    /// Spin rate, radians per second.
    spin_rate: f32,
}

impl TreeBody {
    /// Generates the tree from a dedicated random stream.
    #[must_use]
    pub fn generate(config: &TreeConfig, rng: &mut SceneRng) -> Self {
        let mut buffer = ParticleBuffer::new(config.particles);
        buffer.set_len(config.particles);

        for i in 0..config.particles {
            let y = rng.range(0.0, config.height);
            let rel = y / config.height;

            // Branch layers: radius bulges near each layer's lower edge.
            let layer_phase = (rel * TREE_LAYERS).fract();
            let cone = (1.0 - rel) * config.base_radius;
            let extension = 0.6 + 0.4 * (1.0 - layer_phase).powf(1.5);

            // Bias particles toward the branch surface.
            let radius = cone * extension * rng.unit().powf(TREE_RADIAL_EXPONENT);
            let theta = rng.azimuth();

            // Branches sag with reach.
            let droop = radius / config.base_radius * TREE_DROOP;

            buffer.positions_mut()[i] = Vec3::new(
                theta.cos() * radius,
                y - TREE_BASE_DROP - droop,
                theta.sin() * radius,
            );

            let roll = rng.unit();
            let color = if roll > TREE_RED_THRESHOLD {
                palette::TREE_PRIMARY.offset_hsl(
                    0.0,
                    rng.range(-TREE_JITTER_SATURATION, TREE_JITTER_SATURATION),
                    rng.range(-TREE_JITTER_LIGHTNESS, TREE_JITTER_LIGHTNESS),
                )
            } else if roll > TREE_GOLD_THRESHOLD {
                palette::TREE_SECONDARY
            } else {
                palette::TREE_HIGHLIGHT
            };
            buffer.colors_mut()[i] = color;
        }

        Self {
            buffer,
            transform: PointTransform::IDENTITY,
            style: PointStyle::vertex_colored(TREE_SIZE.1, TREE_OPACITY.1),
            dirty: DirtyFlags::CLEAN,
            spin_rate: config.spin_rate,
        }
    }

    /// Advances the spin and picks the style preset for this frame.
    pub fn update(&mut self, clock: &SceneClock, activated: bool) {
        self.dirty.reset();
        self.transform.rotation_y = self.spin_rate * clock.elapsed();
        self.style = if activated {
            PointStyle::vertex_colored(TREE_SIZE.0, TREE_OPACITY.0)
        } else {
            PointStyle::vertex_colored(TREE_SIZE.1, TREE_OPACITY.1)
        };
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::Tree,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: self.transform,
            style: self.style,
            dirty: self.dirty,
        }
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the tree holds no particles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
