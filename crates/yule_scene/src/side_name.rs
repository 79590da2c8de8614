//! Floating name beside the tree.
//!
//! Glyph points are sampled once at construction; every tick rewrites
//! the buffer from those base points with two slow waves, one over
//! height keyed by the point's column and one over depth keyed by its
//! row. The view transform angles the panel toward the camera. An empty
//! or unsampleable name is a zero-particle population, not an error.

use yule_core::{ParticleBuffer, SceneClock};
use yule_shared::constants::{
    SIDE_NAME_POSITION, SIDE_NAME_ROTATION, SIDE_NAME_STYLE, SIDE_NAME_WAVE_Y_AMPLITUDE,
    SIDE_NAME_WAVE_Y_PHASE, SIDE_NAME_WAVE_Y_RATE, SIDE_NAME_WAVE_Z_AMPLITUDE,
    SIDE_NAME_WAVE_Z_PHASE, SIDE_NAME_WAVE_Z_RATE,
};
use yule_shared::{palette, Vec3};
use yule_text::{sample, GlyphPointSet, SamplerConfig};

use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// The recipient's name, floating at the side panel.
pub struct SideName {
    /// Undisturbed glyph points; the waves never touch these.
    base: GlyphPointSet,
    buffer: ParticleBuffer,
    transform: PointTransform,
    dirty: DirtyFlags,
}

impl SideName {
    /// Samples the name once and seeds the buffer at rest.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let base = sample(name, &SamplerConfig::side_name());
        let mut buffer = ParticleBuffer::new(base.len());
        buffer.set_len(base.len());
        for (i, point) in base.points().iter().enumerate() {
            buffer.positions_mut()[i] = *point;
            buffer.colors_mut()[i] = palette::TEXT;
        }

        let transform = PointTransform {
            position: Vec3::new(
                SIDE_NAME_POSITION[0],
                SIDE_NAME_POSITION[1],
                SIDE_NAME_POSITION[2],
            ),
            rotation_y: SIDE_NAME_ROTATION,
            scale: 1.0,
        };

        Self {
            base,
            buffer,
            transform,
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// Rewrites the buffer from the base points plus this tick's waves.
    pub fn update(&mut self, clock: &SceneClock) {
        if self.base.is_empty() {
            return;
        }
        let t = clock.elapsed();
        let positions = self.buffer.positions_mut();
        for (pos, base) in positions.iter_mut().zip(self.base.points().iter()) {
            pos.x = base.x;
            pos.y = base.y
                + (t * SIDE_NAME_WAVE_Y_RATE + base.x * SIDE_NAME_WAVE_Y_PHASE).sin()
                    * SIDE_NAME_WAVE_Y_AMPLITUDE;
            pos.z = (t * SIDE_NAME_WAVE_Z_RATE + base.y * SIDE_NAME_WAVE_Z_PHASE).cos()
                * SIDE_NAME_WAVE_Z_AMPLITUDE;
        }
        self.dirty = DirtyFlags::POSITIONS;
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::SideName,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: self.transform,
            style: PointStyle::uniform(SIDE_NAME_STYLE.0, SIDE_NAME_STYLE.1, palette::TEXT),
            dirty: self.dirty,
        }
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the name sampled to nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
