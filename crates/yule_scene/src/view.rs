//! Read-only views over engine-owned particle arrays.
//!
//! The renderer consumes these instead of reaching into the systems. Views
//! borrow the arrays directly; a frame's views must be dropped before the
//! next `update` call, which the borrow checker enforces for free.

use bytemuck::cast_slice;
use yule_shared::{Color, Vec3};

/// Identity of a fixed scene population.
///
/// The scene always exposes exactly one view per variant, in this order.
/// Ambient firework bursts are not populations; they come and go and are
/// exposed separately as [`BurstView`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Population {
    /// Rippling ground disc.
    Floor = 0,
    /// Main tree body.
    Tree = 1,
    /// Large bauble tier.
    OrnamentsLarge = 2,
    /// Small bauble tier.
    OrnamentsSmall = 3,
    /// Heart above the tree.
    Topper = 4,
    /// Falling snow volume.
    Snow = 5,
    /// Floating name beside the tree.
    SideName = 6,
    /// Name-formation firework particles.
    Sequence = 7,
}

impl Population {
    /// Number of fixed populations.
    pub const COUNT: usize = 8;

    /// All populations in render order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Floor,
        Self::Tree,
        Self::OrnamentsLarge,
        Self::OrnamentsSmall,
        Self::Topper,
        Self::Snow,
        Self::SideName,
        Self::Sequence,
    ];

    /// Stable index into per-population arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Object-level placement applied to a whole population.
///
/// Per-particle positions stay in the population's local frame; spins,
/// bobs and pulses move this transform instead of rewriting 32k points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTransform {
    /// Translation applied after rotation and scale.
    pub position: Vec3,
    /// Rotation around the vertical axis, radians.
    pub rotation_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl PointTransform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation_y: 0.0,
        scale: 1.0,
    };

    /// Identity transform at a fixed position.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

impl Default for PointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Where a population's point colors come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coloring {
    /// One color per particle, from the view's color slice.
    PerParticle,
    /// A single color shared by every point; the color slice may be ignored.
    Uniform(Color),
}

/// Draw style for a population's points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Point sprite size, world units.
    pub size: f32,
    /// Whole-population opacity in `[0, 1]`.
    pub opacity: f32,
    /// Color source.
    pub coloring: Coloring,
}

impl PointStyle {
    /// Per-particle colored style.
    #[must_use]
    pub const fn vertex_colored(size: f32, opacity: f32) -> Self {
        Self {
            size,
            opacity,
            coloring: Coloring::PerParticle,
        }
    }

    /// Single-color style.
    #[must_use]
    pub const fn uniform(size: f32, opacity: f32, color: Color) -> Self {
        Self {
            size,
            opacity,
            coloring: Coloring::Uniform(color),
        }
    }
}

/// Per-frame change flags for one population's arrays.
///
/// Reset at the start of the population's update, set when the update
/// writes the corresponding array. The renderer re-uploads only what
/// changed; static populations stay clean forever after generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    /// Position array was written this tick.
    pub positions: bool,
    /// Color array was written this tick.
    pub colors: bool,
}

impl DirtyFlags {
    /// Nothing changed.
    pub const CLEAN: Self = Self {
        positions: false,
        colors: false,
    };

    /// Positions changed, colors did not.
    pub const POSITIONS: Self = Self {
        positions: true,
        colors: false,
    };

    /// Both arrays changed.
    pub const ALL: Self = Self {
        positions: true,
        colors: true,
    };

    /// Clears both flags.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::CLEAN;
    }

    /// True when either array changed.
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.positions || self.colors
    }
}

/// Read-only snapshot of one fixed population for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct PopulationView<'a> {
    /// Which population this is.
    pub population: Population,
    /// Live particle positions, local frame.
    pub positions: &'a [Vec3],
    /// Live particle colors; meaningful only for `Coloring::PerParticle`.
    pub colors: &'a [Color],
    /// Object-level placement.
    pub transform: PointTransform,
    /// Draw style.
    pub style: PointStyle,
    /// What changed this tick.
    pub dirty: DirtyFlags,
}

impl PopulationView<'_> {
    /// Live particle count.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the population holds no live particles.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as raw bytes for buffer upload.
    #[inline]
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(self.positions)
    }

    /// Colors as raw bytes for buffer upload.
    #[inline]
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(self.colors)
    }
}

/// Read-only snapshot of one live ambient burst.
///
/// Burst colors are uniform per burst, so the style carries the color and
/// there is no color slice.
#[derive(Debug, Clone, Copy)]
pub struct BurstView<'a> {
    /// Monotonic burst id, never reused within a session.
    pub id: u64,
    /// Particle positions, scene frame.
    pub positions: &'a [Vec3],
    /// Draw style; opacity decays with burst age.
    pub style: PointStyle,
}

impl BurstView<'_> {
    /// Particle count.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Positions as raw bytes for buffer upload.
    #[inline]
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(self.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_indices_are_dense() {
        for (i, p) in Population::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(Population::ALL.len(), Population::COUNT);
    }

    #[test]
    fn test_default_transform_is_identity() {
        let t = PointTransform::default();
        assert_eq!(t, PointTransform::IDENTITY);
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn test_dirty_flags_reset() {
        let mut d = DirtyFlags::ALL;
        assert!(d.any());
        d.reset();
        assert_eq!(d, DirtyFlags::CLEAN);
        assert!(!d.any());
    }

    #[test]
    fn test_view_byte_sizes() {
        let positions = [Vec3::ZERO, Vec3::UP];
        let colors = [Color::WHITE, Color::BLACK];
        let view = PopulationView {
            population: Population::Snow,
            positions: &positions,
            colors: &colors,
            transform: PointTransform::IDENTITY,
            style: PointStyle::uniform(0.2, 0.8, Color::WHITE),
            dirty: DirtyFlags::POSITIONS,
        };

        assert_eq!(view.len(), 2);
        // 2 points * 3 floats * 4 bytes
        assert_eq!(view.position_bytes().len(), 24);
        assert_eq!(view.color_bytes().len(), 24);
    }
}
