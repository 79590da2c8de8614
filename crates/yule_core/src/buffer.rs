//! # Particle Buffer
//!
//! Pre-allocated, structure-of-arrays particle storage with zero runtime
//! allocations.
//!
//! The buffer uses a dense parallel-array strategy:
//! - Every array is allocated once at creation, sized to capacity
//! - Index `i` refers to the same logical particle in every array
//! - The logical length can move within `0..=capacity` but the backing
//!   memory never does

use bytemuck::cast_slice;
use yule_shared::{Color, Vec3};

/// Fixed-capacity particle storage.
///
/// Positions and colors are always present. Velocity and target arrays are
/// opt-in at construction; populations that never integrate velocities or
/// chase targets simply do not pay for them.
///
/// A zero-capacity buffer is legal: it holds nothing and renders nothing.
/// Empty glyph sets produce exactly that.
///
/// # Example
///
/// ```rust,ignore
/// let mut buf = ParticleBuffer::new(7000).with_velocities().with_targets();
/// buf.set_len(7000);
/// buf.positions_mut()[0] = Vec3::new(0.0, 12.0, 0.0);
/// ```
pub struct ParticleBuffer {
    /// Particle positions, world units.
    positions: Box<[Vec3]>,
    /// Per-particle colors.
    colors: Box<[Color]>,
    /// Per-particle velocities; empty unless enabled.
    velocities: Box<[Vec3]>,
    /// Per-particle seek targets; empty unless enabled.
    targets: Box<[Vec3]>,
    /// Maximum particle count, fixed at construction.
    capacity: usize,
    /// Live particle count.
    len: usize,
}

impl ParticleBuffer {
    /// Creates a buffer with position and color arrays sized to `capacity`.
    ///
    /// The buffer starts empty (`len == 0`).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; capacity].into_boxed_slice(),
            colors: vec![Color::WHITE; capacity].into_boxed_slice(),
            velocities: Box::default(),
            targets: Box::default(),
            capacity,
            len: 0,
        }
    }

    /// Adds a velocity array sized to capacity.
    #[must_use]
    pub fn with_velocities(mut self) -> Self {
        self.velocities = vec![Vec3::ZERO; self.capacity].into_boxed_slice();
        self
    }

    /// Adds a target array sized to capacity.
    #[must_use]
    pub fn with_targets(mut self) -> Self {
        self.targets = vec![Vec3::ZERO; self.capacity].into_boxed_slice();
        self
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the live particle count.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no particles are live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the live count, clamped to capacity.
    ///
    /// Returns the count actually applied. Requests beyond capacity are
    /// truncated silently; callers that care report the shortfall.
    pub fn set_len(&mut self, len: usize) -> usize {
        self.len = len.min(self.capacity);
        self.len
    }

    /// Live positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions[..self.len]
    }

    /// Mutable live positions.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions[..self.len]
    }

    /// Live colors.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors[..self.len]
    }

    /// Mutable live colors.
    #[inline]
    pub fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.colors[..self.len]
    }

    /// Live velocities; empty when the array was not enabled.
    #[inline]
    #[must_use]
    pub fn velocities(&self) -> &[Vec3] {
        let n = self.len.min(self.velocities.len());
        &self.velocities[..n]
    }

    /// Mutable live velocities; empty when the array was not enabled.
    #[inline]
    pub fn velocities_mut(&mut self) -> &mut [Vec3] {
        let n = self.len.min(self.velocities.len());
        &mut self.velocities[..n]
    }

    /// Live targets; empty when the array was not enabled.
    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[Vec3] {
        let n = self.len.min(self.targets.len());
        &self.targets[..n]
    }

    /// Mutable live targets; empty when the array was not enabled.
    #[inline]
    pub fn targets_mut(&mut self) -> &mut [Vec3] {
        let n = self.len.min(self.targets.len());
        &mut self.targets[..n]
    }

    /// Live positions as raw bytes for upload.
    #[inline]
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(self.positions())
    }

    /// Live colors as raw bytes for upload.
    #[inline]
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        cast_slice(self.colors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_empty() {
        let buf = ParticleBuffer::new(100);
        assert_eq!(buf.capacity(), 100);
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(buf.positions().is_empty());
    }

    #[test]
    fn test_set_len_clamps_to_capacity() {
        let mut buf = ParticleBuffer::new(10);
        assert_eq!(buf.set_len(5), 5);
        assert_eq!(buf.positions().len(), 5);

        assert_eq!(buf.set_len(1_000), 10);
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_optional_arrays_absent_by_default() {
        let mut buf = ParticleBuffer::new(4);
        buf.set_len(4);
        assert!(buf.velocities().is_empty());
        assert!(buf.targets().is_empty());

        let mut buf = ParticleBuffer::new(4).with_velocities().with_targets();
        buf.set_len(4);
        assert_eq!(buf.velocities().len(), 4);
        assert_eq!(buf.targets().len(), 4);
    }

    #[test]
    fn test_arrays_stay_parallel() {
        let mut buf = ParticleBuffer::new(8).with_velocities();
        buf.set_len(3);
        buf.positions_mut()[2] = Vec3::new(1.0, 2.0, 3.0);
        buf.velocities_mut()[2] = Vec3::new(0.1, 0.2, 0.3);
        buf.colors_mut()[2] = Color::new(0.5, 0.0, 0.0);

        assert_eq!(buf.positions()[2], Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(buf.velocities()[2], Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(buf.colors()[2], Color::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_zero_capacity_is_inert() {
        let mut buf = ParticleBuffer::new(0).with_velocities();
        assert_eq!(buf.set_len(100), 0);
        assert!(buf.positions().is_empty());
        assert!(buf.position_bytes().is_empty());
    }

    #[test]
    fn test_byte_views_match_len() {
        let mut buf = ParticleBuffer::new(16);
        buf.set_len(4);
        // 4 particles * 3 floats * 4 bytes
        assert_eq!(buf.position_bytes().len(), 48);
        assert_eq!(buf.color_bytes().len(), 48);
    }
}
