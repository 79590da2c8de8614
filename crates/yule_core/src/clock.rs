//! # Scene Clock
//!
//! The single time source for the card. The driver advances it once per
//! frame; every simulator reads it. Nothing else in the engine touches
//! wall time.

use yule_shared::constants::MAX_DELTA;

/// Monotonic scene time.
///
/// Holds elapsed time, the delta applied by the latest advance, and the
/// frame counter. Deltas are clamped so a hitch or debugger pause cannot
/// explode the integrators.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneClock {
    /// Elapsed scene time in seconds.
    t: f32,
    /// Delta applied by the latest `advance`.
    dt: f32,
    /// Frames advanced so far.
    frame: u64,
}

impl SceneClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `dt` seconds.
    ///
    /// Negative deltas are treated as zero; deltas above `MAX_DELTA` are
    /// clamped before integration.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DELTA) } else { 0.0 };
        self.t += dt;
        self.dt = dt;
        self.frame += 1;
    }

    /// Elapsed scene time in seconds.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.t
    }

    /// Delta applied by the latest advance.
    #[inline]
    #[must_use]
    pub const fn delta(&self) -> f32 {
        self.dt
    }

    /// Frames advanced so far.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_accumulates() {
        let mut clock = SceneClock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
        assert_eq!(clock.frame(), 2);
        assert!((clock.delta() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_clock_clamps_hitches() {
        let mut clock = SceneClock::new();
        clock.advance(5.0);
        assert!((clock.elapsed() - MAX_DELTA).abs() < 1e-6);
    }

    #[test]
    fn test_clock_rejects_negative_and_nan() {
        let mut clock = SceneClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame(), 2);
    }
}
