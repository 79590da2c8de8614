//! Linear RGB color with HSL adjustment.
//!
//! Colors travel to the renderer as plain `[f32; 3]` triplets, one per
//! particle. The HSL path exists for generation-time jitter only; nothing
//! converts per frame.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color, each channel in `[0, 1]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Creates a new color from channel values in `[0, 1]`
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pure white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Pure black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Componentwise linear interpolation toward `target`.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `target`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        Self::new(
            self.r + (target.r - self.r) * t,
            self.g + (target.g - self.g) * t,
            self.b + (target.b - self.b) * t,
        )
    }

    /// Decomposes into (hue, saturation, lightness), each in `[0, 1]`.
    ///
    /// Achromatic colors report hue 0 and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let lightness = (min + max) / 2.0;

        if (max - min).abs() < f32::EPSILON {
            return (0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let hue = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (hue / 6.0, saturation, lightness)
    }

    /// Builds a color from (hue, saturation, lightness).
    ///
    /// Hue wraps modulo 1; saturation and lightness are clamped to `[0, 1]`.
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::new(
            hue_channel(p, q, h + 1.0 / 3.0),
            hue_channel(p, q, h),
            hue_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// Shifts the color in HSL space.
    ///
    /// Used at generation time to jitter particle colors around a base.
    /// Hue wraps; saturation and lightness saturate at their bounds.
    #[must_use]
    pub fn offset_hsl(self, dh: f32, ds: f32, dl: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + dh, s + ds, l + dl)
    }
}

/// Single-channel helper for HSL to RGB conversion.
fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
