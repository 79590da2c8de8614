//! Soft glow sprite shared by every particle population.
//!
//! Baked once at scene construction; the renderer uploads the RGBA bytes
//! as a point sprite texture and samples it for all populations alike.

/// Sprite edge length in pixels.
pub const SPRITE_SIZE: usize = 32;

/// Radial alpha gradient: (normalized radius, alpha) stops, linearly
/// interpolated between neighbors. Past the last stop the alpha is zero.
const ALPHA_STOPS: [(f32, f32); 4] = [(0.0, 1.0), (0.2, 0.8), (0.5, 0.2), (1.0, 0.0)];

/// A 32x32 RGBA8 radial glow.
///
/// RGB is fully white everywhere; shape lives entirely in the alpha
/// channel so point materials can tint it per particle.
pub struct GlowSprite {
    /// Row-major RGBA8 pixel data, `SPRITE_SIZE * SPRITE_SIZE * 4` bytes.
    pixels: Box<[u8]>,
}

impl GlowSprite {
    /// Bakes the glow gradient.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn generate() -> Self {
        let mut pixels = vec![0_u8; SPRITE_SIZE * SPRITE_SIZE * 4].into_boxed_slice();
        let center = SPRITE_SIZE as f32 / 2.0;
        let radius = SPRITE_SIZE as f32 / 2.0;

        for y in 0..SPRITE_SIZE {
            for x in 0..SPRITE_SIZE {
                // Sample at the pixel center.
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let r = (dx * dx + dy * dy).sqrt() / radius;
                let alpha = (radial_alpha(r) * 255.0).round() as u8;

                let i = (y * SPRITE_SIZE + x) * 4;
                pixels[i] = 255;
                pixels[i + 1] = 255;
                pixels[i + 2] = 255;
                pixels[i + 3] = alpha;
            }
        }

        Self { pixels }
    }

    /// Sprite edge length in pixels.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        SPRITE_SIZE
    }

    /// Row-major RGBA8 bytes for texture upload.
    #[inline]
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Alpha value at a pixel; zero outside the sprite.
    #[must_use]
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        if x >= SPRITE_SIZE || y >= SPRITE_SIZE {
            return 0;
        }
        self.pixels[(y * SPRITE_SIZE + x) * 4 + 3]
    }
}

impl Default for GlowSprite {
    fn default() -> Self {
        Self::generate()
    }
}

/// Alpha at a normalized radius, interpolated between the gradient stops.
fn radial_alpha(r: f32) -> f32 {
    let r = r.clamp(0.0, 1.0);
    for pair in ALPHA_STOPS.windows(2) {
        let (r0, a0) = pair[0];
        let (r1, a1) = pair[1];
        if r <= r1 {
            let t = (r - r0) / (r1 - r0);
            return a0 + (a1 - a0) * t;
        }
    }
    0.0
}
