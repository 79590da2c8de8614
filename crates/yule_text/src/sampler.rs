//! # Glyph Sampler
//!
//! Renders a name into a [`TextRaster`] and scans the ink into an ordered
//! point cloud on the Z = 0 plane.
//!
//! The scan walks rows top to bottom on a fixed stride, so point order is
//! stable: when a downstream buffer truncates, it keeps the top of the
//! text rather than a random thinning.

use embedded_graphics::{
    geometry::Point,
    mono_font::{
        ascii::{FONT_10X20, FONT_6X13_BOLD, FONT_9X18_BOLD},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use yule_shared::Vec3;

use crate::raster::TextRaster;

/// Minimum pixel value counted as ink.
const INK_THRESHOLD: u8 = 128;

/// The monospace bitmap fonts available for sampling.
///
/// Characters outside a font's ASCII coverage render as its replacement
/// glyph; they still produce ink rather than a hole in the name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphFont {
    /// 6x13 bold, for small labels.
    SmallBold,
    /// 9x18 bold, a mid-weight script stand-in.
    MediumBold,
    /// 10x20, the largest built-in face.
    #[default]
    Large,
}

impl GlyphFont {
    /// The character style for this font, ink on transparent.
    #[must_use]
    pub fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        match self {
            Self::SmallBold => MonoTextStyle::new(&FONT_6X13_BOLD, BinaryColor::On),
            Self::MediumBold => MonoTextStyle::new(&FONT_9X18_BOLD, BinaryColor::On),
            Self::Large => MonoTextStyle::new(&FONT_10X20, BinaryColor::On),
        }
    }
}

/// One sampling pass, fully specified.
#[derive(Clone, Copy, Debug)]
pub struct SamplerConfig {
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Font face to render with.
    pub font: GlyphFont,
    /// Integer magnification applied to the font.
    pub pixel_scale: usize,
    /// Scan stride in pixels; higher is sparser.
    pub step: usize,
    /// World units per raster pixel.
    pub scale: f32,
    /// World-space Y offset added to every point.
    pub vertical_offset: f32,
}

impl SamplerConfig {
    /// The sky name formed by the firework: large, sparse, high above the tree.
    #[must_use]
    pub const fn sky_name() -> Self {
        Self {
            width: 1024,
            height: 512,
            font: GlyphFont::Large,
            pixel_scale: 10,
            step: 4,
            scale: 0.03,
            vertical_offset: 12.0,
        }
    }

    /// The floating side panel name: smaller glyphs, denser scan.
    #[must_use]
    pub const fn side_name() -> Self {
        Self {
            width: 1024,
            height: 512,
            font: GlyphFont::Large,
            pixel_scale: 8,
            step: 3,
            scale: 0.04,
            vertical_offset: 0.0,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::sky_name()
    }
}

/// An immutable, ordered point cloud sampled from one piece of text.
#[derive(Clone, Debug, Default)]
pub struct GlyphPointSet {
    /// Points in scan order: rows top to bottom, left to right within a row.
    points: Vec<Vec3>,
}

impl GlyphPointSet {
    /// An empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no ink was sampled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in scan order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Samples `text` into a point cloud.
///
/// Whitespace-only input returns an empty set. Text wider than the raster
/// is clipped at the edges. Two calls with equal inputs return equal sets.
#[must_use]
pub fn sample(text: &str, config: &SamplerConfig) -> GlyphPointSet {
    let text = text.trim();
    if text.is_empty() {
        return GlyphPointSet::empty();
    }

    let mut raster = TextRaster::new(config.width, config.height, config.pixel_scale);
    draw_centered(&mut raster, text, config.font);

    let half_w = config.width as f32 / 2.0;
    let half_h = config.height as f32 / 2.0;
    let step = config.step.max(1);

    let mut points = Vec::new();
    let mut y = 0;
    while y < config.height {
        let mut x = 0;
        while x < config.width {
            if raster.value(x, y) > INK_THRESHOLD {
                points.push(Vec3::new(
                    (x as f32 - half_w) * config.scale,
                    -(y as f32 - half_h) * config.scale + config.vertical_offset,
                    0.0,
                ));
            }
            x += step;
        }
        y += step;
    }

    GlyphPointSet { points }
}

/// Draws `text` centered in the raster's drawable area.
fn draw_centered(raster: &mut TextRaster, text: &str, font: GlyphFont) {
    let center = Point::new(
        (raster.width() / (2 * raster.pixel_scale())) as i32,
        (raster.height() / (2 * raster.pixel_scale())) as i32,
    );
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    match Text::with_text_style(text, center, font.style(), layout).draw(raster) {
        Ok(_) => {}
        Err(infallible) => match infallible {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_yields_empty_set() {
        let config = SamplerConfig::sky_name();
        assert!(sample("", &config).is_empty());
        assert!(sample("   ", &config).is_empty());
        assert!(sample("\t\n", &config).is_empty());
    }

    #[test]
    fn test_name_yields_points() {
        let set = sample("Amy", &SamplerConfig::sky_name());
        assert!(!set.is_empty(), "a rendered name must sample some ink");
        // A three-glyph name at this density lands in the hundreds of points.
        assert!(set.len() > 50, "suspiciously sparse: {} points", set.len());
    }

    #[test]
    fn test_points_lie_in_plane_bounds() {
        let config = SamplerConfig::sky_name();
        let max_x = config.width as f32 / 2.0 * config.scale;
        let max_y = config.height as f32 / 2.0 * config.scale;

        for p in sample("Merry Christmas", &config).points() {
            assert!(p.x.abs() <= max_x);
            assert!((p.y - config.vertical_offset).abs() <= max_y);
            assert_eq!(p.z, 0.0);
            assert!(p.is_finite());
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let config = SamplerConfig::side_name();
        let a = sample("Noelle", &config);
        let b = sample("Noelle", &config);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_scan_order_is_top_down() {
        let set = sample("Amy", &SamplerConfig::sky_name());
        let ys: Vec<f32> = set.points().iter().map(|p| p.y).collect();
        let mut sorted = ys.clone();
        // Descending Y: scan rows go top to bottom, Y maps negatively.
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(ys, sorted);
    }

    #[test]
    fn test_vertical_offset_applied() {
        let sky = SamplerConfig::sky_name();
        let side = SamplerConfig {
            vertical_offset: 0.0,
            ..sky
        };

        let lifted = sample("Joy", &sky);
        let flat = sample("Joy", &side);
        assert_eq!(lifted.len(), flat.len());

        for (a, b) in lifted.points().iter().zip(flat.points()) {
            assert!((a.y - b.y - sky.vertical_offset).abs() < 1e-4);
        }
    }

    #[test]
    fn test_oversized_text_is_clipped_not_fatal() {
        let long = "W".repeat(300);
        let set = sample(&long, &SamplerConfig::sky_name());
        // Clipping keeps whatever fits; it must not panic or wrap.
        for p in set.points() {
            assert!(p.x.abs() <= 1024.0 / 2.0 * 0.03 + 1e-4);
        }
    }

    #[test]
    fn test_unknown_glyphs_still_ink() {
        // Outside ASCII coverage the font draws its replacement glyph.
        let set = sample("héllo", &SamplerConfig::sky_name());
        assert!(!set.is_empty());
    }
}
