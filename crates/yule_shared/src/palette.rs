//! # Scene Palette
//!
//! The fixed color vocabulary of the card. Immutable, baked into the binary.
//!
//! **CRITICAL:** Renderers read colors per particle; nothing in the engine
//! mutates these values at runtime.

use crate::color::Color;

// =============================================================================
// BASE COLORS
// =============================================================================

/// Scene background (renderer clear color)
pub const BACKGROUND: Color = Color::BLACK;

/// Tree body primary, deep christmas red (`#d41c1c`)
pub const TREE_PRIMARY: Color = Color::new(
    0xd4 as f32 / 255.0,
    0x1c as f32 / 255.0,
    0x1c as f32 / 255.0,
);

/// Tree body secondary, gold (`#e6b800`)
pub const TREE_SECONDARY: Color = Color::new(
    0xe6 as f32 / 255.0,
    0xb8 as f32 / 255.0,
    0.0,
);

/// Tree sparkle highlight, white (`#ffffff`)
pub const TREE_HIGHLIGHT: Color = Color::WHITE;

/// Floor ripple tint, icy whitish blue (`#88ccff`)
pub const FLOOR: Color = Color::new(
    0x88 as f32 / 255.0,
    0xcc as f32 / 255.0,
    1.0,
);

/// Formed-name text, peach gold (`#ffdac1`)
pub const TEXT: Color = Color::new(
    1.0,
    0xda as f32 / 255.0,
    0xc1 as f32 / 255.0,
);

/// Rocket body and trail gold (`#ffd700`)
pub const GOLD: Color = Color::new(1.0, 0xd7 as f32 / 255.0, 0.0);

/// Heart topper, pinkish red (`#ff3366`)
pub const HEART: Color = Color::new(
    1.0,
    0x33 as f32 / 255.0,
    0x66 as f32 / 255.0,
);

// =============================================================================
// COLOR TABLES
// =============================================================================

/// Vibrant hues for ambient firework bursts
pub const FIREWORK_PALETTE: [Color; 11] = [
    Color::new(1.0, 0.0, 0x40 as f32 / 255.0),
    Color::new(1.0, 0x40 as f32 / 255.0, 0.0),
    Color::new(1.0, 0x80 as f32 / 255.0, 0.0),
    Color::new(1.0, 1.0, 0.0),
    Color::new(0x80 as f32 / 255.0, 1.0, 0.0),
    Color::new(0.0, 1.0, 0x80 as f32 / 255.0),
    Color::new(0.0, 1.0, 1.0),
    Color::new(0.0, 0x80 as f32 / 255.0, 1.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(0x80 as f32 / 255.0, 0.0, 1.0),
    Color::new(1.0, 0.0, 1.0),
];

/// Ornament bauble colors
pub const ORNAMENT_PALETTE: [Color; 7] = [
    Color::new(1.0, 0.0, 0.0),
    Color::new(1.0, 0xd7 as f32 / 255.0, 0.0),
    Color::new(0xc0 as f32 / 255.0, 0xc0 as f32 / 255.0, 0xc0 as f32 / 255.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0),
    Color::new(1.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 1.0),
];

/// Draw pool for the name explosion.
///
/// The full firework table plus gold and a double weight of white.
pub const EXPLOSION_PALETTE: [Color; 14] = [
    FIREWORK_PALETTE[0],
    FIREWORK_PALETTE[1],
    FIREWORK_PALETTE[2],
    FIREWORK_PALETTE[3],
    FIREWORK_PALETTE[4],
    FIREWORK_PALETTE[5],
    FIREWORK_PALETTE[6],
    FIREWORK_PALETTE[7],
    FIREWORK_PALETTE[8],
    FIREWORK_PALETTE[9],
    FIREWORK_PALETTE[10],
    GOLD,
    Color::WHITE,
    TREE_HIGHLIGHT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_channels_in_range() {
        let all = FIREWORK_PALETTE
            .iter()
            .chain(ORNAMENT_PALETTE.iter())
            .chain(EXPLOSION_PALETTE.iter())
            .chain([TREE_PRIMARY, TREE_SECONDARY, FLOOR, TEXT, GOLD, HEART].iter());

        for c in all {
            for ch in c.to_array() {
                assert!((0.0..=1.0).contains(&ch), "channel out of range in {c:?}");
            }
        }
    }

    #[test]
    fn test_explosion_palette_extends_firework_palette() {
        assert_eq!(&EXPLOSION_PALETTE[..11], &FIREWORK_PALETTE[..]);
        assert_eq!(EXPLOSION_PALETTE[11], GOLD);
        assert_eq!(EXPLOSION_PALETTE[12], Color::WHITE);
    }
}
