//! Bauble ornaments hung on the tree's branch tips.
//!
//! Two tiers share one generator: large showpiece baubles and a denser
//! tier of small ones. Placement reuses the tree's cone math but pins
//! ornaments to a thin shell just outside the foliage so they stay
//! visible. Each tier sways and bobs on its own phase while drifting
//! with the tree's base spin.

use yule_core::{ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    ORNAMENT_BOB_LARGE_AMPLITUDE, ORNAMENT_BOB_LARGE_RATE, ORNAMENT_BOB_SMALL_AMPLITUDE,
    ORNAMENT_BOB_SMALL_RATE, ORNAMENT_HEIGHT_MARGIN, ORNAMENT_OPACITY, ORNAMENT_SHELL_MIN,
    ORNAMENT_SHELL_RANGE, ORNAMENT_SIZE, ORNAMENT_SWAY_AMPLITUDE, ORNAMENT_SWAY_RATE,
    TREE_BASE_DROP, TREE_DROOP, TREE_HEIGHT, TREE_LAYERS, TREE_MAX_BASE_RADIUS, TREE_SPIN_RATE,
};
use yule_shared::{palette, Vec3};

use crate::config::OrnamentConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// One ornament tier: a static buffer plus its animated placement.
struct Tier {
    buffer: ParticleBuffer,
    transform: PointTransform,
}

impl Tier {
    /// Hangs `count` baubles on branch tips.
    fn generate(count: usize, rng: &mut SceneRng) -> Self {
        let mut buffer = ParticleBuffer::new(count);
        buffer.set_len(count);

        for i in 0..count {
            // Keep clear of the trunk base and the tip.
            let y = rng.range(ORNAMENT_HEIGHT_MARGIN, TREE_HEIGHT - ORNAMENT_HEIGHT_MARGIN);
            let rel = y / TREE_HEIGHT;

            let layer_phase = (rel * TREE_LAYERS).fract();
            let cone = (1.0 - rel) * TREE_MAX_BASE_RADIUS;
            let extension = 0.6 + 0.4 * (1.0 - layer_phase).powf(1.5);

            // Thin shell at the branch tip, slightly proud of the foliage.
            let shell = rng.range(ORNAMENT_SHELL_MIN, ORNAMENT_SHELL_MIN + ORNAMENT_SHELL_RANGE);
            let radius = cone * extension * shell;
            let theta = rng.azimuth();
            let droop = radius / TREE_MAX_BASE_RADIUS * TREE_DROOP;

            buffer.positions_mut()[i] = Vec3::new(
                theta.cos() * radius,
                y - TREE_BASE_DROP - droop,
                theta.sin() * radius,
            );
            buffer.colors_mut()[i] = *rng.pick(&palette::ORNAMENT_PALETTE);
        }

        Self {
            buffer,
            transform: PointTransform::IDENTITY,
        }
    }
}

/// Both ornament tiers.
pub struct OrnamentTiers {
    /// Showpiece baubles.
    large: Tier,
    /// Dense small baubles.
    small: Tier,
}

impl OrnamentTiers {
    /// Generates both tiers from one random stream, large first.
    #[must_use]
    pub fn generate(config: &OrnamentConfig, rng: &mut SceneRng) -> Self {
        Self {
            large: Tier::generate(config.large_count, rng),
            small: Tier::generate(config.small_count, rng),
        }
    }

    /// Advances the sway and bob of both tiers.
    ///
    /// The tiers run the same drift as the tree spin with opposite sway
    /// phases, so they counter-swing instead of moving in lockstep.
    pub fn update(&mut self, clock: &SceneClock) {
        let t = clock.elapsed();

        self.large.transform.rotation_y =
            (t * ORNAMENT_SWAY_RATE).sin() * ORNAMENT_SWAY_AMPLITUDE + TREE_SPIN_RATE * t;
        self.large.transform.position =
            Vec3::new(0.0, (t * ORNAMENT_BOB_LARGE_RATE).sin() * ORNAMENT_BOB_LARGE_AMPLITUDE, 0.0);

        self.small.transform.rotation_y =
            (t * ORNAMENT_SWAY_RATE).cos() * ORNAMENT_SWAY_AMPLITUDE + TREE_SPIN_RATE * t;
        self.small.transform.position =
            Vec3::new(0.0, (t * ORNAMENT_BOB_SMALL_RATE).cos() * ORNAMENT_BOB_SMALL_AMPLITUDE, 0.0);
    }

    /// Renderer view of the large tier.
    #[must_use]
    pub fn large_view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::OrnamentsLarge,
            positions: self.large.buffer.positions(),
            colors: self.large.buffer.colors(),
            transform: self.large.transform,
            style: PointStyle::vertex_colored(ORNAMENT_SIZE.0, ORNAMENT_OPACITY.0),
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// Renderer view of the small tier.
    #[must_use]
    pub fn small_view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::OrnamentsSmall,
            positions: self.small.buffer.positions(),
            colors: self.small.buffer.colors(),
            transform: self.small.transform,
            style: PointStyle::vertex_colored(ORNAMENT_SIZE.1, ORNAMENT_OPACITY.1),
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// Total bauble count across both tiers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.large.buffer.len() + self.small.buffer.len()
    }

    /// True when both tiers are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
