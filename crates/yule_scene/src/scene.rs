//! # Scene Composer
//!
//! [`CardScene`] owns every population, the firework pool, the name
//! sequence, the clock, and the shared sprite. One `update(dt)` call
//! advances the whole card; the renderer then pulls views. Construction
//! derives an independent random stream per subsystem from the session
//! seed, so draws in one population never shift another.

use yule_core::{SceneClock, SceneSeed};
use yule_shared::Vec3;

use crate::config::SceneTuning;
use crate::fireworks::FireworkPool;
use crate::floor::FloorRipples;
use crate::ornaments::OrnamentTiers;
use crate::sequence::{NameSequence, SequenceStage};
use crate::side_name::SideName;
use crate::snow::Snowfall;
use crate::sprite::GlowSprite;
use crate::topper::HeartTopper;
use crate::tree::TreeBody;
use crate::view::{BurstView, Population, PopulationView};

// Stream purposes. Stable values: reordering them would change every
// seeded scene.
const STREAM_TREE: u64 = 1;
const STREAM_ORNAMENTS: u64 = 2;
const STREAM_TOPPER: u64 = 3;
const STREAM_FLOOR: u64 = 4;
const STREAM_SNOW: u64 = 5;
const STREAM_FIREWORKS: u64 = 6;
const STREAM_SEQUENCE: u64 = 7;

/// The whole greeting card, ticked as one unit.
pub struct CardScene {
    clock: SceneClock,
    activated: bool,
    floor: FloorRipples,
    tree: TreeBody,
    ornaments: OrnamentTiers,
    topper: HeartTopper,
    snow: Snowfall,
    side_name: SideName,
    fireworks: FireworkPool,
    sequence: NameSequence,
    sprite: GlowSprite,
}

impl CardScene {
    /// Builds the card for one recipient.
    ///
    /// Generation cost is paid here; per-tick work never allocates.
    #[must_use]
    pub fn new(name: &str, seed: SceneSeed, tuning: &SceneTuning) -> Self {
        let mut tree_rng = seed.derive(STREAM_TREE).rng();
        let mut ornament_rng = seed.derive(STREAM_ORNAMENTS).rng();
        let mut topper_rng = seed.derive(STREAM_TOPPER).rng();
        let mut floor_rng = seed.derive(STREAM_FLOOR).rng();

        let scene = Self {
            clock: SceneClock::new(),
            activated: false,
            floor: FloorRipples::generate(&tuning.floor, &mut floor_rng),
            tree: TreeBody::generate(&tuning.tree, &mut tree_rng),
            ornaments: OrnamentTiers::generate(&tuning.ornaments, &mut ornament_rng),
            topper: HeartTopper::generate(&tuning.topper, &mut topper_rng),
            snow: Snowfall::generate(&tuning.snow, seed.derive(STREAM_SNOW).rng()),
            side_name: SideName::new(name),
            fireworks: FireworkPool::new(&tuning.fireworks, seed.derive(STREAM_FIREWORKS).rng()),
            sequence: NameSequence::new(name, &tuning.sequence, seed.derive(STREAM_SEQUENCE).rng()),
            sprite: GlowSprite::generate(),
        };

        let stats = scene.stats();
        tracing::info!(
            "card scene ready: {} particles across {} populations (seed {})",
            stats.total_particles(),
            Population::COUNT,
            seed.value()
        );
        scene
    }

    /// Advances the card by `dt` and ticks every system in a fixed order.
    pub fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.floor.update(&self.clock, self.activated);
        self.tree.update(&self.clock, self.activated);
        self.ornaments.update(&self.clock);
        self.topper.update(&self.clock);
        self.snow.update();
        self.side_name.update(&self.clock);
        self.fireworks.update(&self.clock, self.activated);
        self.sequence.update(&self.clock, self.activated);
    }

    /// Flips the card's activated state.
    pub fn set_activated(&mut self, activated: bool) {
        if self.activated != activated {
            tracing::info!(
                "card {}",
                if activated { "activated" } else { "deactivated" }
            );
        }
        self.activated = activated;
    }

    /// Current activation state.
    #[must_use]
    pub const fn activated(&self) -> bool {
        self.activated
    }

    /// The scene clock.
    #[must_use]
    pub const fn clock(&self) -> &SceneClock {
        &self.clock
    }

    /// Stage of the name sequence.
    #[must_use]
    pub const fn stage(&self) -> SequenceStage {
        self.sequence.stage()
    }

    /// Every persistent population's view, indexed by [`Population`].
    #[must_use]
    pub fn populations(&self) -> [PopulationView<'_>; Population::COUNT] {
        [
            self.floor.view(),
            self.tree.view(),
            self.ornaments.large_view(),
            self.ornaments.small_view(),
            self.topper.view(),
            self.snow.view(),
            self.side_name.view(),
            self.sequence.view(),
        ]
    }

    /// Views for the live ambient bursts.
    pub fn bursts(&self) -> impl Iterator<Item = BurstView<'_>> {
        self.fireworks.views()
    }

    /// Rocket position while the sequence has one in flight.
    #[must_use]
    pub const fn rocket(&self) -> Option<Vec3> {
        self.sequence.rocket()
    }

    /// The shared soft-glow point sprite.
    #[must_use]
    pub const fn sprite(&self) -> &GlowSprite {
        &self.sprite
    }

    /// Snapshot of the card's state for logs and tooling.
    #[must_use]
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            frame: self.clock.frame(),
            elapsed: self.clock.elapsed(),
            activated: self.activated,
            stage: self.sequence.stage(),
            floor: self.floor.len(),
            tree: self.tree.len(),
            ornaments: self.ornaments.len(),
            topper: self.topper.len(),
            snow: self.snow.len(),
            side_name: self.side_name.len(),
            sequence: self.sequence.len(),
            live_bursts: self.fireworks.live_count(),
            burst_particles: self.fireworks.bursts().iter().map(|b| b.len()).sum(),
        }
    }
}

/// Point-in-time census of the scene.
#[derive(Clone, Copy, Debug)]
pub struct SceneStats {
    /// Frames ticked so far.
    pub frame: u64,
    /// Scene time in time units.
    pub elapsed: f32,
    /// Whether the card is activated.
    pub activated: bool,
    /// Name sequence stage.
    pub stage: SequenceStage,
    /// Floor particle count.
    pub floor: usize,
    /// Tree foliage particle count.
    pub tree: usize,
    /// Ornament particle count, both tiers.
    pub ornaments: usize,
    /// Heart topper particle count.
    pub topper: usize,
    /// Snow particle count.
    pub snow: usize,
    /// Side name particle count.
    pub side_name: usize,
    /// Name sequence pool size.
    pub sequence: usize,
    /// Ambient bursts currently alive.
    pub live_bursts: usize,
    /// Particles across the live bursts.
    pub burst_particles: usize,
}

impl SceneStats {
    /// Total particles the renderer would draw this frame.
    #[must_use]
    pub const fn total_particles(&self) -> usize {
        self.floor
            + self.tree
            + self.ornaments
            + self.topper
            + self.snow
            + self.side_name
            + self.sequence
            + self.burst_particles
    }

    /// Prints a census block to stdout.
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                     CARD SCENE CENSUS                            ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ TIME ─────────────────────────────────────────────────────────┐");
        println!("│ Frame:              {}                                        ", self.frame);
        println!("│ Elapsed:            {:.2}                                     ", self.elapsed);
        println!("│ Activated:          {}                                        ", self.activated);
        println!("│ Sequence Stage:     {}                                        ", self.stage.name());
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ POPULATIONS ──────────────────────────────────────────────────┐");
        println!("│ Floor:              {}                                        ", self.floor);
        println!("│ Tree:               {}                                        ", self.tree);
        println!("│ Ornaments:          {}                                        ", self.ornaments);
        println!("│ Topper:             {}                                        ", self.topper);
        println!("│ Snow:               {}                                        ", self.snow);
        println!("│ Side Name:          {}                                        ", self.side_name);
        println!("│ Sequence Pool:      {}                                        ", self.sequence);
        println!("│ Bursts:             {} live ({} particles)                    ", self.live_bursts, self.burst_particles);
        println!("│ TOTAL:              {}                                        ", self.total_particles());
        println!("└──────────────────────────────────────────────────────────────────┘");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FloorConfig, OrnamentConfig, SequenceConfig, SnowConfig, TopperConfig, TreeConfig,
    };

    const DT: f32 = 1.0 / 60.0;

    fn small_tuning() -> SceneTuning {
        SceneTuning {
            tree: TreeConfig {
                particles: 2_000,
                ..TreeConfig::default()
            },
            ornaments: OrnamentConfig {
                large_count: 30,
                small_count: 50,
            },
            topper: TopperConfig {
                particles: 200,
                ..TopperConfig::default()
            },
            floor: FloorConfig {
                particles: 1_500,
                ..FloorConfig::default()
            },
            snow: SnowConfig {
                particles: 400,
                ..SnowConfig::default()
            },
            sequence: SequenceConfig {
                max_particles: 2_000,
                ..SequenceConfig::default()
            },
            ..SceneTuning::default()
        }
    }

    fn test_scene(name: &str, seed: u64) -> CardScene {
        CardScene::new(name, SceneSeed::new(seed), &small_tuning())
    }

    #[test]
    fn test_population_order_matches_the_enum() {
        let scene = test_scene("Amy", 91);
        let views = scene.populations();
        for (i, view) in views.iter().enumerate() {
            assert_eq!(view.population.index(), i);
        }
    }

    #[test]
    fn test_counts_follow_the_tuning() {
        let scene = test_scene("Amy", 92);
        let tuning = small_tuning();
        let stats = scene.stats();

        assert_eq!(stats.tree, tuning.tree.particles);
        assert_eq!(stats.floor, tuning.floor.particles);
        assert_eq!(stats.topper, tuning.topper.particles);
        assert_eq!(stats.snow, tuning.snow.particles);
        assert_eq!(
            stats.ornaments,
            tuning.ornaments.large_count + tuning.ornaments.small_count
        );
        assert_eq!(stats.sequence, tuning.sequence.max_particles);
        assert_eq!(stats.live_bursts, 0);
        assert!(stats.total_particles() > 0);
    }

    #[test]
    fn test_update_advances_clock_and_populations() {
        let mut scene = test_scene("Amy", 93);
        scene.set_activated(true);
        for _ in 0..60 {
            scene.update(DT);
        }

        let stats = scene.stats();
        assert_eq!(stats.frame, 60);
        assert!((stats.elapsed - 1.0).abs() < 1e-4);
        assert!(stats.activated);

        // Tree spins, floor ripples, snow falls.
        let views = scene.populations();
        assert!(views[Population::Tree.index()].transform.rotation_y < 0.0);
        assert!(views[Population::Floor.index()].dirty.positions);
        assert!(views[Population::Snow.index()].dirty.positions);
    }

    #[test]
    fn test_activation_switches_the_style_presets() {
        let mut scene = test_scene("Amy", 94);
        scene.update(DT);
        let idle_views = scene.populations();
        assert!((idle_views[Population::Tree.index()].style.size - 0.12).abs() < 1e-6);
        assert!((idle_views[Population::Floor.index()].style.opacity - 0.5).abs() < 1e-6);

        scene.set_activated(true);
        scene.update(DT);
        let active_views = scene.populations();
        assert!((active_views[Population::Tree.index()].style.size - 0.14).abs() < 1e-6);
        assert!((active_views[Population::Floor.index()].style.opacity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_rocket_rides_the_launch_stage_only() {
        let mut scene = test_scene("Amy", 95);
        scene.set_activated(true);

        let mut saw_rocket = false;
        for _ in 0..300 {
            scene.update(DT);
            match scene.stage() {
                SequenceStage::Launch => {
                    assert!(scene.rocket().is_some());
                    saw_rocket = true;
                }
                _ => assert!(scene.rocket().is_none()),
            }
        }
        assert!(saw_rocket, "sequence never launched");
        assert_eq!(scene.stage(), SequenceStage::Forming);
    }

    #[test]
    fn test_idle_scene_keeps_the_sequence_waiting() {
        let mut scene = test_scene("Amy", 96);
        for _ in 0..300 {
            scene.update(DT);
        }
        assert_eq!(scene.stage(), SequenceStage::Idle);
        assert_eq!(scene.stats().live_bursts, 0);
    }

    #[test]
    fn test_fireworks_appear_once_activated() {
        let mut scene = test_scene("Amy", 97);
        scene.set_activated(true);
        let mut saw_burst = false;
        for _ in 0..300 {
            scene.update(DT);
            if scene.bursts().next().is_some() {
                saw_burst = true;
                break;
            }
        }
        assert!(saw_burst, "no ambient burst within five seconds");
    }

    #[test]
    fn test_sprite_is_shared_and_nonempty() {
        let scene = test_scene("Amy", 98);
        assert_eq!(scene.sprite().size(), 32);
        assert!(scene.sprite().alpha_at(16, 16) > 240);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let mut a = test_scene("Amy", 99);
        let mut b = test_scene("Amy", 99);
        a.set_activated(true);
        b.set_activated(true);
        for _ in 0..240 {
            a.update(DT);
            b.update(DT);
        }

        let va = a.populations();
        let vb = b.populations();
        for (x, y) in va.iter().zip(vb.iter()) {
            assert_eq!(x.positions, y.positions);
            assert_eq!(x.colors, y.colors);
        }
        assert_eq!(a.stats().live_bursts, b.stats().live_bursts);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = test_scene("Amy", 100);
        let b = test_scene("Amy", 101);
        assert_ne!(
            a.populations()[Population::Tree.index()].positions,
            b.populations()[Population::Tree.index()].positions
        );
    }
}
