//! # Scene Driver
//!
//! The headless tick source. A renderer owns its own frame loop and
//! vsync; this driver exists for everything that runs without one:
//! demos, soak runs, and integration tests.
//!
//! ```text
//! Tick N:
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ 1. UPDATE                                                       │
//! │    └─ CardScene::update(fixed_dt)  - clock + every simulator    │
//! │                                                                 │
//! │ 2. VIEW PULL (stand-in for the renderer)                        │
//! │    ├─ populations()  - eight persistent views                   │
//! │    └─ bursts()       - live ambient fireworks                   │
//! │                                                                 │
//! │ 3. RECORD                                                       │
//! │    └─ per-tick timing into the accumulator                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use yule_scene::CardScene;
use yule_shared::constants::TICK_RATE;

/// Target tick time for 60 FPS.
pub const TARGET_TICK_TIME: Duration = Duration::from_micros(16_666);

/// Maximum allowed tick time before warning.
pub const MAX_TICK_TIME: Duration = Duration::from_millis(33);

/// Configuration for the driver.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Delta applied to the scene each tick, in time units.
    pub fixed_dt: f32,
    /// Warn on ticks that blow the budget.
    pub enable_timing_logs: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / TICK_RATE as f32,
            enable_timing_logs: false,
        }
    }
}

/// Timing for a single driver tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    /// Tick number.
    pub tick: u64,
    /// Total tick time in microseconds.
    pub total_us: u64,
    /// Scene update time in microseconds.
    pub update_us: u64,
    /// View pull time in microseconds.
    pub view_us: u64,
    /// Particles a renderer would draw this tick.
    pub drawn_particles: usize,
}

/// The headless card driver.
///
/// Owns a [`CardScene`] and advances it with a fixed delta. Wall time is
/// measured but never fed to the scene, so a slow machine runs the same
/// card as a fast one, just later.
pub struct SceneDriver {
    /// The card under the loop.
    scene: CardScene,
    /// Configuration.
    config: DriverConfig,
    /// Ticks driven so far.
    tick_count: u64,
    /// Accumulated tick statistics.
    stats_accumulator: TickStatsAccumulator,
}

impl SceneDriver {
    /// Wraps a scene in a driver.
    #[must_use]
    pub fn new(scene: CardScene, config: DriverConfig) -> Self {
        Self {
            scene,
            config,
            tick_count: 0,
            stats_accumulator: TickStatsAccumulator::new(),
        }
    }

    /// Advances the card by one fixed-dt tick and records the timing.
    pub fn tick(&mut self) -> TickStats {
        let tick_start = Instant::now();

        let update_start = Instant::now();
        self.scene.update(self.config.fixed_dt);
        let update_us = update_start.elapsed().as_micros() as u64;

        // Pull every view the way a renderer would, so the measured cost
        // covers the whole boundary, not just the simulation.
        let view_start = Instant::now();
        let mut drawn_particles = 0usize;
        for view in self.scene.populations() {
            drawn_particles += view.positions.len();
        }
        for burst in self.scene.bursts() {
            drawn_particles += burst.positions.len();
        }
        let view_us = view_start.elapsed().as_micros() as u64;

        let stats = TickStats {
            tick: self.tick_count,
            total_us: tick_start.elapsed().as_micros() as u64,
            update_us,
            view_us,
            drawn_particles,
        };

        self.tick_count += 1;
        self.stats_accumulator.record(stats);

        if self.config.enable_timing_logs && stats.total_us > MAX_TICK_TIME.as_micros() as u64 {
            tracing::warn!(
                "tick {} exceeded budget: {:.2}ms (target: {:.2}ms)",
                stats.tick,
                stats.total_us as f64 / 1000.0,
                TARGET_TICK_TIME.as_micros() as f64 / 1000.0
            );
        }

        stats
    }

    /// Runs `ticks` ticks back to back.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// The card under the loop.
    #[must_use]
    pub const fn scene(&self) -> &CardScene {
        &self.scene
    }

    /// Mutable access, for activation and other outside inputs.
    pub fn scene_mut(&mut self) -> &mut CardScene {
        &mut self.scene
    }

    /// Ticks driven so far.
    #[inline]
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The accumulated statistics.
    #[must_use]
    pub const fn stats(&self) -> &TickStatsAccumulator {
        &self.stats_accumulator
    }
}

/// Accumulator for tick statistics.
#[derive(Clone, Debug)]
pub struct TickStatsAccumulator {
    /// Total ticks recorded.
    pub ticks_recorded: u64,
    /// Sum of total tick times.
    pub total_us_sum: u64,
    /// Sum of scene update times.
    pub update_us_sum: u64,
    /// Sum of view pull times.
    pub view_us_sum: u64,
    /// Min tick time.
    pub min_tick_us: u64,
    /// Max tick time.
    pub max_tick_us: u64,
    /// Ticks that exceeded budget.
    pub ticks_over_budget: u64,
}

impl TickStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ticks_recorded: 0,
            total_us_sum: 0,
            update_us_sum: 0,
            view_us_sum: 0,
            min_tick_us: u64::MAX,
            max_tick_us: 0,
            ticks_over_budget: 0,
        }
    }

    /// Records a tick's statistics.
    pub fn record(&mut self, stats: TickStats) {
        self.ticks_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.update_us_sum += stats.update_us;
        self.view_us_sum += stats.view_us;
        self.min_tick_us = self.min_tick_us.min(stats.total_us);
        self.max_tick_us = self.max_tick_us.max(stats.total_us);

        if stats.total_us > TARGET_TICK_TIME.as_micros() as u64 {
            self.ticks_over_budget += 1;
        }
    }

    /// Returns average tick time in milliseconds.
    #[must_use]
    pub fn avg_tick_ms(&self) -> f64 {
        if self.ticks_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.ticks_recorded as f64) / 1000.0
    }

    /// Returns average ticks per second.
    #[must_use]
    pub fn avg_tps(&self) -> f64 {
        let avg_ms = self.avg_tick_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Returns the fraction of ticks over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.ticks_recorded == 0 {
            return 0.0;
        }
        self.ticks_over_budget as f64 / self.ticks_recorded as f64
    }

    /// Prints a summary of the statistics.
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                     TICK STATISTICS SUMMARY                      ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
        println!("│ Ticks Recorded:     {}                                        ", self.ticks_recorded);
        println!("│ Average Tick:       {:.3} ms ({:.1} ticks/s)                  ", self.avg_tick_ms(), self.avg_tps());
        println!("│ Min Tick:           {:.3} ms                                  ", self.min_tick_us as f64 / 1000.0);
        println!("│ Max Tick:           {:.3} ms                                  ", self.max_tick_us as f64 / 1000.0);
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ BUDGET ───────────────────────────────────────────────────────┐");
        println!("│ Target:             {:.3} ms (60 FPS)                          ", TARGET_TICK_TIME.as_micros() as f64 / 1000.0);
        println!("│ Over Budget:        {} ticks ({:.1}%)                         ",
            self.ticks_over_budget,
            self.over_budget_ratio() * 100.0);
        println!("└──────────────────────────────────────────────────────────────────┘");

        if self.ticks_recorded > 0 {
            println!();
            println!("┌─ BREAKDOWN ─────────────────────────────────────────────────────┐");
            let avg_update = (self.update_us_sum as f64 / self.ticks_recorded as f64) / 1000.0;
            let avg_view = (self.view_us_sum as f64 / self.ticks_recorded as f64) / 1000.0;
            println!("│ Scene Update:       {:.3} ms                                  ", avg_update);
            println!("│ View Pull:          {:.3} ms                                  ", avg_view);
            println!("└──────────────────────────────────────────────────────────────────┘");
        }
    }
}

impl Default for TickStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yule_core::SceneSeed;
    use yule_scene::config::{SequenceConfig, SnowConfig, TreeConfig};
    use yule_scene::SceneTuning;

    fn small_scene(seed: u64) -> CardScene {
        let tuning = SceneTuning {
            tree: TreeConfig {
                particles: 1_000,
                ..TreeConfig::default()
            },
            snow: SnowConfig {
                particles: 200,
                ..SnowConfig::default()
            },
            sequence: SequenceConfig {
                max_particles: 2_000,
                ..SequenceConfig::default()
            },
            ..SceneTuning::default()
        };
        CardScene::new("Amy", SceneSeed::new(seed), &tuning)
    }

    #[test]
    fn test_driver_ticks_advance_the_scene() {
        let mut driver = SceneDriver::new(small_scene(1), DriverConfig::default());
        driver.run(60);
        assert_eq!(driver.tick_count(), 60);
        assert_eq!(driver.scene().clock().frame(), 60);
        assert!((driver.scene().clock().elapsed() - 1.0).abs() < 1e-4);
        assert_eq!(driver.stats().ticks_recorded, 60);
    }

    #[test]
    fn test_fixed_dt_is_what_the_scene_sees() {
        let config = DriverConfig {
            fixed_dt: 0.02,
            enable_timing_logs: false,
        };
        let mut driver = SceneDriver::new(small_scene(2), config);
        driver.run(50);
        assert!((driver.scene().clock().elapsed() - 1.0).abs() < 1e-4);
        assert!((driver.scene().clock().delta() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_tick_counts_drawn_particles() {
        let mut driver = SceneDriver::new(small_scene(3), DriverConfig::default());
        let stats = driver.tick();
        // Floor, tree, both ornament tiers, topper, snow and the sequence
        // pool are always drawn; the side name adds its glyph points.
        let floor_defaults = 35_000;
        assert!(stats.drawn_particles >= floor_defaults + 1_000 + 200 + 2_000);
        assert_eq!(stats.tick, 0);
    }

    #[test]
    fn test_stats_accumulator() {
        let mut acc = TickStatsAccumulator::new();

        for i in 0..100 {
            acc.record(TickStats {
                tick: i,
                total_us: 10_000 + (i * 100),
                update_us: 8_000,
                view_us: 1_000,
                drawn_particles: 70_000,
            });
        }

        assert_eq!(acc.ticks_recorded, 100);
        assert!(acc.avg_tps() > 50.0);
        assert!(acc.avg_tps() < 100.0);
        assert_eq!(acc.min_tick_us, 10_000);
        assert_eq!(acc.max_tick_us, 19_900);
    }

    #[test]
    fn test_over_budget_ticks_are_counted() {
        let mut acc = TickStatsAccumulator::new();
        acc.record(TickStats {
            total_us: 20_000,
            ..TickStats::default()
        });
        acc.record(TickStats {
            total_us: 1_000,
            ..TickStats::default()
        });
        assert_eq!(acc.ticks_over_budget, 1);
        assert!((acc.over_budget_ratio() - 0.5).abs() < 1e-9);
    }
}
