//! # Soak Test
//!
//! Runs a full production-size card for a long stretch of scene time and
//! checks that it never corrupts itself:
//!
//! - every particle position stays finite,
//! - the name sequence never moves backwards through its stages,
//! - the live ambient burst count stays bounded.
//!
//! Defaults to ten scene minutes; pass a minute count as the first
//! argument to run longer.

use std::time::Instant;

use yule::{
    config::CardConfig,
    core::SceneSeed,
    driver::{DriverConfig, SceneDriver},
    scene::{CardScene, SequenceStage},
};

/// Ticks between invariant sweeps.
const CHECK_INTERVAL: u64 = 1_000;

/// Most bursts that can overlap: lifetime 2.0 over a minimum launch
/// interval of 0.5, plus slack for the retirement edge.
const MAX_LIVE_BURSTS: usize = 8;

/// Stage order for the regression check.
const fn stage_rank(stage: SequenceStage) -> u8 {
    match stage {
        SequenceStage::Idle => 0,
        SequenceStage::Launch => 1,
        SequenceStage::Explode => 2,
        SequenceStage::Forming => 3,
    }
}

/// Sweeps every view for non-finite positions.
fn first_bad_position(scene: &CardScene) -> Option<String> {
    for view in scene.populations() {
        for (i, pos) in view.positions.iter().enumerate() {
            if !pos.is_finite() {
                return Some(format!("{:?} particle {i} is {pos:?}", view.population));
            }
        }
    }
    for burst in scene.bursts() {
        for (i, pos) in burst.positions.iter().enumerate() {
            if !pos.is_finite() {
                return Some(format!("burst {} particle {i} is {pos:?}", burst.id));
            }
        }
    }
    None
}

fn main() {
    let minutes: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10);
    let total_ticks = minutes * 60 * 60;

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║           YULETIDE SOAK TEST                                     ║");
    println!("║           {} scene minutes, invariants swept every {} ticks      ", minutes, CHECK_INTERVAL);
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let config = CardConfig::default();
    let scene = CardScene::new(&config.name, SceneSeed::new(config.seed), &config.tuning);
    let mut driver = SceneDriver::new(scene, DriverConfig::default());
    driver.scene_mut().set_activated(true);

    let start = Instant::now();
    let mut last_rank = stage_rank(driver.scene().stage());
    let mut sweeps = 0u64;

    while driver.tick_count() < total_ticks {
        driver.run(CHECK_INTERVAL.min(total_ticks - driver.tick_count()));
        sweeps += 1;

        if let Some(problem) = first_bad_position(driver.scene()) {
            println!("✗ tick {}: {}", driver.tick_count(), problem);
            println!();
            println!("❌ SOAK TEST FAILED");
            std::process::exit(1);
        }

        let rank = stage_rank(driver.scene().stage());
        if rank < last_rank {
            println!(
                "✗ tick {}: sequence regressed to {}",
                driver.tick_count(),
                driver.scene().stage().name()
            );
            println!();
            println!("❌ SOAK TEST FAILED");
            std::process::exit(1);
        }
        last_rank = rank;

        let live = driver.scene().stats().live_bursts;
        if live > MAX_LIVE_BURSTS {
            println!("✗ tick {}: {} live bursts", driver.tick_count(), live);
            println!();
            println!("❌ SOAK TEST FAILED");
            std::process::exit(1);
        }
    }

    let wall = start.elapsed();
    println!(
        "Swept {} times over {} ticks in {:.1}s wall time.",
        sweeps,
        driver.tick_count(),
        wall.as_secs_f64()
    );
    println!();
    driver.scene().stats().print_summary();
    println!();
    driver.stats().print_summary();
    println!();
    println!("✅ SOAK TEST PASSED");
    std::process::exit(0);
}
