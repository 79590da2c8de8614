//! Ambient firework bursts behind the tree.
//!
//! A pool launches short-lived bursts on a randomized cadence while the
//! card is activated. Each burst owns its particles outright: positions
//! start at the origin point and ride precomputed unit directions with
//! per-particle speeds, decelerating and fading as the burst ages out.
//! Bursts past their lifetime are dropped after the integration pass,
//! never mid-iteration. Deactivation stops new launches only; live
//! bursts always finish.

use yule_core::{ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    BURST_GRAVITY, BURST_ORIGIN_HALF_EXTENT_X, BURST_ORIGIN_MAX_Z, BURST_ORIGIN_MIN_Y,
    BURST_ORIGIN_RANGE_Y, BURST_ORIGIN_RANGE_Z, BURST_SIZE, BURST_SPEED_MIN, BURST_SPEED_RANGE,
};
use yule_shared::{palette, Color, Vec3};

use crate::config::FireworkConfig;
use crate::view::{BurstView, PointStyle};

/// Worst-case concurrent bursts at the default cadence.
const BURST_POOL_HINT: usize = 8;

/// One transient explosion.
pub struct FireworkBurst {
    id: u64,
    origin: Vec3,
    color: Color,
    time_alive: f32,
    lifetime: f32,
    /// Unit directions, fixed at creation.
    dirs: Box<[Vec3]>,
    /// Outward speed per particle, units per tick.
    speeds: Box<[f32]>,
    buffer: ParticleBuffer,
}

impl FireworkBurst {
    fn new(
        id: u64,
        origin: Vec3,
        color: Color,
        particles: usize,
        lifetime: f32,
        rng: &mut SceneRng,
    ) -> Self {
        let mut buffer = ParticleBuffer::new(particles);
        buffer.set_len(particles);
        let mut dirs = vec![Vec3::splat(0.0); particles].into_boxed_slice();
        let mut speeds = vec![0.0_f32; particles].into_boxed_slice();

        for i in 0..particles {
            speeds[i] = rng.range(BURST_SPEED_MIN, BURST_SPEED_MIN + BURST_SPEED_RANGE);
            dirs[i] = rng.unit_sphere();
            buffer.positions_mut()[i] = origin;
            buffer.colors_mut()[i] = color;
        }

        Self {
            id,
            origin,
            color,
            time_alive: 0.0,
            lifetime,
            dirs,
            speeds,
            buffer,
        }
    }

    /// Ages and integrates one tick. Returns false once past the lifetime.
    fn tick(&mut self, dt: f32) -> bool {
        self.time_alive += dt;
        let t = self.time_alive;
        if t > self.lifetime {
            return false;
        }

        let fade = 1.0 - t / self.lifetime;
        let positions = self.buffer.positions_mut();
        for ((pos, dir), &speed) in positions
            .iter_mut()
            .zip(self.dirs.iter())
            .zip(self.speeds.iter())
        {
            *pos += *dir * (speed * fade);
            pos.y -= BURST_GRAVITY * t;
        }
        true
    }

    /// Burst identity, unique within the pool for the session.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Age in time units.
    #[must_use]
    pub const fn time_alive(&self) -> f32 {
        self.time_alive
    }

    /// Launch point.
    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Linear fade from 1 at birth to 0 at the lifetime.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        (1.0 - self.time_alive / self.lifetime).max(0.0)
    }

    /// Particle count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the burst holds no particles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> BurstView<'_> {
        BurstView {
            id: self.id,
            positions: self.buffer.positions(),
            style: PointStyle::uniform(BURST_SIZE, self.opacity(), self.color),
        }
    }
}

/// Launches, ages, and retires ambient bursts.
pub struct FireworkPool {
    bursts: Vec<FireworkBurst>,
    next_id: u64,
    last_launch: f32,
    /// Wait before the next launch, redrawn after each one.
    next_interval: f32,
    rng: SceneRng,
    config: FireworkConfig,
}

impl FireworkPool {
    /// Empty pool; the first launch interval is drawn up front.
    #[must_use]
    pub fn new(config: &FireworkConfig, mut rng: SceneRng) -> Self {
        let next_interval =
            rng.range(config.interval_min, config.interval_min + config.interval_range);
        Self {
            bursts: Vec::with_capacity(BURST_POOL_HINT),
            next_id: 0,
            last_launch: 0.0,
            next_interval,
            rng,
            config: config.clone(),
        }
    }

    /// Ages every live burst, drops the finished ones, then considers a
    /// launch. A burst launched this tick first moves next tick.
    pub fn update(&mut self, clock: &SceneClock, activated: bool) {
        let dt = clock.delta();
        self.bursts.retain_mut(|burst| {
            let alive = burst.tick(dt);
            if !alive {
                tracing::debug!("burst {} finished after {:.2}", burst.id, burst.time_alive);
            }
            alive
        });

        let now = clock.elapsed();
        if activated && now - self.last_launch > self.next_interval {
            self.launch(now);
        }
    }

    fn launch(&mut self, now: f32) {
        let x = self
            .rng
            .range(-BURST_ORIGIN_HALF_EXTENT_X, BURST_ORIGIN_HALF_EXTENT_X);
        let y = self
            .rng
            .range(BURST_ORIGIN_MIN_Y, BURST_ORIGIN_MIN_Y + BURST_ORIGIN_RANGE_Y);
        let z = self
            .rng
            .range(BURST_ORIGIN_MAX_Z - BURST_ORIGIN_RANGE_Z, BURST_ORIGIN_MAX_Z);
        let origin = Vec3::new(x, y, z);
        let color = *self.rng.pick(&palette::FIREWORK_PALETTE);

        let id = self.next_id;
        self.next_id += 1;
        self.bursts.push(FireworkBurst::new(
            id,
            origin,
            color,
            self.config.burst_particles,
            self.config.lifetime,
            &mut self.rng,
        ));

        self.last_launch = now;
        let interval_max = self.config.interval_min + self.config.interval_range;
        self.next_interval = self.rng.range(self.config.interval_min, interval_max);
        tracing::debug!("burst {} launched at ({:.1}, {:.1}, {:.1})", id, x, y, z);
    }

    /// Live bursts, oldest first.
    #[must_use]
    pub fn bursts(&self) -> &[FireworkBurst] {
        &self.bursts
    }

    /// Renderer views for every live burst.
    pub fn views(&self) -> impl Iterator<Item = BurstView<'_>> {
        self.bursts.iter().map(FireworkBurst::view)
    }

    /// Number of live bursts.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.bursts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yule_core::SceneSeed;

    fn test_pool(seed: u64) -> FireworkPool {
        FireworkPool::new(&FireworkConfig::default(), SceneSeed::new(seed).rng())
    }

    fn step(pool: &mut FireworkPool, clock: &mut SceneClock, ticks: usize, activated: bool) {
        for _ in 0..ticks {
            clock.advance(1.0 / 60.0);
            pool.update(clock, activated);
        }
    }

    #[test]
    fn test_idle_pool_never_launches() {
        let mut pool = test_pool(61);
        let mut clock = SceneClock::new();
        step(&mut pool, &mut clock, 300, false);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_activated_pool_launches_within_the_interval_band() {
        let mut pool = test_pool(62);
        let mut clock = SceneClock::new();
        // 150 ticks = 2.5 time units, past the widest possible wait.
        for _ in 0..150 {
            clock.advance(1.0 / 60.0);
            pool.update(&clock, true);
            if pool.live_count() > 0 {
                break;
            }
        }
        assert_eq!(pool.live_count(), 1);
        assert!(clock.elapsed() > 0.5, "launched before the minimum wait");

        // Fresh bursts sit at their origin until the next tick.
        let burst = &pool.bursts()[0];
        assert_eq!(burst.id(), 0);
        assert!(burst.time_alive().abs() < 1e-6);
        for p in burst.view().positions {
            assert_eq!(*p, burst.origin());
        }
    }

    #[test]
    fn test_origins_sit_behind_and_above_the_tree() {
        let mut pool = test_pool(63);
        let mut clock = SceneClock::new();
        let mut seen = 0;
        while seen < 5 {
            step(&mut pool, &mut clock, 1, true);
            for burst in pool.bursts() {
                if burst.time_alive() < 1e-6 {
                    let o = burst.origin();
                    assert!(o.x.abs() < 20.0);
                    assert!((10.0..25.0).contains(&o.y));
                    assert!((-20.0..0.0).contains(&o.z));
                    seen += 1;
                }
            }
        }
    }

    #[test]
    fn test_burst_expands_decelerates_and_fades() {
        let mut rng = SceneSeed::new(64).rng();
        let origin = Vec3::new(2.0, 15.0, -8.0);
        let mut burst =
            FireworkBurst::new(7, origin, palette::FIREWORK_PALETTE[0], 300, 2.0, &mut rng);

        assert!(burst.tick(1.0 / 60.0));
        for p in burst.view().positions {
            assert!(p.is_finite());
            assert!(p.distance(origin) > 0.0, "particle never left the origin");
        }

        // Horizontal step length shrinks as the fade tightens.
        let idx = burst
            .dirs
            .iter()
            .position(|d| (d.x * d.x + d.z * d.z) > 0.25)
            .unwrap();
        let mut prev = burst.view().positions[idx];
        let mut last_step = f32::INFINITY;
        let mut last_opacity = burst.opacity();
        for _ in 0..60 {
            assert!(burst.tick(1.0 / 60.0));
            let here = burst.view().positions[idx];
            let step = ((here.x - prev.x).powi(2) + (here.z - prev.z).powi(2)).sqrt();
            assert!(step < last_step);
            assert!(burst.opacity() < last_opacity);
            prev = here;
            last_step = step;
            last_opacity = burst.opacity();
        }
    }

    #[test]
    fn test_burst_retires_exactly_once_after_lifetime() {
        let mut rng = SceneSeed::new(65).rng();
        let mut burst = FireworkBurst::new(0, Vec3::splat(0.0), Color::WHITE, 50, 2.0, &mut rng);

        // Alive through 1.9 units, gone by 2.1.
        for _ in 0..114 {
            assert!(burst.tick(1.0 / 60.0));
        }
        let mut retired = false;
        for _ in 0..12 {
            if !burst.tick(1.0 / 60.0) {
                retired = true;
                break;
            }
        }
        assert!(retired);
    }

    #[test]
    fn test_pool_retires_finished_bursts() {
        let mut pool = test_pool(66);
        let mut clock = SceneClock::new();
        step(&mut pool, &mut clock, 150, true);
        assert!(pool.live_count() > 0);

        // Stop launching and let everything age out.
        step(&mut pool, &mut clock, 150, false);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut pool = test_pool(67);
        let mut clock = SceneClock::new();
        step(&mut pool, &mut clock, 600, true);
        let ids: Vec<u64> = pool.bursts().iter().map(FireworkBurst::id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(pool.next_id >= ids.len() as u64);
    }

    #[test]
    fn test_same_seed_same_show() {
        let mut a = test_pool(68);
        let mut b = test_pool(68);
        let mut clock_a = SceneClock::new();
        let mut clock_b = SceneClock::new();
        step(&mut a, &mut clock_a, 400, true);
        step(&mut b, &mut clock_b, 400, true);

        assert_eq!(a.live_count(), b.live_count());
        for (x, y) in a.bursts().iter().zip(b.bursts().iter()) {
            assert_eq!(x.id(), y.id());
            assert_eq!(x.view().positions, y.view().positions);
        }
    }
}
