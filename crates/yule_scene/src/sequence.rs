//! The name-formation firework: rocket, explosion, and particle text.
//!
//! A four-stage machine drives one pre-allocated pool of particles:
//!
//! - `Idle`: everything parked far below the scene; a one-shot delay is
//!   armed when the card activates.
//! - `Launch`: a single rocket marker rises with a high-frequency wobble.
//! - `Explode`: crossing the launch height fills the pool at the apex
//!   with spherical velocities and jittered palette colors, then ballistic
//!   integration with gravity, drag, and a white twinkle runs until the
//!   hang timer elapses.
//! - `Forming`: particles with a glyph target converge on the text by
//!   exponential lerp; the surplus falls away and parks off screen. The
//!   stage is terminal and keeps interpolating forever.
//!
//! Stage changes happen in `update` only. Timer-driven transitions run the
//! new stage on the tick they fire; the rocket-crossing transition writes
//! the explosion state and lets integration start the next tick, so the
//! apex frame renders all particles at the origin.

use yule_core::{OneShot, ParticleBuffer, SceneClock, SceneRng};
use yule_shared::constants::{
    EXPLOSION_DRAG, EXPLOSION_GRAVITY, EXPLOSION_JITTER_LIGHTNESS, EXPLOSION_JITTER_SATURATION,
    EXPLOSION_SPEED_MIN, EXPLOSION_SPEED_RANGE, EXPLOSION_SPIKE_CHANCE, EXPLOSION_SPIKE_FACTOR,
    FALL_AWAY_TARGET_X, FORMING_COLOR_LERP, FORMING_DISCARD_Y, FORMING_FALL_RATE,
    FORMING_POSITION_LERP, PARKED_Y, ROCKET_SPEED, ROCKET_START_Y, ROCKET_WOBBLE_AMPLITUDE,
    ROCKET_WOBBLE_RATE, SEQUENCE_SIZE, TWINKLE_CHANCE,
};
use yule_shared::{palette, Color, Vec3};
use yule_text::{sample, GlyphPointSet, SamplerConfig};

use crate::config::SequenceConfig;
use crate::view::{DirtyFlags, PointStyle, PointTransform, Population, PopulationView};

/// Stage of the name-formation sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceStage {
    /// Waiting for activation plus the launch delay.
    Idle,
    /// Rocket in flight.
    Launch,
    /// Shell burst, ballistic particles.
    Explode,
    /// Converging on the text. Terminal.
    Forming,
}

impl SequenceStage {
    /// Short name for logs and stats.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Launch => "launch",
            Self::Explode => "explode",
            Self::Forming => "forming",
        }
    }
}

/// The firework-to-text sequence for one name.
pub struct NameSequence {
    stage: SequenceStage,
    /// Pool of `max_particles`, velocities and targets attached.
    buffer: ParticleBuffer,
    /// Explosion colors; the twinkle reverts to these every frame.
    base_colors: Box<[Color]>,
    glyphs: GlyphPointSet,
    /// Glyph points actually used; never exceeds the pool.
    glyph_count: usize,
    rocket: Vec3,
    launch_timer: OneShot,
    form_timer: OneShot,
    rng: SceneRng,
    config: SequenceConfig,
    dirty: DirtyFlags,
}

impl NameSequence {
    /// Samples the name and parks the whole pool off screen.
    #[must_use]
    pub fn new(name: &str, config: &SequenceConfig, rng: SceneRng) -> Self {
        let glyphs = sample(name, &SamplerConfig::sky_name());
        let glyph_count = glyphs.len().min(config.max_particles);
        if glyph_count < glyphs.len() {
            tracing::warn!(
                "name needs {} glyph points, pool holds {}; text will thin out",
                glyphs.len(),
                config.max_particles
            );
        }

        let mut buffer = ParticleBuffer::new(config.max_particles)
            .with_velocities()
            .with_targets();
        buffer.set_len(config.max_particles);
        for i in 0..config.max_particles {
            buffer.positions_mut()[i] = Vec3::new(0.0, PARKED_Y, 0.0);
        }

        Self {
            stage: SequenceStage::Idle,
            buffer,
            base_colors: vec![Color::BLACK; config.max_particles].into_boxed_slice(),
            glyphs,
            glyph_count,
            rocket: Vec3::new(0.0, ROCKET_START_Y, 0.0),
            launch_timer: OneShot::idle(),
            form_timer: OneShot::idle(),
            rng,
            config: config.clone(),
            dirty: DirtyFlags::CLEAN,
        }
    }

    /// Advances the machine one tick.
    pub fn update(&mut self, clock: &SceneClock, activated: bool) {
        self.dirty = DirtyFlags::CLEAN;
        let now = clock.elapsed();

        match self.stage {
            SequenceStage::Idle => {
                if activated {
                    if !self.launch_timer.is_armed() && !self.launch_timer.has_fired() {
                        self.launch_timer.arm(now, self.config.launch_delay);
                    }
                } else if self.launch_timer.is_armed() {
                    self.launch_timer.cancel();
                }
                if self.launch_timer.fire(now) {
                    self.transition_to(SequenceStage::Launch);
                    self.tick_launch(clock);
                }
            }
            SequenceStage::Launch => self.tick_launch(clock),
            SequenceStage::Explode => {
                if self.form_timer.fire(now) {
                    self.transition_to(SequenceStage::Forming);
                    self.tick_forming();
                } else {
                    self.tick_explode();
                }
            }
            SequenceStage::Forming => self.tick_forming(),
        }
    }

    fn transition_to(&mut self, next: SequenceStage) {
        tracing::info!("name sequence: {} -> {}", self.stage.name(), next.name());
        self.stage = next;
    }

    /// Rocket flight; crossing the launch height fires the shell.
    fn tick_launch(&mut self, clock: &SceneClock) {
        self.rocket.y += clock.delta() * ROCKET_SPEED;
        self.rocket.x = (clock.elapsed() * ROCKET_WOBBLE_RATE).sin() * ROCKET_WOBBLE_AMPLITUDE;

        if self.rocket.y >= self.config.launch_height {
            self.ignite(clock.elapsed());
        }
    }

    /// Fills the pool at the apex and arms the hang timer.
    fn ignite(&mut self, now: f32) {
        self.transition_to(SequenceStage::Explode);
        let origin = Vec3::new(0.0, self.config.launch_height, 0.0);

        for i in 0..self.buffer.len() {
            let dir = self.rng.unit_sphere();
            let mut speed = self
                .rng
                .range(EXPLOSION_SPEED_MIN, EXPLOSION_SPEED_MIN + EXPLOSION_SPEED_RANGE);
            if self.rng.chance(EXPLOSION_SPIKE_CHANCE) {
                speed *= EXPLOSION_SPIKE_FACTOR;
            }
            let color = self.rng.pick(&palette::EXPLOSION_PALETTE).offset_hsl(
                0.0,
                self.rng
                    .range(-EXPLOSION_JITTER_SATURATION, EXPLOSION_JITTER_SATURATION),
                self.rng
                    .range(-EXPLOSION_JITTER_LIGHTNESS, EXPLOSION_JITTER_LIGHTNESS),
            );

            self.buffer.positions_mut()[i] = origin;
            self.buffer.velocities_mut()[i] = dir * speed;
            self.buffer.colors_mut()[i] = color;
            self.base_colors[i] = color;
        }

        for i in 0..self.buffer.len() {
            self.buffer.targets_mut()[i] = if i < self.glyph_count {
                self.glyphs.points()[i]
            } else {
                Vec3::new(FALL_AWAY_TARGET_X, 0.0, 0.0)
            };
        }

        self.form_timer.arm(now, self.config.form_delay);
        self.dirty = DirtyFlags::ALL;
    }

    /// Ballistic expansion with gravity, drag, and the white twinkle.
    fn tick_explode(&mut self) {
        for i in 0..self.buffer.len() {
            let vel = self.buffer.velocities()[i];
            self.buffer.positions_mut()[i] += vel;

            let vel = &mut self.buffer.velocities_mut()[i];
            vel.y -= EXPLOSION_GRAVITY;
            *vel *= EXPLOSION_DRAG;

            self.buffer.colors_mut()[i] = if self.rng.chance(TWINKLE_CHANCE) {
                Color::WHITE
            } else {
                self.base_colors[i]
            };
        }
        self.dirty = DirtyFlags::ALL;
    }

    /// Text particles converge; the surplus falls away and parks.
    fn tick_forming(&mut self) {
        for i in 0..self.buffer.len() {
            if i < self.glyph_count {
                let target = self.buffer.targets()[i];
                let pos = self.buffer.positions()[i];
                self.buffer.positions_mut()[i] = pos.lerp(target, FORMING_POSITION_LERP);

                let color = self.buffer.colors()[i];
                self.buffer.colors_mut()[i] = color.lerp(palette::TEXT, FORMING_COLOR_LERP);
            } else {
                let pos = &mut self.buffer.positions_mut()[i];
                pos.y -= FORMING_FALL_RATE;
                if pos.y < FORMING_DISCARD_Y {
                    pos.y = PARKED_Y;
                }
            }
        }
        self.dirty = DirtyFlags::ALL;
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> SequenceStage {
        self.stage
    }

    /// Rocket position while one is in flight.
    #[must_use]
    pub const fn rocket(&self) -> Option<Vec3> {
        match self.stage {
            SequenceStage::Launch => Some(self.rocket),
            _ => None,
        }
    }

    /// Glyph points the text will use (pool-clamped).
    #[must_use]
    pub const fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Pool size.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the pool is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Renderer view for this frame.
    #[must_use]
    pub fn view(&self) -> PopulationView<'_> {
        PopulationView {
            population: Population::Sequence,
            positions: self.buffer.positions(),
            colors: self.buffer.colors(),
            transform: PointTransform::IDENTITY,
            style: PointStyle::vertex_colored(SEQUENCE_SIZE, 1.0),
            dirty: self.dirty,
        }
    }
}
