//! # YULETIDE Core
//!
//! Pre-allocated particle state and the deterministic services every
//! simulator is built on:
//!
//! - 70,000+ particles with zero per-tick allocations
//! - One seed, independent ChaCha streams per subsystem
//! - A single owned clock; no wall-time reads inside the engine
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in the tick path** - buffers are sized at
//!    construction and never regrow
//! 2. **Single writer** - each buffer is owned by exactly one simulator;
//!    the renderer sees read-only snapshots
//! 3. **Poll, don't call back** - timers are plain deadlines checked by
//!    their owner, so a dropped owner structurally cancels its timers

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod clock;
pub mod rng;
pub mod timer;

pub use buffer::ParticleBuffer;
pub use clock::SceneClock;
pub use rng::{SceneRng, SceneSeed};
pub use timer::OneShot;
