//! # YULE SCENE
//!
//! The animated card: eight particle populations plus an ambient firework
//! pool, composed and ticked by [`CardScene`].
//!
//! ## Tick Order
//!
//! One `update(dt)` advances the clock once, then runs every system in a
//! fixed order. The order is part of the contract; systems never observe a
//! half-updated frame.
//!
//! ```text
//!  update(dt)
//!     │
//!     ├─ SceneClock::advance          (clamp, once per frame)
//!     ├─ FloorRipples::update         (ripple heights)
//!     ├─ TreeBody::update             (spin + style preset)
//!     ├─ OrnamentTiers::update        (sway + bob, two tiers)
//!     ├─ HeartTopper::update          (rotation + heartbeat)
//!     ├─ Snowfall::update             (fall, drift, respawn)
//!     ├─ SideName::update             (wave offsets)
//!     ├─ FireworkPool::update         (launch, integrate, retire)
//!     └─ NameSequence::update         (Idle→Launch→Explode→Forming)
//! ```
//!
//! ## Renderer Boundary
//!
//! The renderer pulls [`PopulationView`]s (positions, colors, transform,
//! style, dirty flags), [`BurstView`]s for live fireworks, the rocket
//! position while one is in flight, and the shared [`GlowSprite`]. Views
//! borrow the engine's arrays directly; nothing is copied per frame.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod fireworks;
pub mod floor;
pub mod ornaments;
pub mod scene;
pub mod sequence;
pub mod side_name;
pub mod snow;
pub mod sprite;
pub mod topper;
pub mod tree;
pub mod view;

pub use config::SceneTuning;
pub use fireworks::{FireworkBurst, FireworkPool};
pub use floor::FloorRipples;
pub use ornaments::OrnamentTiers;
pub use scene::{CardScene, SceneStats};
pub use sequence::{NameSequence, SequenceStage};
pub use side_name::SideName;
pub use snow::Snowfall;
pub use sprite::GlowSprite;
pub use topper::HeartTopper;
pub use tree::TreeBody;
pub use view::{
    BurstView, Coloring, DirtyFlags, PointStyle, PointTransform, Population, PopulationView,
};
