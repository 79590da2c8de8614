//! # YULETIDE
//!
//! The top-level card crate, tying the workspace together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        YULETIDE CARD ENGINE                         │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────────────┐   │
//! │  │ yule_shared  │    │  yule_core   │    │      yule_text       │   │
//! │  │              │───>│              │    │                      │   │
//! │  │ • Vec3/Color │    │ • Buffers    │    │ • Glyph raster       │   │
//! │  │ • Palette    │    │ • Clock      │    │ • Point sampling     │   │
//! │  │ • Constants  │    │ • RNG/Timers │    │                      │   │
//! │  └──────────────┘    └──────┬───────┘    └──────────┬───────────┘   │
//! │                            │                       │               │
//! │                            v                       v               │
//! │                     ┌─────────────────────────────────┐            │
//! │                     │           yule_scene            │            │
//! │                     │                                 │            │
//! │                     │  • Tree / Ornaments / Topper    │            │
//! │                     │  • Floor / Snow / Side Name     │            │
//! │                     │  • Fireworks / Name Sequence    │            │
//! │                     │  • CardScene composer + views   │            │
//! │                     └───────────────┬─────────────────┘            │
//! │                                     │                              │
//! │                                     v                              │
//! │                     ┌─────────────────────────────────┐            │
//! │                     │         yule (this crate)       │            │
//! │                     │                                 │            │
//! │                     │  • CardConfig (TOML, fallback)  │            │
//! │                     │  • SceneDriver (fixed-dt loop)  │            │
//! │                     │  • card_demo / soak_test bins   │            │
//! │                     └─────────────────────────────────┘            │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: card file loading and sanitization
//! - `driver`: headless fixed-dt tick loop with timing stats

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod driver;

// Re-export the layers
pub use yule_core as core;
pub use yule_scene as scene;
pub use yule_shared as shared;
pub use yule_text as text;

// Re-export commonly used types
pub use config::{CardConfig, ConfigError, ConfigResult};
pub use driver::{DriverConfig, SceneDriver, TickStats, TickStatsAccumulator};
pub use yule_scene::{CardScene, SceneStats, SceneTuning, SequenceStage};
