//! # YULETIDE Shared
//!
//! Common value types used by every crate in the workspace.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER contain:
//! - Random number generators
//! - Clocks or timers
//! - Any mutable global state
//!
//! If you need simulation state, put it in `yule_core` or `yule_scene`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod constants;
pub mod math;
pub mod palette;

pub use color::Color;
pub use math::Vec3;
