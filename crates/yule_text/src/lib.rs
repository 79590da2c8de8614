//! # YULETIDE Text
//!
//! Turns a name into a particle point cloud.
//!
//! ```text
//! "Amy"
//!   │
//!   ▼
//! ┌──────────────────────────┐
//! │ TextRaster (1024 x 512)  │  monospace glyphs, integer-magnified,
//! │   ██   ██ █ █ █  █       │  drawn centered into a byte grid
//! └──────────────────────────┘
//!   │ stride scan, ink > threshold
//!   ▼
//! GlyphPointSet: ordered Vec3 points on the Z = 0 plane
//! ```
//!
//! Sampling is pure and deterministic: no caches, no global state, no I/O.
//! The fonts are the `embedded-graphics` built-in ASCII bitmaps, so the
//! crate renders the same bytes on every platform.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod raster;
pub mod sampler;

pub use raster::TextRaster;
pub use sampler::{sample, GlyphFont, GlyphPointSet, SamplerConfig};
