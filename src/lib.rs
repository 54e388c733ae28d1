//! Procedural snowflake line art for pen plotters.
//!
//! Motifs are built from elongated hexagons, scattered over a triangular
//! lattice inside nested star boundaries, and collected into a layered scene
//! graph whose flattened form feeds the SVG exporter.

pub mod compositor;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod rng;
pub mod scene;

pub use error::{Result, SnowflakeError};
