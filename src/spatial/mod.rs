//! Spatial storage and coordinate helpers

pub mod brush;
pub mod grid;

pub use grid::{Census, Grid};
