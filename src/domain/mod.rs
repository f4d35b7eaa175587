//! Domain definitions: materials, their properties, and configuration

pub mod config;
pub mod materials;

pub use config::{MaterialOverride, SimConfig, BRUSH_CEILING};
pub use materials::{Cadence, Interaction, Material, MaterialProps, MaterialTable, Mobility, MATERIAL_COUNT};
