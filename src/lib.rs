//! Tiltsand Engine - falling-sand automaton under a rotatable gravity field
//!
//! Architecture:
//! - domain/      - Materials, property table, configuration
//! - spatial/     - Grid storage, brush geometry
//! - systems/     - Gravity quantization, per-particle behaviors
//! - simulation/  - Caller-owned context, step, commands, wasm facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use spatial::grid;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (panic hook and console logger)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second call finds the logger already installed; keep the first one
    let _ = console_log::init_with_level(log::Level::Info);

    web_sys::console::log_1(&"Tiltsand WASM Engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::materials::{Material, MaterialTable, MATERIAL_COUNT};
pub use simulation::{Simulation, World};
pub use systems::behaviors::StepStats;

// Export material constants for JavaScript
#[wasm_bindgen]
pub fn mat_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_gold() -> u8 { Material::Gold.id() }
#[wasm_bindgen]
pub fn mat_antigrav() -> u8 { Material::Antigrav.id() }
#[wasm_bindgen]
pub fn mat_bees() -> u8 { Material::Bees.id() }
#[wasm_bindgen]
pub fn mat_styrofoam() -> u8 { Material::Styrofoam.id() }

/// ABGR display colour for a material id (0 for unknown ids)
#[wasm_bindgen]
pub fn material_color(id: u8) -> u32 {
    Material::from_id(id).map(Material::color).unwrap_or(0)
}

/// Display name for a material id
#[wasm_bindgen]
pub fn material_name(id: u8) -> String {
    Material::from_id(id).map(Material::name).unwrap_or("Unknown").to_string()
}
