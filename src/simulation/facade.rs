use wasm_bindgen::prelude::*;

use crate::domain::config::SimConfig;
use crate::domain::materials::Material;

use super::Simulation;

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen]
pub struct World {
    core: Simulation,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings and a random seed
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        Self::with_seed(width, height, random_seed())
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<World, JsValue> {
        let core = Simulation::seeded(width, height, seed).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Create a world from a camelCase JSON `SimConfig`; unseeded configs get a random seed
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let mut config = SimConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        if config.seed.is_none() {
            config.seed = Some(random_seed());
        }
        let core = Simulation::new(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    /// Smoothed rotation in radians, for drawing the grid
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 { self.core.angle() }

    #[wasm_bindgen(getter)]
    pub fn target_angle(&self) -> f32 { self.core.target_angle() }

    pub fn rotate_left(&mut self) {
        self.core.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.core.rotate_right();
    }

    pub fn set_target_angle(&mut self, angle: f32) {
        self.core.set_target_angle(angle);
    }

    /// Brush-spawn at a screen position; unknown ids are ignored
    pub fn spawn(&mut self, sx: f32, sy: f32, material: u8, radius: i32) -> u32 {
        let Some(material) = Material::from_id(material) else {
            log::warn!("spawn ignored: unknown material id {}", material);
            return 0;
        };
        self.core.paint_at_screen(sx, sy, Some(material), radius) as u32
    }

    /// Brush-erase at a screen position
    pub fn erase(&mut self, sx: f32, sy: f32, radius: i32) -> u32 {
        self.core.paint_at_screen(sx, sy, None, radius) as u32
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Material id at a cell (0 outside the grid)
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.core.grid().try_get(x, y).unwrap_or_default().id()
    }

    /// Get pointer to the material-id array (row-major, one byte per cell)
    pub fn types_ptr(&self) -> *const u8 {
        self.core.grid().types_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.core.grid().size()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}
