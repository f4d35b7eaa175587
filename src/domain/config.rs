//! Simulation configuration
//!
//! Every tunable constant is fixed at construction. Hosts may supply a JSON
//! document (camelCase keys, every field optional) to override the defaults.

use serde::{Deserialize, Serialize};

use super::materials::{Material, MaterialTable};

/// Largest brush radius a config may allow
pub const BRUSH_CEILING: i32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Pixel size of one cell (screen transform only)
    pub cell_size: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Fraction of the remaining angle error closed each frame
    pub damping: f32,
    /// Target angle change per rotate intent (radians)
    pub rotate_step: f32,
    pub gravity_scale: f32,
    /// Gravity components at or below this magnitude count as zero
    pub dead_zone: f32,
    /// Longest floater run searched for liquid underneath
    pub float_lookahead: u32,
    pub liquid_spread: u32,
    pub floater_spread: u32,
    /// Axis ratio above which spreading runs along a single axis
    pub spread_axis_ratio: f32,
    /// Per-cell fill probability of the spawn brush
    pub spawn_chance: f32,
    pub brush_min: i32,
    pub brush_max: i32,
    /// Fixed seed for the random source (None = host chooses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub materials: Vec<MaterialOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOverride {
    pub material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_chance: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 190,
            height: 190,
            cell_size: 4,
            viewport_width: 1000,
            viewport_height: 1000,
            damping: 0.08,
            rotate_step: 0.03,
            gravity_scale: 0.5,
            dead_zone: 0.01,
            float_lookahead: 20,
            liquid_spread: 3,
            floater_spread: 2,
            spread_axis_ratio: 2.0,
            spawn_chance: 0.7,
            brush_min: 1,
            brush_max: 10,
            seed: None,
            materials: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Default configuration with the given grid size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        log::info!(
            "Loaded simulation config: {}x{} grid, {} material overrides",
            config.width,
            config.height,
            config.materials.len()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("grid must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err("grid dimensions exceed coordinate range".to_string());
        }
        if self.cell_size == 0 {
            return Err("cellSize must be positive".to_string());
        }
        let fits = |side: u32| {
            side.checked_mul(self.cell_size)
                .is_some_and(|px| px <= i32::MAX as u32)
        };
        if !fits(self.width) || !fits(self.height) {
            return Err(format!(
                "{}x{} grid at cellSize {} exceeds the pixel range",
                self.width, self.height, self.cell_size
            ));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(format!("damping out of range: {}", self.damping));
        }
        if !(self.gravity_scale >= 0.0) {
            return Err(format!("gravityScale must be non-negative: {}", self.gravity_scale));
        }
        if !(self.dead_zone >= 0.0) {
            return Err(format!("deadZone must be non-negative: {}", self.dead_zone));
        }
        if !(self.spread_axis_ratio >= 1.0) {
            return Err(format!("spreadAxisRatio must be at least 1: {}", self.spread_axis_ratio));
        }
        check_chance("spawnChance", self.spawn_chance)?;
        if self.brush_min < 1 || self.brush_min > self.brush_max || self.brush_max > BRUSH_CEILING {
            return Err(format!(
                "invalid brush bounds [{}, {}]",
                self.brush_min, self.brush_max
            ));
        }
        for o in &self.materials {
            if let Some(chance) = o.sink_chance {
                check_chance("sinkChance", chance)?;
            }
        }
        Ok(())
    }

    /// Default material table with this config's overrides applied
    pub fn material_table(&self) -> MaterialTable {
        let mut table = MaterialTable::default();
        for o in &self.materials {
            let props = table.props_mut(o.material);
            if let Some(steps) = o.steps {
                props.steps = steps;
            }
            if let Some(chance) = o.sink_chance {
                props.sink_chance = chance;
            }
        }
        table
    }

    /// Clamp a requested brush radius into the configured bounds
    #[inline]
    pub fn clamp_brush(&self, radius: i32) -> i32 {
        radius.clamp(self.brush_min, self.brush_max)
    }
}

fn check_chance(field: &str, chance: f32) -> Result<(), String> {
    if (0.0..=1.0).contains(&chance) {
        Ok(())
    } else {
        Err(format!("{} must be within [0, 1]: {}", field, chance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_desktop_sandbox() {
        let c = SimConfig::default();
        assert_eq!((c.width, c.height), (190, 190));
        assert_eq!(c.damping, 0.08);
        assert_eq!(c.float_lookahead, 20);
        assert_eq!((c.brush_min, c.brush_max), (1, 10));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = SimConfig::from_json(r#"{"width": 40, "height": 30, "seed": 7}"#).unwrap();
        assert_eq!((c.width, c.height), (40, 30));
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.spawn_chance, 0.7);
    }

    #[test]
    fn overrides_reach_the_table() {
        let c = SimConfig::from_json(
            r#"{"materials": [{"material": "sand", "sinkChance": 1.0}, {"material": "water", "steps": 3}]}"#,
        )
        .unwrap();
        let table = c.material_table();
        assert_eq!(table.props(Material::Sand).sink_chance, 1.0);
        assert_eq!(table.props(Material::Water).steps, 3);
        assert_eq!(table.props(Material::Gold).sink_chance, 0.5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SimConfig::from_json(r#"{"width": 0}"#).is_err());
        assert!(SimConfig::from_json(r#"{"spawnChance": 1.5}"#).is_err());
        assert!(SimConfig::from_json(r#"{"brushMin": 5, "brushMax": 2}"#).is_err());
        assert!(SimConfig::from_json(
            r#"{"materials": [{"material": "gold", "sinkChance": -0.1}]}"#
        )
        .is_err());
        assert!(SimConfig::from_json(r#"{"materials": [{"material": "lava"}]}"#).is_err());
        assert!(SimConfig::from_json("not json").is_err());
        assert!(SimConfig::from_json(r#"{"brushMax": 50000}"#).is_err());
        assert!(SimConfig::from_json(r#"{"width": 8, "height": 8, "cellSize": 1073741824}"#).is_err());
        assert!(SimConfig::from_json(r#"{"width": 2000000000, "cellSize": 2}"#).is_err());
    }

    #[test]
    fn brush_radius_is_clamped() {
        let c = SimConfig::default();
        assert_eq!(c.clamp_brush(0), 1);
        assert_eq!(c.clamp_brush(4), 4);
        assert_eq!(c.clamp_brush(99), 10);
    }

    #[test]
    fn brush_ceiling_is_inclusive() {
        let c = SimConfig { brush_max: BRUSH_CEILING, ..SimConfig::default() };
        assert!(c.validate().is_ok());
        let c = SimConfig { brush_max: BRUSH_CEILING + 1, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }
}
