//! Simulation - the caller-owned context for one sandbox
//!
//! Owns the grid, the material table, the smoothed rotation, the frame counter
//! and the random source. Nothing here is global: two simulations never share
//! state, and a test can drive one with any seeded `RngCore`.
//!
//! Per-step work lives in step/, brush and clear commands in commands/,
//! construction in init/. `World` in facade.rs is the wasm-facing wrapper.

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::domain::config::SimConfig;
use crate::domain::materials::{Material, MaterialTable};
use crate::spatial::grid::{Census, Grid};
use crate::systems::behaviors::{BehaviorRegistry, StepStats};
use crate::systems::gravity::Gravity;

#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;
mod rotation;

pub use facade::World;
pub use rotation::Rotation;

/// Seed used when the config does not name one
pub const DEFAULT_SEED: u64 = 12345;

pub struct Simulation<R: RngCore = Pcg32> {
    config: SimConfig,
    table: MaterialTable,
    grid: Grid,
    behaviors: BehaviorRegistry,
    rotation: Rotation,

    // State
    particle_count: usize,
    frame: u64,
    rng: R,
    last_stats: StepStats,
}

impl Simulation<Pcg32> {
    /// Validate `config` and build a simulation seeded from `config.seed`
    pub fn new(config: SimConfig) -> Result<Self, String> {
        init::create_seeded(config)
    }

    /// Default config at the given size with a fixed seed
    pub fn seeded(width: u32, height: u32, seed: u64) -> Result<Self, String> {
        let config = SimConfig {
            seed: Some(seed),
            ..SimConfig::with_size(width, height)
        };
        Self::new(config)
    }
}

impl<R: RngCore> Simulation<R> {
    /// Build a simulation around an injected random source
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, String> {
        init::create(config, rng)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particle_count }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn table(&self) -> &MaterialTable { &self.table }

    /// Read-only view of the cells; the renderer's side of the grid
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Movement tallies of the most recent step
    pub fn last_stats(&self) -> StepStats { self.last_stats }

    /// Per-material particle counts
    pub fn census(&self) -> Census {
        self.grid.census()
    }

    // === ROTATION ===

    /// Smoothed frame angle in radians
    pub fn angle(&self) -> f32 {
        self.rotation.current()
    }

    pub fn target_angle(&self) -> f32 {
        self.rotation.target()
    }

    pub fn rotate_left(&mut self) {
        self.rotation.rotate_left();
    }

    pub fn rotate_right(&mut self) {
        self.rotation.rotate_right();
    }

    pub fn set_target_angle(&mut self, angle: f32) {
        self.rotation.set_target(angle);
    }

    /// Set both smoothed and target angle, skipping the damping
    pub fn snap_angle(&mut self, angle: f32) {
        self.rotation.snap_to(angle);
    }

    /// Gravity at the current smoothed angle
    pub fn gravity(&self) -> Gravity {
        Gravity::from_angle(self.rotation.current(), self.config.gravity_scale, self.config.dead_zone)
    }

    // === COMMANDS ===

    /// Place one particle into an empty in-bounds cell
    pub fn place(&mut self, x: i32, y: i32, material: Material) -> bool {
        commands::place(self, x, y, material)
    }

    /// Empty one cell
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        commands::remove(self, x, y)
    }

    /// Brush-fill a disc in grid coordinates; returns particles placed
    pub fn spawn(&mut self, gx: i32, gy: i32, material: Material, radius: i32) -> usize {
        commands::spawn(self, gx, gy, material, radius)
    }

    /// Clear a disc in grid coordinates; returns particles removed
    pub fn erase(&mut self, gx: i32, gy: i32, radius: i32) -> usize {
        commands::erase(self, gx, gy, radius)
    }

    /// Spawn (`Some`) or erase (`None`) at a screen position
    pub fn paint_at_screen(&mut self, sx: f32, sy: f32, material: Option<Material>, radius: i32) -> usize {
        commands::paint_at_screen(self, sx, sy, material, radius)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) {
        step::step(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
