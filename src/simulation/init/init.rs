use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::domain::config::SimConfig;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::{BehaviorRegistry, StepStats};

use super::{Rotation, Simulation, DEFAULT_SEED};

pub(super) fn create_seeded(config: SimConfig) -> Result<Simulation<Pcg32>, String> {
    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    create(config, Pcg32::seed_from_u64(seed))
}

pub(super) fn create<R: RngCore>(config: SimConfig, rng: R) -> Result<Simulation<R>, String> {
    config.validate()?;

    log::info!(
        "Simulation created: {}x{} cells, gravity scale {}, seed {:?}",
        config.width,
        config.height,
        config.gravity_scale,
        config.seed
    );

    Ok(Simulation {
        table: config.material_table(),
        grid: Grid::new(config.width, config.height),
        behaviors: BehaviorRegistry::new(),
        rotation: Rotation::new(config.damping, config.rotate_step),
        particle_count: 0,
        frame: 0,
        rng,
        last_stats: StepStats::default(),
        config,
    })
}
