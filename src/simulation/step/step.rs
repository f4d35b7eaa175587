use rand::RngCore;

use crate::systems::behaviors::{StepStats, UpdateContext};
use crate::systems::gravity::{Gravity, ScanOrder};

use super::Simulation;

pub(super) fn step<R: RngCore>(sim: &mut Simulation<R>) {
    let angle = sim.rotation.advance();
    sim.frame += 1;

    let gravity = Gravity::from_angle(angle, sim.config.gravity_scale, sim.config.dead_zone);
    let mut stats = StepStats::default();

    let mut ctx = UpdateContext {
        grid: &mut sim.grid,
        table: &sim.table,
        config: &sim.config,
        rng: &mut sim.rng,
        gravity,
        frame: sim.frame,
        stats: &mut stats,
    };

    // Bees first, independent of gravity and scan order
    sim.behaviors.swarm().wander(&mut ctx);

    if !gravity.is_zero() {
        // Sweep against the direction of motion so a particle is not carried
        // along the scan and moved twice in one frame
        let order = ScanOrder::new(gravity.dir, sim.frame);
        let (width, height) = (ctx.grid.width(), ctx.grid.height());
        for y in order.rows(height) {
            for x in order.cols(width) {
                sim.behaviors.update(&mut ctx, x, y);
            }
        }
    }

    log::trace!(
        "frame {} angle {:.3}: moved {} swapped {} spread {} wandered {}",
        sim.frame,
        angle,
        stats.moved,
        stats.swapped,
        stats.spread,
        stats.wandered
    );
    sim.last_stats = stats;
}
