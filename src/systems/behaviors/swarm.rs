//! SwarmBehavior - unbiased random walk, independent of gravity
//!
//! Runs as its own pass before the gravity sweep. Positions are gathered first
//! and visited in shuffled order, so neither the scan direction nor a bee that
//! already moved this frame can bias the walk.

use rand::seq::{IndexedRandom, SliceRandom};

use super::UpdateContext;
use crate::domain::materials::Mobility;

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub struct SwarmBehavior;

impl SwarmBehavior {
    pub fn new() -> Self {
        Self
    }

    /// One random step into an empty 8-neighbour for every swarm particle
    pub fn wander(&self, ctx: &mut UpdateContext) {
        let mut swarm: Vec<(i32, i32)> = ctx
            .grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &m)| ctx.table.mobility(m) == Mobility::Swarm)
            .map(|(idx, _)| ctx.grid.coords(idx))
            .collect();
        if swarm.is_empty() {
            return;
        }
        swarm.shuffle(&mut *ctx.rng);

        let mut open = Vec::with_capacity(NEIGHBORS.len());
        for (x, y) in swarm {
            open.clear();
            open.extend(
                NEIGHBORS
                    .iter()
                    .map(|&(dx, dy)| (x + dx, y + dy))
                    .filter(|&(nx, ny)| ctx.grid.is_empty(nx, ny)),
            );

            if let Some(&(nx, ny)) = open.choose(&mut *ctx.rng) {
                ctx.grid.relocate(x, y, nx, ny);
                ctx.stats.wandered += 1;
            }
        }
    }
}

impl Default for SwarmBehavior {
    fn default() -> Self {
        Self::new()
    }
}
