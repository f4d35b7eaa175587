//! Behaviors - per-particle movement for the gravity pass
//!
//! Every mobile material goes through the same routine: a bounded number of
//! attempts, each trying the gravity candidates from `common` against the
//! material table. Materials whose mobility class has a fallback (liquids
//! level out, floaters drift along their raft) get one more chance through a
//! `Behavior` before the attempt counts as failed.

mod common;
mod floater;
mod liquid;
mod swarm;

pub use common::{is_floating, Candidates};
pub use floater::FloaterBehavior;
pub use liquid::LiquidBehavior;
pub use swarm::SwarmBehavior;

use rand::RngCore;

use crate::domain::config::SimConfig;
use crate::domain::materials::{MaterialTable, Mobility};
use crate::spatial::grid::Grid;
use crate::systems::gravity::{Gravity, MoveDir};

/// Movement tallies for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Relocations into empty cells along gravity candidates
    pub moved: u32,
    /// Density swaps with an occupied cell
    pub swapped: u32,
    /// Sideways fallback moves (liquid leveling, raft drift)
    pub spread: u32,
    /// Swarm random-walk steps
    pub wandered: u32,
}

impl StepStats {
    #[inline]
    pub fn total(&self) -> u32 {
        self.moved + self.swapped + self.spread + self.wandered
    }
}

/// State shared by every particle update within one step
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub table: &'a MaterialTable,
    pub config: &'a SimConfig,
    pub rng: &'a mut dyn RngCore,
    pub gravity: Gravity,
    pub frame: u64,
    pub stats: &'a mut StepStats,
}

/// Fallback movement for a mobility class
pub trait Behavior {
    /// Called when no gravity candidate was accepted for the particle at
    /// `(x, y)` moving along `dir`. Returns the new position if it moved.
    fn spread(&self, ctx: &mut UpdateContext, x: i32, y: i32, dir: MoveDir) -> Option<(i32, i32)>;
}

/// Behavior registry - dispatch fallbacks by mobility class
pub struct BehaviorRegistry {
    liquid: LiquidBehavior,
    floater: FloaterBehavior,
    swarm: SwarmBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            liquid: LiquidBehavior::new(),
            floater: FloaterBehavior::new(),
            swarm: SwarmBehavior::new(),
        }
    }

    #[inline]
    pub fn swarm(&self) -> &SwarmBehavior {
        &self.swarm
    }

    fn fallback(&self, mobility: Mobility) -> Option<&dyn Behavior> {
        match mobility {
            Mobility::Liquid => Some(&self.liquid),
            Mobility::Floater => Some(&self.floater),
            _ => None,
        }
    }

    /// Run one particle's turn in the gravity pass
    pub fn update(&self, ctx: &mut UpdateContext, x: i32, y: i32) {
        let material = ctx.grid.get(x, y);
        let props = *ctx.table.props(material);
        if !props.falls() || !props.cadence.is_active(ctx.frame) {
            return;
        }

        let dir = if props.inverted {
            ctx.gravity.dir.inverted()
        } else {
            ctx.gravity.dir
        };
        if dir.is_zero() {
            return;
        }

        let (mut x, mut y) = (x, y);
        for _ in 0..props.steps {
            let moved = common::try_candidates(ctx, material, x, y, dir).or_else(|| {
                self.fallback(props.mobility)
                    .and_then(|behavior| behavior.spread(ctx, x, y, dir))
            });

            match moved {
                Some((nx, ny)) => {
                    x = nx;
                    y = ny;
                }
                None => break,
            }
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
