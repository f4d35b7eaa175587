//! FloaterBehavior - buoyant rafts drift sideways on the liquid surface
//!
//! Only a floater that is actually floating (its run ends in liquid) drifts.
//! The probe moves over other floaters but stops at anything else, so a raft
//! never leaks past a wall.

use super::common::{coin, is_floating, spread_step};
use super::{Behavior, UpdateContext};
use crate::domain::materials::Mobility;
use crate::systems::gravity::MoveDir;

pub struct FloaterBehavior;

impl FloaterBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FloaterBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for FloaterBehavior {
    fn spread(&self, ctx: &mut UpdateContext, x: i32, y: i32, dir: MoveDir) -> Option<(i32, i32)> {
        if !is_floating(ctx.grid, ctx.table, x, y, dir, ctx.config.float_lookahead) {
            return None;
        }

        let lateral = coin(ctx);
        let (sx, sy) = spread_step(ctx, dir, lateral);

        for dist in 1..=ctx.config.floater_spread as i32 {
            let tx = x + sx * dist;
            let ty = y + sy * dist;
            match ctx.grid.try_get(tx, ty).map(|m| ctx.table.mobility(m)) {
                Some(Mobility::Vacant) => {
                    ctx.grid.relocate(x, y, tx, ty);
                    ctx.stats.spread += 1;
                    return Some((tx, ty));
                }
                Some(Mobility::Floater) => continue,
                _ => break,
            }
        }
        None
    }
}
