//! LiquidBehavior - sideways leveling when a liquid cannot fall
//!
//! Picks one side, then scans up to `liquid_spread` cells perpendicular to
//! gravity and teleports into the first empty one. The scan does not stop at
//! obstacles, which is what lets thin puddles flatten out quickly.

use super::common::{coin, spread_step};
use super::{Behavior, UpdateContext};
use crate::systems::gravity::MoveDir;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiquidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LiquidBehavior {
    fn spread(&self, ctx: &mut UpdateContext, x: i32, y: i32, dir: MoveDir) -> Option<(i32, i32)> {
        let lateral = coin(ctx);
        let (sx, sy) = spread_step(ctx, dir, lateral);

        for dist in 1..=ctx.config.liquid_spread as i32 {
            let tx = x + sx * dist;
            let ty = y + sy * dist;
            if ctx.grid.is_empty(tx, ty) {
                ctx.grid.relocate(x, y, tx, ty);
                ctx.stats.spread += 1;
                return Some((tx, ty));
            }
        }
        None
    }
}
