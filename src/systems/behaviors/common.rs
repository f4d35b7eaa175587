use rand::Rng;

use super::UpdateContext;
use crate::domain::materials::{Interaction, Material, MaterialTable, Mobility};
use crate::spatial::grid::Grid;
use crate::systems::gravity::MoveDir;

const MAX_CANDIDATES: usize = 7;

/// Ordered destination cells for one move attempt (fixed capacity, no allocation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    cells: [(i32, i32); MAX_CANDIDATES],
    len: usize,
}

impl Candidates {
    /// Build the candidate list for a particle at `(x, y)` moving along `dir`.
    ///
    /// Primary moves come first: with both axes active the diagonal, then the
    /// axis with the stronger pull (`x_dominant`), then the other one. Then the
    /// lateral slides, two per active axis, mirrored around `lateral` (±1).
    pub fn build(x: i32, y: i32, dir: MoveDir, x_dominant: bool, lateral: i32) -> Self {
        let mut c = Self {
            cells: [(0, 0); MAX_CANDIDATES],
            len: 0,
        };

        if dir.x != 0 && dir.y != 0 {
            c.push(x + dir.x, y + dir.y);
            if x_dominant {
                c.push(x + dir.x, y);
                c.push(x, y + dir.y);
            } else {
                c.push(x, y + dir.y);
                c.push(x + dir.x, y);
            }
        } else {
            c.push(x + dir.x, y + dir.y);
        }

        if dir.y != 0 {
            c.push(x + lateral, y + dir.y);
            c.push(x - lateral, y + dir.y);
        }
        if dir.x != 0 {
            c.push(x + dir.x, y + lateral);
            c.push(x + dir.x, y - lateral);
        }
        c
    }

    #[inline]
    fn push(&mut self, x: i32, y: i32) {
        self.cells[self.len] = (x, y);
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[(i32, i32)] {
        &self.cells[..self.len]
    }
}

/// Random ±1
#[inline]
pub(super) fn coin(ctx: &mut UpdateContext) -> i32 {
    if ctx.rng.random_bool(0.5) { 1 } else { -1 }
}

#[inline]
fn roll(ctx: &mut UpdateContext, chance: f32) -> bool {
    ctx.rng.random::<f32>() < chance
}

/// Whether the floater at `(x, y)` belongs to a run of floaters that ends in
/// liquid within `lookahead` cells along `dir` (the start cell counts).
pub fn is_floating(grid: &Grid, table: &MaterialTable, x: i32, y: i32, dir: MoveDir, lookahead: u32) -> bool {
    if dir.is_zero() {
        return false;
    }
    let (mut cx, mut cy) = (x, y);
    for _ in 0..lookahead {
        match grid.try_get(cx, cy).map(|m| table.mobility(m)) {
            Some(Mobility::Floater) => {
                cx += dir.x;
                cy += dir.y;
            }
            Some(Mobility::Liquid) => return true,
            _ => return false,
        }
    }
    false
}

/// Try the gravity candidates in order; first accepted one wins.
pub(super) fn try_candidates(
    ctx: &mut UpdateContext,
    material: Material,
    x: i32,
    y: i32,
    dir: MoveDir,
) -> Option<(i32, i32)> {
    let (ax, ay) = ctx.gravity.magnitudes();
    let lateral = coin(ctx);
    let candidates = Candidates::build(x, y, dir, ax > ay, lateral);

    for &(tx, ty) in candidates.as_slice() {
        let Some(target) = ctx.grid.try_get(tx, ty) else {
            continue;
        };

        match ctx.table.interaction(material, target) {
            Interaction::Move => {
                ctx.grid.relocate(x, y, tx, ty);
                ctx.stats.moved += 1;
                return Some((tx, ty));
            }
            Interaction::Swap(chance) => {
                if roll(ctx, chance) {
                    ctx.grid.swap(x, y, tx, ty);
                    ctx.stats.swapped += 1;
                    return Some((tx, ty));
                }
            }
            Interaction::SwapIfFloating(chance) => {
                let lookahead = ctx.config.float_lookahead;
                if is_floating(ctx.grid, ctx.table, tx, ty, dir, lookahead) && roll(ctx, chance) {
                    ctx.grid.swap(x, y, tx, ty);
                    ctx.stats.swapped += 1;
                    return Some((tx, ty));
                }
            }
            Interaction::Blocked => {}
        }
    }
    None
}

/// Unit step perpendicular to gravity for sideways spreading.
///
/// A clearly dominant axis (ratio above `spread_axis_ratio`) spreads along the
/// other axis; otherwise along the diagonal perpendicular to `dir`.
pub(super) fn spread_step(ctx: &UpdateContext, dir: MoveDir, lateral: i32) -> (i32, i32) {
    let (ax, ay) = ctx.gravity.magnitudes();
    let ratio = ctx.config.spread_axis_ratio;
    if ay > ax * ratio {
        (lateral, 0)
    } else if ax > ay * ratio {
        (0, lateral)
    } else {
        let (px, py) = perp(dir);
        (px * lateral, py * lateral)
    }
}

/// 90° rotation of a direction
#[inline]
fn perp(dir: MoveDir) -> (i32, i32) {
    (-dir.y, dir.x)
}
