use rand::{Rng, RngCore};

use crate::domain::materials::Material;
use crate::spatial::brush;

use super::Simulation;

pub(super) fn place<R: RngCore>(sim: &mut Simulation<R>, x: i32, y: i32, material: Material) -> bool {
    if !material.is_particle() || !sim.grid.is_empty(x, y) {
        return false;
    }

    sim.grid.set(x, y, material);
    sim.particle_count += 1;
    true
}

pub(super) fn remove<R: RngCore>(sim: &mut Simulation<R>, x: i32, y: i32) -> bool {
    match sim.grid.try_get(x, y) {
        Some(m) if m.is_particle() => {
            sim.grid.set(x, y, Material::Empty);
            sim.particle_count = sim.particle_count.saturating_sub(1);
            true
        }
        _ => false,
    }
}

fn brush_radius<R: RngCore>(sim: &Simulation<R>, radius: i32) -> i32 {
    let clamped = sim.config.clamp_brush(radius);
    if clamped != radius {
        log::debug!("brush radius {} clamped to {}", radius, clamped);
    }
    clamped
}

pub(super) fn spawn<R: RngCore>(
    sim: &mut Simulation<R>,
    gx: i32,
    gy: i32,
    material: Material,
    radius: i32,
) -> usize {
    if !material.is_particle() {
        return erase(sim, gx, gy, radius);
    }

    let radius = brush_radius(sim, radius);
    let chance = sim.config.spawn_chance;
    let mut placed = 0;
    for (x, y) in brush::disc(gx, gy, radius) {
        // Only empty cells draw from the rng
        if sim.grid.is_empty(x, y) && sim.rng.random::<f32>() < chance {
            sim.grid.set(x, y, material);
            placed += 1;
        }
    }
    sim.particle_count += placed;
    placed
}

pub(super) fn erase<R: RngCore>(sim: &mut Simulation<R>, gx: i32, gy: i32, radius: i32) -> usize {
    let radius = brush_radius(sim, radius);
    brush::disc(gx, gy, radius)
        .filter(|&(x, y)| remove(sim, x, y))
        .count()
}

pub(super) fn paint_at_screen<R: RngCore>(
    sim: &mut Simulation<R>,
    sx: f32,
    sy: f32,
    material: Option<Material>,
    radius: i32,
) -> usize {
    let (gx, gy) = brush::screen_to_grid(&sim.config, sim.rotation.current(), sx, sy);
    match material {
        Some(m) => spawn(sim, gx, gy, m, radius),
        None => erase(sim, gx, gy, radius),
    }
}

pub(super) fn clear<R: RngCore>(sim: &mut Simulation<R>) {
    sim.grid.clear();
    sim.particle_count = 0;
    log::debug!("grid cleared at frame {}", sim.frame);
}
