use proptest::prelude::*;

use tiltsand_engine::{Material, MaterialTable, SimConfig, Simulation};

const W: i32 = 16;
const H: i32 = 16;

fn particle() -> impl Strategy<Value = Material> {
    (1u8..8).prop_map(|id| Material::from_id(id).unwrap_or(Material::Sand))
}

fn placements() -> impl Strategy<Value = Vec<(i32, i32, Material)>> {
    prop::collection::vec((0..W, 0..H, particle()), 0..96)
}

fn build(config: SimConfig, cells: &[(i32, i32, Material)]) -> Simulation {
    let mut sim = Simulation::new(config).unwrap();
    for &(x, y, m) in cells {
        sim.place(x, y, m);
    }
    sim
}

fn column(sim: &Simulation) -> Vec<Material> {
    (0..sim.height() as i32).map(|y| sim.grid().get(0, y)).collect()
}

/// For each antigrav cell, top to bottom, the number of other particles above it
fn antigrav_ranks(cells: &[Material]) -> Vec<usize> {
    let mut above = 0;
    let mut ranks = Vec::new();
    for &m in cells {
        match m {
            Material::Antigrav => ranks.push(above),
            Material::Empty => {}
            _ => above += 1,
        }
    }
    ranks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn particles_are_conserved(
        cells in placements(),
        angle in -std::f32::consts::PI..std::f32::consts::PI,
        seed in any::<u64>(),
        steps in 0usize..40,
    ) {
        let config = SimConfig { seed: Some(seed), ..SimConfig::with_size(W as u32, H as u32) };
        let mut sim = build(config, &cells);
        sim.set_target_angle(angle);
        let before = sim.census();

        for _ in 0..steps {
            sim.step();
        }

        prop_assert_eq!(sim.census(), before);
        prop_assert_eq!(sim.particle_count(), before.particles());
        prop_assert_eq!(sim.grid().cells().len(), (W * H) as usize);
    }

    #[test]
    fn stone_never_moves(
        cells in placements(),
        angle in -std::f32::consts::PI..std::f32::consts::PI,
        seed in any::<u64>(),
    ) {
        let config = SimConfig { seed: Some(seed), ..SimConfig::with_size(W as u32, H as u32) };
        let mut sim = build(config, &cells);
        sim.snap_angle(angle);
        let stones: Vec<bool> = sim.grid().cells().iter().map(|&m| m == Material::Stone).collect();

        for _ in 0..30 {
            sim.step();
            let now: Vec<bool> = sim.grid().cells().iter().map(|&m| m == Material::Stone).collect();
            prop_assert_eq!(&now, &stones);
        }
    }

    #[test]
    fn nothing_passes_through_antigrav(
        cells in prop::collection::vec(prop_oneof![Just(Material::Empty), particle()], 1..24),
        upside_down in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let config = SimConfig { seed: Some(seed), ..SimConfig::with_size(1, cells.len() as u32) };
        let mut sim = Simulation::new(config).unwrap();
        for (y, &m) in cells.iter().enumerate() {
            sim.place(0, y as i32, m);
        }
        if upside_down {
            sim.snap_angle(std::f32::consts::PI);
        }
        let ranks = antigrav_ranks(&column(&sim));

        for _ in 0..40 {
            sim.step();
            prop_assert_eq!(antigrav_ranks(&column(&sim)), ranks.clone());
        }
    }

    #[test]
    fn antigrav_only_enters_empty_cells(target in 0u8..8) {
        let table = MaterialTable::default();
        let target = Material::from_id(target).unwrap_or(Material::Empty);
        let expected_open = target == Material::Empty;
        let open = !matches!(
            table.interaction(Material::Antigrav, target),
            tiltsand_engine::domain::Interaction::Blocked
        );
        prop_assert_eq!(open, expected_open);

        for mover in Material::ALL {
            if mover.is_particle() {
                prop_assert!(matches!(
                    table.interaction(mover, Material::Antigrav),
                    tiltsand_engine::domain::Interaction::Blocked
                ));
            }
        }
    }

    #[test]
    fn zero_gravity_without_bees_changes_nothing(
        cells in placements(),
        seed in any::<u64>(),
        steps in 1usize..30,
    ) {
        let config = SimConfig {
            gravity_scale: 0.0,
            seed: Some(seed),
            ..SimConfig::with_size(W as u32, H as u32)
        };
        let calm: Vec<_> = cells.into_iter().filter(|&(_, _, m)| m != Material::Bees).collect();
        let mut sim = build(config, &calm);
        let before = sim.grid().clone();

        for _ in 0..steps {
            sim.step();
        }

        prop_assert_eq!(sim.grid(), &before);
    }
}
