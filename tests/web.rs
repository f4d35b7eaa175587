#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use tiltsand_engine::{mat_sand, mat_stone, version, World};

#[wasm_bindgen_test]
fn world_steps_and_paints_through_the_facade() {
    let mut world = World::with_seed(190, 190, 9).expect("valid size");
    assert_eq!(world.types_len(), 190 * 190);

    let placed = world.spawn(500.0, 500.0, mat_stone(), 2);
    assert!(placed > 0);
    assert_eq!(world.particle_count(), placed);

    world.step();
    assert_eq!(world.frame(), 1);

    assert_eq!(world.erase(500.0, 500.0, 2), placed);
    assert_eq!(world.particle_count(), 0);
}

#[wasm_bindgen_test]
fn unknown_material_ids_are_ignored() {
    let mut world = World::with_seed(32, 32, 1).expect("valid size");
    assert_eq!(world.spawn(500.0, 500.0, 200, 3), 0);
    assert_eq!(world.get(-1, -1), 0);
}

#[wasm_bindgen_test]
fn rotation_intents_move_the_target() {
    let mut world = World::with_seed(32, 32, 1).expect("valid size");
    world.rotate_left();
    assert!(world.target_angle() > 0.0);
    world.step();
    assert!(world.angle() > 0.0);
    assert_ne!(mat_sand(), mat_stone());
    assert!(!version().is_empty());
}

#[wasm_bindgen_test]
fn config_json_round_trips_through_the_facade() {
    let world = World::from_config_json(r#"{"width": 24, "height": 12, "seed": 5}"#).expect("valid config");
    assert_eq!((world.width(), world.height()), (24, 12));
    assert!(world.config_json().contains("\"seed\":5"));
    assert!(World::from_config_json(r#"{"width": 0}"#).is_err());
}
