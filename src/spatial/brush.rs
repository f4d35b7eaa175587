//! Brush geometry - screen/grid coordinate transform and disc footprints
//!
//! The grid is drawn rotated by the smoothed frame angle around the viewport
//! centre, so a screen point is un-rotated before it is mapped to a cell.

use glam::Vec2;

use crate::domain::config::SimConfig;

/// Map a screen pixel to grid coordinates (may fall outside the grid)
pub fn screen_to_grid(config: &SimConfig, angle: f32, sx: f32, sy: f32) -> (i32, i32) {
    let center = Vec2::new(
        (config.viewport_width / 2) as f32,
        (config.viewport_height / 2) as f32,
    );
    let local = (Vec2::new(sx, sy) - center).rotate(Vec2::from_angle(-angle));

    let cell = config.cell_size as f32;
    let half_w = (config.width as f32 * cell / 2.0).floor();
    let half_h = (config.height as f32 * cell / 2.0).floor();

    (
        ((local.x + half_w) / cell).floor() as i32,
        ((local.y + half_h) / cell).floor() as i32,
    )
}

/// Cells within `radius` of `(cx, cy)`, row by row
pub fn disc(cx: i32, cy: i32, radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let r2 = radius as i64 * radius as i64;
    (-radius..=radius).flat_map(move |dx| {
        (-radius..=radius)
            .filter(move |&dy| {
                let (dx, dy) = (dx as i64, dy as i64);
                dx * dx + dy * dy <= r2
            })
            .map(move |dy| (cx.saturating_add(dx), cy.saturating_add(dy)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn viewport_centre_maps_to_grid_centre() {
        let config = SimConfig::default();
        for angle in [0.0, 0.7, PI, -2.0] {
            assert_eq!(screen_to_grid(&config, angle, 500.0, 500.0), (95, 95));
        }
    }

    #[test]
    fn unrotated_mapping_is_a_translation() {
        let config = SimConfig::default();
        // Grid's top-left pixel sits at 500 - 380 = 120 on both axes
        assert_eq!(screen_to_grid(&config, 0.0, 120.0, 120.0), (0, 0));
        assert_eq!(screen_to_grid(&config, 0.0, 123.9, 127.0), (0, 1));
        assert_eq!(screen_to_grid(&config, 0.0, 119.0, 500.0), (-1, 95));
    }

    #[test]
    fn half_turn_mirrors_both_axes() {
        let config = SimConfig::default();
        // 370px left and 10px below centre lands 370px right and 10px above
        let (x, y) = screen_to_grid(&config, PI, 130.0, 510.0);
        assert_eq!(x, (380 + 370) / 4);
        assert_eq!(y, (380 - 10) / 4);
    }

    #[test]
    fn disc_footprint() {
        let cells: Vec<_> = disc(0, 0, 1).collect();
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(-1, 0)));
        assert!(!cells.contains(&(1, 1)));

        assert_eq!(disc(3, 3, 0).collect::<Vec<_>>(), vec![(3, 3)]);
        assert_eq!(disc(0, 0, 2).count(), 13);
    }

    #[test]
    fn huge_cells_do_not_overflow_the_transform() {
        let config = SimConfig {
            cell_size: 1 << 30,
            ..SimConfig::with_size(8, 8)
        };
        let (x, y) = screen_to_grid(&config, 0.0, 500.0, 500.0);
        assert_eq!((x, y), (4, 4));
    }

    #[test]
    fn wide_disc_keeps_distances_in_range() {
        let edge: Vec<_> = disc(0, 0, 46_341).take(1).collect();
        assert_eq!(edge, vec![(-46_341, 0)]);
    }
}
