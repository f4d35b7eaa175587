//! Gravity vector, its quantized move direction, and the sweep order it implies

/// Per-axis grid step in the direction gravity pulls, each component in {-1, 0, 1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveDir {
    pub x: i32,
    pub y: i32,
}

impl MoveDir {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Continuous gravity plus its quantized direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub gx: f32,
    pub gy: f32,
    pub dir: MoveDir,
}

impl Gravity {
    /// Angle 0 pulls toward +y (screen down); positive angles swing it toward +x.
    pub fn from_angle(angle: f32, scale: f32, dead_zone: f32) -> Self {
        let gx = angle.sin() * scale;
        let gy = angle.cos() * scale;
        Self {
            gx,
            gy,
            dir: MoveDir::new(quantize(gx, dead_zone), quantize(gy, dead_zone)),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dir.is_zero()
    }

    /// Absolute component magnitudes `(|gx|, |gy|)`
    #[inline]
    pub fn magnitudes(&self) -> (f32, f32) {
        (self.gx.abs(), self.gy.abs())
    }
}

#[inline]
fn quantize(component: f32, dead_zone: f32) -> i32 {
    if component > dead_zone {
        1
    } else if component < -dead_zone {
        -1
    } else {
        0
    }
}

/// Row/column iteration order for one sweep.
///
/// Each axis runs from the side gravity pulls toward, so a particle that falls
/// lands on a cell already visited this frame. Axes with no pull alternate with
/// frame parity (even = ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOrder {
    pub rows_descending: bool,
    pub cols_descending: bool,
}

impl ScanOrder {
    pub fn new(dir: MoveDir, frame: u64) -> Self {
        let odd = frame & 1 == 1;
        let descending = |component: i32| match component {
            1 => true,
            -1 => false,
            _ => odd,
        };
        Self {
            rows_descending: descending(dir.y),
            cols_descending: descending(dir.x),
        }
    }

    #[inline]
    pub fn rows(&self, height: u32) -> impl Iterator<Item = i32> {
        axis(height as i32, self.rows_descending)
    }

    #[inline]
    pub fn cols(&self, width: u32) -> impl Iterator<Item = i32> {
        axis(width as i32, self.cols_descending)
    }
}

#[inline]
fn axis(len: i32, descending: bool) -> impl Iterator<Item = i32> {
    (0..len).map(move |i| if descending { len - 1 - i } else { i })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn cardinal_angles_quantize_to_axis_steps() {
        assert_eq!(Gravity::from_angle(0.0, 0.5, 0.01).dir, MoveDir::new(0, 1));
        assert_eq!(Gravity::from_angle(FRAC_PI_2, 0.5, 0.01).dir, MoveDir::new(1, 0));
        assert_eq!(Gravity::from_angle(PI, 0.5, 0.01).dir, MoveDir::new(0, -1));
        assert_eq!(Gravity::from_angle(-FRAC_PI_2, 0.5, 0.01).dir, MoveDir::new(-1, 0));
        assert_eq!(Gravity::from_angle(FRAC_PI_4, 0.5, 0.01).dir, MoveDir::new(1, 1));
    }

    #[test]
    fn dead_zone_swallows_small_components() {
        // sin(0.01) * 0.5 ~ 0.005, under the 0.01 threshold
        assert_eq!(Gravity::from_angle(0.01, 0.5, 0.01).dir, MoveDir::new(0, 1));
        assert_eq!(Gravity::from_angle(0.05, 0.5, 0.01).dir, MoveDir::new(1, 1));
        assert!(Gravity::from_angle(1.3, 0.0, 0.01).is_zero());
    }

    #[test]
    fn scan_runs_from_the_far_side() {
        let down = ScanOrder::new(MoveDir::new(0, 1), 4);
        assert_eq!(down.rows(4).collect::<Vec<_>>(), vec![3, 2, 1, 0]);

        let up_left = ScanOrder::new(MoveDir::new(-1, -1), 3);
        assert_eq!(up_left.rows(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(up_left.cols(3).collect::<Vec<_>>(), vec![0, 1, 2]);

        let right = ScanOrder::new(MoveDir::new(1, 0), 0);
        assert_eq!(right.cols(3).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn idle_axis_alternates_with_parity() {
        let even = ScanOrder::new(MoveDir::new(0, 1), 2);
        let odd = ScanOrder::new(MoveDir::new(0, 1), 3);
        assert_eq!(even.cols(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(odd.cols(3).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert!(even.rows_descending && odd.rows_descending);
    }
}
