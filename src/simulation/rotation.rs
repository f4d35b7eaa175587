//! Smoothed frame rotation
//!
//! The host accumulates rotate intents into a target angle; every step closes a
//! fixed fraction of the remaining distance (exponential approach, no overshoot).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    current: f32,
    target: f32,
    damping: f32,
    step: f32,
}

impl Rotation {
    pub fn new(damping: f32, step: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            damping,
            step,
        }
    }

    /// Smoothed angle in radians
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn rotate_left(&mut self) {
        self.target += self.step;
    }

    pub fn rotate_right(&mut self) {
        self.target -= self.step;
    }

    pub fn set_target(&mut self, angle: f32) {
        self.target = angle;
    }

    /// Jump straight to `angle` without smoothing
    pub fn snap_to(&mut self, angle: f32) {
        self.current = angle;
        self.target = angle;
    }

    /// One damping step toward the target
    pub fn advance(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.damping;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_move_the_target_only() {
        let mut r = Rotation::new(0.08, 0.03);
        r.rotate_left();
        r.rotate_left();
        r.rotate_right();
        assert!((r.target() - 0.03).abs() < 1e-6);
        assert_eq!(r.current(), 0.0);
    }

    #[test]
    fn advance_closes_a_fixed_fraction() {
        let mut r = Rotation::new(0.08, 0.03);
        r.set_target(1.0);
        assert!((r.advance() - 0.08).abs() < 1e-6);
        assert!((r.advance() - (0.08 + 0.92 * 0.08)).abs() < 1e-6);
    }

    #[test]
    fn converges_without_overshoot() {
        let mut r = Rotation::new(0.08, 0.03);
        r.set_target(std::f32::consts::PI);
        let mut last = 0.0;
        for _ in 0..300 {
            let a = r.advance();
            assert!(a >= last && a <= std::f32::consts::PI);
            last = a;
        }
        assert!((r.current() - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn snap_skips_smoothing() {
        let mut r = Rotation::new(0.08, 0.03);
        r.snap_to(-1.0);
        assert_eq!(r.current(), -1.0);
        r.advance();
        assert_eq!(r.current(), -1.0);
    }
}
