use super::*;

impl Grid {
    /// Exchange the occupants of two in-bounds cells
    #[inline]
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let idx1 = self.index(x1, y1);
        let idx2 = self.index(x2, y2);
        self.cells.swap(idx1, idx2);
    }

    /// Move the occupant of `from` into the empty cell `to`
    #[inline]
    pub fn relocate(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) {
        debug_assert!(self.is_empty(to_x, to_y), "relocate: target ({}, {}) occupied", to_x, to_y);
        self.swap(from_x, from_y, to_x, to_y);
    }
}
