use super::*;

impl Grid {
    /// False outside the grid
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)] == Material::Empty
    }

    /// Material at `(x, y)`.
    ///
    /// Precondition: the coordinates are in bounds. Use `try_get` otherwise.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Material {
        assert!(self.in_bounds(x, y), "get: ({}, {}) out of bounds", x, y);
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<Material> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Raw write.
    ///
    /// Precondition: the coordinates are in bounds; writing outside the grid is
    /// a programming error and panics.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        assert!(
            self.in_bounds(x, y),
            "set: ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.cells[idx] = material;
    }
}
