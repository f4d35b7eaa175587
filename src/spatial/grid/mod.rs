//! Grid - dense row-major store of cell materials
//!
//! One `Material` per cell, `Empty` meaning vacant. The grid is created once
//! with fixed dimensions and only ever mutated in place.

use crate::domain::materials::{Material, MATERIAL_COUNT};

mod accessors;
mod census;
mod indexing;
mod moves;

pub use census::Census;

#[derive(Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Material>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Material::Empty; size],
        }
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Material::Empty);
    }

    /// Read-only view of all cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// Pointer to the cell array for zero-copy host reads (one byte per cell)
    pub fn types_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let census = self.census();
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("particles", &census.particles())
            .finish()
    }
}
