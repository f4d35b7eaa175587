//! Per-material particle counts
//!
//! With the `parallel` feature rows are counted on the rayon pool and merged.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    counts: [usize; MATERIAL_COUNT],
}

impl Census {
    #[inline]
    pub fn count(&self, material: Material) -> usize {
        self.counts[material as usize]
    }

    #[inline]
    pub fn counts(&self) -> &[usize; MATERIAL_COUNT] {
        &self.counts
    }

    /// Number of non-empty cells
    pub fn particles(&self) -> usize {
        self.counts.iter().sum::<usize>() - self.count(Material::Empty)
    }

    fn tally(cells: &[Material]) -> Self {
        let mut census = Self::default();
        for &m in cells {
            census.counts[m as usize] += 1;
        }
        census
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += *b;
        }
        self
    }
}

impl Grid {
    #[cfg(feature = "parallel")]
    pub fn census(&self) -> Census {
        let row = (self.width as usize).max(1);
        self.cells
            .par_chunks(row)
            .map(Census::tally)
            .reduce(Census::default, Census::merge)
    }

    #[cfg(not(feature = "parallel"))]
    pub fn census(&self) -> Census {
        Census::tally(&self.cells)
    }
}
