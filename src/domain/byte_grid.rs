//! Byte-per-cell grid with a one-cell dead halo.
//!
//! The logical grid is surrounded by a border that is allocated but never
//! written, so every logical cell has eight readable neighbors and the
//! evolution loop needs no bounds checks.

use super::{Cell, Engine, LifeError, presets};

/// Byte-per-cell double-buffered grid
#[derive(Clone, Debug)]
pub struct ByteGrid {
    width: usize,
    height: usize,
    /// Bytes per buffer row, including both halo columns
    row_stride: usize,
    current: Vec<u8>,
    evolving: Vec<u8>,
}

impl ByteGrid {
    /// Create new empty byte grid
    pub fn new(width: usize, height: usize) -> Self {
        let row_stride = width + 2;
        let total = row_stride * (height + 2);

        Self {
            width,
            height,
            row_stride,
            current: vec![0; total],
            evolving: vec![0; total],
        }
    }

    /// Create a grid seeded with the glider pattern
    pub fn with_glider(width: usize, height: usize) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height);
        presets::glider().place_on(&mut grid, 0, 0)?;
        Ok(grid)
    }

    /// Buffer offset of logical (x, y); the +1s skip the halo
    #[inline]
    const fn offset(&self, x: usize, y: usize) -> usize {
        (y + 1) * self.row_stride + (x + 1)
    }

    /// Sum of the eight bytes surrounding the cell at `pos` in the current buffer
    #[inline]
    fn neighbor_sum(&self, pos: usize) -> u8 {
        let stride = self.row_stride;
        let above = pos - stride;
        let below = pos + stride;
        let cur = &self.current;

        cur[above - 1]
            + cur[above]
            + cur[above + 1]
            + cur[pos - 1]
            + cur[pos + 1]
            + cur[below - 1]
            + cur[below]
            + cur[below + 1]
    }

    /// Live neighbor count of a logical cell
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        if !self.contains(x, y) {
            return 0;
        }
        self.neighbor_sum(self.offset(x, y))
    }

    /// Total memory usage in bytes (both buffers)
    pub fn memory_bytes(&self) -> usize {
        self.current.len() + self.evolving.len()
    }
}

impl Engine for ByteGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Cell {
        if !self.contains(x, y) {
            return Cell::Dead;
        }
        Cell::from_alive(self.current[self.offset(x, y)] != 0)
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        let pos = self.offset(x, y);
        self.current[pos] = cell.is_alive() as u8;
        Ok(())
    }

    fn evolve(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = self.offset(x, y);
                let current = Cell::from_alive(self.current[pos] != 0);
                let next = current.evolve(self.neighbor_sum(pos));
                self.evolving[pos] = next.is_alive() as u8;
            }
        }

        std::mem::swap(&mut self.current, &mut self.evolving);
    }

    fn clear(&mut self) {
        self.current.fill(0);
        self.evolving.fill(0);
    }
}
