use super::{Cell, LifeError};

/// Capability set shared by every storage/evolution strategy.
///
/// Queries are tolerant: anything outside the logical grid reads as
/// [`Cell::Dead`]. Mutations are strict: writing outside the grid is an
/// error, never a silent clamp.
pub trait Engine {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Get cell state at (x, y), dead when out of range
    fn get(&self, x: usize, y: usize) -> Cell;

    /// Set cell state at (x, y) in the current generation
    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), LifeError>;

    /// Advance every cell by one generation (B3/S23)
    fn evolve(&mut self);

    /// Reset every logical cell to dead
    fn clear(&mut self);

    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Fail with [`LifeError::OutOfBounds`] unless (x, y) is a logical cell
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), LifeError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Count alive cells
    fn population(&self) -> usize {
        (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y).is_alive())
            .count()
    }
}
