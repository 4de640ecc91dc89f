use super::{Cell, Engine, LifeError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Place pattern on grid at specified position.
    /// Fails on the first cell that falls outside the grid.
    pub fn place_on<E: Engine + ?Sized>(
        &self,
        grid: &mut E,
        x: usize,
        y: usize,
    ) -> Result<(), LifeError> {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }

    /// Place the pattern so its bounding box is centered on the grid
    pub fn place_centered<E: Engine + ?Sized>(&self, grid: &mut E) -> Result<(), LifeError> {
        let x = grid.width().saturating_sub(self.width) / 2;
        let y = grid.height().saturating_sub(self.height) / 2;
        self.place_on(grid, x, y)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - the default seed, absolute cells (1,2) (3,1) (3,2) (3,3) (2,3)
    /// when placed at the origin. Moves down-right with period 4.
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(3, 1), (1, 2), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), r_pentomino(), block()]
    }
}
