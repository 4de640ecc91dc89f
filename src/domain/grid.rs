use super::{Cell, Engine, LifeError, presets};

/// Width of the classic reference world
pub const DEFAULT_WIDTH: usize = 39;
/// Height of the classic reference world
pub const DEFAULT_HEIGHT: usize = 20;

/// Offsets of the eight neighbors around a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// ReferenceGrid is the straightforward scalar-cell implementation used as
/// ground truth. It has no halo: neighbor lookups go through the tolerant
/// [`Engine::get`], which reads dead outside the grid.
#[derive(Clone, Debug)]
pub struct ReferenceGrid {
    width: usize,
    height: usize,
    world: Vec<Cell>,
    next_states: Vec<Cell>,
}

impl ReferenceGrid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            world: vec![Cell::Dead; width * height],
            next_states: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid seeded with the glider pattern
    pub fn with_glider(width: usize, height: usize) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height);
        presets::glider().place_on(&mut grid, 0, 0)?;
        Ok(grid)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Count live neighbors; cells beyond the edge are dead
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.get(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy)))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Total memory usage in bytes (both buffers)
    pub fn memory_bytes(&self) -> usize {
        (self.world.len() + self.next_states.len()) * std::mem::size_of::<Cell>()
    }

    /// Copy the next generation over the current one and reset it to dead
    fn finalize_evolution(&mut self) {
        self.world.copy_from_slice(&self.next_states);
        self.next_states.fill(Cell::Dead);
    }
}

impl Default for ReferenceGrid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Engine for ReferenceGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if self.contains(x, y) {
            self.world[self.get_index(x, y)]
        } else {
            Cell::Dead
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        let idx = self.get_index(x, y);
        self.world[idx] = cell;
        Ok(())
    }

    fn evolve(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                let next = self.get(x, y).evolve(self.count_live_neighbors(x, y));
                let idx = self.get_index(x, y);
                self.next_states[idx] = next;
            }
        }
        self.finalize_evolution();
    }

    fn clear(&mut self) {
        self.world.fill(Cell::Dead);
        self.next_states.fill(Cell::Dead);
    }
}
