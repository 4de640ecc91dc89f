/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

/// Character used for a live cell in renderings and world files
pub const CHAR_ALIVE: char = '*';
/// Character used for a dead cell in renderings and world files
pub const CHAR_DEAD: char = ' ';

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Pure function to compute the next state based on Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Alive => CHAR_ALIVE,
            Cell::Dead => CHAR_DEAD,
        }
    }

    /// Only `*` is alive; every other character reads as dead
    pub const fn from_char(c: char) -> Self {
        Self::from_alive(c == CHAR_ALIVE)
    }
}
