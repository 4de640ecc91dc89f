//! Bit-packed grid implementation.
//! Each cell is stored as a single bit inside 32-bit words, giving an 8x
//! memory reduction over the byte grid. Rows carry a one-cell dead halo
//! on every side so edge cells need no bounds checks.
//!
//! Bit order is most-significant-bit-first: row-local cell index `k`
//! (logical column + 1, the halo being column 0) lives in word `k / 32`
//! under mask `1 << (31 - k % 32)`. Every accessor and the neighbor
//! extraction go through [`BitGrid::locate`] and [`window`] so the
//! convention cannot drift between them.

use super::{Cell, Engine, LifeError, presets};

/// Storage word
pub type Word = u32;

/// Cells per word
pub const WORD_BITS: usize = Word::BITS as usize;

/// Population count of every 3-bit pattern
const POPCOUNT3: [u8; 8] = [0, 1, 1, 2, 1, 2, 2, 3];

/// Left and right neighbors of a 3-bit window, without the cell itself
const SIDES_MASK: Word = 0b101;

const LAST_POS: u32 = Word::BITS - 1;

#[inline]
const fn bit_mask(pos: u32) -> Word {
    1 << (LAST_POS - pos)
}

/// 3-bit window around bit `pos` of word `idx`: bit 2 is the left
/// neighbor, bit 1 the cell, bit 0 the right neighbor.
///
/// A window at either end of a word borrows one bit from the adjacent
/// word. Logical cells never sit at position 0 of a row's first word
/// (that is the halo) and their right neighbor always fits in the row
/// because the row holds at least `width + 2` bits.
#[inline]
fn window(buf: &[Word], idx: usize, pos: u32) -> Word {
    let word = buf[idx];
    match pos {
        0 => ((buf[idx - 1] & 1) << 2) | (word >> (LAST_POS - 1)),
        LAST_POS => ((word << 1) & 0b110) | (buf[idx + 1] >> LAST_POS),
        _ => (word >> (LAST_POS - 1 - pos)) & 0b111,
    }
}

#[inline]
fn write_bit(buf: &mut [Word], idx: usize, pos: u32, alive: bool) {
    if alive {
        buf[idx] |= bit_mask(pos);
    } else {
        buf[idx] &= !bit_mask(pos);
    }
}

/// Bit-packed double-buffered grid
#[derive(Clone, Debug)]
pub struct BitGrid {
    /// Width in cells
    width: usize,
    /// Height in cells
    height: usize,
    /// Words per buffer row: ceil((width + 2) / 32)
    words_per_row: usize,
    current: Vec<Word>,
    evolving: Vec<Word>,
}

impl BitGrid {
    /// Create new empty bit grid
    pub fn new(width: usize, height: usize) -> Self {
        let words_per_row = (width + 2).div_ceil(WORD_BITS);
        let total_words = words_per_row * (height + 2);

        tracing::debug!(words_per_row, total_words, "allocated bit grid");

        Self {
            width,
            height,
            words_per_row,
            current: vec![0; total_words],
            evolving: vec![0; total_words],
        }
    }

    /// Create a grid seeded with the glider pattern.
    /// The glider is drawn into the evolving buffer which is then swapped
    /// in as the current generation.
    pub fn with_glider(width: usize, height: usize) -> Result<Self, LifeError> {
        let mut grid = Self::new(width, height);
        for (x, y) in presets::glider().cells {
            grid.check_bounds(x, y)?;
            let (idx, pos) = grid.locate(x, y);
            write_bit(&mut grid.evolving, idx, pos, true);
        }
        std::mem::swap(&mut grid.current, &mut grid.evolving);
        Ok(grid)
    }

    pub fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    /// Word index and bit position of logical (x, y)
    #[inline]
    fn locate(&self, x: usize, y: usize) -> (usize, u32) {
        let k = x + 1;
        let idx = (y + 1) * self.words_per_row + k / WORD_BITS;
        (idx, (k % WORD_BITS) as u32)
    }

    #[inline]
    fn neighbors_at(&self, idx: usize, pos: u32) -> u8 {
        let above = window(&self.current, idx - self.words_per_row, pos);
        let same = window(&self.current, idx, pos) & SIDES_MASK;
        let below = window(&self.current, idx + self.words_per_row, pos);

        POPCOUNT3[above as usize] + POPCOUNT3[same as usize] + POPCOUNT3[below as usize]
    }

    /// Live neighbor count of a logical cell, 0 outside the grid
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        if !self.contains(x, y) {
            return 0;
        }
        let (idx, pos) = self.locate(x, y);
        self.neighbors_at(idx, pos)
    }

    /// Total memory usage in bytes (both buffers)
    pub fn memory_bytes(&self) -> usize {
        (self.current.len() + self.evolving.len()) * std::mem::size_of::<Word>()
    }
}

impl Engine for BitGrid {
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
        let (idx, pos) = self.locate(x, y);
        Cell::from_alive(self.current[idx] & bit_mask(pos) != 0)
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        let (idx, pos) = self.locate(x, y);
        write_bit(&mut self.current, idx, pos, cell.is_alive());
        Ok(())
    }

    fn evolve(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let (idx, pos) = self.locate(x, y);
                let current = Cell::from_alive(self.current[idx] & bit_mask(pos) != 0);
                let next = current.evolve(self.neighbors_at(idx, pos));
                write_bit(&mut self.evolving, idx, pos, next.is_alive());
            }
        }

        std::mem::swap(&mut self.current, &mut self.evolving);
    }

    fn clear(&mut self) {
        self.current.fill(0);
        self.evolving.fill(0);
    }
}
