mod bit_grid;
mod byte_grid;
mod cell;
mod engine;
mod error;
mod grid;
mod patterns;
mod variant;

pub use bit_grid::{BitGrid, WORD_BITS, Word};
pub use byte_grid::ByteGrid;
pub use cell::{CHAR_ALIVE, CHAR_DEAD, Cell};
pub use engine::Engine;
pub use error::LifeError;
pub use grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ReferenceGrid};
pub use patterns::{Pattern, presets};
pub use variant::Variant;
