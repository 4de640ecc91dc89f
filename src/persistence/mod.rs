//! Plain-text world files.
//!
//! One line per row, one character per column, `*` alive and ` ` dead,
//! newline-terminated, no header. Loading is lenient: any other character
//! reads as dead, short lines and missing rows are padded dead, and extra
//! columns or rows are ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Cell, Engine, LifeError};

/// Fill `grid` from world-file text. Every logical cell is written.
pub fn parse_into<E: Engine + ?Sized>(grid: &mut E, text: &str) -> Result<(), LifeError> {
    let (width, height) = grid.dimensions();
    grid.clear();

    for (y, line) in text.lines().take(height).enumerate() {
        for (x, c) in line.chars().take(width).enumerate() {
            grid.set(x, y, Cell::from_char(c))?;
        }
    }
    Ok(())
}

/// Format exactly `height` lines of exactly `width` characters
pub fn format<E: Engine + ?Sized>(grid: &E) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity((width + 1) * height);

    for y in 0..height {
        out.extend((0..width).map(|x| grid.get(x, y).to_char()));
        out.push('\n');
    }
    out
}

/// Load a world file into `grid`
pub fn load_into<E: Engine + ?Sized>(grid: &mut E, path: &Path) -> Result<(), LifeError> {
    let bytes = fs::read(path).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Only '*' matters, so stray non-UTF-8 bytes are read as dead cells
    let text = String::from_utf8_lossy(&bytes);

    parse_into(grid, &text)?;
    info!(path = %path.display(), population = grid.population(), "loaded world file");
    Ok(())
}

/// Write `grid` to `path`, creating or truncating the file
pub fn save<E: Engine + ?Sized>(grid: &E, path: &Path) -> Result<(), LifeError> {
    fs::write(path, format(grid)).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved world file");
    Ok(())
}
