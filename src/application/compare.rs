use tracing::error;

use crate::domain::{Engine, LifeError};
use crate::rendering;

/// Strictly compare two worlds cell by cell.
///
/// Covers the bounding rectangle of both worlds; cells outside the smaller
/// one read as dead. The first mismatch yields
/// [`LifeError::WorldsDiverged`] carrying the coordinate and renderings of
/// both worlds. There is no tolerance and no partial result.
pub fn compare_worlds<A, B>(first: &A, second: &B) -> Result<(), LifeError>
where
    A: Engine + ?Sized,
    B: Engine + ?Sized,
{
    let max_width = first.width().max(second.width());
    let max_height = first.height().max(second.height());

    for x in 0..max_width {
        for y in 0..max_height {
            if first.get(x, y) != second.get(x, y) {
                error!(x, y, "worlds are not equal");
                return Err(LifeError::WorldsDiverged {
                    x,
                    y,
                    left: rendering::render(first),
                    right: rendering::render(second),
                });
            }
        }
    }
    Ok(())
}
