//! Console rendering: a `+`/`-`/`|` bordered box of `*` and ` ` cells.

use std::io::{self, Write};

use crate::domain::Engine;

/// ANSI sequence that clears the terminal and homes the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn border(width: usize) -> String {
    let mut line = String::with_capacity(2 * width + 1);
    line.push('+');
    line.extend(std::iter::repeat_n('-', (2 * width).saturating_sub(1)));
    line.push('+');
    line
}

/// Render any grid as a bordered text block, one line per row.
///
/// Each row reads `|c|c|...|c|` so a `w`-wide grid produces lines of
/// `2w + 1` characters.
pub fn render<E: Engine + ?Sized>(grid: &E) -> String {
    let (width, height) = grid.dimensions();
    let top = border(width);
    let mut out = String::with_capacity((height + 2) * (top.len() + 1));

    out.push_str(&top);
    out.push('\n');
    for y in 0..height {
        out.push('|');
        for x in 0..width {
            out.push(grid.get(x, y).to_char());
            out.push('|');
        }
        out.push('\n');
    }
    out.push_str(&top);
    out.push('\n');
    out
}

/// Write one animation frame: clear the terminal, then the bordered grid
pub fn write_frame<W, E>(out: &mut W, grid: &E) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Engine + ?Sized,
{
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.write_all(render(grid).as_bytes())?;
    out.flush()
}

/// Draw one animation frame to stdout, replacing the previous one
pub fn draw_frame<E: Engine + ?Sized>(grid: &E) -> io::Result<()> {
    write_frame(&mut io::stdout().lock(), grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, ReferenceGrid};

    #[test]
    fn test_render_small_grid() {
        let mut grid = ReferenceGrid::new(3, 2);
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();

        let expected = "\
+-----+
|*| | |
| | |*|
+-----+
";
        assert_eq!(render(&grid), expected);
    }

    /// Writer whose output has gone away, like a closed pipe
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_frame_clears_then_renders() {
        let grid = ReferenceGrid::with_glider(5, 5).unwrap();
        let mut out = Vec::new();
        write_frame(&mut out, &grid).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.strip_prefix(CLEAR_SCREEN), Some(render(&grid).as_str()));
    }

    #[test]
    fn test_frame_reports_broken_output() {
        let grid = ReferenceGrid::new(4, 4);
        let err = write_frame(&mut BrokenPipe, &grid).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_line_lengths() {
        let grid = ReferenceGrid::new(39, 20);
        let text = render(&grid);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines.iter().all(|line| line.len() == 79));
    }
}
