use crate::grid::Grid;
use crate::seed::ManualSeeder;

pub const DEAD_GLYPH: char = '_';
pub const ALIVE_GLYPH: char = 'O';

/// Renders the board as text, row-major with every row newline-terminated.
/// The caller owns the screen; this is the only textual form the core
/// produces.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for (coord, cell) in grid.iter() {
        out.push(if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH });
        if coord.col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

/// Same textual form for a seed still under construction.
pub fn render_seed(seeder: &ManualSeeder) -> String {
    let (rows, cols) = seeder.dimensions();
    let mut out = String::with_capacity(rows * (cols + 1));
    for row in 0..rows {
        for col in 0..cols {
            let live = seeder.is_live(crate::Coord::new(row, col));
            out.push(if live { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        out.push('\n');
    }
    out
}
