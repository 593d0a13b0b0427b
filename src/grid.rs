use crate::coord::{Coord, Direction};
use std::{error, fmt};

/// A single board position, either dead or alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

/// Coordinate fell outside a grid's `rows` x `cols` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridError::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {} out of bounds for {}x{} grid", coord, rows, cols)
            }
        }
    }
}

impl error::Error for GridError {}

/// A fixed-size rectangular cell store.
///
/// Dimensions are set at construction and never change; every lookup is
/// checked against them. The simulator replaces the cell contents wholesale
/// each generation rather than editing them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds an all-dead `rows` x `cols` board, then marks every coordinate
    /// in `live` alive. Any out-of-range coordinate rejects the whole
    /// construction; duplicates are harmless (a cell set alive twice is
    /// simply alive).
    pub fn new(rows: usize, cols: usize, live: &[Coord]) -> Result<Self, GridError> {
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        };
        for &coord in live {
            let idx = grid.index(coord).ok_or(GridError::OutOfBounds {
                coord,
                rows,
                cols,
            })?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols, "cell buffer does not match dimensions");
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| coord.row * self.cols + coord.col)
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, GridError> {
        self.index(coord)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// In-bounds neighbors of `coord`, always in compass order
    /// NW, N, NE, W, E, SW, S, SE. Corner cells yield 3, edge cells 5,
    /// interior cells 8; the board does not wrap.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::COMPASS
            .into_iter()
            .filter_map(move |dir| coord.step(dir, self.rows, self.cols))
    }

    pub fn live_neighbor_count(&self, coord: Coord) -> usize {
        self.neighbors(coord)
            .filter(|&n| self.cells[n.row * self.cols + n.col].is_alive())
            .count()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major walk over every cell with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            (Coord::new(idx / self.cols, idx % self.cols), cell)
        })
    }
}
