use std::fmt;

/// A zero-indexed board position, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves one cell in `dir`, bounds-checked against a `rows` x `cols`
    /// board. Returns [`None`] when the target would fall off the board.
    ///
    /// Both neighbor lookup and the interactive cursor clamp through this
    /// one routine.
    pub fn step(self, dir: Direction, rows: usize, cols: usize) -> Option<Coord> {
        let (drow, dcol) = dir.delta();
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        (row < rows && col < cols).then_some(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the 8 compass offsets around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All 8 directions. The order is part of the neighbor-lookup contract:
    /// NW, N, NE, W, E, SW, S, SE.
    pub const COMPASS: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(coord: (usize, usize), dir: Direction) -> Option<Coord> {
        Coord::new(coord.0, coord.1).step(dir, 8, 8)
    }

    #[test]
    fn step_interior_reaches_all_eight() {
        assert_eq!(step((1, 2), Direction::North), Some(Coord::new(0, 2)));
        assert_eq!(step((1, 2), Direction::NorthEast), Some(Coord::new(0, 3)));
        assert_eq!(step((1, 2), Direction::East), Some(Coord::new(1, 3)));
        assert_eq!(step((1, 2), Direction::SouthEast), Some(Coord::new(2, 3)));
        assert_eq!(step((1, 2), Direction::South), Some(Coord::new(2, 2)));
        assert_eq!(step((1, 2), Direction::SouthWest), Some(Coord::new(2, 1)));
        assert_eq!(step((1, 2), Direction::West), Some(Coord::new(1, 1)));
        assert_eq!(step((1, 2), Direction::NorthWest), Some(Coord::new(0, 1)));
    }

    #[test]
    fn step_off_top_left_is_none() {
        for dir in [
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::West,
        ] {
            assert_eq!(step((0, 0), dir), None, "failed on {:?}", dir);
        }
    }

    #[test]
    fn step_off_bottom_right_is_none() {
        for dir in [
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
            Direction::East,
        ] {
            assert_eq!(step((7, 7), dir), None, "failed on {:?}", dir);
        }
    }

    #[test]
    fn compass_order_is_fixed() {
        let deltas = Direction::COMPASS.map(Direction::delta);
        let expected = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        assert_eq!(deltas, expected);
    }
}
