use crate::coord::Coord;

/// A named, hard-coded starting pattern.
pub struct Pattern {
    pub name: &'static str,
    cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn live_set(&self) -> Vec<Coord> {
        self.cells.iter().map(|&(r, c)| Coord::new(r, c)).collect()
    }
}

/// Vertical blinker, the default fixed seed.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 2), (1, 2), (2, 2)],
};

/// Glider, walks toward the bottom-right corner.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Toad, period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
};

/// Block, a still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(3, 3), (3, 4), (4, 3), (4, 4)],
};

const ALL: [&Pattern; 4] = [&BLINKER, &GLIDER, &TOAD, &BLOCK];

pub fn by_name(name: &str) -> Option<&'static Pattern> {
    ALL.into_iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_is_the_documented_fixed_seed() {
        let live = BLINKER.live_set();

        assert_eq!(
            live,
            vec![Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]
        );
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("glider").is_some());
        assert!(by_name("spaceship").is_none());
    }

    #[test]
    fn presets_fit_the_default_board() {
        for pattern in ALL {
            assert!(
                pattern.live_set().iter().all(|c| c.row < 8 && c.col < 8),
                "{} leaves the default 8x8 board",
                pattern.name
            );
        }
    }
}
