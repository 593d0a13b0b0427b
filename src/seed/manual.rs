use super::InputEvent;
use crate::coord::{Coord, Direction};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeding,
    Confirmed,
}

/// Interactive seed construction as a small state machine.
///
/// A cursor starts at the top-left corner; directional events move it one
/// cell, clamped to the board through the same bounds-checked offset that
/// neighbor lookup uses. `Select` toggles the cell under the cursor,
/// `Confirm` finalizes the live set. The machine never times out, and once
/// confirmed it ignores further events. Feeding it a scripted event
/// sequence exercises exactly the behavior the live input loop sees.
#[derive(Debug)]
pub struct ManualSeeder {
    rows: usize,
    cols: usize,
    cursor: Coord,
    live: BTreeSet<Coord>,
    phase: Phase,
}

impl ManualSeeder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cursor: Coord::new(0, 0),
            live: BTreeSet::new(),
            phase: Phase::Seeding,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    #[inline]
    pub fn is_live(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    #[inline]
    pub fn confirmed(&self) -> bool {
        self.phase == Phase::Confirmed
    }

    pub fn apply(&mut self, event: InputEvent) {
        if self.confirmed() {
            return;
        }
        match event {
            InputEvent::MoveNorth => self.step_cursor(Direction::North),
            InputEvent::MoveSouth => self.step_cursor(Direction::South),
            InputEvent::MoveWest => self.step_cursor(Direction::West),
            InputEvent::MoveEast => self.step_cursor(Direction::East),
            InputEvent::Select => {
                if !self.live.remove(&self.cursor) {
                    self.live.insert(self.cursor);
                }
            }
            InputEvent::Confirm => self.phase = Phase::Confirmed,
            // cancellation belongs to the driving loop
            InputEvent::Interrupt => {}
        }
    }

    fn step_cursor(&mut self, dir: Direction) {
        if let Some(next) = self.cursor.step(dir, self.rows, self.cols) {
            self.cursor = next;
        }
    }

    /// The finalized live set, sorted row-major.
    pub fn into_live_set(self) -> Vec<Coord> {
        self.live.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[InputEvent]) -> ManualSeeder {
        let mut seeder = ManualSeeder::new(8, 8);
        for &event in events {
            seeder.apply(event);
        }
        seeder
    }

    #[test]
    fn scripted_session_toggles_under_cursor() {
        let seeder = run(&[
            InputEvent::MoveSouth,
            InputEvent::MoveEast,
            InputEvent::Select,
            InputEvent::Confirm,
        ]);

        assert!(seeder.confirmed());
        assert_eq!(seeder.into_live_set(), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn cursor_clamps_at_board_edges() {
        let seeder = run(&[InputEvent::MoveNorth, InputEvent::MoveWest]);
        assert_eq!(seeder.cursor(), Coord::new(0, 0));

        let mut seeder = ManualSeeder::new(2, 2);
        for _ in 0..5 {
            seeder.apply(InputEvent::MoveSouth);
            seeder.apply(InputEvent::MoveEast);
        }
        assert_eq!(seeder.cursor(), Coord::new(1, 1));
    }

    #[test]
    fn second_select_removes_the_cell() {
        let seeder = run(&[InputEvent::Select, InputEvent::Select, InputEvent::Confirm]);

        assert!(seeder.into_live_set().is_empty());
    }

    #[test]
    fn events_after_confirm_are_ignored() {
        let mut seeder = run(&[InputEvent::Select, InputEvent::Confirm]);
        seeder.apply(InputEvent::MoveEast);
        seeder.apply(InputEvent::Select);

        assert_eq!(seeder.cursor(), Coord::new(0, 0));
        assert_eq!(seeder.into_live_set(), vec![Coord::new(0, 0)]);
    }

    #[test]
    fn interrupt_leaves_state_untouched() {
        let seeder = run(&[InputEvent::Select, InputEvent::Interrupt]);

        assert!(!seeder.confirmed());
        assert_eq!(seeder.into_live_set(), vec![Coord::new(0, 0)]);
    }

    #[test]
    fn live_set_is_sorted_row_major() {
        let seeder = run(&[
            InputEvent::MoveSouth,
            InputEvent::Select,
            InputEvent::MoveNorth,
            InputEvent::Select,
            InputEvent::MoveEast,
            InputEvent::Select,
            InputEvent::Confirm,
        ]);

        let live = seeder.into_live_set();
        assert_eq!(
            live,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
        );
    }
}
