use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use golife::{Coord, InputEvent};
use std::{io, time::Duration};

/// Owns the terminal: raw mode, full-frame redraws, and the key-to-event
/// mapping. Raw mode and the cursor are restored on drop.
pub struct Console {
    report: String,
}

impl Console {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            report: String::new(),
        })
    }

    /// Clears the screen and draws `frame` at the top-left, with the report
    /// line one row below the board.
    pub fn render(&self, frame: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        let mut row = 0;
        for line in frame.lines() {
            queue!(stdout, cursor::MoveTo(0, row))?;
            io::Write::write_all(&mut stdout, line.as_bytes())?;
            row += 1;
        }

        queue!(stdout, cursor::MoveTo(0, row + 1))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    /// Parks the visible terminal cursor on a board cell during seeding.
    pub fn place_cursor(&self, coord: Coord) -> io::Result<()> {
        execute!(
            io::stdout(),
            cursor::MoveTo(coord.col as u16, coord.row as u16),
            cursor::Show
        )
    }

    pub fn hide_cursor(&self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Hide)
    }

    /// Waits up to `timeout` for a key event and maps it to an
    /// [`InputEvent`]. `None` means no event arrived, or the key is
    /// unmapped and was swallowed.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let mapped = match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => Some(InputEvent::Interrupt),
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up | KeyCode::Char('k') => Some(InputEvent::MoveNorth),
                KeyCode::Down | KeyCode::Char('j') => Some(InputEvent::MoveSouth),
                KeyCode::Left | KeyCode::Char('h') => Some(InputEvent::MoveWest),
                KeyCode::Right | KeyCode::Char('l') => Some(InputEvent::MoveEast),
                KeyCode::Char(' ') => Some(InputEvent::Select),
                KeyCode::Enter => Some(InputEvent::Confirm),
                _ => None,
            },
            _ => None,
        };
        Ok(mapped)
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
