use std::{error::Error, io, thread, time::Duration};

mod console;
mod options;
mod stats;

use golife::seed::{self, patterns};
use golife::{Coord, GameOfLife, Grid, InputEvent, ManualSeeder, render};

/// Runs the cursor-driven seeding loop until the user confirms the board.
/// Returns `None` when the user interrupts instead.
fn seed_interactively(
    console: &mut console::Console,
    rows: usize,
    cols: usize,
) -> io::Result<Option<Vec<Coord>>> {
    let mut seeder = ManualSeeder::new(rows, cols);
    console.set_report("move: arrows/hjkl  toggle: space  start: enter".to_string());

    while !seeder.confirmed() {
        console.render(&render::render_seed(&seeder))?;
        console.place_cursor(seeder.cursor())?;
        match console.poll_event(Duration::from_millis(50))? {
            Some(InputEvent::Interrupt) => return Ok(None),
            Some(event) => seeder.apply(event),
            None => {}
        }
    }

    console.hide_cursor()?;
    console.set_report(String::new());
    Ok(Some(seeder.into_live_set()))
}

fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };
    let (rows, cols) = args.grid_size();
    let sleep = args.sleep();

    // resolve the pattern name before the terminal goes raw
    let preset = match args.pattern() {
        Some(name) => {
            Some(patterns::by_name(&name).ok_or_else(|| format!("unknown pattern: {}", name))?)
        }
        None => None,
    };

    let mut console = console::Console::new()?;
    let live = if args.random() {
        seed::random_live_set(rows, cols)
    } else if let Some(pattern) = preset {
        pattern.live_set()
    } else {
        match seed_interactively(&mut console, rows, cols)? {
            Some(live) => live,
            // interrupted; the console drop restores the terminal
            None => return Ok(()),
        }
    };

    let mut game = GameOfLife::new(Grid::new(rows, cols, &live)?);
    let mut status = stats::StatusLine::new(game.alive_count());

    let mut interrupted = false;
    'generations: loop {
        while let Some(event) = console.poll_event(Duration::ZERO)? {
            if event == InputEvent::Interrupt {
                interrupted = true;
                break 'generations;
            }
        }

        if status.refresh_due() {
            let line = status.compose(game.generation());
            console.set_report(line);
        }
        console.render(&render::render(game.grid()))?;

        let changed = game.next_generation();
        status.record(game.alive_count());
        if !changed {
            break 'generations;
        }
        thread::sleep(sleep);
    }

    let score = game.generation();
    drop(console);
    if !interrupted {
        println!("Game over. Your score is {}.", score);
    }
    Ok(())
}
