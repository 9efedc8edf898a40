//! Skillforge - Entry Point
//!
//! Initializes the terminal, loads the ability catalog, and runs the
//! planner loop.

use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use skillforge::catalog;
use skillforge::planner::Planner;
use skillforge::ui::App;

/// How long to block waiting for input between redraws
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("skillforge.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Skillforge v{}", env!("CARGO_PKG_VERSION"));

    let catalog = catalog::load_or_default();
    let mut planner = Planner::new(catalog);
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_planner_loop(&mut terminal, &mut app, &mut planner);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Planner exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Skillforge shut down cleanly");
    result
}

/// Main planner loop: draw, then handle input
fn run_planner_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    planner: &mut Planner,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame, planner);
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press && app.handle_input(key, planner)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
