//! Terminal User Interface for Facture
//!
//! Single-screen workflow: pick a record off the worklist, validate the
//! extracted fields in the cockpit, approve and post.

pub mod app;
pub mod components;
pub mod event;
pub mod keymap;
pub mod layout;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_harness;

use anyhow::Result;
use clap::Args;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};
use std::io::stdout;
use std::time::Duration;

use crate::cli::tui::app::App;
use crate::cli::tui::event::{Event, EventHandler};

/// Default event-loop tick interval.
pub const DEFAULT_TICK_MS: u64 = 250;

/// TUI command arguments
#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Event-loop tick interval in milliseconds
    #[arg(long, env = "FACTURE_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,
}

impl Default for TuiArgs {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Run the TUI
pub fn run(args: TuiArgs) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(args.tick_ms);
    let mut app = App::new(args);
    let events = EventHandler::new(tick_rate);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run the application loop
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next() {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => app.tick(),
            Event::Resize(_, _) => {} // Ratatui handles resize
        }
    }

    Ok(())
}
