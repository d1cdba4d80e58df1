//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::{error, info};

use crate::config::settings::Settings;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!("terminal ready");

    let result = event_loop(&mut terminal, settings);
    finish(result, restore_terminal())
}

/// Combine the loop result with the restore result; the loop error wins
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            error!(error = %restore_err, "failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => {
            info!("terminal restored");
            Err(err)
        }
        (Ok(()), restored) => {
            if restored.is_ok() {
                info!("terminal restored");
            }
            restored
        }
    }
}

fn event_loop(terminal: &mut Tui, settings: &Settings) -> Result<()> {
    let mut app = App::new(settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?)?;
    }

    info!(
        expenses = app.ledger.expenses().len(),
        categories = app.ledger.categories().len(),
        goals = app.ledger.goals().len(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_keeps_loop_error() {
        let err = finish(Err(anyhow!("event channel closed")), Err(anyhow!("no tty"))).unwrap_err();
        assert_eq!(err.to_string(), "event channel closed");
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let err = finish(Ok(()), Err(anyhow!("no tty"))).unwrap_err();
        assert_eq!(err.to_string(), "no tty");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
