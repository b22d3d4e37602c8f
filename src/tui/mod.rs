//! Interactive terminal form.

mod app;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::form::FormState;

pub use app::{App, Message, StatusMessage};
pub use event::map_key_event;
pub use ui::draw;

/// Run the form until the user quits, returning its final state.
pub fn run(strict: bool) -> Result<FormState> {
    let app = App::new(strict);

    let mut terminal = setup_terminal()?;

    // Run with cleanup on panic
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run_app(&mut terminal, app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal)?;

    match result {
        Ok(result) => result,
        Err(_) => Err(Error::General("Application panicked".to_string())),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<FormState> {
    loop {
        // 1. Render current state
        let now = Local::now().naive_local();
        terminal.draw(|frame| ui::draw(frame, &app, now))?;

        // 2. Poll for events (with timeout so the header date stays current)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // 3. Map key event to message
                if let Some(msg) = map_key_event(key) {
                    debug!(?msg, "key");
                    // 4. Process message
                    app.update(msg, Local::now().naive_local());
                }
            }
        }

        // 5. Check quit condition
        if app.should_quit {
            return Ok(app.form);
        }
    }
}
