//! Raw-mode terminal setup and teardown around the game loop.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run `setup`; if it fails, run `restore` before handing back the error.
pub fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| restore())
}

/// Enter raw mode and the alternate screen, optionally capturing the mouse.
/// Any step that fails undoes the ones before it.
pub fn init(mouse: bool) -> io::Result<CrosstermTerminal> {
    setup_or_restore(
        || {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            if mouse {
                execute!(stdout, EnableMouseCapture)?;
            }
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || restore(mouse),
    )
}

/// Leave raw mode and the alternate screen. Errors are ignored so every step
/// gets a chance to run.
pub fn restore(mouse: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}
