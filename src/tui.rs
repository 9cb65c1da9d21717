//! Terminal setup and teardown.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::error;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen with mouse capture, so toolbar
/// clicks reach the event loop.
///
/// # Errors
/// Returns an error if the terminal cannot be switched.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    set_panic_hook();

    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Restores the terminal before the default panic output is printed.
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = restore() {
            error!("terminal restore failed during panic: {err}");
        }
        error!("panic: {panic_info}");
        hook(panic_info);
    }));
}

/// Leaves the alternate screen and raw mode.
///
/// # Errors
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}
