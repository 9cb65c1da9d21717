//! Command pattern for input handling in the TUI.
//!
//! Key and mouse events are translated into [`AppCommand`]s here; the host
//! decides what each command does. Keeping the mapping pure makes keybindings
//! testable in isolation.
//!
//! # Example
//!
//! ```ignore
//! match KeyMapper::map_key(key_event) {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::Recompute => app.refresh(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

// ============================================================================
// App Commands
// ============================================================================

/// All commands the host can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Exit the application.
    Quit,
    /// The balance row was tapped.
    BalanceClick,
    /// The progress indicator was tapped.
    ProgressClick,
    /// A click landed on the toolbar; the visible widget decides its meaning.
    ToolbarClick,
    /// Flip the wallet lock.
    ToggleLock,
    /// Recompute the display state now.
    Recompute,
    /// Release or re-acquire all subscriptions.
    TogglePause,
    /// Dismiss the current toast.
    Dismiss,
    /// No action to perform (unhandled input).
    Noop,
}

impl AppCommand {
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps input events to application commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command.
    #[must_use]
    pub fn map_key(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => AppCommand::Quit,
                _ => AppCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('b') => AppCommand::BalanceClick,
            KeyCode::Char('p') => AppCommand::ProgressClick,
            KeyCode::Char('l') => AppCommand::ToggleLock,
            KeyCode::Char('r') => AppCommand::Recompute,
            KeyCode::Char(' ') => AppCommand::TogglePause,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    /// Maps a mouse event; only a left click inside `toolbar` counts.
    #[must_use]
    pub fn map_mouse(mouse: MouseEvent, toolbar: Rect) -> AppCommand {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if toolbar.contains(Position::new(mouse.column, mouse.row)) =>
            {
                AppCommand::ToolbarClick
            }
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
