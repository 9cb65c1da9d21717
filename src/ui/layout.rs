//! Screen layout for the walletbar TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Bordered one-line toolbar.
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Message bar directly under the toolbar.
pub const MESSAGE_BAR_HEIGHT: u16 = 1;

/// Footer with key hints.
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// AppLayout
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub toolbar: Rect,
    pub message_bar: Rect,
    /// Inputs panel below the toolbar.
    pub body: Rect,
    pub footer: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOOLBAR_HEIGHT),
                Constraint::Length(MESSAGE_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            toolbar: chunks[0],
            message_bar: chunks[1],
            body: chunks[2],
            footer: chunks[3],
        }
    }
}
