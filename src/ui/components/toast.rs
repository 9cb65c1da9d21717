//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, used for one-shot
//! notices such as the too-much balance warning or a tapped progress message.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{PROGRESS_COLOR, WARNING_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Maximum text lines inside a toast.
const MAX_TOAST_LINES: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 1;

/// Border and inner spacing added to the text width.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// What a toast is about; picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Progress,
}

impl ToastKind {
    const fn text_color(self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Warning => WARNING_COLOR,
            Self::Progress => PROGRESS_COLOR,
        }
    }
}

/// Renders a toast notification within `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str, kind: ToastKind) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(kind.text_color()))
        .style(Style::default().bg(Color::Black));

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(kind.text_color()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(toast_block);

    frame.render_widget(toast_text, toast_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Bottom-right placement; long messages wrap onto up to three lines.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let max_width = (area.width * 2 / 3).max(MIN_TOAST_WIDTH);
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .clamp(MIN_TOAST_WIDTH, max_width)
        .min(area.width);

    let text_width = toast_width.saturating_sub(TOAST_WIDTH_PADDING).max(1);
    let lines = message_len.div_ceil(text_width).clamp(1, MAX_TOAST_LINES);
    let toast_height = (lines + 2).min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

// ============================================================================
// Tests
// ============================================================================
