//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{KEY_HINT_STYLE, MUTED_COLOR, WARNING_COLOR};

const SHORTCUTS: [(&str, &str); 6] = [
    ("q", "Quit"),
    ("b", "Balance"),
    ("p", "Progress"),
    ("l", "Lock"),
    ("r", "Recompute"),
    ("Space", "Pause"),
];

/// Renders the footer; a paused host is flagged on the left.
pub fn render(frame: &mut Frame, area: Rect, paused: bool) {
    let mut spans = Vec::new();
    if paused {
        spans.push(Span::styled(
            "PAUSED  ",
            Style::default().fg(WARNING_COLOR),
        ));
    }
    for (index, (key, label)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, KEY_HINT_STYLE));
        spans.push(Span::styled(
            format!(":{label}"),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
