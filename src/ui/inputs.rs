//! Inputs panel: the latest value of every channel behind the toolbar.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::{ChainSyncSnapshot, DisplayState};
use crate::reconcile::Inputs;
use crate::theme::{BORDER_STYLE, MUTED_COLOR, PRIMARY_COLOR, TITLE_STYLE};

const UNKNOWN: &str = "unknown";

/// Renders the inputs panel.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    inputs: &Inputs,
    display: &DisplayState,
    now: DateTime<Utc>,
) {
    let block = Block::default()
        .title(Span::styled(" Inputs ", TITLE_STYLE))
        .borders(Borders::ALL)
        .border_style(BORDER_STYLE);

    frame.render_widget(Paragraph::new(lines(inputs, display, now)).block(block), area);
}

fn lines(inputs: &Inputs, display: &DisplayState, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let balance = inputs
        .balance
        .map_or_else(|| UNKNOWN.to_string(), |b| b.to_string());
    let rate = inputs.exchange_rate.as_ref().map_or_else(
        || UNKNOWN.to_string(),
        |r| format!("{} {} per coin", r.currency_code(), r.fiat_per_coin()),
    );
    let chain = inputs
        .chain_sync
        .as_ref()
        .map_or_else(|| UNKNOWN.to_string(), |s| describe_chain(s, now));
    let lock = if inputs.locked { "locked" } else { "unlocked" };

    vec![
        field("Balance", balance),
        field("Rate", rate),
        field("Chain", chain),
        field("Wallet", lock.to_string()),
        field("Mode", display.mode_name().to_string()),
    ]
}

fn describe_chain(snapshot: &ChainSyncSnapshot, now: DateTime<Utc>) -> String {
    let lag = snapshot
        .lag(now)
        .map_or_else(|| "no best block".to_string(), |lag| format!("{}m behind", lag.num_minutes()));
    let activity = if snapshot.replaying { "replaying" } else { "idle" };
    if snapshot.is_impeded() {
        let impediments: Vec<String> = snapshot
            .impediments
            .iter()
            .map(|i| format!("{i:?}").to_lowercase())
            .collect();
        format!("{activity}, {lag}, impeded: {}", impediments.join(", "))
    } else {
        format!("{activity}, {lag}")
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<8}"),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(MUTED_COLOR)),
    ])
}
