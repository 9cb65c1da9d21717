//! Toolbar view model and rendering.
//!
//! [`ToolbarView`] maps a [`DisplayState`] onto per-widget visibility the
//! way the wallet's toolbar lays itself out. [`Visibility::Invisible`] keeps
//! a widget's space, [`Visibility::Gone`] removes it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::{Coin, DisplayState, LocalAmount};
use crate::messages::MessageCatalog;
use crate::theme::{
    BORDER_STYLE, COIN_COLOR, LOCAL_COLOR, MESSAGE_BAR_STYLE, PROGRESS_COLOR, TITLE_STYLE,
    WARNING_COLOR,
};
use crate::ui::components::amount::{CoinAmount, LocalAmountText};

// ============================================================================
// View Model
// ============================================================================

/// Widget visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Hidden but still taking up space.
    Invisible,
    /// Hidden and taking no space.
    Gone,
}

impl Visibility {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Everything the toolbar renders, derived from one [`DisplayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub progress: Visibility,
    /// Text of the message bar under the toolbar; `None` hides the bar.
    pub message_bar: Option<String>,
    pub balance_row: Visibility,
    pub coin_amount: Visibility,
    pub amount: Option<Coin>,
    pub too_much_badge: Visibility,
    pub local_amount: Visibility,
    pub local: Option<LocalAmountText>,
}

impl ToolbarView {
    /// Maps a display state onto widgets.
    ///
    /// `show_local_balance` only matters while the balance is unknown, when
    /// the state itself does not say whether a local line was requested.
    #[must_use]
    pub fn from_state(
        state: &DisplayState,
        show_local_balance: bool,
        catalog: &dyn MessageCatalog,
    ) -> Self {
        match state {
            DisplayState::Progress { message } => Self {
                progress: Visibility::Visible,
                message_bar: Some(message.render(catalog)),
                balance_row: Visibility::Invisible,
                ..Self::empty()
            },
            DisplayState::Hidden => Self {
                balance_row: Visibility::Gone,
                ..Self::empty()
            },
            DisplayState::BalanceUnknown => Self {
                balance_row: Visibility::Visible,
                coin_amount: Visibility::Invisible,
                local_amount: if show_local_balance {
                    Visibility::Invisible
                } else {
                    Visibility::Gone
                },
                ..Self::empty()
            },
            DisplayState::Balance {
                amount_shown,
                too_much_warning,
                local_amount,
            } => {
                let (local_visibility, local) = match local_amount {
                    LocalAmount::NotRequested => (Visibility::Gone, None),
                    LocalAmount::Unavailable => (Visibility::Invisible, None),
                    shown @ LocalAmount::Shown { .. } => {
                        (Visibility::Visible, LocalAmountText::from_local(shown))
                    }
                };
                Self {
                    balance_row: Visibility::Visible,
                    coin_amount: Visibility::Visible,
                    amount: Some(*amount_shown),
                    too_much_badge: if *too_much_warning {
                        Visibility::Visible
                    } else {
                        Visibility::Gone
                    },
                    local_amount: local_visibility,
                    local,
                    ..Self::empty()
                }
            }
        }
    }

    /// Everything gone.
    const fn empty() -> Self {
        Self {
            progress: Visibility::Gone,
            message_bar: None,
            balance_row: Visibility::Gone,
            coin_amount: Visibility::Gone,
            amount: None,
            too_much_badge: Visibility::Gone,
            local_amount: Visibility::Gone,
            local: None,
        }
    }

    /// The toolbar line as styled spans.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        push(
            &mut spans,
            self.progress,
            Span::styled(
                format!("{PROGRESS_GLYPH} "),
                Style::default()
                    .fg(PROGRESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        );

        if self.balance_row == Visibility::Gone {
            return Line::from(spans);
        }
        let row_visible = self.balance_row.is_visible();

        let coin_spans = CoinAmount::new(self.amount.unwrap_or_default())
            .with_width(COIN_PLACEHOLDER_WIDTH)
            .to_spans(COIN_COLOR);
        for span in coin_spans {
            push(&mut spans, row_and(row_visible, self.coin_amount), span);
        }

        push(
            &mut spans,
            row_and(row_visible, self.too_much_badge),
            Span::styled(
                format!(" {TOO_MUCH_GLYPH}"),
                Style::default()
                    .fg(WARNING_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        );

        let local = self.local.clone().unwrap_or_else(LocalAmountText::placeholder);
        push(
            &mut spans,
            row_and(row_visible, self.local_amount),
            Span::styled(
                format!("  {} {}", local.code_label, local.value),
                Style::default().fg(LOCAL_COLOR),
            ),
        );

        Line::from(spans)
    }
}

/// Glyph of the spinning progress indicator.
const PROGRESS_GLYPH: &str = "⟳";

/// Glyph of the too-much balance badge.
const TOO_MUCH_GLYPH: &str = "⚠";

/// Width reserved for an invisible coin amount.
const COIN_PLACEHOLDER_WIDTH: usize = 10;

/// A child of an invisible row is never more than invisible.
const fn row_and(row_visible: bool, child: Visibility) -> Visibility {
    match (row_visible, child) {
        (_, Visibility::Gone) => Visibility::Gone,
        (true, v) => v,
        (false, _) => Visibility::Invisible,
    }
}

fn push(spans: &mut Vec<Span<'static>>, visibility: Visibility, span: Span<'static>) {
    match visibility {
        Visibility::Visible => spans.push(span),
        Visibility::Invisible => {
            spans.push(Span::raw(" ".repeat(span.content.chars().count())));
        }
        Visibility::Gone => {}
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the bordered toolbar line.
pub fn render_toolbar(frame: &mut Frame, area: Rect, view: &ToolbarView) {
    let block = Block::default()
        .title(Span::styled(" Wallet ", TITLE_STYLE))
        .borders(Borders::ALL)
        .border_style(BORDER_STYLE);

    frame.render_widget(Paragraph::new(view.to_line()).block(block), area);
}

/// Renders the message bar, or nothing when the view has no message.
pub fn render_message_bar(frame: &mut Frame, area: Rect, view: &ToolbarView) {
    let Some(message) = &view.message_bar else {
        return;
    };
    frame.render_widget(
        Paragraph::new(format!(" {message}")).style(MESSAGE_BAR_STYLE),
        area,
    );
}

// ============================================================================
// Tests
// ============================================================================
