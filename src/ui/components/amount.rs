//! Amount display components.
//!
//! Renders coin amounts with the wallet symbol and local amounts with their
//! almost-equal currency label.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::domain::{Coin, LocalAmount};

/// Symbol shown before coin amounts.
pub const COIN_SYMBOL: &str = "◈";

// ============================================================================
// CoinAmount
// ============================================================================

/// A coin amount in the wallet's no-code format.
///
/// # Example
///
/// ```text
/// ◈ 31.20
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoinAmount {
    amount: Coin,
    min_width: usize,
}

impl CoinAmount {
    #[must_use]
    pub const fn new(amount: Coin) -> Self {
        Self {
            amount,
            min_width: 0,
        }
    }

    /// Right-aligns the digits within at least `width` characters.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Symbol and digits as two spans.
    #[must_use]
    pub fn to_spans(&self, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(
                format!("{COIN_SYMBOL} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>width$}", self.amount.to_string(), width = self.min_width),
                Style::default().fg(color),
            ),
        ]
    }

    #[must_use]
    pub fn to_line(&self, color: Color) -> Line<'static> {
        Line::from(self.to_spans(color))
    }
}

// ============================================================================
// LocalAmountText
// ============================================================================

/// The formatted pieces of a local amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAmountText {
    /// Currency code with the almost-equal prefix, e.g. `≈ USD`.
    pub code_label: String,
    pub value: String,
}

impl LocalAmountText {
    /// Formats a shown local amount; `None` for the other states.
    #[must_use]
    pub fn from_local(local: &LocalAmount) -> Option<Self> {
        match local {
            LocalAmount::Shown { value, .. } => Some(Self {
                code_label: local.code_label()?,
                value: value.to_string(),
            }),
            LocalAmount::NotRequested | LocalAmount::Unavailable => None,
        }
    }

    /// Stand-in text whose width is reserved while the amount is invisible.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            code_label: "≈ ---".to_string(),
            value: "0.00".to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
