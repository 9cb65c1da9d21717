//! Theme and styling constants for the wallet toolbar.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - toolbar border and title.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Coin amount color.
pub const COIN_COLOR: Color = Color::Green;

/// Local (fiat) amount color.
pub const LOCAL_COLOR: Color = Color::Gray;

/// Too-much balance badge and warning toasts.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Progress indicator and message bar.
pub const PROGRESS_COLOR: Color = Color::Magenta;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::DarkGray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Toolbar title style.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Message bar style.
pub const MESSAGE_BAR_STYLE: Style = Style::new().fg(Color::Black).bg(PROGRESS_COLOR);

/// Key hints in the footer.
pub const KEY_HINT_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
