//! UI rendering for the walletbar TUI.
//!
//! # Module Structure
//!
//! - `toolbar` - The wallet toolbar view model and its rendering
//! - `inputs` - Panel listing the latest input values
//! - `components` - Reusable UI components (amounts, toast notifications)
//! - `layout` - Layout calculations
//! - `footer` - Footer bar rendering

pub mod components;
pub mod footer;
pub mod inputs;
pub mod layout;
pub mod toolbar;

pub use toolbar::{ToolbarView, Visibility};

use ratatui::Frame;

use crate::sources::Clock;
use crate::state::App;

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the whole screen: toolbar, message bar, inputs panel, footer and
/// the toast overlay on top.
pub fn render<C: Clock>(app: &App<C>, frame: &mut Frame) {
    let areas = AppLayout::new(frame.area());
    let view = app.toolbar_view();

    toolbar::render_toolbar(frame, areas.toolbar, &view);
    toolbar::render_message_bar(frame, areas.message_bar, &view);
    inputs::render(
        frame,
        areas.body,
        app.reconciler.inputs(),
        &app.display,
        app.reconciler.clock().now(),
    );
    footer::render(frame, areas.footer, app.is_paused());

    // Toast notification on top of everything (non-blocking overlay)
    if let Some(toast) = &app.ui.toast {
        components::render_toast(frame, frame.area(), &toast.message, toast.kind);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coin, DisplayState};
    use crate::reconcile::InputUpdate;
    use crate::sources::{FixedClock, WalletSources};
    use crate::state::AppConfig;
    use crate::test_utils::{RateMother, fixed_now, test_terminal};
    use crate::ui::components::ToastKind;
    use std::sync::Arc;

    fn test_app() -> App<FixedClock> {
        App::with_clock(
            AppConfig::default(),
            Arc::new(WalletSources::new()),
            FixedClock::new(fixed_now()),
        )
    }

    fn screen(app: &App<FixedClock>) -> String {
        let mut terminal = test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_render_balance_screen() {
        let mut app = test_app();
        app.apply(InputUpdate::Balance(Some(Coin::from_units(3_120_000_000))));
        app.apply(InputUpdate::ExchangeRate(Some(RateMother::usd(112))));
        assert!(matches!(app.display, DisplayState::Balance { .. }));

        let content = screen(&app);
        assert!(content.contains("31.20"), "{content}");
        assert!(content.contains("≈ USD 3,494.40"), "{content}");
        assert!(content.contains("Mode    balance"), "{content}");
        assert!(content.contains("q:Quit"), "{content}");
    }

    #[test]
    fn test_render_locked_screen_hides_amounts() {
        let mut app = test_app();
        app.apply(InputUpdate::Balance(Some(Coin::from_coins(5))));
        app.apply(InputUpdate::LockChanged(true));

        let content = screen(&app);
        assert!(!content.contains("◈"), "{content}");
        assert!(content.contains("Wallet  locked"), "{content}");
    }

    #[test]
    fn test_render_toast_overlay() {
        let mut app = test_app();
        app.ui
            .show_toast("Sync stalled, 3 days behind", ToastKind::Progress, 5);

        let mut terminal = test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Sync stalled, 3 days behind"));
    }
}
