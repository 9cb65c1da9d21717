//! Host state for the walletbar TUI.
//!
//! [`App`] binds a [`DisplayStateReconciler`] to live [`WalletSources`]: it
//! owns the subscriptions while resumed, feeds every update through the
//! reconciler and keeps the latest [`DisplayState`] for rendering.
//!
//! ```text
//! ┌──────────────┐  InputUpdate   ┌──────────────────────┐  DisplayState  ┌─────────┐
//! │ WalletSources│ ─────────────▶ │ DisplayStateReconciler│ ─────────────▶ │ ui::render│
//! └──────────────┘  Subscriptions └──────────────────────┘                └─────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::domain::DisplayState;
use crate::messages::EnglishCatalog;
use crate::reconcile::DisplayStateReconciler;
use crate::sources::{Clock, Subscriptions, SystemClock, WalletSources};
use crate::ui::ToolbarView;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;

pub mod config;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use ui_state::{Toast, UiState};

// ============================================================================
// Main App State
// ============================================================================

/// The toolbar host.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    /// Latest inputs and the presentation rules.
    pub reconciler: DisplayStateReconciler<C>,

    /// The state currently on screen.
    pub display: DisplayState,

    pub ui: UiState,

    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    pub(crate) sources: Arc<WalletSources>,

    /// `Some` while resumed.
    pub(crate) subscriptions: Option<Subscriptions>,

    pub(crate) catalog: EnglishCatalog,

    pub(crate) last_refresh: Instant,
}

impl<C: Clock> App<C> {
    /// The sources this host subscribes to.
    #[must_use]
    pub fn sources(&self) -> &Arc<WalletSources> {
        &self.sources
    }

    /// `true` while subscriptions are released.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.subscriptions.is_none()
    }

    /// The view model of the current display state.
    #[must_use]
    pub fn toolbar_view(&self) -> ToolbarView {
        ToolbarView::from_state(
            &self.display,
            self.config.show_local_balance,
            &self.catalog,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
