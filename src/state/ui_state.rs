//! UI presentation state: the toast overlay and the paused indicator.

use crate::ui::components::toast::ToastKind;

// ============================================================================
// Toast
// ============================================================================

/// A one-shot notice shown over the toolbar until its ticks run out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Remaining render ticks.
    pub ticks: u8,
}

// ============================================================================
// UiState
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub toast: Option<Toast>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, replacing any current one.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, ticks: u8) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            ticks,
        });
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some(toast) = self.toast.as_mut() {
            toast.ticks = toast.ticks.saturating_sub(1);
            if toast.ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.message.as_str())
    }
}
