//! Command execution and input handling for the host.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tracing::info;

use crate::commands::{AppCommand, KeyMapper};
use crate::constants::TOAST_TICKS;
use crate::domain::DisplayState;
use crate::sources::{Clock, LockStateSource};
use crate::ui::components::ToastKind;

use super::App;

impl<C: Clock> App<C> {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.execute_command(KeyMapper::map_key(key));
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, toolbar: Rect) {
        self.execute_command(KeyMapper::map_mouse(mouse, toolbar));
    }

    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::BalanceClick => self.on_balance_clicked(),
            AppCommand::ProgressClick => self.on_progress_clicked(),
            AppCommand::ToolbarClick => {
                if self.toolbar_view().progress.is_visible() {
                    self.on_progress_clicked();
                } else {
                    self.on_balance_clicked();
                }
            }
            AppCommand::ToggleLock => {
                let locked = self.sources.lock.toggle();
                info!(locked, "wallet lock toggled");
            }
            AppCommand::Recompute => self.refresh(),
            AppCommand::TogglePause => {
                if self.is_paused() {
                    self.resume();
                    self.ui.show_toast("Resumed", ToastKind::Info, TOAST_TICKS);
                } else {
                    self.pause();
                    self.ui.show_toast("Paused", ToastKind::Info, TOAST_TICKS);
                }
            }
            AppCommand::Dismiss => self.ui.dismiss_toast(),
            AppCommand::Noop => {}
        }
    }

    /// Raises the too-much notice, but only while the balance row can be
    /// tapped.
    fn on_balance_clicked(&mut self) {
        if !self.toolbar_view().balance_row.is_visible() {
            return;
        }
        if let Some(notice) = self.reconciler.notify_too_much_balance_if_applicable() {
            let message = notice.message(&self.catalog).to_string();
            self.ui.show_toast(message, ToastKind::Warning, TOAST_TICKS);
        }
    }

    fn on_progress_clicked(&mut self) {
        if let DisplayState::Progress { message } = &self.display {
            let text = message.render(&self.catalog);
            self.ui.show_toast(text, ToastKind::Progress, TOAST_TICKS);
        }
    }

    /// Current lock state as the source reports it.
    #[must_use]
    pub fn is_wallet_locked(&self) -> bool {
        self.sources.lock.is_locked()
    }
}
