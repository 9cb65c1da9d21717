//! Application lifecycle management.
//!
//! - `new()` / `with_clock()` - create the host
//! - `run()` - main event loop
//! - `resume()` / `pause()` - acquire and release the source subscriptions
//! - update draining and periodic recomputation

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::constants::TICK_RATE;
use crate::domain::DisplayState;
use crate::messages::EnglishCatalog;
use crate::reconcile::{DisplayStateReconciler, InputUpdate};
use crate::sources::{Clock, Subscriptions, SystemClock, WalletSources};
use crate::tui::Tui;
use crate::ui::{self, layout::AppLayout};

use super::{App, AppConfig, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App<SystemClock> {
    /// Creates a paused host reading the system clock.
    #[must_use]
    pub fn new(config: AppConfig, sources: Arc<WalletSources>) -> Self {
        Self::with_clock(config, sources, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Creates a paused host; call [`App::resume`] to start receiving updates.
    #[must_use]
    pub fn with_clock(config: AppConfig, sources: Arc<WalletSources>, clock: C) -> Self {
        let reconciler = DisplayStateReconciler::with_clock(config.policy(), clock);
        let display = reconciler.on_any_input_changed();

        Self {
            reconciler,
            display,
            ui: UiState::new(),
            config,
            exit: false,
            sources,
            subscriptions: None,
            catalog: EnglishCatalog,
            last_refresh: Instant::now(),
        }
    }

    /// Runs the main application loop until quit.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.resume();
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_updates();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        let size = terminal.size()?;
                        let toolbar = AppLayout::new(Rect::new(0, 0, size.width, size.height))
                            .toolbar;
                        self.handle_mouse_event(mouse, toolbar);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                self.refresh_if_due(Instant::now());
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            // Lets the forwarder tasks run between polls.
            tokio::task::yield_now().await;
        }

        self.pause();
        Ok(())
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Subscribes to every source and recomputes. Each source redelivers its
    /// current value, so the chain snapshot is always reloaded on resume.
    ///
    /// Must be called within a Tokio runtime.
    pub fn resume(&mut self) {
        if self.subscriptions.is_some() {
            return;
        }
        self.subscriptions = Some(self.sources.subscribe());
        self.refresh();
        info!("resumed");
    }

    /// Releases every subscription. Updates published while paused are seen
    /// on the next resume.
    pub fn pause(&mut self) {
        if let Some(subscriptions) = self.subscriptions.take() {
            subscriptions.release();
            info!("paused");
        }
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Applies every queued update in arrival order.
    ///
    /// # Returns
    ///
    /// The number of updates applied.
    pub fn process_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Some(update) = self
            .subscriptions
            .as_mut()
            .and_then(Subscriptions::try_next)
        {
            self.apply(update);
            applied += 1;
        }
        applied
    }

    /// Feeds one update through the reconciler.
    pub fn apply(&mut self, update: InputUpdate) {
        let state = self.reconciler.apply(update);
        self.set_display(state);
    }

    /// Recomputes from the current inputs and time.
    pub fn refresh(&mut self) {
        let state = self.reconciler.on_any_input_changed();
        self.set_display(state);
        self.last_refresh = Instant::now();
    }

    /// Recomputes if resumed and the refresh interval has elapsed since `now`.
    ///
    /// # Returns
    ///
    /// `true` if a recomputation ran.
    pub fn refresh_if_due(&mut self, now: Instant) -> bool {
        let Some(interval) = self.config.refresh_interval() else {
            return false;
        };
        if self.is_paused() || now.saturating_duration_since(self.last_refresh) < interval {
            return false;
        }
        debug!("periodic recompute");
        self.refresh();
        true
    }

    fn set_display(&mut self, state: DisplayState) {
        if state.mode_name() != self.display.mode_name() {
            info!(
                from = self.display.mode_name(),
                to = state.mode_name(),
                "display mode changed"
            );
        }
        self.display = state;
    }
}
