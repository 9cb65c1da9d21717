//! The display state reconciler.
//!
//! Holds the latest value of each input channel and recomputes the whole
//! [`DisplayState`] from scratch on every update. Inputs are an immutable
//! snapshot that is rebuilt per event, never patched in place.

use tracing::debug;

use crate::domain::{ChainSyncSnapshot, Coin, DisplayState, ExchangeRate};
use crate::messages::MessageCatalog;
use crate::reconcile::{BalancePresentationPolicy, PolicyConfig, SyncProgressClassifier};
use crate::sources::{Clock, SystemClock};

// ============================================================================
// Inputs
// ============================================================================

/// The latest known value of every input channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inputs {
    pub balance: Option<Coin>,
    pub exchange_rate: Option<ExchangeRate>,
    pub chain_sync: Option<ChainSyncSnapshot>,
    pub locked: bool,
}

impl Inputs {
    /// Returns a new snapshot with one channel replaced.
    #[must_use]
    pub fn with(self, update: InputUpdate) -> Self {
        match update {
            InputUpdate::Balance(balance) => Self { balance, ..self },
            InputUpdate::ExchangeRate(exchange_rate) => Self {
                exchange_rate,
                ..self
            },
            InputUpdate::ChainSync(chain_sync) => Self { chain_sync, ..self },
            InputUpdate::LockChanged(locked) => Self { locked, ..self },
        }
    }
}

/// A new value on one input channel. The last value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputUpdate {
    Balance(Option<Coin>),
    ExchangeRate(Option<ExchangeRate>),
    ChainSync(Option<ChainSyncSnapshot>),
    LockChanged(bool),
}

impl InputUpdate {
    /// Channel name used in logs.
    #[must_use]
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Balance(_) => "balance",
            Self::ExchangeRate(_) => "exchange_rate",
            Self::ChainSync(_) => "chain_sync",
            Self::LockChanged(_) => "lock",
        }
    }
}

// ============================================================================
// Notices
// ============================================================================

/// Raised when the user taps a balance above the warning threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooMuchBalanceNotice {
    pub balance: Coin,
    pub threshold: Coin,
}

impl TooMuchBalanceNotice {
    #[must_use]
    pub fn message<'a>(&self, catalog: &'a dyn MessageCatalog) -> &'a str {
        catalog.too_much_balance()
    }
}

// ============================================================================
// Reconciler
// ============================================================================

/// Merges the four input channels into one [`DisplayState`].
///
/// # Example
///
/// ```
/// use walletbar::domain::{Coin, DisplayState};
/// use walletbar::reconcile::{DisplayStateReconciler, InputUpdate, PolicyConfig};
///
/// let mut reconciler = DisplayStateReconciler::new(PolicyConfig::default());
/// assert_eq!(reconciler.on_any_input_changed(), DisplayState::BalanceUnknown);
///
/// let state = reconciler.apply(InputUpdate::LockChanged(true));
/// assert_eq!(state, DisplayState::Hidden);
/// ```
#[derive(Debug, Clone)]
pub struct DisplayStateReconciler<C: Clock = SystemClock> {
    inputs: Inputs,
    config: PolicyConfig,
    clock: C,
}

impl DisplayStateReconciler<SystemClock> {
    /// Creates a reconciler reading the system clock.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> DisplayStateReconciler<C> {
    /// Creates a reconciler with empty inputs and the given clock.
    #[must_use]
    pub fn with_clock(config: PolicyConfig, clock: C) -> Self {
        Self {
            inputs: Inputs::default(),
            config,
            clock,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Records a new value on one channel and recomputes.
    pub fn apply(&mut self, update: InputUpdate) -> DisplayState {
        let channel = update.channel();
        self.inputs = std::mem::take(&mut self.inputs).with(update);

        let state = self.on_any_input_changed();
        debug!(channel, mode = state.mode_name(), "display state recomputed");
        state
    }

    /// Recomputes the display state from the latest inputs and the current time.
    #[must_use]
    pub fn on_any_input_changed(&self) -> DisplayState {
        reconcile(&self.inputs, self.clock.now(), &self.config)
    }

    /// Stateless check for the balance tap gesture.
    #[must_use]
    pub fn notify_too_much_balance_if_applicable(&self) -> Option<TooMuchBalanceNotice> {
        let threshold = self.config.too_much_threshold;
        let balance = self.inputs.balance?;
        if !BalancePresentationPolicy::is_too_much(Some(balance), threshold) {
            return None;
        }
        debug!(%balance, %threshold, "too much balance notice");
        Some(TooMuchBalanceNotice { balance, threshold })
    }
}

/// Pure reconciliation of a full input snapshot at `now`.
#[must_use]
pub fn reconcile(
    inputs: &Inputs,
    now: chrono::DateTime<chrono::Utc>,
    config: &PolicyConfig,
) -> DisplayState {
    let verdict = SyncProgressClassifier::classify(inputs.chain_sync.as_ref(), now);
    BalancePresentationPolicy::present(
        inputs.balance,
        inputs.exchange_rate.as_ref(),
        inputs.locked,
        &verdict,
        config,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalAmount, ProgressMessage};
    use crate::messages::EnglishCatalog;
    use crate::sources::FixedClock;
    use crate::test_utils::{RateMother, SnapshotMother, fixed_now};
    use chrono::Duration;

    fn reconciler() -> DisplayStateReconciler<FixedClock> {
        DisplayStateReconciler::with_clock(PolicyConfig::default(), FixedClock::new(fixed_now()))
    }

    #[test]
    fn test_starts_with_unknown_balance() {
        let reconciler = reconciler();
        assert_eq!(reconciler.inputs(), &Inputs::default());
        assert_eq!(reconciler.on_any_input_changed(), DisplayState::BalanceUnknown);
    }

    #[test]
    fn test_last_value_wins_per_channel() {
        let mut reconciler = reconciler();
        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(1))));
        reconciler.apply(InputUpdate::ExchangeRate(Some(RateMother::usd(10))));
        let state = reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(3))));

        assert_eq!(reconciler.inputs().balance, Some(Coin::from_coins(3)));
        assert!(matches!(
            state,
            DisplayState::Balance {
                amount_shown,
                local_amount: LocalAmount::Shown { .. },
                ..
            } if amount_shown == Coin::from_coins(3)
        ));

        let state = reconciler.apply(InputUpdate::Balance(None));
        assert_eq!(state, DisplayState::BalanceUnknown);
        assert!(reconciler.inputs().exchange_rate.is_some());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut reconciler = reconciler();
        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(31))));
        reconciler.apply(InputUpdate::ChainSync(Some(SnapshotMother::replaying_behind(
            Duration::hours(36),
        ))));

        let first = reconciler.on_any_input_changed();
        let second = reconciler.on_any_input_changed();
        assert_eq!(first, second);
    }

    #[test]
    fn test_thirty_six_hours_behind_shows_progress() {
        let mut reconciler = reconciler();
        let state = reconciler.apply(InputUpdate::ChainSync(Some(
            SnapshotMother::replaying_behind(Duration::hours(36)),
        )));

        let DisplayState::Progress { message } = state else {
            panic!("expected progress, got {state:?}");
        };
        assert_eq!(message.magnitude, 36);
        assert_eq!(message.to_string(), "Downloading, 36 hours behind");
    }

    #[test]
    fn test_lock_hides_known_balance() {
        let mut reconciler = reconciler();
        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(5))));
        assert_eq!(
            reconciler.apply(InputUpdate::LockChanged(true)),
            DisplayState::Hidden
        );
        assert!(matches!(
            reconciler.apply(InputUpdate::LockChanged(false)),
            DisplayState::Balance { .. }
        ));
    }

    #[test]
    fn test_time_passing_changes_verdict_without_new_snapshot() {
        let clock = FixedClock::new(fixed_now());
        let mut reconciler =
            DisplayStateReconciler::with_clock(PolicyConfig::default(), clock.clone());
        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(1))));
        reconciler.apply(InputUpdate::ChainSync(Some(
            ChainSyncSnapshot::replaying_behind(fixed_now(), Duration::minutes(10)),
        )));
        assert!(matches!(
            reconciler.on_any_input_changed(),
            DisplayState::Balance { .. }
        ));

        clock.advance(Duration::hours(3));
        assert!(matches!(
            reconciler.on_any_input_changed(),
            DisplayState::Progress {
                message: ProgressMessage { magnitude: 3, .. }
            }
        ));
    }

    #[test]
    fn test_too_much_notice() {
        let mut reconciler = reconciler();
        assert_eq!(reconciler.notify_too_much_balance_if_applicable(), None);

        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(30))));
        assert_eq!(reconciler.notify_too_much_balance_if_applicable(), None);

        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(31))));
        let notice = reconciler.notify_too_much_balance_if_applicable().unwrap();
        assert_eq!(notice.balance, Coin::from_coins(31));
        assert_eq!(notice.threshold, Coin::from_coins(30));
        assert!(notice.message(&EnglishCatalog).contains("large balance"));
    }

    #[test]
    fn test_notice_does_not_depend_on_lock_or_progress() {
        let mut reconciler = reconciler();
        reconciler.apply(InputUpdate::Balance(Some(Coin::from_coins(40))));
        reconciler.apply(InputUpdate::LockChanged(true));
        assert!(reconciler.notify_too_much_balance_if_applicable().is_some());
    }

    #[test]
    fn test_pure_reconcile_matches_reconciler() {
        let inputs = Inputs::default()
            .with(InputUpdate::Balance(Some(Coin::from_coins(31))))
            .with(InputUpdate::LockChanged(false));
        let state = reconcile(&inputs, fixed_now(), &PolicyConfig::default());
        assert_eq!(
            state,
            DisplayState::Balance {
                amount_shown: Coin::from_coins(31),
                too_much_warning: true,
                local_amount: LocalAmount::Unavailable,
            }
        );
    }
}
