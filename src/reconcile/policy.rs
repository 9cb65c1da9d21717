//! Balance presentation policy.
//!
//! Turns the latest inputs plus a [`SyncVerdict`] into a [`DisplayState`].
//! The policy is a pure function; applying the result to widgets is the
//! renderer's job.

use serde::{Deserialize, Serialize};

use crate::constants::TOO_MUCH_BALANCE_COINS;
use crate::domain::{Coin, DisplayState, ExchangeRate, LocalAmount};
use crate::reconcile::SyncVerdict;

/// Which condition wins when the wallet is locked while sync is behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockPrecedence {
    /// Progress is shown even for a locked wallet.
    #[default]
    ProgressFirst,
    /// A locked wallet hides everything, progress included.
    LockFirst,
}

/// Host-supplied presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    pub show_local_balance: bool,
    pub too_much_threshold: Coin,
    pub lock_precedence: LockPrecedence,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            show_local_balance: true,
            too_much_threshold: Coin::from_coins(TOO_MUCH_BALANCE_COINS),
            lock_precedence: LockPrecedence::default(),
        }
    }
}

/// Decides the final display mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancePresentationPolicy;

impl BalancePresentationPolicy {
    /// Presents the inputs. First matching branch wins:
    ///
    /// 1. progress, when the verdict asks for it
    /// 2. balance (or unknown balance) with warning and local amount
    /// 3. lock override, replacing whatever step 2 produced
    #[must_use]
    pub fn present(
        balance: Option<Coin>,
        exchange_rate: Option<&ExchangeRate>,
        locked: bool,
        verdict: &SyncVerdict,
        config: &PolicyConfig,
    ) -> DisplayState {
        if locked && config.lock_precedence == LockPrecedence::LockFirst {
            return DisplayState::Hidden;
        }

        if verdict.show_progress
            && let Some(message) = verdict.message
        {
            return DisplayState::Progress { message };
        }

        let candidate = match balance {
            None => DisplayState::BalanceUnknown,
            Some(balance) => DisplayState::Balance {
                amount_shown: balance,
                too_much_warning: balance.is_greater_than(config.too_much_threshold),
                local_amount: local_amount(balance, exchange_rate, config.show_local_balance),
            },
        };

        if locked {
            DisplayState::Hidden
        } else {
            candidate
        }
    }

    /// Whether a tap on the balance should surface the too-much warning.
    #[must_use]
    pub fn is_too_much(balance: Option<Coin>, threshold: Coin) -> bool {
        balance.is_some_and(|b| b.is_greater_than(threshold))
    }
}

fn local_amount(
    balance: Coin,
    exchange_rate: Option<&ExchangeRate>,
    show_local_balance: bool,
) -> LocalAmount {
    if !show_local_balance {
        return LocalAmount::NotRequested;
    }
    match exchange_rate {
        Some(rate) => LocalAmount::Shown {
            value: rate.coin_to_fiat(balance),
            currency_code: rate.currency_code().to_string(),
        },
        None => LocalAmount::Unavailable,
    }
}

// ============================================================================
// Tests
// ============================================================================
