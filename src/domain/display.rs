//! The derived toolbar presentation.

use serde::Serialize;

use crate::domain::{Coin, Fiat, ProgressMessage};

/// The local (fiat) line under the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LocalAmount {
    /// The host does not show local amounts at all.
    NotRequested,
    /// Requested, but no exchange rate is known yet.
    Unavailable,
    /// The converted amount.
    Shown { value: Fiat, currency_code: String },
}

impl LocalAmount {
    /// The code label as displayed next to the value (`≈ USD`).
    #[must_use]
    pub fn code_label(&self) -> Option<String> {
        match self {
            Self::Shown { currency_code, .. } => Some(format!(
                "{}{currency_code}",
                crate::constants::PREFIX_ALMOST_EQUAL_TO
            )),
            Self::NotRequested | Self::Unavailable => None,
        }
    }
}

/// What the toolbar shows. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DisplayState {
    /// Sync is behind and is surfaced instead of the balance.
    Progress { message: ProgressMessage },
    /// The wallet is lock-protected.
    Hidden,
    Balance {
        amount_shown: Coin,
        too_much_warning: bool,
        local_amount: LocalAmount,
    },
    /// No balance has been delivered yet.
    BalanceUnknown,
}

impl DisplayState {
    /// Short name used in logs.
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::Progress { .. } => "progress",
            Self::Hidden => "hidden",
            Self::Balance { .. } => "balance",
            Self::BalanceUnknown => "balance_unknown",
        }
    }
}
