//! Exact coin amounts.
//!
//! Balances are carried as integer counts of the smallest unit so that
//! threshold comparisons and fiat conversion never touch floating point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{COIN_DECIMALS, MIN_COIN_DECIMALS, UNITS_PER_COIN};
use crate::domain::error::WalletBarError;

// ============================================================================
// Coin
// ============================================================================

/// An amount of coin, in smallest units (1 coin = 100 000 000 units).
///
/// # Example
///
/// ```
/// use walletbar::domain::Coin;
///
/// let balance: Coin = "31.5".parse().unwrap();
/// assert_eq!(balance.units(), 3_150_000_000);
/// assert_eq!(balance.to_string(), "31.50");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Coin(u64);

impl Coin {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// One whole coin.
    pub const COIN: Self = Self(UNITS_PER_COIN);

    /// Creates an amount from a count of smallest units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Creates an amount from whole coins, saturating on overflow.
    #[must_use]
    pub const fn from_coins(coins: u64) -> Self {
        Self(coins.saturating_mul(UNITS_PER_COIN))
    }

    /// Returns the amount in smallest units.
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Returns `true` if this amount is strictly greater than `other`.
    #[must_use]
    pub const fn is_greater_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Coin {
    /// Formats without a currency code: at least two decimals, trailing zeros
    /// trimmed past that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_COIN;
        let frac = self.0 % UNITS_PER_COIN;

        let mut digits = format!("{frac:0width$}", width = COIN_DECIMALS);
        while digits.len() > MIN_COIN_DECIMALS && digits.ends_with('0') {
            digits.pop();
        }

        write!(f, "{whole}.{digits}")
    }
}

impl FromStr for Coin {
    type Err = WalletBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WalletBarError::invalid_amount(s, "empty amount"));
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(WalletBarError::invalid_amount(s, "no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(WalletBarError::invalid_amount(s, "not a decimal number"));
        }
        if frac.len() > COIN_DECIMALS {
            return Err(WalletBarError::invalid_amount(
                s,
                format!("more than {COIN_DECIMALS} decimal places"),
            ));
        }

        let whole_units = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u64>()
                .ok()
                .and_then(|w| w.checked_mul(UNITS_PER_COIN))
                .ok_or_else(|| WalletBarError::invalid_amount(s, "amount too large"))?
        };

        let frac_units = if frac.is_empty() {
            0
        } else {
            let padded = format!("{frac:0<width$}", width = COIN_DECIMALS);
            padded
                .parse::<u64>()
                .map_err(|_| WalletBarError::invalid_amount(s, "not a decimal number"))?
        };

        whole_units
            .checked_add(frac_units)
            .map(Self)
            .ok_or_else(|| WalletBarError::invalid_amount(s, "amount too large"))
    }
}

// ============================================================================
// Tests
// ============================================================================
