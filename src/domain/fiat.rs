//! Fiat values and exchange rates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{FIAT_DECIMALS, FIAT_DISPLAY_DECIMALS, UNITS_PER_COIN, UNITS_PER_FIAT};
use crate::domain::coin::Coin;
use crate::domain::error::WalletBarError;

// ============================================================================
// Fiat
// ============================================================================

/// A fiat value in 1/10 000 of the currency's major unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fiat(u64);

impl Fiat {
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Creates a value from whole major units, saturating on overflow.
    #[must_use]
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(UNITS_PER_FIAT))
    }

    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fiat {
    /// Two decimals, rounded half-up, with thousands grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = UNITS_PER_FIAT / 10_u64.pow(FIAT_DISPLAY_DECIMALS as u32);
        let cents = self.0 / step + u64::from(self.0 % step >= step / 2);
        let per_major = 10_u64.pow(FIAT_DISPLAY_DECIMALS as u32);
        write!(
            f,
            "{}.{:0width$}",
            format_with_commas(cents / per_major),
            cents % per_major,
            width = FIAT_DISPLAY_DECIMALS
        )
    }
}

impl FromStr for Fiat {
    type Err = WalletBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
            return Err(WalletBarError::invalid_rate(s, "not a decimal number"));
        }
        if frac.len() > FIAT_DECIMALS {
            return Err(WalletBarError::invalid_rate(
                s,
                format!("more than {FIAT_DECIMALS} decimal places"),
            ));
        }

        let whole_units = if whole.is_empty() {
            Some(0)
        } else {
            whole
                .parse::<u64>()
                .ok()
                .and_then(|w| w.checked_mul(UNITS_PER_FIAT))
        };
        let frac_units = if frac.is_empty() {
            Some(0)
        } else {
            format!("{frac:0<width$}", width = FIAT_DECIMALS)
                .parse::<u64>()
                .ok()
        };

        whole_units
            .zip(frac_units)
            .and_then(|(w, f)| w.checked_add(f))
            .map(Self)
            .ok_or_else(|| WalletBarError::invalid_rate(s, "value too large"))
    }
}

/// Format a number with commas for thousands separators.
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// ExchangeRate
// ============================================================================

/// The fiat value of one whole coin in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeRate {
    currency_code: String,
    fiat_per_coin: Fiat,
}

impl ExchangeRate {
    /// Creates a rate, validating the ISO-4217 style currency code.
    ///
    /// # Errors
    ///
    /// Returns [`WalletBarError::InvalidCurrencyCode`] unless the code is
    /// three ASCII letters. Lower-case codes are upper-cased.
    pub fn new(currency_code: &str, fiat_per_coin: Fiat) -> Result<Self, WalletBarError> {
        let code = currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WalletBarError::invalid_currency_code(currency_code));
        }
        Ok(Self {
            currency_code: code.to_ascii_uppercase(),
            fiat_per_coin,
        })
    }

    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    #[must_use]
    pub const fn fiat_per_coin(&self) -> Fiat {
        self.fiat_per_coin
    }

    /// Applies the rate to a balance, truncating below the smallest fiat unit.
    #[must_use]
    pub fn coin_to_fiat(&self, coin: Coin) -> Fiat {
        let product = u128::from(coin.units()) * u128::from(self.fiat_per_coin.units());
        let value = product / u128::from(UNITS_PER_COIN);
        Fiat(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl FromStr for ExchangeRate {
    type Err = WalletBarError;

    /// Parses `CODE:VALUE`, e.g. `USD:112.35`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, value) = s
            .split_once(':')
            .ok_or_else(|| WalletBarError::invalid_rate(s, "expected CODE:VALUE"))?;
        Self::new(code, value.parse()?)
    }
}

// ============================================================================
// Tests
// ============================================================================
