//! Error types for wallet toolbar inputs.
//!
//! The reconciliation core itself never fails: unknown inputs are modeled as
//! `None`. These errors cover parsing user-supplied amounts and rates and
//! loading scenario files.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors produced while building toolbar inputs.
#[derive(Debug, Error)]
pub enum WalletBarError {
    /// A coin amount could not be parsed.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The rejected text.
        input: String,
        reason: String,
    },

    /// An exchange rate could not be parsed.
    #[error("Invalid exchange rate '{input}': {reason}")]
    InvalidRate {
        /// The rejected text.
        input: String,
        reason: String,
    },

    /// A currency code is not three ASCII letters.
    #[error("Invalid currency code '{0}'")]
    InvalidCurrencyCode(String),

    /// A chain lag, in minutes, puts the best block outside the date range.
    #[error("Chain lag of {0} minutes is out of range")]
    InvalidChainLag(i64),

    /// A scenario file could not be read or parsed.
    #[error("Scenario {}: {message}", .path.display())]
    Scenario {
        /// The scenario file.
        path: PathBuf,
        message: String,
    },
}

impl WalletBarError {
    /// Create a new invalid amount error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid rate error.
    #[must_use]
    pub fn invalid_rate(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_currency_code(code: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode(code.into())
    }

    #[must_use]
    pub const fn invalid_chain_lag(behind_minutes: i64) -> Self {
        Self::InvalidChainLag(behind_minutes)
    }

    /// Create a new scenario error.
    ///
    /// # Arguments
    ///
    /// * `path` - The scenario file being loaded
    /// * `message` - What went wrong
    #[must_use]
    pub fn scenario(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Scenario {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Convert to a `color_eyre::Report`.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
