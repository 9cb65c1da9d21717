//! Application constants for the wallet toolbar.
//!
//! Monetary scales, reconciliation policy thresholds and UI timings.

use std::time::Duration;

// ============================================================================
// Monetary Constants
// ============================================================================

/// Smallest units per whole coin.
pub const UNITS_PER_COIN: u64 = 100_000_000;

/// Decimal places in a coin amount.
pub const COIN_DECIMALS: usize = 8;

/// Decimal places always shown for a coin amount.
pub const MIN_COIN_DECIMALS: usize = 2;

/// Smallest fiat units per major unit.
pub const UNITS_PER_FIAT: u64 = 10_000;

/// Decimal places in a fiat value.
pub const FIAT_DECIMALS: usize = 4;

/// Decimal places shown for a fiat value.
pub const FIAT_DISPLAY_DECIMALS: usize = 2;

/// Prefix placed before the currency code of converted amounts.
pub const PREFIX_ALMOST_EQUAL_TO: &str = "≈ ";

// ============================================================================
// Reconciliation Policy
// ============================================================================

/// A best block younger than this counts as up to date.
pub const BLOCKCHAIN_UPTODATE_THRESHOLD: chrono::Duration = chrono::Duration::hours(1);

/// Lags below this are reported in hours.
pub const HOURS_BUCKET_LIMIT: chrono::Duration = chrono::Duration::days(2);

/// Lags below this are reported in days.
pub const DAYS_BUCKET_LIMIT: chrono::Duration = chrono::Duration::weeks(2);

/// Lags below this are reported in weeks; anything older in months.
pub const WEEKS_BUCKET_LIMIT: chrono::Duration = chrono::Duration::days(90);

/// Length of the approximate month used for the months bucket.
pub const DAYS_PER_MONTH: i64 = 30;

/// Balances above this many whole coins raise the too-much warning.
pub const TOO_MUCH_BALANCE_COINS: u64 = 30;

// ============================================================================
// Host Timings
// ============================================================================

/// Main loop tick rate.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default interval between periodic recomputations.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Ticks a toast stays on screen (~4 seconds at [`TICK_RATE`]).
pub const TOAST_TICKS: u8 = 40;
