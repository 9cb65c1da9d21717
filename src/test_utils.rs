//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use ratatui::{Terminal, backend::TestBackend};

use crate::domain::{ChainSyncSnapshot, ExchangeRate, Fiat};

// ============================================================================
// Time
// ============================================================================

/// A fixed "now" so lag arithmetic in tests is reproducible.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SnapshotMother;

impl SnapshotMother {
    /// Replaying, no impediments, best block `lag` before [`fixed_now`].
    #[must_use]
    pub fn replaying_behind(lag: Duration) -> ChainSyncSnapshot {
        ChainSyncSnapshot::replaying_behind(fixed_now(), lag)
    }

    /// Idle (not replaying), best block `lag` before [`fixed_now`].
    #[must_use]
    pub fn idle_behind(lag: Duration) -> ChainSyncSnapshot {
        ChainSyncSnapshot::new(Some(fixed_now() - lag), false)
    }

    #[must_use]
    pub fn up_to_date() -> ChainSyncSnapshot {
        Self::idle_behind(Duration::minutes(1))
    }
}

pub struct RateMother;

impl RateMother {
    #[must_use]
    pub fn usd(per_coin: u64) -> ExchangeRate {
        ExchangeRate::new("USD", Fiat::from_major(per_coin)).expect("USD is a valid code")
    }

    #[must_use]
    pub fn eur(per_coin: u64) -> ExchangeRate {
        ExchangeRate::new("EUR", Fiat::from_major(per_coin)).expect("EUR is a valid code")
    }
}

// ============================================================================
// Terminal Helpers
// ============================================================================

/// A test terminal wide enough for the toolbar and a toast.
#[must_use]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 12)).expect("terminal creation should succeed")
}
