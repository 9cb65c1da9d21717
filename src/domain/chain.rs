//! Blockchain synchronization snapshots.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Impediment
// ============================================================================

/// A reported reason the chain cannot sync normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impediment {
    /// No usable network connection.
    Network,
    /// Storage is low or unavailable.
    Storage,
}

// ============================================================================
// ChainSyncSnapshot
// ============================================================================

/// A point-in-time view of chain sync, replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainSyncSnapshot {
    /// Timestamp of the best known block, if any block is known.
    pub best_chain_date: Option<DateTime<Utc>>,
    /// Whether the chain is actively catching up.
    pub replaying: bool,
    pub impediments: BTreeSet<Impediment>,
}

impl ChainSyncSnapshot {
    #[must_use]
    pub fn new(best_chain_date: Option<DateTime<Utc>>, replaying: bool) -> Self {
        Self {
            best_chain_date,
            replaying,
            impediments: BTreeSet::new(),
        }
    }

    /// Builds a replaying snapshot whose best block is `behind` older than `now`.
    #[must_use]
    pub fn replaying_behind(now: DateTime<Utc>, behind: Duration) -> Self {
        Self::new(Some(now - behind), true)
    }

    #[must_use]
    pub fn with_impediment(mut self, impediment: Impediment) -> Self {
        self.impediments.insert(impediment);
        self
    }

    /// How far the best block trails `now`, if a best block is known.
    ///
    /// Negative when the best block claims a future timestamp.
    #[must_use]
    pub fn lag(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.best_chain_date.map(|date| now - date)
    }

    #[must_use]
    pub fn is_impeded(&self) -> bool {
        !self.impediments.is_empty()
    }
}
