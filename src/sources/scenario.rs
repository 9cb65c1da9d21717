//! Scripted input feeds.
//!
//! A scenario is a JSON list of timed steps that publish into
//! [`WalletSources`]. The TUI demo plays one in the background so every
//! display mode can be seen without a live wallet.
//!
//! ```json
//! {
//!   "steps": [
//!     { "after_ms": 0, "update": { "kind": "chain", "behind_minutes": 2160, "replaying": true } },
//!     { "after_ms": 1500, "update": { "kind": "balance", "coins": "31.2" } },
//!     { "after_ms": 1500, "update": { "kind": "rate", "rate": "USD:112.35" } },
//!     { "after_ms": 1500, "update": { "kind": "lock", "locked": true } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::info;

use crate::domain::{ChainSyncSnapshot, Coin, ExchangeRate, Impediment, WalletBarError};
use crate::sources::WalletSources;

// ============================================================================
// Scenario Types
// ============================================================================

/// A scripted sequence of source updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
    /// Start over after the last step.
    #[serde(default)]
    pub repeat: bool,
}

/// One update, published `after_ms` after the previous step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    #[serde(default)]
    pub after_ms: u64,
    pub update: ScenarioUpdate,
}

/// What a step publishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioUpdate {
    /// Balance in decimal coins; absent means unknown.
    Balance {
        #[serde(default)]
        coins: Option<String>,
    },
    /// Rate as `CODE:VALUE`; absent means unknown.
    Rate {
        #[serde(default)]
        rate: Option<String>,
    },
    /// A chain snapshot whose best block is `behind_minutes` old at publish time.
    Chain {
        behind_minutes: i64,
        #[serde(default)]
        replaying: bool,
        #[serde(default)]
        impediments: Vec<Impediment>,
    },
    /// Clears the chain snapshot.
    ChainUnknown,
    Lock {
        locked: bool,
    },
}

impl ScenarioUpdate {
    /// Publishes this update into `sources`, timestamping chain snapshots at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance or rate text does not parse, or the
    /// chain lag is out of the representable date range.
    pub fn publish(&self, sources: &WalletSources, now: DateTime<Utc>) -> Result<(), WalletBarError> {
        match self {
            Self::Balance { coins } => {
                let balance = coins.as_deref().map(str::parse::<Coin>).transpose()?;
                sources.balance.publish(balance);
            }
            Self::Rate { rate } => {
                let rate = rate.as_deref().map(str::parse::<ExchangeRate>).transpose()?;
                sources.exchange_rate.publish(rate);
            }
            Self::Chain {
                behind_minutes,
                replaying,
                impediments,
            } => {
                let mut snapshot =
                    ChainSyncSnapshot::new(Some(best_chain_date(now, *behind_minutes)?), *replaying);
                snapshot.impediments.extend(impediments.iter().copied());
                sources.chain_sync.publish(Some(snapshot));
            }
            Self::ChainUnknown => sources.chain_sync.publish(None),
            Self::Lock { locked } => sources.lock.set_locked(*locked),
        }
        Ok(())
    }

    /// Checks the step values without publishing anything.
    fn validate(&self) -> Result<(), WalletBarError> {
        match self {
            Self::Balance { coins: Some(coins) } => coins.parse::<Coin>().map(drop),
            Self::Rate { rate: Some(rate) } => rate.parse::<ExchangeRate>().map(drop),
            Self::Chain { behind_minutes, .. } => {
                best_chain_date(Utc::now(), *behind_minutes).map(drop)
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Balance { .. } => "balance",
            Self::Rate { .. } => "rate",
            Self::Chain { .. } => "chain",
            Self::ChainUnknown => "chain_unknown",
            Self::Lock { .. } => "lock",
        }
    }
}

/// The best block date `behind_minutes` before `now`.
fn best_chain_date(
    now: DateTime<Utc>,
    behind_minutes: i64,
) -> Result<DateTime<Utc>, WalletBarError> {
    chrono::Duration::try_minutes(behind_minutes)
        .and_then(|behind| now.checked_sub_signed(behind))
        .ok_or_else(|| WalletBarError::invalid_chain_lag(behind_minutes))
}

// ============================================================================
// Loading & Playback
// ============================================================================

impl Scenario {
    /// Loads and validates a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`WalletBarError::Scenario`] if the file cannot be read, is not
    /// valid JSON, or contains an unparsable amount or rate.
    pub fn load(path: &Path) -> Result<Self, WalletBarError> {
        let content = fs::read_to_string(path)
            .map_err(|e| WalletBarError::scenario(path, e.to_string()))?;
        Self::from_json(&content).map_err(|e| match e {
            WalletBarError::Scenario { message, .. } => WalletBarError::scenario(path, message),
            other => WalletBarError::scenario(path, other.to_string()),
        })
    }

    /// Parses and validates scenario JSON.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid JSON or unparsable step values.
    pub fn from_json(json: &str) -> Result<Self, WalletBarError> {
        let scenario: Self = serde_json::from_str(json)
            .map_err(|e| WalletBarError::scenario("<inline>", e.to_string()))?;
        for (index, step) in scenario.steps.iter().enumerate() {
            step.update.validate().map_err(|e| {
                WalletBarError::scenario("<inline>", format!("step {index}: {e}"))
            })?;
        }
        Ok(scenario)
    }

    /// The built-in demo: a long catch-up, a stall, a balance with a rate, then a lock.
    #[must_use]
    pub fn demo() -> Self {
        let step = |after_ms, update| ScenarioStep { after_ms, update };
        let chain = |behind_minutes, replaying, impediments: Vec<Impediment>| ScenarioUpdate::Chain {
            behind_minutes,
            replaying,
            impediments,
        };
        Self {
            steps: vec![
                step(0, chain(60 * 24 * 120, true, vec![])),
                step(2_000, chain(60 * 24 * 40, true, vec![])),
                step(2_000, chain(60 * 24 * 9, true, vec![])),
                step(2_000, chain(60 * 30, true, vec![Impediment::Network])),
                step(2_000, chain(60 * 30, true, vec![])),
                step(2_000, chain(5, true, vec![])),
                step(
                    1_500,
                    ScenarioUpdate::Balance {
                        coins: Some("12.5".to_string()),
                    },
                ),
                step(
                    1_500,
                    ScenarioUpdate::Rate {
                        rate: Some("USD:112.35".to_string()),
                    },
                ),
                step(
                    2_000,
                    ScenarioUpdate::Balance {
                        coins: Some("31.2".to_string()),
                    },
                ),
                step(3_000, ScenarioUpdate::Lock { locked: true }),
                step(2_000, ScenarioUpdate::Lock { locked: false }),
                step(3_000, chain(0, false, vec![])),
            ],
            repeat: false,
        }
    }

    /// Rewrites every rate step to quote `currency_code`, keeping its value.
    #[must_use]
    pub fn with_currency(mut self, currency_code: &str) -> Self {
        for step in &mut self.steps {
            if let ScenarioUpdate::Rate { rate: Some(rate) } = &mut step.update
                && let Some((_, value)) = rate.split_once(':')
            {
                *rate = format!("{currency_code}:{value}");
            }
        }
        self
    }

    /// Plays the scenario into `sources` on a background task.
    #[must_use]
    pub fn play(self, sources: Arc<WalletSources>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                for (index, step) in self.steps.iter().enumerate() {
                    tokio::time::sleep(Duration::from_millis(step.after_ms)).await;
                    info!(index, kind = step.update.kind(), "scenario step");
                    if let Err(e) = step.update.publish(&sources, Utc::now()) {
                        tracing::warn!(index, "scenario step skipped: {e}");
                    }
                }
                if !self.repeat || self.steps.is_empty() {
                    break;
                }
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
