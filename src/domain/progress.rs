//! Structured sync progress messages.
//!
//! The classifier decides *what* to say (activity, unit, magnitude); the
//! wording lives in a [`MessageCatalog`](crate::messages::MessageCatalog).

use std::fmt;

use serde::Serialize;

use crate::messages::{EnglishCatalog, MessageCatalog};

/// What sync is doing while it is behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncActivity {
    /// Catching up with no reported impediments.
    Downloading,
    /// Catching up but impeded (network, storage).
    Stalled,
}

/// The unit a lag is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LagUnit {
    Hours,
    Days,
    Weeks,
    /// Approximated as 30 days.
    Months,
}

/// A progress message: activity plus a bucketed lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProgressMessage {
    pub activity: SyncActivity,
    pub unit: LagUnit,
    pub magnitude: i64,
}

impl ProgressMessage {
    #[must_use]
    pub const fn new(activity: SyncActivity, unit: LagUnit, magnitude: i64) -> Self {
        Self {
            activity,
            unit,
            magnitude,
        }
    }

    /// Renders the message through a catalog.
    #[must_use]
    pub fn render(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.progress(catalog.activity(self.activity), self.unit, self.magnitude)
    }
}

impl fmt::Display for ProgressMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&EnglishCatalog))
    }
}
