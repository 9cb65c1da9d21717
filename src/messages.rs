//! User-facing wording.
//!
//! Everything the toolbar says goes through a [`MessageCatalog`] so hosts can
//! localize it. [`EnglishCatalog`] is the built-in default.

use crate::domain::{LagUnit, SyncActivity};

/// Supplies localized strings for the toolbar.
pub trait MessageCatalog {
    /// The verb phrase for a sync activity.
    fn activity(&self, activity: SyncActivity) -> &str;

    /// Combines an activity phrase with a lag magnitude.
    fn progress(&self, activity: &str, unit: LagUnit, magnitude: i64) -> String;

    /// Warning shown when the user taps a balance above the threshold.
    fn too_much_balance(&self) -> &str;
}

/// Built-in English wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn activity(&self, activity: SyncActivity) -> &str {
        match activity {
            SyncActivity::Downloading => "Downloading",
            SyncActivity::Stalled => "Sync stalled",
        }
    }

    fn progress(&self, activity: &str, unit: LagUnit, magnitude: i64) -> String {
        let noun = match (unit, magnitude) {
            (LagUnit::Hours, 1) => "hour",
            (LagUnit::Hours, _) => "hours",
            (LagUnit::Days, 1) => "day",
            (LagUnit::Days, _) => "days",
            (LagUnit::Weeks, 1) => "week",
            (LagUnit::Weeks, _) => "weeks",
            (LagUnit::Months, 1) => "month",
            (LagUnit::Months, _) => "months",
        };
        format!("{activity}, {magnitude} {noun} behind")
    }

    fn too_much_balance(&self) -> &str {
        "You have a large balance in this wallet. Consider moving some of it to a more secure wallet."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(SyncActivity::Downloading, LagUnit::Hours, 36, "Downloading, 36 hours behind")]
    #[case(SyncActivity::Downloading, LagUnit::Hours, 1, "Downloading, 1 hour behind")]
    #[case(SyncActivity::Stalled, LagUnit::Days, 3, "Sync stalled, 3 days behind")]
    #[case(SyncActivity::Downloading, LagUnit::Weeks, 1, "Downloading, 1 week behind")]
    #[case(SyncActivity::Stalled, LagUnit::Months, 14, "Sync stalled, 14 months behind")]
    fn test_english_progress(
        #[case] activity: SyncActivity,
        #[case] unit: LagUnit,
        #[case] magnitude: i64,
        #[case] expected: &str,
    ) {
        let catalog = EnglishCatalog;
        assert_eq!(
            catalog.progress(catalog.activity(activity), unit, magnitude),
            expected
        );
    }
}
