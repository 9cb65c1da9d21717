//! Sync progress classification.
//!
//! Decides whether a chain sync snapshot should be surfaced as progress and,
//! if so, which lag bucket describes it.

use chrono::{DateTime, Duration, Utc};

use crate::constants::{
    BLOCKCHAIN_UPTODATE_THRESHOLD, DAYS_BUCKET_LIMIT, DAYS_PER_MONTH, HOURS_BUCKET_LIMIT,
    WEEKS_BUCKET_LIMIT,
};
use crate::domain::{ChainSyncSnapshot, LagUnit, ProgressMessage, SyncActivity};

/// The classifier's verdict for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncVerdict {
    pub show_progress: bool,
    /// Present exactly when `show_progress` is set.
    pub message: Option<ProgressMessage>,
}

impl SyncVerdict {
    /// Nothing to surface.
    pub const IDLE: Self = Self {
        show_progress: false,
        message: None,
    };
}

/// Classifies chain sync snapshots against the current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProgressClassifier;

impl SyncProgressClassifier {
    /// Classifies `snapshot` as seen at `now`.
    ///
    /// A missing snapshot and a snapshot without a best chain date are treated
    /// alike: no progress.
    #[must_use]
    pub fn classify(snapshot: Option<&ChainSyncSnapshot>, now: DateTime<Utc>) -> SyncVerdict {
        let Some((snapshot, lag)) =
            snapshot.and_then(|s| s.lag(now).map(|lag| (s, lag)))
        else {
            return SyncVerdict::IDLE;
        };

        let up_to_date = lag < BLOCKCHAIN_UPTODATE_THRESHOLD;
        let show_progress = !(up_to_date || !snapshot.replaying);
        if !show_progress {
            return SyncVerdict::IDLE;
        }

        let activity = if snapshot.is_impeded() {
            SyncActivity::Stalled
        } else {
            SyncActivity::Downloading
        };
        let (unit, magnitude) = bucket(lag);

        SyncVerdict {
            show_progress,
            message: Some(ProgressMessage::new(activity, unit, magnitude)),
        }
    }
}

/// Picks the unit for a lag; the first matching bucket wins.
#[must_use]
pub fn bucket(lag: Duration) -> (LagUnit, i64) {
    if lag < HOURS_BUCKET_LIMIT {
        (LagUnit::Hours, lag.num_hours())
    } else if lag < DAYS_BUCKET_LIMIT {
        (LagUnit::Days, lag.num_days())
    } else if lag < WEEKS_BUCKET_LIMIT {
        (LagUnit::Weeks, lag.num_weeks())
    } else {
        (LagUnit::Months, lag.num_days() / DAYS_PER_MONTH)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Impediment;
    use crate::test_utils::{SnapshotMother, fixed_now};
    use rstest::*;

    #[test]
    fn test_no_snapshot_is_idle() {
        assert_eq!(
            SyncProgressClassifier::classify(None, fixed_now()),
            SyncVerdict::IDLE
        );
    }

    #[test]
    fn test_missing_best_chain_date_is_idle() {
        let snapshot = ChainSyncSnapshot::new(None, true);
        assert_eq!(
            SyncProgressClassifier::classify(Some(&snapshot), fixed_now()),
            SyncVerdict::IDLE
        );
    }

    #[rstest]
    #[case::fresh(Duration::minutes(5))]
    #[case::just_under(Duration::minutes(59))]
    #[case::day(Duration::days(1))]
    #[case::year(Duration::days(365))]
    fn test_not_replaying_never_shows_progress(#[case] lag: Duration) {
        let snapshot = SnapshotMother::idle_behind(lag);
        let verdict = SyncProgressClassifier::classify(Some(&snapshot), fixed_now());
        assert!(!verdict.show_progress);
        assert_eq!(verdict.message, None);
    }

    #[rstest]
    #[case::zero(Duration::zero(), false)]
    #[case::under_hour(Duration::minutes(59) + Duration::seconds(59), false)]
    #[case::exactly_hour(Duration::hours(1), true)]
    #[case::days(Duration::days(4), true)]
    #[case::future_block(Duration::hours(-3), false)]
    fn test_replaying_shows_progress_from_one_hour(
        #[case] lag: Duration,
        #[case] expected: bool,
    ) {
        let snapshot = SnapshotMother::replaying_behind(lag);
        let verdict = SyncProgressClassifier::classify(Some(&snapshot), fixed_now());
        assert_eq!(verdict.show_progress, expected, "lag {lag}");
        assert_eq!(verdict.message.is_some(), expected);
    }

    #[rstest]
    #[case::one_hour(Duration::hours(1), LagUnit::Hours, 1)]
    #[case::thirty_six_hours(Duration::hours(36), LagUnit::Hours, 36)]
    #[case::just_under_two_days(Duration::days(2) - Duration::seconds(1), LagUnit::Hours, 47)]
    #[case::exactly_two_days(Duration::days(2), LagUnit::Days, 2)]
    #[case::just_under_two_weeks(Duration::weeks(2) - Duration::seconds(1), LagUnit::Days, 13)]
    #[case::exactly_two_weeks(Duration::weeks(2), LagUnit::Weeks, 2)]
    #[case::just_under_ninety_days(Duration::days(90) - Duration::seconds(1), LagUnit::Weeks, 12)]
    #[case::exactly_ninety_days(Duration::days(90), LagUnit::Months, 3)]
    #[case::a_year(Duration::days(365), LagUnit::Months, 12)]
    fn test_bucket_boundaries(
        #[case] lag: Duration,
        #[case] unit: LagUnit,
        #[case] magnitude: i64,
    ) {
        assert_eq!(bucket(lag), (unit, magnitude));
    }

    #[test]
    fn test_thirty_six_hours_downloading() {
        let snapshot = SnapshotMother::replaying_behind(Duration::hours(36));
        let verdict = SyncProgressClassifier::classify(Some(&snapshot), fixed_now());

        let message = verdict.message.unwrap();
        assert_eq!(
            message,
            ProgressMessage::new(SyncActivity::Downloading, LagUnit::Hours, 36)
        );
        let text = message.to_string().to_lowercase();
        assert!(text.contains("downloading"));
        assert!(text.contains("36 hours"));
    }

    #[test]
    fn test_impediments_switch_wording_only() {
        let snapshot = SnapshotMother::replaying_behind(Duration::days(3))
            .with_impediment(Impediment::Network);
        let verdict = SyncProgressClassifier::classify(Some(&snapshot), fixed_now());

        assert!(verdict.show_progress);
        assert_eq!(
            verdict.message,
            Some(ProgressMessage::new(SyncActivity::Stalled, LagUnit::Days, 3))
        );
    }

    #[test]
    fn test_verdict_depends_on_now_not_delivery() {
        let now = fixed_now();
        let snapshot = ChainSyncSnapshot::replaying_behind(now, Duration::minutes(30));

        let early = SyncProgressClassifier::classify(Some(&snapshot), now);
        let later = SyncProgressClassifier::classify(Some(&snapshot), now + Duration::hours(2));

        assert!(!early.show_progress);
        assert!(later.show_progress);
        assert_eq!(
            later.message,
            Some(ProgressMessage::new(SyncActivity::Downloading, LagUnit::Hours, 2))
        );
    }
}
