use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::{RecencyBucket, RepositoryRecord};

/// Length of a year in days, averaged over leap years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Repositories untouched for at least this many years are inactive.
pub const INACTIVE_AFTER_YEARS: f64 = 1.0;
/// Repositories untouched for at least this many years are long inactive.
pub const LONG_INACTIVE_AFTER_YEARS: f64 = 3.0;

const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 24.0 * 60.0 * 60.0;

/// Result of classifying one record against a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recency {
    /// Fractional years since the last update, `None` when the timestamp is unknown.
    pub years: Option<f64>,
    /// Bucket membership; unknown timestamps belong to no bucket.
    pub bucket: Option<RecencyBucket>,
}

/// Fractional years between `updated_at` and `now`. Timestamps in the future
/// clamp to zero.
pub fn years_since(updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<f64> {
    let ts = updated_at?;
    let elapsed = now.signed_duration_since(ts);
    let seconds = elapsed.num_milliseconds() as f64 / 1000.0;
    Some((seconds / SECONDS_PER_YEAR).max(0.0))
}

impl RecencyBucket {
    /// Bucket for an elapsed time in years. The older bucket is checked first and
    /// both thresholds are inclusive.
    pub fn from_years(years: f64) -> Self {
        if years >= LONG_INACTIVE_AFTER_YEARS {
            RecencyBucket::LongInactive
        } else if years >= INACTIVE_AFTER_YEARS {
            RecencyBucket::Inactive
        } else {
            RecencyBucket::Active
        }
    }
}

/// Classify a last-update timestamp against `now`.
pub fn classify_timestamp(updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Recency {
    let years = years_since(updated_at, now);
    Recency {
        years,
        bucket: years.map(RecencyBucket::from_years),
    }
}

/// Classify a record against `now`. Recomputed on every call since `now` moves.
pub fn classify(record: &RepositoryRecord, now: DateTime<Utc>) -> Recency {
    classify_timestamp(record.updated_at, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn years_ago(years: f64) -> DateTime<Utc> {
        let millis = (years * SECONDS_PER_YEAR * 1000.0).round() as i64;
        now() - Duration::milliseconds(millis)
    }

    #[test]
    fn unknown_timestamp_has_no_bucket() {
        let r = classify_timestamp(None, now());
        assert_eq!(r.years, None);
        assert_eq!(r.bucket, None);
    }

    #[test]
    fn recent_update_is_active() {
        let r = classify_timestamp(Some(now() - Duration::days(30)), now());
        assert_eq!(r.bucket, Some(RecencyBucket::Active));
        assert!(r.years.unwrap() < 0.1);
    }

    #[test]
    fn exactly_one_year_is_inactive() {
        let ts = now() - Duration::milliseconds((365.25 * 86_400_000.0) as i64);
        let r = classify_timestamp(Some(ts), now());
        assert_eq!(r.years, Some(1.0));
        assert_eq!(r.bucket, Some(RecencyBucket::Inactive));
    }

    #[test]
    fn exactly_three_years_is_long_inactive() {
        let ts = now() - Duration::milliseconds((3.0 * 365.25 * 86_400_000.0) as i64);
        let r = classify_timestamp(Some(ts), now());
        assert_eq!(r.bucket, Some(RecencyBucket::LongInactive));
    }

    #[test]
    fn just_below_thresholds() {
        let one = now() - Duration::milliseconds((365.25 * 86_400_000.0) as i64 - 1000);
        assert_eq!(
            classify_timestamp(Some(one), now()).bucket,
            Some(RecencyBucket::Active)
        );
        assert_eq!(
            classify_timestamp(Some(years_ago(2.99)), now()).bucket,
            Some(RecencyBucket::Inactive)
        );
    }

    #[test]
    fn future_timestamp_clamps_to_zero() {
        let r = classify_timestamp(Some(now() + Duration::days(3)), now());
        assert_eq!(r.years, Some(0.0));
        assert_eq!(r.bucket, Some(RecencyBucket::Active));
    }

    #[test]
    fn later_now_ages_the_record() {
        let ts = Some(now() - Duration::days(200));
        assert_eq!(classify_timestamp(ts, now()).bucket, Some(RecencyBucket::Active));
        let later = now() + Duration::days(200);
        assert_eq!(classify_timestamp(ts, later).bucket, Some(RecencyBucket::Inactive));
    }
}
