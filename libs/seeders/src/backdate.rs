use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Posts are backdated by up to this many whole days.
pub const POST_MAX_AGE_DAYS: i64 = 30;
/// Documents are backdated by up to this many whole days.
pub const DOCUMENT_MAX_AGE_DAYS: i64 = 60;
/// Comments are backdated by this many whole hours.
pub const COMMENT_AGE_HOURS: RangeInclusive<i64> = 1..=48;

pub fn days_ago<R: Rng + ?Sized>(
    rng: &mut R, now: DateTime<Utc>, max_days: i64,
) -> DateTime<Utc> {
    now - Duration::days(rng.random_range(0..=max_days))
}

pub fn hours_ago<R: Rng + ?Sized>(
    rng: &mut R, now: DateTime<Utc>, hours: RangeInclusive<i64>,
) -> DateTime<Utc> {
    now - Duration::hours(rng.random_range(hours))
}
