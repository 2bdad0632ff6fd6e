//! Weekday-bucketed reductions over a single user's attendance history.
//!
//! Every function here is a pure transformation over an immutable
//! [`UserDays`] and always produces all seven Monday..Sunday buckets,
//! empty ones included.

use presence_core::calculations::mean;
use presence_core::models::{weekday_index, StartEndTimes, UserDays};
use presence_core::time_utils::{interval, seconds_since_midnight};

// ── Grouping ──────────────────────────────────────────────────────────────────

/// Presence durations (seconds) grouped by weekday, Monday = index 0.
///
/// Weekdays with no records yield an empty bucket, never a missing one.
/// Negative durations from end-before-start rows are kept as-is.
pub fn group_by_weekday(days: &UserDays) -> [Vec<i32>; 7] {
    let mut buckets: [Vec<i32>; 7] = Default::default();
    for (date, presence) in days {
        buckets[weekday_index(*date)].push(interval(presence.start, presence.end));
    }
    buckets
}

/// Arrival and departure times (seconds since midnight) grouped by
/// weekday.
///
/// The mapping is total: all seven indices are present even when their
/// observation lists are empty.
pub fn group_start_end_times_by_weekday(days: &UserDays) -> [StartEndTimes; 7] {
    let mut buckets: [StartEndTimes; 7] = Default::default();
    for (date, presence) in days {
        let bucket = &mut buckets[weekday_index(*date)];
        bucket.start.push(seconds_since_midnight(presence.start));
        bucket.end.push(seconds_since_midnight(presence.end));
    }
    buckets
}

// ── Reductions ────────────────────────────────────────────────────────────────

/// Mean presence duration (seconds) per weekday; 0.0 where no records.
pub fn mean_time_by_weekday(days: &UserDays) -> [f64; 7] {
    group_by_weekday(days).map(|bucket| mean(&bucket))
}

/// Total presence duration (seconds) per weekday; 0 where no records.
pub fn total_time_by_weekday(days: &UserDays) -> [i32; 7] {
    group_by_weekday(days).map(|bucket| bucket.iter().sum())
}

/// Mean arrival and mean departure time per weekday as
/// `(start, end)` seconds since midnight; `(0.0, 0.0)` where no records.
pub fn mean_start_end_by_weekday(days: &UserDays) -> [(f64, f64); 7] {
    group_start_end_times_by_weekday(days).map(|times| (mean(&times.start), mean(&times.end)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
