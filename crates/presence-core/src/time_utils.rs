use chrono::{NaiveTime, Timelike};

// ── Seconds since midnight ────────────────────────────────────────────────────

/// Convert a time of day to seconds since midnight.
///
/// Total over every valid `NaiveTime`; the result is in `[0, 86399]`.
pub fn seconds_since_midnight(t: NaiveTime) -> i32 {
    (t.hour() * 3600 + t.minute() * 60 + t.second()) as i32
}

/// Presence interval in seconds between a check-in and a check-out on the
/// same calendar date.
///
/// Negative when `end` is earlier than `start` – malformed but real
/// entries occur in attendance exports and the sign is preserved, not
/// clamped or rejected.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i32 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

// ── Clock-string parsing ──────────────────────────────────────────────────────

/// Parse a strict `HH:MM:SS` clock string.
///
/// Returns `None` for any other shape; the loader treats that as a
/// malformed row.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
