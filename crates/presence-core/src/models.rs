use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday display labels in bucket order (Monday = index 0).
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Bucket index for a date: 0 for Monday through 6 for Sunday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// A single parsed attendance row: one user, one date, one check-in and
/// one check-out on that date.
///
/// `end` is not required to be later than `start` – negative presence
/// intervals occur in real exports and are preserved downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Numeric employee identifier.
    pub user_id: u32,
    /// Calendar date of the attendance entry.
    pub date: NaiveDate,
    /// Check-in time of day.
    pub start: NaiveTime,
    /// Check-out time of day (same calendar date as `start`).
    pub end: NaiveTime,
}

/// Check-in / check-out pair stored per date in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPresence {
    /// Check-in time of day.
    pub start: NaiveTime,
    /// Check-out time of day.
    pub end: NaiveTime,
}

/// A single user's attendance history, keyed by date.
///
/// `BTreeMap` keeps dates sorted so reports and logs are deterministic.
pub type UserDays = BTreeMap<NaiveDate, DayPresence>;

// ── PresenceDataset ───────────────────────────────────────────────────────────

/// The full in-memory attendance snapshot: user id → date → presence.
///
/// Built once by the loader and treated as read-only by every consumer.
/// Lookup of an absent user simply returns `None`; mapping that to a
/// user-facing "not found" signal is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceDataset {
    users: BTreeMap<u32, UserDays>,
}

impl PresenceDataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one record. A later record for the same `(user_id, date)`
    /// pair overwrites the earlier one.
    pub fn insert(&mut self, record: PresenceRecord) {
        self.users.entry(record.user_id).or_default().insert(
            record.date,
            DayPresence {
                start: record.start,
                end: record.end,
            },
        );
    }

    /// The date-keyed history for one user, or `None` if the id is absent.
    pub fn user(&self, user_id: u32) -> Option<&UserDays> {
        self.users.get(&user_id)
    }

    /// All user ids present in the snapshot, ascending.
    pub fn user_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.users.keys().copied()
    }

    /// Number of distinct users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// `true` when no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// ── Aggregation outputs ───────────────────────────────────────────────────────

/// Arrival and departure observations for one weekday, in seconds since
/// midnight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEndTimes {
    /// Check-in times observed on this weekday.
    pub start: Vec<i32>,
    /// Check-out times observed on this weekday.
    pub end: Vec<i32>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
