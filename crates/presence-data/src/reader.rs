//! Tolerant CSV loading for attendance data.
//!
//! Reads rows of the form `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS` into a
//! [`PresenceDataset`]. Individual malformed rows are dropped with a
//! debug log; only an unreadable file is fatal.

use std::io::BufRead;
use std::path::Path;

use chrono::NaiveDate;
use presence_core::error::{AnalyzerError, Result};
use presence_core::models::{PresenceDataset, PresenceRecord};
use presence_core::time_utils::parse_clock;
use thiserror::Error;
use tracing::debug;

// ── Row parsing ───────────────────────────────────────────────────────────────

/// Why a single CSV row was rejected.
///
/// Never propagated past the loader – a rejected row is skipped – but kept
/// as an explicit result so the skip policy is a testable branch rather
/// than swallowed control flow.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    /// The row did not have exactly four comma-separated fields.
    #[error("Expected 4 fields, got {0}")]
    FieldCount(usize),

    /// The user id field is not a non-negative integer.
    #[error("Invalid user id: {0}")]
    UserId(String),

    /// The date field is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    Date(String),

    /// The start-time field is not a valid `HH:MM:SS` clock string.
    #[error("Invalid start time: {0}")]
    StartTime(String),

    /// The end-time field is not a valid `HH:MM:SS` clock string.
    #[error("Invalid end time: {0}")]
    EndTime(String),
}

/// Parse one CSV row into a [`PresenceRecord`].
pub fn parse_row(line: &str) -> std::result::Result<PresenceRecord, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(RowError::FieldCount(fields.len()));
    }

    let user_id: u32 = fields[0]
        .parse()
        .map_err(|_| RowError::UserId(fields[0].to_string()))?;

    let date = NaiveDate::parse_from_str(fields[1], "%Y-%m-%d")
        .map_err(|_| RowError::Date(fields[1].to_string()))?;

    let start = parse_clock(fields[2]).ok_or_else(|| RowError::StartTime(fields[2].to_string()))?;
    let end = parse_clock(fields[3]).ok_or_else(|| RowError::EndTime(fields[3].to_string()))?;

    Ok(PresenceRecord {
        user_id,
        date,
        start,
        end,
    })
}

// ── Dataset loading ───────────────────────────────────────────────────────────

/// Load an attendance CSV into a [`PresenceDataset`].
///
/// Blank lines are ignored and malformed rows are dropped (best-effort
/// ingestion); a later row for the same `(user_id, date)` pair overwrites
/// the earlier one. Fails only when the file itself cannot be opened or
/// read.
pub fn load_dataset(path: &Path) -> Result<PresenceDataset> {
    let file = std::fs::File::open(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut dataset = PresenceDataset::new();
    let mut rows_read = 0u64;
    let mut rows_dropped = 0u64;

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| AnalyzerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        rows_read += 1;
        match parse_row(trimmed) {
            Ok(record) => dataset.insert(record),
            Err(e) => {
                rows_dropped += 1;
                debug!(
                    "Dropping row {} of {}: {}",
                    line_no + 1,
                    path.display(),
                    e
                );
            }
        }
    }

    debug!(
        "Loaded {}: {} rows read, {} dropped, {} users",
        path.display(),
        rows_read,
        rows_dropped,
        dataset.user_count()
    );

    Ok(dataset)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
