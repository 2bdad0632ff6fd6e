//! Report row assembly for the CLI.
//!
//! Rows are built as `serde_json::Value`s in the weekday-labelled shapes
//! chart consumers expect (pairs and triples), so `--json` output is
//! exactly those rows and the text renderer is a thin layer over them.

use presence_core::models::{PresenceDataset, UserDays, WEEKDAY_LABELS};
use presence_data::aggregator::{
    mean_start_end_by_weekday, mean_time_by_weekday, total_time_by_weekday,
};
use serde_json::{json, Value};

// ── Row builders ──────────────────────────────────────────────────────────────

/// User listing: `[{"user_id": 10, "name": "User 10"}, ...]`, ascending id.
pub fn users(dataset: &PresenceDataset) -> Value {
    let rows: Vec<Value> = dataset
        .user_ids()
        .map(|id| json!({"user_id": id, "name": format!("User {}", id)}))
        .collect();
    Value::Array(rows)
}

/// Mean presence duration per weekday: `[["Mon", 0.0], ["Tue", 30047.0], ...]`.
pub fn mean_time(days: &UserDays) -> Value {
    let means = mean_time_by_weekday(days);
    let rows: Vec<Value> = WEEKDAY_LABELS
        .iter()
        .zip(means)
        .map(|(label, seconds)| json!([label, seconds]))
        .collect();
    Value::Array(rows)
}

/// Total presence duration per weekday, with a chart header row first:
/// `[["Weekday", "Presence (s)"], ["Mon", 0], ...]`.
pub fn presence(days: &UserDays) -> Value {
    let totals = total_time_by_weekday(days);
    let mut rows: Vec<Value> = vec![json!(["Weekday", "Presence (s)"])];
    rows.extend(
        WEEKDAY_LABELS
            .iter()
            .zip(totals)
            .map(|(label, seconds)| json!([label, seconds])),
    );
    Value::Array(rows)
}

/// Mean arrival and departure per weekday:
/// `[["Mon", 0.0, 0.0], ["Tue", 34745.0, 64792.0], ...]`.
pub fn start_end(days: &UserDays) -> Value {
    let means = mean_start_end_by_weekday(days);
    let rows: Vec<Value> = WEEKDAY_LABELS
        .iter()
        .zip(means)
        .map(|(label, (start, end))| json!([label, start, end]))
        .collect();
    Value::Array(rows)
}

// ── Text rendering ────────────────────────────────────────────────────────────

/// Render report rows as tab-separated text lines.
pub fn render_text(rows: &Value) -> String {
    let Some(rows) = rows.as_array() else {
        return rows.to_string();
    };
    let lines: Vec<String> = rows.iter().map(render_row).collect();
    lines.join("\n")
}

fn render_row(row: &Value) -> String {
    match row {
        Value::Array(cells) => {
            let cells: Vec<String> = cells.iter().map(cell_text).collect();
            cells.join("\t")
        }
        // User rows come as objects; keep id-then-name column order.
        Value::Object(map) => {
            let id = map.get("user_id").map(cell_text).unwrap_or_default();
            let name = map.get("name").map(cell_text).unwrap_or_default();
            format!("{}\t{}", id, name)
        }
        other => cell_text(other),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use presence_core::models::{DayPresence, PresenceRecord};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn reference_user() -> UserDays {
        let mut days = UserDays::new();
        for (date, start, end) in [
            ((2013, 9, 10), (9, 39, 5), (17, 59, 52)),
            ((2013, 9, 11), (9, 19, 52), (16, 7, 37)),
            ((2013, 9, 12), (10, 48, 46), (17, 23, 51)),
        ] {
            days.insert(
                NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                DayPresence {
                    start: NaiveTime::from_hms_opt(start.0, start.1, start.2).unwrap(),
                    end: NaiveTime::from_hms_opt(end.0, end.1, end.2).unwrap(),
                },
            );
        }
        days
    }

    // ── users ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_users_rows() {
        let mut dataset = PresenceDataset::new();
        for id in [11, 10] {
            dataset.insert(PresenceRecord {
                user_id: id,
                date: NaiveDate::from_ymd_opt(2013, 9, 10).unwrap(),
                start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            });
        }

        let rows = users(&dataset);
        assert_eq!(
            rows,
            json!([
                {"user_id": 10, "name": "User 10"},
                {"user_id": 11, "name": "User 11"},
            ])
        );
    }

    // ── mean_time ─────────────────────────────────────────────────────────────

    #[test]
    fn test_mean_time_rows() {
        let rows = mean_time(&reference_user());
        assert_eq!(
            rows,
            json!([
                ["Mon", 0.0],
                ["Tue", 30047.0],
                ["Wed", 24465.0],
                ["Thu", 23705.0],
                ["Fri", 0.0],
                ["Sat", 0.0],
                ["Sun", 0.0],
            ])
        );
    }

    // ── presence ──────────────────────────────────────────────────────────────

    #[test]
    fn test_presence_rows_include_header() {
        let rows = presence(&reference_user());
        assert_eq!(
            rows,
            json!([
                ["Weekday", "Presence (s)"],
                ["Mon", 0],
                ["Tue", 30047],
                ["Wed", 24465],
                ["Thu", 23705],
                ["Fri", 0],
                ["Sat", 0],
                ["Sun", 0],
            ])
        );
    }

    // ── start_end ─────────────────────────────────────────────────────────────

    #[test]
    fn test_start_end_rows() {
        let rows = start_end(&reference_user());
        assert_eq!(
            rows,
            json!([
                ["Mon", 0.0, 0.0],
                ["Tue", 34745.0, 64792.0],
                ["Wed", 33592.0, 58057.0],
                ["Thu", 38926.0, 62631.0],
                ["Fri", 0.0, 0.0],
                ["Sat", 0.0, 0.0],
                ["Sun", 0.0, 0.0],
            ])
        );
    }

    #[test]
    fn test_empty_user_reports_zero_everywhere() {
        let days = UserDays::new();
        let rows = start_end(&days);
        for row in rows.as_array().unwrap() {
            let row = row.as_array().unwrap();
            assert_eq!(row[1], json!(0.0));
            assert_eq!(row[2], json!(0.0));
        }
    }

    // ── render_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_render_text_pairs() {
        let rows = json!([["Mon", 0], ["Tue", 30047]]);
        assert_eq!(render_text(&rows), "Mon\t0\nTue\t30047");
    }

    #[test]
    fn test_render_text_user_objects_keep_column_order() {
        let rows = json!([{"user_id": 10, "name": "User 10"}]);
        assert_eq!(render_text(&rows), "10\tUser 10");
    }
}
