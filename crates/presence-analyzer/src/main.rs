mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use presence_core::error::AnalyzerError;
use presence_core::models::PresenceDataset;
use presence_core::settings::Settings;
use presence_data::reader::load_dataset;
use serde_json::Value;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Presence analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_csv = settings
        .data_csv
        .clone()
        .or_else(bootstrap::discover_data_csv)
        .ok_or_else(|| {
            AnalyzerError::Config("no attendance CSV found; pass --data-csv".to_string())
        })?;

    tracing::info!("Loading attendance data from {}", data_csv.display());
    let dataset = load_dataset(&data_csv)?;
    tracing::info!("Loaded {} users", dataset.user_count());

    let output = build_output(&settings, &dataset)?;
    println!("{}", output);

    Ok(())
}

// ── Output assembly ───────────────────────────────────────────────────────────

/// Build the full report output for the requested view.
///
/// Per-user reports cover `--user` when given (an absent id is an error),
/// otherwise every user in the dataset.
fn build_output(
    settings: &Settings,
    dataset: &PresenceDataset,
) -> presence_core::error::Result<String> {
    if settings.report == "users" {
        let rows = report::users(dataset);
        return Ok(render(settings, &rows));
    }

    let user_ids: Vec<u32> = match settings.user {
        Some(id) => vec![id],
        None => dataset.user_ids().collect(),
    };

    let mut sections: Vec<(u32, Value)> = Vec::with_capacity(user_ids.len());
    for id in user_ids {
        let days = dataset.user(id).ok_or(AnalyzerError::UnknownUser(id))?;
        let rows = match settings.report.as_str() {
            "mean-time" => report::mean_time(days),
            "presence" => report::presence(days),
            "start-end" => report::start_end(days),
            other => {
                return Err(AnalyzerError::Config(format!(
                    "unknown report type: {}",
                    other
                )))
            }
        };
        sections.push((id, rows));
    }

    // A single requested user yields bare rows; the all-users form nests
    // rows under string user ids.
    if settings.json {
        if let [(_, rows)] = sections.as_slice() {
            if settings.user.is_some() {
                return Ok(rows.to_string());
            }
        }
        let map: serde_json::Map<String, Value> = sections
            .into_iter()
            .map(|(id, rows)| (id.to_string(), rows))
            .collect();
        return Ok(Value::Object(map).to_string());
    }

    let text_sections: Vec<String> = sections
        .into_iter()
        .map(|(id, rows)| format!("User {}\n{}", id, report::render_text(&rows)))
        .collect();
    Ok(text_sections.join("\n\n"))
}

/// Render the user-listing rows in the requested format.
fn render(settings: &Settings, rows: &Value) -> String {
    if settings.json {
        rows.to_string()
    } else {
        report::render_text(rows)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
