use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` takes upper-case level names (DEBUG .. CRITICAL) mapped to
/// a [`tracing_subscriber::EnvFilter`] directive. Falls back to `"info"` if
/// the level string is not recognised. All output goes to stderr so that
/// report output on stdout stays clean.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-file discovery ────────────────────────────────────────────────────────

/// Attempt to locate the attendance CSV on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./runtime/data/sample_data.csv` (the conventional checkout layout)
/// 2. `~/.presence-analyzer/data.csv`
///
/// Returns `None` when neither path exists.
pub fn discover_data_csv() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("runtime")
        .join("data")
        .join("sample_data.csv")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".presence-analyzer").join("data.csv"));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
