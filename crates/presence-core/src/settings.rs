use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Weekday presence statistics from employee attendance logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "presence-analyzer",
    about = "Weekday presence statistics from employee attendance logs",
    version
)]
pub struct Settings {
    /// Path to the attendance CSV (discovered automatically if not given)
    #[arg(long, env = "PRESENCE_DATA_CSV")]
    pub data_csv: Option<PathBuf>,

    /// Report on a single user id (all users when omitted)
    #[arg(long)]
    pub user: Option<u32>,

    /// Report type
    #[arg(long, default_value = "presence", value_parser = ["presence", "mean-time", "start-end", "users"])]
    pub report: String,

    /// Emit JSON rows instead of a plain-text table
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["presence-analyzer"]);
        assert!(settings.data_csv.is_none());
        assert!(settings.user.is_none());
        assert_eq!(settings.report, "presence");
        assert!(!settings.json);
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_parse_all_flags() {
        let settings = Settings::parse_from([
            "presence-analyzer",
            "--data-csv",
            "/tmp/data.csv",
            "--user",
            "10",
            "--report",
            "mean-time",
            "--json",
            "--log-level",
            "DEBUG",
        ]);
        assert_eq!(settings.data_csv, Some(PathBuf::from("/tmp/data.csv")));
        assert_eq!(settings.user, Some(10));
        assert_eq!(settings.report, "mean-time");
        assert!(settings.json);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_rejects_unknown_report() {
        let result = Settings::try_parse_from(["presence-analyzer", "--report", "hourly"]);
        assert!(result.is_err());
    }
}
