//! Runtime configuration.

use std::path::PathBuf;

use crate::domain::timestamp::ParsePolicy;

/// Default number of articles to collect when no flag is given.
pub const DEFAULT_TARGET_COUNT: usize = 100;

/// Configuration for one validation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// First page of the listing to validate.
    pub base_url: String,
    pub user_agent: String,
    /// Applied uniformly to every page load, including page advances.
    pub timeout_seconds: u64,
    pub max_requests_per_second: u32,
    /// Number of articles to collect before declaring the run passed.
    pub target_count: usize,
    pub parse_policy: ParsePolicy,
    /// Overwritten on every run.
    pub report_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://news.ycombinator.com/newest".to_string(),
            user_agent: "hn-order-check/0.2 (Educational Purpose)".to_string(),
            timeout_seconds: 10,
            max_requests_per_second: 2,
            target_count: DEFAULT_TARGET_COUNT,
            parse_policy: ParsePolicy::default(),
            report_path: PathBuf::from("report.json"),
        }
    }
}

/// Parse the single supported CLI flag of the form `--<integer>`
/// (e.g. `--50`). Absent, non-numeric, or zero values fall back to the
/// default of 100. Only the first `--` argument is considered.
pub fn target_from_args<I>(args: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .find(|arg| arg.starts_with("--"))
        .and_then(|arg| arg[2..].parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_TARGET_COUNT)
}
