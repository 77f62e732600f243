use anyhow::{Context, Result};

use hn_order_check::application::report::ValidationReport;
use hn_order_check::application::runner::{run_validation, summarize};
use hn_order_check::domain::validation::ValidationState;
use hn_order_check::infrastructure::config::{AppConfig, target_from_args};
use hn_order_check::infrastructure::fetcher::HttpPageFetcher;
use hn_order_check::infrastructure::http_client::HttpClient;
use hn_order_check::infrastructure::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let config = AppConfig {
        target_count: target_from_args(std::env::args().skip(1)),
        ..Default::default()
    };

    let client = HttpClient::new(&config)?;
    let mut fetcher = HttpPageFetcher::open(client, &config)
        .await
        .context("loading first listing page")?;

    let mut state = ValidationState::new(config.target_count);
    run_validation(&mut fetcher, &mut state, config.parse_policy).await?;

    println!("Validation {}", summarize(&state));

    let report = ValidationReport::from_state(&state);
    report.write_to(&config.report_path)?;
    println!("Report saved to {}", config.report_path.display());

    Ok(())
}
