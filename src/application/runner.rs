//! Collection loop driving the fetcher into the validator.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::domain::article::Article;
use crate::domain::timestamp::ParsePolicy;
use crate::domain::validation::{PushOutcome, RunStatus, ValidationState};
use crate::infrastructure::fetcher::PageFetcher;

/// Drain pages from the fetcher into the validation state until a
/// terminal status is reached.
///
/// Items are checked one at a time: the scan stops mid-page the moment a
/// violation occurs or the target count is reached, never only at page
/// boundaries. Fetch errors are fatal and propagate without a report.
pub async fn run_validation<F>(
    fetcher: &mut F,
    state: &mut ValidationState,
    policy: ParsePolicy,
) -> Result<()>
where
    F: PageFetcher + ?Sized,
{
    'pages: loop {
        let items = fetcher
            .items_on_current_page()
            .await
            .context("reading items on current page")?;
        debug!("Page yielded {} rows", items.len());

        for raw in items {
            let article = Article::from_raw(raw, policy)
                .context("normalizing article timestamp")?;
            match state.push(article) {
                PushOutcome::Accepted => {}
                PushOutcome::TargetReached => break 'pages,
                PushOutcome::Violation {
                    prev_id,
                    curr_id,
                    prev_position,
                    curr_position,
                    malformed_id,
                } => {
                    if malformed_id {
                        warn!(
                            "tie-break between '{prev_id}' and '{curr_id}' involves a non-numeric id"
                        );
                    }
                    eprintln!(
                        "Ordering Error: Article {prev_position} (ID: {prev_id}) should come after Article {curr_position} (ID: {curr_id})"
                    );
                    break 'pages;
                }
            }
        }

        let advanced = fetcher
            .advance_to_next_page()
            .await
            .context("advancing to next page")?;
        if !advanced {
            state.mark_incomplete();
            break;
        }
    }
    Ok(())
}

/// Human-readable terminal status line.
pub fn summarize(state: &ValidationState) -> String {
    let n = state.len();
    match state.status() {
        RunStatus::Passed => {
            format!("PASSED - All {n} articles are sorted newest to oldest.")
        }
        RunStatus::Failed => {
            format!("FAILED - Articles are not properly sorted. \nOnly collected {n} articles before stopping.")
        }
        RunStatus::Collecting | RunStatus::Incomplete => {
            format!("INCOMPLETE - Only {n} articles")
        }
    }
}
