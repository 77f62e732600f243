//! Ordering validator and the per-run accumulator.
//!
//! Articles are validated on both the timestamp and the unique article id,
//! since Hacker News assigns ids that increase with newer posts: the higher
//! the id, the newer the post. Ties on the timestamp are broken by id,
//! descending.

use super::article::Article;

/// Result of comparing one article against its accepted predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// `curr` strictly follows `prev` under the descending invariant.
    InOrder,
    /// Timestamps out of order, or a tie lost on the id tie-break.
    OutOfOrder,
    /// Timestamps tied but at least one id is non-numeric, so the
    /// tie-break cannot be evaluated. Treated as a failure with a
    /// distinct diagnostic rather than silently accepted.
    MalformedId,
}

/// Pure ordering predicate over two adjacent articles.
///
/// The id tie-break only applies on equal timestamps; an article whose
/// timestamp strictly decreased is in order regardless of its id.
pub fn check_order(prev: &Article, curr: &Article) -> CheckOutcome {
    if prev.epoch < curr.epoch {
        return CheckOutcome::OutOfOrder;
    }
    if prev.epoch == curr.epoch {
        return match (prev.numeric_id, curr.numeric_id) {
            (Some(p), Some(c)) if p <= c => CheckOutcome::OutOfOrder,
            (Some(_), Some(_)) => CheckOutcome::InOrder,
            _ => CheckOutcome::MalformedId,
        };
    }
    CheckOutcome::InOrder
}

/// Terminal classification of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Collecting,
    Passed,
    Failed,
    Incomplete,
}

/// What the collection loop should do after appending an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Accepted; keep consuming.
    Accepted,
    /// Accepted and the target count is reached; stop, run passed.
    TargetReached,
    /// Ordering violation; the offender was still appended for
    /// diagnostics, the run is failed, stop consuming.
    Violation {
        prev_id: String,
        curr_id: String,
        /// 1-based position of the last in-order article.
        prev_position: usize,
        /// 1-based position of the violating article.
        curr_position: usize,
        malformed_id: bool,
    },
}

impl PushOutcome {
    pub fn is_stop(&self) -> bool {
        !matches!(self, PushOutcome::Accepted)
    }
}

/// Accumulator for one validation run. Mutated only through [`push`]
/// and [`mark_incomplete`]; read-only once a terminal status is set.
///
/// [`push`]: ValidationState::push
/// [`mark_incomplete`]: ValidationState::mark_incomplete
#[derive(Debug)]
pub struct ValidationState {
    accepted: Vec<Article>,
    target: usize,
    status: RunStatus,
}

impl ValidationState {
    /// `target` is the number of articles to collect; zero is clamped to 1.
    pub fn new(target: usize) -> Self {
        Self {
            accepted: Vec::with_capacity(target),
            target: target.max(1),
            status: RunStatus::Collecting,
        }
    }

    /// Append-and-check. The first article is always accepted since there
    /// is no predecessor to compare against.
    pub fn push(&mut self, article: Article) -> PushOutcome {
        debug_assert_eq!(self.status, RunStatus::Collecting);
        if let Some(prev) = self.accepted.last() {
            let outcome = check_order(prev, &article);
            if outcome != CheckOutcome::InOrder {
                let violation = PushOutcome::Violation {
                    prev_id: prev.id.clone(),
                    curr_id: article.id.clone(),
                    prev_position: self.accepted.len(),
                    curr_position: self.accepted.len() + 1,
                    malformed_id: outcome == CheckOutcome::MalformedId,
                };
                // Captured so the report shows the offending pair.
                self.accepted.push(article);
                self.status = RunStatus::Failed;
                return violation;
            }
        }
        self.accepted.push(article);
        if self.accepted.len() >= self.target {
            self.status = RunStatus::Passed;
            return PushOutcome::TargetReached;
        }
        PushOutcome::Accepted
    }

    /// Source exhausted below the target with no violation seen.
    pub fn mark_incomplete(&mut self) {
        if self.status == RunStatus::Collecting {
            self.status = RunStatus::Incomplete;
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_collecting(&self) -> bool {
        self.status == RunStatus::Collecting
    }

    pub fn accepted(&self) -> &[Article] {
        &self.accepted
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}
