//! Property tests for the ordering invariant.

use proptest::prelude::*;

use hn_order_check::domain::article::{Article, RawArticle};
use hn_order_check::domain::timestamp::ParsePolicy;
use hn_order_check::domain::validation::{PushOutcome, RunStatus, ValidationState};

fn article(id: i64, epoch: i64) -> Article {
    Article::from_raw(
        RawArticle {
            id: id.to_string(),
            timestamp: Some(format!("2024-01-15T00:00:00 {epoch}")),
            ..Default::default()
        },
        ParsePolicy::ZeroDefault,
    )
    .unwrap()
}

/// Strictly descending `(epoch, id)` sequences: epochs non-increasing,
/// ids strictly decreasing, and id also strictly decreasing across every
/// epoch tie, which is exactly what the tie-break demands.
fn descending_sequence() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..3, 1i64..10), 1..40).prop_map(|deltas| {
        let mut epoch = 2_000_000_000i64;
        let mut id = 50_000_000i64;
        deltas
            .into_iter()
            .map(|(epoch_delta, id_delta)| {
                epoch -= epoch_delta;
                id -= id_delta;
                (epoch, id)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn descending_runs_pass_at_target(seq in descending_sequence()) {
        let mut state = ValidationState::new(seq.len());
        for (i, (epoch, id)) in seq.iter().enumerate() {
            let outcome = state.push(article(*id, *epoch));
            if i + 1 < seq.len() {
                prop_assert_eq!(outcome, PushOutcome::Accepted);
            } else {
                prop_assert_eq!(outcome, PushOutcome::TargetReached);
            }
        }
        prop_assert_eq!(state.status(), RunStatus::Passed);
        prop_assert_eq!(state.len(), seq.len());
    }

    #[test]
    fn duplicated_item_fails_at_its_position(
        seq in descending_sequence(),
        dup_index in 0usize..40,
    ) {
        let dup_index = dup_index % seq.len();
        let mut state = ValidationState::new(seq.len() + 2);

        for (epoch, id) in seq.iter().take(dup_index + 1) {
            prop_assert!(!state.push(article(*id, *epoch)).is_stop());
        }
        // Re-pushing the item at dup_index is an equal-timestamp,
        // equal-id pair: a violation at 1-based position dup_index + 2.
        let (epoch, id) = seq[dup_index];
        match state.push(article(id, epoch)) {
            PushOutcome::Violation {
                prev_position,
                curr_position,
                ..
            } => {
                prop_assert_eq!(prev_position, dup_index + 1);
                prop_assert_eq!(curr_position, dup_index + 2);
            }
            other => prop_assert!(false, "expected a violation, got {:?}", other),
        }
        prop_assert_eq!(state.status(), RunStatus::Failed);
        prop_assert_eq!(state.len(), dup_index + 2);
    }

    #[test]
    fn ascending_pair_fails_immediately(
        epoch in 0i64..2_000_000_000,
        id in 0i64..50_000_000,
        epoch_bump in 1i64..1_000,
    ) {
        let mut state = ValidationState::new(10);
        state.push(article(id, epoch));
        let outcome = state.push(article(id + 1, epoch + epoch_bump));
        let violated = matches!(outcome, PushOutcome::Violation { .. });
        prop_assert!(violated);
        prop_assert_eq!(state.status(), RunStatus::Failed);
    }
}

#[test]
fn violation_at_third_item_reports_positions_two_and_three() {
    let mut state = ValidationState::new(10);
    state.push(article(9, 1000));
    state.push(article(8, 900));
    match state.push(article(7, 950)) {
        PushOutcome::Violation {
            prev_id,
            curr_id,
            prev_position,
            curr_position,
            ..
        } => {
            assert_eq!(prev_id, "8");
            assert_eq!(curr_id, "7");
            assert_eq!(prev_position, 2);
            assert_eq!(curr_position, 3);
        }
        other => panic!("expected a violation, got {other:?}"),
    }
    assert_eq!(state.status(), RunStatus::Failed);
    assert_eq!(state.len(), 3);
}
