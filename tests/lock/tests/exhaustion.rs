//! Every way a search can fail returns a typed error instead of hanging or
//! panicking.

use pancake_kernel::moves::flip::Transition;
use pancake_kernel::stack::state::StackState;
use pancake_search::{
    run_search, run_search_with, Algorithm, ExhaustionCause, ExpansionMode, SearchError,
    SearchPolicy, TransitionModel,
};

/// Offers no moves at all.
struct Stuck;

impl TransitionModel for Stuck {
    fn expand(&self, _state: &StackState) -> Vec<Transition> {
        Vec::new()
    }
}

/// Only the bottom-two flip, which can never fix the top of the stack.
struct BottomPairOnly;

impl TransitionModel for BottomPairOnly {
    fn expand(&self, state: &StackState) -> Vec<Transition> {
        let child = state.flip(2).unwrap();
        vec![Transition {
            flip_index: 2,
            child,
            cost: state.move_cost(&child),
        }]
    }
}

fn modes() -> [SearchPolicy; 2] {
    [
        SearchPolicy::default(),
        SearchPolicy {
            expansion_mode: ExpansionMode::BestEntry,
            ..SearchPolicy::default()
        },
    ]
}

fn cause_of(err: &SearchError) -> ExhaustionCause {
    match err {
        SearchError::SearchExhausted { cause, .. } => *cause,
        SearchError::InvalidPolicy { .. } => panic!("unexpected policy error: {err}"),
    }
}

// --- No moves ---

#[test]
fn stuck_model_exhausts_every_algorithm() {
    let start: StackState = "2143".parse().unwrap();
    for policy in modes() {
        for algorithm in Algorithm::ALL {
            let err = run_search_with(algorithm, start, &Stuck, &policy).unwrap_err();
            let expected = if algorithm == Algorithm::DepthFirst {
                ExhaustionCause::BacktrackedPastRoot
            } else {
                ExhaustionCause::FringeEmpty
            };
            assert_eq!(cause_of(&err), expected, "{algorithm}");
        }
    }
}

#[test]
fn stuck_model_still_solves_goal_start() {
    for algorithm in Algorithm::ALL {
        let result =
            run_search_with(algorithm, StackState::goal(), &Stuck, &SearchPolicy::default())
                .unwrap();
        assert_eq!(result.path, vec![StackState::goal()]);
    }
}

// --- Unreachable goal ---

#[test]
fn dfs_backtracks_past_root_when_goal_unreachable() {
    let err = run_search_with(
        Algorithm::DepthFirst,
        "1234".parse().unwrap(),
        &BottomPairOnly,
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        SearchError::SearchExhausted {
            algorithm: Algorithm::DepthFirst,
            cause: ExhaustionCause::BacktrackedPastRoot,
            expansions: 3,
        }
    );
}

#[test]
fn round_sweep_with_unreachable_goal_hits_budget() {
    // Without an expanded set the two-state cycle never empties the fringe.
    let policy = SearchPolicy {
        max_expansions: 50,
        ..SearchPolicy::default()
    };
    let err = run_search_with(
        Algorithm::AStar,
        "1234".parse().unwrap(),
        &BottomPairOnly,
        &policy,
    )
    .unwrap_err();
    assert_eq!(
        cause_of(&err),
        ExhaustionCause::ExpansionBudget { limit: 50 }
    );
}

#[test]
fn best_entry_with_unreachable_goal_empties_frontier() {
    let policy = SearchPolicy {
        expansion_mode: ExpansionMode::BestEntry,
        ..SearchPolicy::default()
    };
    let err = run_search_with(
        Algorithm::UniformCost,
        "1234".parse().unwrap(),
        &BottomPairOnly,
        &policy,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SearchError::SearchExhausted {
            algorithm: Algorithm::UniformCost,
            cause: ExhaustionCause::FringeEmpty,
            expansions: 2,
        }
    );
}

// --- Budget ---

#[test]
fn budget_of_one_stops_every_algorithm_on_a_hard_start() {
    let tight = SearchPolicy {
        max_expansions: 1,
        ..SearchPolicy::default()
    };
    for algorithm in Algorithm::ALL {
        let err = run_search(algorithm, "2143".parse().unwrap(), &tight).unwrap_err();
        assert_eq!(
            err,
            SearchError::SearchExhausted {
                algorithm,
                cause: ExhaustionCause::ExpansionBudget { limit: 1 },
                expansions: 1,
            }
        );
    }
}

#[test]
fn zero_budget_is_an_invalid_policy() {
    let policy = SearchPolicy {
        max_expansions: 0,
        ..SearchPolicy::default()
    };
    for algorithm in Algorithm::ALL {
        let err = run_search(algorithm, StackState::goal(), &policy).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPolicy { .. }), "{algorithm}");
    }
}
