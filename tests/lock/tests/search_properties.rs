//! Structural properties that hold for every start state, algorithm and
//! expansion mode.

use pancake_kernel::stack::state::StackState;
use pancake_search::{
    format_trace, run_search, Algorithm, ExpansionMode, SearchPolicy, TraceRecord,
};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = StackState> {
    Just(vec![1u8, 2, 3, 4])
        .prop_shuffle()
        .prop_map(|symbols| StackState::new(&symbols).unwrap())
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::DepthFirst),
        Just(Algorithm::UniformCost),
        Just(Algorithm::Greedy),
        Just(Algorithm::AStar),
    ]
}

fn arb_mode() -> impl Strategy<Value = ExpansionMode> {
    prop_oneof![Just(ExpansionMode::RoundSweep), Just(ExpansionMode::BestEntry)]
}

proptest! {
    #[test]
    fn path_runs_from_start_to_goal_by_single_flips(
        start in arb_state(),
        algorithm in arb_algorithm(),
        mode in arb_mode(),
    ) {
        let policy = SearchPolicy { expansion_mode: mode, ..SearchPolicy::default() };
        let result = run_search(algorithm, start, &policy).unwrap();

        prop_assert_eq!(result.path.first(), Some(&start));
        prop_assert_eq!(result.path.last(), Some(&StackState::goal()));
        for pair in result.path.windows(2) {
            prop_assert!(
                pair[0].children().contains(&pair[1]),
                "{} -> {} is not a flip", pair[0], pair[1]
            );
        }
    }

    #[test]
    fn trace_costs_accumulate(
        start in arb_state(),
        algorithm in arb_algorithm(),
        mode in arb_mode(),
    ) {
        let policy = SearchPolicy { expansion_mode: mode, ..SearchPolicy::default() };
        let result = run_search(algorithm, start, &policy).unwrap();
        let records = format_trace(&result.path);
        prop_assert_eq!(records.len(), result.path.len());

        let mut running = 0u32;
        for record in &records {
            match *record {
                TraceRecord::Step { step_cost, cost_before, cumulative_cost, flip_index, .. } => {
                    prop_assert_eq!(cost_before, running);
                    prop_assert!((2..=4).contains(&step_cost));
                    prop_assert_eq!(cumulative_cost, cost_before + step_cost);
                    prop_assert!(flip_index.is_some());
                    running = cumulative_cost;
                }
                TraceRecord::Goal { state, total_cost, heuristic } => {
                    prop_assert!(state.is_goal());
                    prop_assert_eq!(total_cost, running);
                    prop_assert!(heuristic.is_zero());
                }
            }
        }
        prop_assert_eq!(running, result.total_cost());
    }

    #[test]
    fn searches_are_pure(
        start in arb_state(),
        algorithm in arb_algorithm(),
        mode in arb_mode(),
    ) {
        let policy = SearchPolicy { expansion_mode: mode, ..SearchPolicy::default() };
        let a = run_search(algorithm, start, &policy).unwrap();
        let b = run_search(algorithm, start, &policy).unwrap();
        prop_assert_eq!(a, b);
    }
}
