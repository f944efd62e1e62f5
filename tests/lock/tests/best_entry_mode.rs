//! Best-entry expansion: one best entry at a time with an expanded-state set.

use std::collections::BTreeSet;

use lock_tests::golden::parse_path;
use pancake_kernel::stack::state::StackState;
use pancake_search::{run_search, Algorithm, ExpansionMode, SearchPolicy, SearchResult};

fn best_entry_policy() -> SearchPolicy {
    SearchPolicy {
        expansion_mode: ExpansionMode::BestEntry,
        ..SearchPolicy::default()
    }
}

fn solve(start: StackState, algorithm: Algorithm, policy: &SearchPolicy) -> SearchResult {
    run_search(algorithm, start, policy)
        .unwrap_or_else(|e| panic!("{algorithm} from {start} failed: {e}"))
}

const SCORED: [Algorithm; 3] = [Algorithm::UniformCost, Algorithm::Greedy, Algorithm::AStar];

#[test]
fn paths_never_repeat_a_state() {
    for start in StackState::all() {
        for algorithm in SCORED {
            let result = solve(start, algorithm, &best_entry_policy());
            let distinct: BTreeSet<_> = result.path.iter().collect();
            assert_eq!(
                distinct.len(),
                result.path.len(),
                "{algorithm} from {start} repeated a state: {:?}",
                result.path
            );
        }
    }
}

#[test]
fn ucs_cost_is_a_lower_bound_for_every_algorithm() {
    for start in StackState::all() {
        let optimal = solve(start, Algorithm::UniformCost, &best_entry_policy()).total_cost();
        for algorithm in Algorithm::ALL {
            for policy in [SearchPolicy::default(), best_entry_policy()] {
                let cost = solve(start, algorithm, &policy).total_cost();
                assert!(
                    optimal <= cost,
                    "{algorithm} from {start} cost {cost} below optimal {optimal}"
                );
            }
        }
    }
}

#[test]
fn known_best_entry_results() {
    let cases = [
        ("2143", Algorithm::UniformCost, "2143 2134 4312 4321", 11),
        ("2143", Algorithm::Greedy, "2143 3412 3214 4123 4321", 5),
        ("2143", Algorithm::AStar, "2143 2134 4312 4321", 4),
        ("1243", Algorithm::Greedy, "1243 3421 3412 3214 4123 4321", 5),
        ("3142", Algorithm::Greedy, "3142 3241 3214 4123 4321", 4),
        ("3142", Algorithm::AStar, "3142 3124 4213 4312 4321", 9),
        ("1234", Algorithm::UniformCost, "1234 4321", 3),
    ];
    for (start, algorithm, path, expansions) in cases {
        let result = solve(start.parse().unwrap(), algorithm, &best_entry_policy());
        assert_eq!(result.path, parse_path(path), "{algorithm} from {start}");
        assert_eq!(result.stats.expansions, expansions, "{algorithm} from {start}");
        assert_eq!(result.mode, Some(ExpansionMode::BestEntry));
    }
}

#[test]
fn each_state_is_expanded_at_most_once() {
    let state_count = StackState::all().len() as u64;
    for start in StackState::all() {
        for algorithm in SCORED {
            let result = solve(start, algorithm, &best_entry_policy());
            assert!(
                result.stats.expansions <= state_count,
                "{algorithm} from {start}: {} expansions",
                result.stats.expansions
            );
        }
    }
}

#[test]
fn depth_first_ignores_expansion_mode() {
    for start in StackState::all() {
        let sweep = solve(start, Algorithm::DepthFirst, &SearchPolicy::default());
        let best = solve(start, Algorithm::DepthFirst, &best_entry_policy());
        assert_eq!(sweep, best);
        assert_eq!(sweep.mode, None);
    }
}
