//! Binary that solves every start state with every algorithm in both
//! expansion modes and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `report.<start>.<algorithm>.<mode>=<digest> expansions=<n>`
//! line per run, then `run_count=<n>`.

use pancake_kernel::stack::state::StackState;
use pancake_search::{run_search, Algorithm, ExpansionMode, SearchPolicy, SearchReport};

fn main() {
    let mut run_count = 0usize;
    for start in StackState::all() {
        for algorithm in Algorithm::ALL {
            for mode in [ExpansionMode::RoundSweep, ExpansionMode::BestEntry] {
                let policy = SearchPolicy {
                    expansion_mode: mode,
                    ..SearchPolicy::default()
                };
                let result = run_search(algorithm, start, &policy).expect("search failed");
                let report = SearchReport::from_result(&result).expect("report failed");
                let digest = report.digest().expect("digest failed");
                println!(
                    "report.{start}.{}.{mode}={} expansions={}",
                    algorithm.slug(),
                    digest.as_str(),
                    result.stats.expansions
                );
                run_count += 1;
            }
        }
    }
    println!("run_count={run_count}");
}
