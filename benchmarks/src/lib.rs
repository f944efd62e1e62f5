//! Shared helpers for the pancake benchmark suites.

use pancake_kernel::moves::flip::expand_flips;
use pancake_kernel::stack::state::StackState;
use pancake_search::node::FringeEntry;

/// Start states named in benchmark ids, from trivial to the longest searches.
pub const BENCH_STARTS: [&str; 4] = ["4312", "2143", "3142", "1324"];

/// Parse one of [`BENCH_STARTS`].
///
/// # Panics
///
/// Panics if `start` is not a valid state. Benchmark setup failures are fatal.
#[must_use]
pub fn start_state(start: &str) -> StackState {
    start
        .parse()
        .unwrap_or_else(|e| panic!("bad benchmark start {start:?}: {e}"))
}

/// One fringe entry per successor of every state, `copies` times over.
///
/// Gives the frontier benchmarks a realistic mix of scores and tie keys.
#[must_use]
pub fn fringe_entries(copies: usize) -> Vec<FringeEntry> {
    let mut entries = Vec::new();
    for _ in 0..copies {
        for state in StackState::all() {
            let root = FringeEntry::root(state);
            entries.extend(expand_flips(&state).iter().map(|t| root.extend(t)));
        }
    }
    entries
}
