//! Golden solution paths for every start state.
//!
//! Each row is `(start, [dfs, ucs, greedy, astar])` with paths written as
//! space-separated states. These are the paths the round-sweep expansion
//! mode must reproduce exactly, ties included.

use pancake_kernel::stack::state::StackState;
use pancake_search::Algorithm;

/// Golden paths, one row per start state in ascending order.
pub const GOLDEN_PATHS: [(&str, [&str; 4]); 24] = [
    ("1234", ["1234 4321", "1234 4321", "1234 4321", "1234 4321"]),
    (
        "1243",
        [
            "1243 3421 3412 3214 4123 4321",
            "1243 1234 4321",
            "1243 1234 4321",
            "1243 1234 4321",
        ],
    ),
    (
        "1324",
        [
            "1324 4231 4213 4312 4321",
            "1324 1342 1243 1234 4321",
            "1324 4231 4132 4123 4321",
            "1324 1342 1243 1234 4321",
        ],
    ),
    (
        "1342",
        [
            "1342 2431 2413 3142 3241 3214 4123 4321",
            "1342 1243 1234 4321",
            "1342 2431 2134 4312 4321",
            "1342 1243 1234 4321",
        ],
    ),
    (
        "1423",
        [
            "1423 3241 3214 4123 4321",
            "1423 1432 1234 4321",
            "1423 3241 3214 4123 4321",
            "1423 1432 1234 4321",
        ],
    ),
    (
        "1432",
        [
            "1432 2341 2314 4132 4231 4213 4312 4321",
            "1432 1234 4321",
            "1432 1234 4321",
            "1432 1234 4321",
        ],
    ),
    (
        "2134",
        [
            "2134 4312 4321",
            "2134 4312 4321",
            "2134 4312 4321",
            "2134 4312 4321",
        ],
    ),
    (
        "2143",
        [
            "2143 3412 3421 3124 4213 4312 4321",
            "2143 2134 4312 4321",
            "2143 2134 4312 4321",
            "2143 2134 4312 4321",
        ],
    ),
    (
        "2314",
        [
            "2314 4132 4231 4213 4312 4321",
            "2314 4132 4123 4321",
            "2314 4132 4123 4321",
            "2314 4132 4123 4321",
        ],
    ),
    (
        "2341",
        [
            "2341 2314 4132 4231 4213 4312 4321",
            "2341 2314 4132 4123 4321",
            "2341 1432 1234 4321",
            "2341 2314 4132 4123 4321",
        ],
    ),
    (
        "2413",
        [
            "2413 3142 3241 3214 4123 4321",
            "2413 2431 2134 4312 4321",
            "2413 2431 2134 4312 4321",
            "2413 2431 2134 4312 4321",
        ],
    ),
    (
        "2431",
        [
            "2431 2413 3142 3241 3214 4123 4321",
            "2431 2134 4312 4321",
            "2431 2134 4312 4321",
            "2431 2134 4312 4321",
        ],
    ),
    (
        "3124",
        [
            "3124 4213 4312 4321",
            "3124 4213 4312 4321",
            "3124 4213 4312 4321",
            "3124 4213 4312 4321",
        ],
    ),
    (
        "3142",
        [
            "3142 3241 3214 4123 4321",
            "3142 3124 4213 4312 4321",
            "3142 3241 3142 3124 4213 4312 4321",
            "3142 3124 4213 4312 4321",
        ],
    ),
    (
        "3214",
        [
            "3214 4123 4321",
            "3214 4123 4321",
            "3214 4123 4321",
            "3214 4123 4321",
        ],
    ),
    (
        "3241",
        [
            "3241 3214 4123 4321",
            "3241 3214 4123 4321",
            "3241 3214 4123 4321",
            "3241 3214 4123 4321",
        ],
    ),
    (
        "3412",
        [
            "3412 3421 3124 4213 4312 4321",
            "3412 3214 4123 4321",
            "3412 3421 3124 4213 4312 4321",
            "3412 3214 4123 4321",
        ],
    ),
    (
        "3421",
        [
            "3421 3412 3214 4123 4321",
            "3421 1243 1234 4321",
            "3421 3412 3214 4123 4321",
            "3421 1243 1234 4321",
        ],
    ),
    ("4123", ["4123 4321", "4123 4321", "4123 4321", "4123 4321"]),
    (
        "4132",
        [
            "4132 4231 4213 4312 4321",
            "4132 4123 4321",
            "4132 4231 4132 4123 4321",
            "4132 4123 4321",
        ],
    ),
    (
        "4213",
        [
            "4213 4312 4321",
            "4213 4312 4321",
            "4213 4312 4321",
            "4213 4312 4321",
        ],
    ),
    (
        "4231",
        [
            "4231 4213 4312 4321",
            "4231 4213 4312 4321",
            "4231 4213 4312 4321",
            "4231 4213 4312 4321",
        ],
    ),
    ("4312", ["4312 4321", "4312 4321", "4312 4321", "4312 4321"]),
    ("4321", ["4321", "4321", "4321", "4321"]),
];

/// Parse a space-separated path.
///
/// # Panics
///
/// Panics if any state in `path` is malformed.
#[must_use]
pub fn parse_path(path: &str) -> Vec<StackState> {
    path.split_whitespace()
        .map(|s| s.parse().unwrap_or_else(|e| panic!("bad state {s:?}: {e}")))
        .collect()
}

/// Golden path for `start` under `algorithm`, if `start` is in the table.
#[must_use]
pub fn golden_path(start: &str, algorithm: Algorithm) -> Option<Vec<StackState>> {
    let column = Algorithm::ALL.iter().position(|a| *a == algorithm)?;
    GOLDEN_PATHS
        .iter()
        .find(|(s, _)| *s == start)
        .map(|(_, paths)| parse_path(paths[column]))
}
