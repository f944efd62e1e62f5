//! Human-readable rendering of a solution path.
//!
//! One [`TraceRecord::Step`] per flip and a closing [`TraceRecord::Goal`].
//! For the path `2143 → 2134 → 4312 → 4321`:
//!
//! ```text
//! 21|43 g=0, h=4
//! |2134 g=2, h=4
//! 43|12 g=6, h=2
//! Final State: 4321 g=8, h=0
//! ```
//!
//! The `|` marks where the next flip starts. `g` is the cost accumulated
//! before the step and `h` is the heuristic of the state shown. The final
//! line always reports `h=0`.

use std::fmt;

use pancake_kernel::stack::pancake::Pancake;
use pancake_kernel::stack::state::{position_cost, StackState};

/// One line of a path trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceRecord {
    Step {
        source: StackState,
        /// First position where `source` and its successor differ. `None`
        /// when the two states are equal (never produced by a real flip).
        flip_index: Option<usize>,
        step_cost: u32,
        cost_before: u32,
        cumulative_cost: u32,
        heuristic: Pancake,
    },
    Goal {
        state: StackState,
        total_cost: u32,
        heuristic: Pancake,
    },
}

impl TraceRecord {
    /// State shown on this line.
    #[must_use]
    pub const fn state(&self) -> &StackState {
        match self {
            Self::Step { source, .. } => source,
            Self::Goal { state, .. } => state,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step {
                source,
                flip_index,
                cost_before,
                heuristic,
                ..
            } => {
                for (i, disc) in source.discs().iter().enumerate() {
                    if Some(i) == *flip_index {
                        f.write_str("|")?;
                    }
                    write!(f, "{disc}")?;
                }
                write!(f, " g={cost_before}, h={heuristic}")
            }
            Self::Goal {
                state,
                total_cost,
                heuristic,
            } => write!(f, "Final State: {state} g={total_cost}, h={heuristic}"),
        }
    }
}

/// Trace records for `path`. Empty input yields no records.
#[must_use]
pub fn format_trace(path: &[StackState]) -> Vec<TraceRecord> {
    let Some(last) = path.last() else {
        return Vec::new();
    };

    let mut records = Vec::with_capacity(path.len());
    let mut cumulative = 0u32;
    for pair in path.windows(2) {
        let (source, next) = (pair[0], pair[1]);
        let flip_index = source.first_difference(&next);
        let step_cost = flip_index.map_or(0, position_cost);
        let cost_before = cumulative;
        cumulative = cumulative.saturating_add(step_cost);
        records.push(TraceRecord::Step {
            source,
            flip_index,
            step_cost,
            cost_before,
            cumulative_cost: cumulative,
            heuristic: source.heuristic(),
        });
    }
    records.push(TraceRecord::Goal {
        state: *last,
        total_cost: cumulative,
        heuristic: Pancake::ZERO,
    });
    records
}

/// [`format_trace`] rendered to display strings.
#[must_use]
pub fn render_lines(path: &[StackState]) -> Vec<String> {
    format_trace(path).iter().map(ToString::to_string).collect()
}
