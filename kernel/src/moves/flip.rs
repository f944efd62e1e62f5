//! Flip expansion: every legal flip of a state, with its cost.

use crate::stack::state::{position_cost, StackState, FLIP_COUNT};

/// One successor of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index passed to `flip`.
    pub flip_index: usize,
    /// The resulting state.
    pub child: StackState,
    /// Move cost from the parent (`STACK_SIZE - flip_index`).
    pub cost: u32,
}

/// Expand `state` into its `FLIP_COUNT` successors, in flip-index order.
///
/// Only in-range indices are generated, so the checked `flip` can never fail
/// here.
#[must_use]
pub fn expand_flips(state: &StackState) -> Vec<Transition> {
    state
        .children()
        .into_iter()
        .enumerate()
        .map(|(flip_index, child)| Transition {
            flip_index,
            child,
            cost: position_cost(flip_index),
        })
        .collect()
}
