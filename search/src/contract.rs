//! Transition model contract.
//!
//! Search procedures never flip states themselves. They ask a
//! [`TransitionModel`] for successors, which keeps them independent of the
//! flip mechanics and lets tests substitute restricted move sets.

use pancake_kernel::moves::flip::{expand_flips, Transition};
use pancake_kernel::stack::state::StackState;

/// Successor generator consumed by every search procedure.
///
/// # Contract
///
/// - Enumeration must be deterministic: same state, same transitions in the
///   same order.
/// - `cost` must be the move cost from `state` to `child`.
pub trait TransitionModel {
    /// All successors of `state`, in a fixed order.
    fn expand(&self, state: &StackState) -> Vec<Transition>;
}

/// The production model: every suffix flip, in flip-index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixFlipModel;

impl TransitionModel for PrefixFlipModel {
    fn expand(&self, state: &StackState) -> Vec<Transition> {
        expand_flips(state)
    }
}
