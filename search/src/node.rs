//! Fringe entry and frontier ordering key.

use std::cmp::Ordering;

use pancake_kernel::moves::flip::Transition;
use pancake_kernel::stack::pancake::Pancake;
use pancake_kernel::stack::state::StackState;

use crate::algorithm::ScoreRule;
use crate::path::SearchPath;

/// A partial solution on the fringe: a path plus its accumulated scores.
///
/// Cloning is cheap; the path is shared structurally.
#[derive(Debug, Clone)]
pub struct FringeEntry {
    /// States from the start state to the entry's frontier state.
    pub path: SearchPath,
    /// Cumulative path cost.
    pub g_cost: u32,
    /// Heuristic of the last state on the path.
    pub h_value: Pancake,
}

impl FringeEntry {
    /// The initial entry: `[start]`, `g = 0`, `h = heuristic(start)`.
    #[must_use]
    pub fn root(start: StackState) -> Self {
        Self {
            path: SearchPath::root(start),
            g_cost: 0,
            h_value: start.heuristic(),
        }
    }

    /// A new entry for one successor of this entry's last state.
    #[must_use]
    pub fn extend(&self, transition: &Transition) -> Self {
        Self {
            path: self.path.push(transition.child),
            g_cost: self.g_cost.saturating_add(transition.cost),
            h_value: transition.child.heuristic(),
        }
    }

    /// The state this entry would expand next.
    #[must_use]
    pub fn last(&self) -> &StackState {
        self.path.last()
    }

    /// Score under `rule`. Lower is better.
    #[must_use]
    pub fn score(&self, rule: ScoreRule) -> u32 {
        rule.score(self.g_cost, self.h_value.weight())
    }
}

/// Canonical fringe order: score ascending, then last state descending.
///
/// Among equal scores the entry ending in the lexicographically larger
/// state comes first.
#[must_use]
pub fn fringe_order(rule: ScoreRule, a: &FringeEntry, b: &FringeEntry) -> Ordering {
    a.score(rule)
        .cmp(&b.score(rule))
        .then_with(|| b.last().cmp(a.last()))
}

/// The best-entry frontier key: `(score, last state, creation_order)`.
///
/// Lower score first, then the larger last state, then older creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub score: u32,
    pub last: StackState,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.last.cmp(&self.last))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
