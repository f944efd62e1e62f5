//! Depth-first search with an explicit path stack.
//!
//! The search context (visited set, current path, counters) is owned by one
//! call. At every step the cursor is the last state on the path:
//!
//! 1. a goal cursor ends the search with the current path;
//! 2. otherwise the largest unvisited child (by state order) is visited and
//!    pushed;
//! 3. a cursor with no unvisited children is popped (backtrack one level).
//!
//! Popping the start state means every reachable state was visited without
//! meeting the goal.

use std::collections::BTreeSet;

use pancake_kernel::stack::state::StackState;
use tracing::{debug, trace};

use crate::algorithm::Algorithm;
use crate::contract::TransitionModel;
use crate::error::{ExhaustionCause, SearchError};
use crate::policy::SearchPolicy;
use crate::search::SearchStats;

/// Result of a depth-first run that stayed within budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsOutcome {
    /// Path from the start state to a goal state.
    Found(Vec<StackState>),
    /// Backtracked past the start state.
    NotFound,
}

struct DepthFirst<'a> {
    model: &'a dyn TransitionModel,
    max_expansions: u64,
    visited: BTreeSet<StackState>,
    path: Vec<StackState>,
    stats: SearchStats,
}

impl DepthFirst<'_> {
    fn visit(&mut self, state: StackState) {
        self.visited.insert(state);
        self.path.push(state);
        self.stats.frontier_high_water = self.stats.frontier_high_water.max(self.path.len() as u64);
    }

    /// Largest child of `cursor` not yet visited.
    fn next_unvisited(&self, cursor: &StackState) -> Option<StackState> {
        let mut children: Vec<StackState> = self
            .model
            .expand(cursor)
            .into_iter()
            .map(|t| t.child)
            .collect();
        children.sort_by(|a, b| b.cmp(a));
        children.into_iter().find(|c| !self.visited.contains(c))
    }

    fn run(mut self, start: StackState) -> Result<(DfsOutcome, SearchStats), SearchError> {
        self.visit(start);

        while let Some(&cursor) = self.path.last() {
            if cursor.is_goal() {
                return Ok((DfsOutcome::Found(self.path), self.stats));
            }

            if self.stats.expansions >= self.max_expansions {
                return Err(SearchError::SearchExhausted {
                    algorithm: Algorithm::DepthFirst,
                    cause: ExhaustionCause::ExpansionBudget {
                        limit: self.max_expansions,
                    },
                    expansions: self.stats.expansions,
                });
            }
            self.stats.expansions += 1;

            if let Some(next) = self.next_unvisited(&cursor) {
                trace!(%cursor, %next, depth = self.path.len(), "descend");
                self.visit(next);
            } else {
                self.path.pop();
                debug!(%cursor, depth = self.path.len(), "backtrack");
            }
        }

        Ok((DfsOutcome::NotFound, self.stats))
    }
}

/// Run depth-first search from `start`.
///
/// Each cursor evaluation counts as one expansion against
/// `policy.max_expansions`.
///
/// # Errors
///
/// Returns [`SearchError::SearchExhausted`] with
/// [`ExhaustionCause::ExpansionBudget`] if the budget runs out first.
pub fn depth_first(
    start: StackState,
    model: &dyn TransitionModel,
    policy: &SearchPolicy,
) -> Result<(DfsOutcome, SearchStats), SearchError> {
    DepthFirst {
        model,
        max_expansions: policy.max_expansions,
        visited: BTreeSet::new(),
        path: Vec::new(),
        stats: SearchStats::default(),
    }
    .run(start)
}
