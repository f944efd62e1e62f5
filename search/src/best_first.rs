//! The shared skeleton behind uniform-cost, greedy and A* search.
//!
//! The three algorithms differ only in their [`ScoreRule`]. Two expansion
//! modes are provided:
//!
//! - [`round_sweep`] expands every entry present when a round starts, indexing
//!   into the live fringe while it shrinks and grows, then re-sorts. This
//!   matches the golden path table, ties included.
//! - [`best_entry`] pops one best entry at a time and never re-expands a
//!   state. It reaches a goal with far fewer expansions but orders ties
//!   differently.

use pancake_kernel::stack::state::StackState;
use tracing::{debug, trace};

use crate::algorithm::{Algorithm, ScoreRule};
use crate::contract::TransitionModel;
use crate::error::{ExhaustionCause, SearchError};
use crate::frontier::{BestEntryFrontier, RoundFringe};
use crate::node::FringeEntry;
use crate::policy::SearchPolicy;
use crate::search::SearchStats;

fn exhausted(algorithm: Algorithm, cause: ExhaustionCause, stats: &SearchStats) -> SearchError {
    SearchError::SearchExhausted {
        algorithm,
        cause,
        expansions: stats.expansions,
    }
}

fn check_budget(
    algorithm: Algorithm,
    policy: &SearchPolicy,
    stats: &SearchStats,
) -> Result<(), SearchError> {
    if stats.expansions >= policy.max_expansions {
        return Err(exhausted(
            algorithm,
            ExhaustionCause::ExpansionBudget {
                limit: policy.max_expansions,
            },
            stats,
        ));
    }
    Ok(())
}

/// Round-sweep expansion.
///
/// Each round snapshots the fringe length `L` and walks `i` over `0..L`
/// against the live fringe:
///
/// - a goal at `i == 0` is adopted and ends the search;
/// - a goal at any other index ends the round early;
/// - any other entry is replaced by one extended entry per successor
///   (appended at the end, then the original is removed from index `i`).
///
/// After each round the fringe is sorted by score, larger last state first
/// on ties.
///
/// # Errors
///
/// [`SearchError::SearchExhausted`] if the fringe empties or the expansion
/// budget runs out.
pub fn round_sweep(
    algorithm: Algorithm,
    rule: ScoreRule,
    start: StackState,
    model: &dyn TransitionModel,
    policy: &SearchPolicy,
) -> Result<(Vec<StackState>, SearchStats), SearchError> {
    let mut fringe = RoundFringe::new(FringeEntry::root(start));
    let mut stats = SearchStats::default();

    loop {
        let snapshot = fringe.len();
        if snapshot == 0 {
            return Err(exhausted(algorithm, ExhaustionCause::FringeEmpty, &stats));
        }
        stats.rounds += 1;

        for index in 0..snapshot {
            let Some(entry) = fringe.get(index).cloned() else {
                break;
            };

            if entry.last().is_goal() {
                if index == 0 {
                    stats.frontier_high_water = fringe.high_water() as u64;
                    return Ok((entry.path.to_vec(), stats));
                }
                trace!(index, round = stats.rounds, "goal behind cheaper entries; round ends");
                break;
            }

            check_budget(algorithm, policy, &stats)?;
            stats.expansions += 1;
            for transition in model.expand(entry.last()) {
                fringe.push(entry.extend(&transition));
            }
            fringe.remove(index);
        }

        fringe.sort_round(rule);
        stats.frontier_high_water = fringe.high_water() as u64;
        debug!(
            round = stats.rounds,
            fringe = fringe.len(),
            expansions = stats.expansions,
            "round complete"
        );
    }
}

/// Best-entry expansion.
///
/// Pops the lowest-keyed entry; adopts it if its last state is the goal,
/// skips it if that state was already expanded, and otherwise expands it,
/// pushing successors that have not been expanded yet.
///
/// # Errors
///
/// [`SearchError::SearchExhausted`] if the frontier empties or the
/// expansion budget runs out.
pub fn best_entry(
    algorithm: Algorithm,
    rule: ScoreRule,
    start: StackState,
    model: &dyn TransitionModel,
    policy: &SearchPolicy,
) -> Result<(Vec<StackState>, SearchStats), SearchError> {
    let mut frontier = BestEntryFrontier::new(rule);
    let mut stats = SearchStats::default();
    frontier.push(FringeEntry::root(start));

    while let Some(entry) = frontier.pop() {
        let last = *entry.last();
        if last.is_goal() {
            stats.frontier_high_water = frontier.high_water() as u64;
            return Ok((entry.path.to_vec(), stats));
        }
        if !frontier.mark_expanded(last) {
            continue;
        }

        check_budget(algorithm, policy, &stats)?;
        stats.expansions += 1;
        for transition in model.expand(&last) {
            if !frontier.is_expanded(&transition.child) {
                frontier.push(entry.extend(&transition));
            }
        }
        trace!(%last, score = entry.score(rule), frontier = frontier.len(), "expanded");
    }

    stats.frontier_high_water = frontier.high_water() as u64;
    Err(exhausted(algorithm, ExhaustionCause::FringeEmpty, &stats))
}
