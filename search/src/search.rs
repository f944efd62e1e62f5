//! Search entry point.

use pancake_kernel::stack::state::StackState;
use tracing::{info, info_span, warn};

use crate::algorithm::Algorithm;
use crate::best_first::{best_entry, round_sweep};
use crate::contract::{PrefixFlipModel, TransitionModel};
use crate::dfs::{depth_first, DfsOutcome};
use crate::error::{ExhaustionCause, SearchError};
use crate::policy::{ExpansionMode, SearchPolicy};

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States expanded (DFS: cursor evaluations).
    pub expansions: u64,
    /// Completed or interrupted round-sweep rounds. Zero for other modes.
    pub rounds: u64,
    /// Largest fringe size observed (DFS: deepest path).
    pub frontier_high_water: u64,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Expansion mode used, `None` for depth-first search.
    pub mode: Option<ExpansionMode>,
    /// States from the start state to the goal, inclusive.
    pub path: Vec<StackState>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// First state on the path.
    #[must_use]
    pub fn start(&self) -> Option<&StackState> {
        self.path.first()
    }

    /// Last state on the path (the goal).
    #[must_use]
    pub fn goal(&self) -> Option<&StackState> {
        self.path.last()
    }

    /// Sum of the move costs along the path.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.path
            .windows(2)
            .map(|pair| pair[0].move_cost(&pair[1]))
            .sum()
    }

    /// Number of flips on the path.
    #[must_use]
    pub fn flip_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `algorithm` from `start` over the prefix-flip moves.
///
/// # Errors
///
/// See [`run_search_with`].
pub fn run_search(
    algorithm: Algorithm,
    start: StackState,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    run_search_with(algorithm, start, &PrefixFlipModel, policy)
}

/// Run `algorithm` from `start` over an injected transition model.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation. No search
///   step is taken.
/// - [`SearchError::SearchExhausted`] if no goal was adopted: the fringe
///   emptied, DFS backtracked past the start, or the budget ran out.
pub fn run_search_with(
    algorithm: Algorithm,
    start: StackState,
    model: &dyn TransitionModel,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;

    let span = info_span!("search", algorithm = algorithm.slug(), %start);
    let _guard = span.enter();

    let outcome = match algorithm.score_rule() {
        None => depth_first(start, model, policy).and_then(|(outcome, stats)| match outcome {
            DfsOutcome::Found(path) => Ok((None, path, stats)),
            DfsOutcome::NotFound => Err(SearchError::SearchExhausted {
                algorithm,
                cause: ExhaustionCause::BacktrackedPastRoot,
                expansions: stats.expansions,
            }),
        }),
        Some(rule) => {
            let mode = policy.expansion_mode;
            let run = match mode {
                ExpansionMode::RoundSweep => round_sweep,
                ExpansionMode::BestEntry => best_entry,
            };
            run(algorithm, rule, start, model, policy).map(|(path, stats)| (Some(mode), path, stats))
        }
    };

    match outcome {
        Ok((mode, path, stats)) => {
            info!(
                flips = path.len().saturating_sub(1),
                expansions = stats.expansions,
                rounds = stats.rounds,
                "goal adopted"
            );
            Ok(SearchResult {
                algorithm,
                mode,
                path,
                stats,
            })
        }
        Err(err) => {
            warn!(error = %err, "search exhausted");
            Err(err)
        }
    }
}
