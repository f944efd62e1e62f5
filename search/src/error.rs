//! Typed search errors.
//!
//! Every search call either adopts a goal path or returns one of these.
//! None of them are retried.

use std::fmt;

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Typed failure of a search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No goal was adopted before the search ran out of work or budget.
    #[error("{algorithm} exhausted after {expansions} expansions: {cause}")]
    SearchExhausted {
        algorithm: Algorithm,
        cause: ExhaustionCause,
        expansions: u64,
    },
    /// Pre-flight policy validation failed; no search steps were taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

/// Why a search stopped without a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionCause {
    /// The fringe emptied (UCS, Greedy, A*).
    FringeEmpty,
    /// Depth-first search backtracked past the start state.
    BacktrackedPastRoot,
    /// `max_expansions` was reached.
    ExpansionBudget { limit: u64 },
}

impl fmt::Display for ExhaustionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FringeEmpty => f.write_str("fringe is empty"),
            Self::BacktrackedPastRoot => f.write_str("backtracked past the start state"),
            Self::ExpansionBudget { limit } => write!(f, "expansion budget of {limit} reached"),
        }
    }
}
