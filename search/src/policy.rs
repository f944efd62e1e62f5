//! Search policy: expansion budget and expansion mode.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Default hard cap on node expansions.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 10_000;

/// Budget and mode configuration for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. Must be non-zero.
    pub max_expansions: u64,
    /// How UCS, Greedy and A* consume their fringe. Ignored by DFS.
    pub expansion_mode: ExpansionMode,
}

impl SearchPolicy {
    /// Validate the policy before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            expansion_mode: ExpansionMode::RoundSweep,
        }
    }
}

/// Fringe consumption strategy for the scored searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    /// Expand every entry present at the start of a round, then re-sort.
    /// Matches the golden path table, including its tie order.
    #[default]
    RoundSweep,
    /// Pop and expand only the single best entry per step, with an
    /// expanded-state set. Paths never repeat a state.
    BestEntry,
}

impl ExpansionMode {
    /// Stable machine-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoundSweep => "round_sweep",
            Self::BestEntry => "best_entry",
        }
    }
}

impl fmt::Display for ExpansionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpansionMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").as_str() {
            "round_sweep" => Ok(Self::RoundSweep),
            "best_entry" => Ok(Self::BestEntry),
            other => Err(SearchError::InvalidPolicy {
                detail: format!("unknown expansion mode: {other}"),
            }),
        }
    }
}
