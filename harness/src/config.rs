//! Harness configuration: optional overrides on top of the search defaults.

use pancake_search::{ExpansionMode, SearchPolicy};

/// Overrides applied to [`SearchPolicy::default`]. `None` keeps the default.
///
/// The CLI fills this from its flags; tests use it to exercise budget
/// exhaustion without touching the search crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Expansion budget override.
    pub max_expansions: Option<u64>,
    /// Expansion mode override for UCS, Greedy and A*.
    pub expansion_mode: Option<ExpansionMode>,
}

impl HarnessConfig {
    /// Resolve the overrides into a concrete policy.
    ///
    /// The result is not validated here; the search validates it before
    /// taking any step.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        let defaults = SearchPolicy::default();
        SearchPolicy {
            max_expansions: self.max_expansions.unwrap_or(defaults.max_expansions),
            expansion_mode: self.expansion_mode.unwrap_or(defaults.expansion_mode),
        }
    }
}
