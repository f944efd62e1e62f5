//! The four search strategies and how each one scores a fringe entry.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
}

/// How a fringe entry is scored. Lower scores are expanded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    /// Cumulative path cost `g`.
    Cost,
    /// Heuristic of the entry's last state `h`.
    Heuristic,
    /// `g + h`.
    CostPlusHeuristic,
}

impl ScoreRule {
    /// Combine `g` and `h` under this rule.
    #[must_use]
    pub const fn score(self, g: u32, h: u32) -> u32 {
        match self {
            Self::Cost => g,
            Self::Heuristic => h,
            Self::CostPlusHeuristic => g.saturating_add(h),
        }
    }
}

/// Unrecognized algorithm name or selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{input}': expected one of d, u, g, a")]
pub struct ParseAlgorithmError {
    pub input: String,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 4] = [Self::DepthFirst, Self::UniformCost, Self::Greedy, Self::AStar];

    /// Single-character selector used on input lines.
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::DepthFirst => 'd',
            Self::UniformCost => 'u',
            Self::Greedy => 'g',
            Self::AStar => 'a',
        }
    }

    /// Inverse of [`Algorithm::selector`].
    #[must_use]
    pub const fn from_selector(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::DepthFirst),
            'u' => Some(Self::UniformCost),
            'g' => Some(Self::Greedy),
            'a' => Some(Self::AStar),
            _ => None,
        }
    }

    /// Stable machine-readable name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Fringe scoring rule. `None` for depth-first, which keeps no fringe.
    #[must_use]
    pub const fn score_rule(self) -> Option<ScoreRule> {
        match self {
            Self::DepthFirst => None,
            Self::UniformCost => Some(ScoreRule::Cost),
            Self::Greedy => Some(ScoreRule::Heuristic),
            Self::AStar => Some(ScoreRule::CostPlusHeuristic),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DepthFirst => "Depth First Search",
            Self::UniformCost => "Uniform Cost Search",
            Self::Greedy => "Greedy Search",
            Self::AStar => "A* Search",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts a selector (`a`) or a slug (`astar`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let mut chars = lowered.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(algorithm) = Self::from_selector(c) {
                return Ok(algorithm);
            }
        }
        Self::ALL
            .into_iter()
            .find(|a| a.slug() == lowered)
            .ok_or_else(|| ParseAlgorithmError {
                input: s.to_string(),
            })
    }
}
