//! Search report: a canonical JSON summary of one solved search.
//!
//! The JSON form is built by hand with `serde_json::json!` so field names
//! and types stay fixed regardless of internal struct layout. Bytes come
//! from the kernel canonicalizer (sorted keys, compact, integers only) and
//! the digest is domain-separated with [`DOMAIN_SEARCH_REPORT`].

use pancake_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pancake_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT, DOMAIN_STACK_STATE,
};
use pancake_kernel::stack::state::StackState;
use serde_json::{json, Value};
use thiserror::Error;

use crate::algorithm::Algorithm;
use crate::policy::ExpansionMode;
use crate::search::{SearchResult, SearchStats};
use crate::trace::render_lines;

/// Errors from report serialization or digest decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("report canonicalization failed: {0}")]
    Canon(#[from] CanonError),
    #[error("report digest is not a 32-byte hex string")]
    InvalidDigest,
    #[error("cannot report an empty path")]
    EmptyPath,
}

/// Everything a caller needs to print or persist one solved search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub mode: Option<ExpansionMode>,
    pub start: StackState,
    pub goal: StackState,
    pub path: Vec<StackState>,
    pub trace: Vec<String>,
    pub total_cost: u32,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Build a report from a search result.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyPath`] if the result has no states.
    pub fn from_result(result: &SearchResult) -> Result<Self, ReportError> {
        let (Some(start), Some(goal)) = (result.start(), result.goal()) else {
            return Err(ReportError::EmptyPath);
        };
        Ok(Self {
            algorithm: result.algorithm,
            mode: result.mode,
            start: *start,
            goal: *goal,
            path: result.path.clone(),
            trace: render_lines(&result.path),
            total_cost: result.total_cost(),
            stats: result.stats,
        })
    }

    /// Content hash of the start state's identity bytes.
    #[must_use]
    pub fn start_fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_STACK_STATE, &self.start.identity_bytes())
    }

    /// JSON form of the report.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let path: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        json!({
            "algorithm": self.algorithm.slug(),
            "expansion_mode": self.mode.map(ExpansionMode::as_str),
            "start": self.start.to_string(),
            "start_fingerprint": self.start_fingerprint().as_str(),
            "goal": self.goal.to_string(),
            "path": path,
            "trace": self.trace,
            "total_cost": self.total_cost,
            "flips": self.path.len().saturating_sub(1),
            "stats": {
                "expansions": self.stats.expansions,
                "rounds": self.stats.rounds,
                "frontier_high_water": self.stats.frontier_high_water,
            },
        })
    }

    /// Canonical JSON bytes of [`SearchReport::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Canon`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// Domain-separated digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }
}

/// Decode the hex part of a `sha256:` digest into raw bytes.
///
/// # Errors
///
/// Returns [`ReportError::InvalidDigest`] if the algorithm is not `sha256`
/// or the digest is not 64 hex characters.
pub fn digest_bytes(hash: &ContentHash) -> Result<[u8; 32], ReportError> {
    if hash.algorithm() != "sha256" {
        return Err(ReportError::InvalidDigest);
    }
    let mut out = [0u8; 32];
    hex::decode_to_slice(hash.hex_digest(), &mut out).map_err(|_| ReportError::InvalidDigest)?;
    Ok(out)
}
