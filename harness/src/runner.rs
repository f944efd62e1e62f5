//! Runner: solve one request and package the result.
//!
//! Report files hold exactly the canonical JSON bytes of a
//! [`SearchReport`]. Reading one back is fail-closed: the file must parse
//! and re-canonicalize to the same bytes.

use std::fs;
use std::path::{Path, PathBuf};

use pancake_kernel::proof::canon::canonical_json_bytes;
use pancake_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use pancake_search::report::ReportError;
use pancake_search::{
    format_trace, run_search, SearchError, SearchReport, SearchResult, TraceRecord,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::input::Request;

/// Error from running a request or handling its report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report file {} is not valid JSON: {detail}", .path.display())]
    Parse { path: PathBuf, detail: String },
    #[error("report file {} is not in canonical form", .path.display())]
    NonCanonical { path: PathBuf },
}

/// A solved request.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub request: Request,
    pub result: SearchResult,
    pub trace: Vec<TraceRecord>,
    pub report: SearchReport,
}

impl RunOutcome {
    /// Heading printed above the trace, e.g. `A* Search Solution: `.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} Solution: ", self.request.algorithm)
    }

    /// Rendered trace lines.
    #[must_use]
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }
}

/// Solve `request` under `config`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails and
/// [`RunError::Report`] if the report cannot be built.
pub fn run_request(request: &Request, config: &HarnessConfig) -> Result<RunOutcome, RunError> {
    let policy = config.policy();
    debug!(
        start = %request.start,
        algorithm = request.algorithm.slug(),
        max_expansions = policy.max_expansions,
        mode = %policy.expansion_mode,
        "running request"
    );
    let result = run_search(request.algorithm, request.start, &policy)?;
    let trace = format_trace(&result.path);
    let report = SearchReport::from_result(&result)?;
    Ok(RunOutcome {
        request: *request,
        result,
        trace,
        report,
    })
}

/// Write the canonical JSON of `report` to `path`, returning its digest.
///
/// # Errors
///
/// Returns [`RunError::Report`] if canonicalization fails and
/// [`RunError::Io`] if the file cannot be written.
pub fn write_report(path: &Path, report: &SearchReport) -> Result<ContentHash, RunError> {
    let bytes = report.to_canonical_json_bytes()?;
    fs::write(path, &bytes).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = canonical_hash(DOMAIN_SEARCH_REPORT, &bytes);
    info!(path = %path.display(), %digest, "report written");
    Ok(digest)
}

/// Read a report file, check that it is canonical, and return its JSON and
/// digest.
///
/// # Errors
///
/// - [`RunError::Io`] if the file cannot be read.
/// - [`RunError::Parse`] if it is not JSON.
/// - [`RunError::NonCanonical`] if re-canonicalizing changes the bytes.
pub fn read_report(path: &Path) -> Result<(Value, ContentHash), RunError> {
    let bytes = fs::read(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| RunError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let canonical = canonical_json_bytes(&value).map_err(ReportError::from)?;
    if canonical != bytes {
        return Err(RunError::NonCanonical {
            path: path.to_path_buf(),
        });
    }
    Ok((value, canonical_hash(DOMAIN_SEARCH_REPORT, &bytes)))
}
