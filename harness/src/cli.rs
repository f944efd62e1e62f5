//! One-shot mode: solve a single request line and print the result.
//!
//! Exit codes: [`EXIT_SUCCESS`] when the request is solved (or is `q`),
//! [`EXIT_FAILURE`] when the search or report I/O fails, and
//! [`EXIT_INVALID_REQUEST`] when the line does not parse.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::HarnessConfig;
use crate::input::{parse_line, InputLine};
use crate::runner::{run_request, write_report, RunError, RunOutcome};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_REQUEST: u8 = 2;

/// Options for one request.
#[derive(Debug, Clone, Default)]
pub struct OneShotOptions {
    pub config: HarnessConfig,
    /// Print the canonical JSON report instead of the trace.
    pub json: bool,
    /// Also write the canonical JSON report here.
    pub output: Option<PathBuf>,
}

/// Solve `line`, writing results to `out` and diagnostics to `err`.
/// Returns the process exit code.
pub fn run_once<W: Write, E: Write>(
    line: &str,
    options: &OneShotOptions,
    out: &mut W,
    err: &mut E,
) -> u8 {
    match solve(line, options, out, err) {
        Ok(code) => code,
        Err(e) => {
            // stderr is the last resort; nothing to do if it fails too.
            let _ = writeln!(err, "error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Write the starting stack, heading and trace lines for `outcome`.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_trace<W: Write>(out: &mut W, outcome: &RunOutcome) -> io::Result<()> {
    writeln!(out, "Starting Stack: {}", outcome.request.spaced_start())?;
    writeln!(out, "{}", outcome.heading())?;
    for line in outcome.trace_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Log filter directive: `rust_log` when set and non-empty, otherwise the
/// level chosen by the `-v` count.
#[must_use]
pub fn log_directive(verbose: u8, rust_log: Option<&str>) -> String {
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directive.to_owned();
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
    .to_owned()
}

fn stream_error(stream: &str, source: io::Error) -> RunError {
    RunError::Io {
        path: PathBuf::from(stream),
        source,
    }
}

fn solve<W: Write, E: Write>(
    line: &str,
    options: &OneShotOptions,
    out: &mut W,
    err: &mut E,
) -> Result<u8, RunError> {
    let request = match parse_line(line) {
        Ok(InputLine::Request(request)) => request,
        Ok(InputLine::Quit) => return Ok(EXIT_SUCCESS),
        Err(e) => {
            writeln!(err, "invalid request '{}': {e}", line.trim())
                .map_err(|source| stream_error("<stderr>", source))?;
            return Ok(EXIT_INVALID_REQUEST);
        }
    };

    let outcome = run_request(&request, &options.config)?;
    if options.json {
        let bytes = outcome.report.to_canonical_json_bytes()?;
        out.write_all(&bytes)
            .and_then(|()| writeln!(out))
            .map_err(|source| stream_error("<stdout>", source))?;
    } else {
        write_trace(out, &outcome).map_err(|source| stream_error("<stdout>", source))?;
    }

    if let Some(path) = &options.output {
        let digest = write_report(path, &outcome.report)?;
        writeln!(err, "report written to {} ({digest})", path.display())
            .map_err(|source| stream_error("<stderr>", source))?;
    }
    Ok(EXIT_SUCCESS)
}
