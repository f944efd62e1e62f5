//! Interactive session over any line reader and writer.
//!
//! ```text
//! Welcome to Pancake Sort! ...
//! Available Algorithms:
//!   ...menu...
//! Please enter the order of pancakes ... : 2143a
//! Starting Stack: 2 1 4 3
//! A* Search Solution:
//! 21|43 g=0, h=4
//! ...
//!
//! Continue? Press The Enter Key...
//! ```
//!
//! Invalid lines re-prompt. `q` at the request prompt or the continue prompt
//! ends the session, as does end of input.

use std::io::{self, BufRead, Write};

use pancake_search::Algorithm;
use tracing::{debug, warn};

use crate::config::HarnessConfig;
use crate::input::{parse_line, InputLine};
use crate::runner::run_request;

pub const WELCOME: &str =
    "Welcome to Pancake Sort! Please follow the prompts below. To quit enter q at any point.";
pub const REQUEST_PROMPT: &str = "Please enter the order of pancakes (1-4) followed by the desired algorithm code e.g. 1234a: ";
pub const INVALID_INPUT: &str = "Incorrect input format, please try again...";
pub const CONTINUE_PROMPT: &str = "Continue? Press The Enter Key...";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `q`.
    Quit,
    /// The input ran out.
    EndOfInput,
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub solved: usize,
    pub failed: usize,
    pub rejected_lines: usize,
}

/// An interactive session.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: HarnessConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, config: HarnessConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the session, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the reader or writer. Input and search
    /// errors are reported to the writer and do not end the session.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary {
            end: SessionEnd::EndOfInput,
            solved: 0,
            failed: 0,
            rejected_lines: 0,
        };
        writeln!(self.output, "{WELCOME}")?;

        loop {
            self.write_menu()?;

            let request = loop {
                let Some(line) = self.prompt(REQUEST_PROMPT)? else {
                    return Ok(summary);
                };
                match parse_line(&line) {
                    Ok(InputLine::Quit) => {
                        summary.end = SessionEnd::Quit;
                        return Ok(summary);
                    }
                    Ok(InputLine::Request(request)) => break request,
                    Err(err) => {
                        debug!(line = line.trim_end(), error = %err, "rejected input line");
                        summary.rejected_lines += 1;
                        writeln!(self.output, "{INVALID_INPUT}")?;
                    }
                }
            };

            writeln!(self.output, "Starting Stack: {}", request.spaced_start())?;
            match run_request(&request, &self.config) {
                Ok(outcome) => {
                    summary.solved += 1;
                    writeln!(self.output, "{}", outcome.heading())?;
                    for line in outcome.trace_lines() {
                        writeln!(self.output, "{line}")?;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "request failed");
                    summary.failed += 1;
                    writeln!(self.output, "No solution: {err}")?;
                }
            }
            writeln!(self.output)?;

            match self.prompt(CONTINUE_PROMPT)? {
                None => return Ok(summary),
                Some(line) if matches!(line.trim(), "q" | "Q") => {
                    summary.end = SessionEnd::Quit;
                    return Ok(summary);
                }
                Some(_) => {}
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available Algorithms: ")?;
        for (algorithm, label) in Algorithm::ALL.iter().zip(["DFS", "UCS", "Greedy", "A*"]) {
            writeln!(self.output, "\t {} - {label} ", algorithm.selector())?;
        }
        writeln!(self.output)
    }

    /// Print `prompt` without a newline and read one line. `None` at EOF.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
