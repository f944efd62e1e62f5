//! `pancake`: solve a four-disc pancake stack.
//!
//! With a request argument (`pancake 2143a`) it solves once and exits;
//! without one it runs the interactive session on stdin/stdout.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pancake_harness::cli::{log_directive, run_once, OneShotOptions};
use pancake_harness::config::HarnessConfig;
use pancake_harness::session::Session;
use pancake_search::ExpansionMode;
use tracing_subscriber::{fmt, EnvFilter};

/// Pancake sorting with DFS, UCS, Greedy and A* search
#[derive(Parser)]
#[command(name = "pancake")]
#[command(version)]
#[command(about = "Sort a stack of pancakes with prefix flips")]
struct Cli {
    /// Request such as `2143a`: four discs then d, u, g or a.
    /// Starts an interactive session when omitted.
    request: Option<String>,

    /// Print the canonical JSON report instead of the trace
    #[arg(long)]
    json: bool,

    /// Also write the canonical JSON report to FILE
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Expansion budget
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Expansion mode for UCS, Greedy and A* (round-sweep or best-entry)
    #[arg(long)]
    mode: Option<ExpansionMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(log_directive(verbose, rust_log.as_deref()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = HarnessConfig {
        max_expansions: cli.max_expansions,
        expansion_mode: cli.mode,
    };

    match cli.request {
        Some(line) => {
            let options = OneShotOptions {
                config,
                json: cli.json,
                output: cli.output,
            };
            let code = run_once(
                &line,
                &options,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
            ExitCode::from(code)
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            match Session::new(stdin, stdout, config).run() {
                Ok(summary) => {
                    tracing::info!(
                        solved = summary.solved,
                        failed = summary.failed,
                        rejected = summary.rejected_lines,
                        "session ended"
                    );
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
