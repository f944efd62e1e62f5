//! Pancake Search: the four search strategies over prefix-flip moves.
//!
//! Depends only on `pancake_kernel`; the harness crate depends on this one.
//!
//! # Crate dependency graph
//!
//! ```text
//! pancake_kernel  ←  pancake_search  ←  pancake_harness
//! (stack, flips)     (search, trace)     (input, session, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Algorithm`]: DFS, UCS, Greedy, A*
//! - [`SearchPolicy`]: expansion budget and expansion mode
//! - [`TransitionModel`]: injectable successor generator
//! - [`SearchResult`]: adopted path and counters
//! - [`TraceRecord`]: one rendered step of a solution path
//! - [`SearchReport`]: canonical JSON summary with a content digest

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod best_first;
pub mod contract;
pub mod dfs;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;
pub mod trace;

pub use algorithm::Algorithm;
pub use contract::{PrefixFlipModel, TransitionModel};
pub use error::{ExhaustionCause, SearchError};
pub use policy::{ExpansionMode, SearchPolicy};
pub use report::SearchReport;
pub use search::{run_search, run_search_with, SearchResult, SearchStats};
pub use trace::{format_trace, render_lines, TraceRecord};
