//! Pancake Harness: the user-facing layer over the search crate.
//!
//! Parses request lines, resolves configuration into a search policy, runs
//! the search, and renders traces and reports. The interactive session and
//! the `pancake` binary are both built from these pieces.
//!
//! The harness does not implement search logic; it delegates to
//! `pancake_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod input;
pub mod runner;
pub mod session;
