//! Pancake Kernel: stack states and the moves between them.
//!
//! # API Surface
//!
//! - [`stack::state::StackState`] -- a validated stack permutation with
//!   `flip`, `move_cost`, `heuristic`, `is_goal` and `children`
//! - [`moves::flip::expand_flips`] -- ordered successors with their costs
//! - [`proof::canon::canonical_json_bytes`] and [`proof::hash::canonical_hash`]
//!   -- deterministic bytes and digests for search reports
//!
//! # Module Dependency Direction
//!
//! `stack` ← `moves`; `proof` stands alone.
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod moves;
pub mod proof;
pub mod stack;
