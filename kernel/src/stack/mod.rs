//! Stack module: disc symbols and stack permutations.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod pancake;
pub mod state;
