//! Moves module: successor generation over [`StackState`].
//!
//! Depends on `stack` only.
//!
//! [`StackState`]: crate::stack::state::StackState

pub mod flip;
