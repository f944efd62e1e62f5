//! Proof module: canonical JSON and content hashing for search reports.
//!
//! Depends on nothing else in the kernel; callers pass in bytes or JSON.

pub mod canon;
pub mod hash;
