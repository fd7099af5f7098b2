//! Utility helpers for `commit-layout`.
//! Currently limited to order-preserving batch evaluation.

pub mod parallel;

pub use parallel::{map_ordered, parallelism_enabled, set_parallelism, ParallelismGuard};
