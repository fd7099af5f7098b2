//! Core library entry point for `commit-layout`.
//!
//! The crate estimates the shape and byte footprint of k-ary Merkle-style
//! state commitment trees. Nothing is hashed and no tree is materialised;
//! every routine is pure arithmetic over leaf counts, fanouts and the digest
//! size of a [`CommitmentStyle`].
//!
//! Two independent sizing formulations are exposed:
//!
//! * [`shape::estimate`] reduces the leaf level by ceiling division until a
//!   single root remains and reports the exact (ragged) per-level counts.
//! * [`shape::size_padded`] pads the leaf level to the next power of the
//!   arity and reports the closed-form node counts of the full tree.
//!
//! The [`layout`] module builds on the former to evaluate single
//! configurations, pick the best fanout under a [`Metric`] and sweep whole
//! parameter grids.

pub mod config;
pub mod layout;
pub mod report;
pub mod shape;
pub mod style;
pub mod utils;

pub use layout::{
    evaluate, generate_leaf_counts, select_best, sweep, BestSelection, Candidate, Evaluator,
    LayoutReport, LayoutSource, Metric, MetricValue, SkippedCandidate, Sweep, SweepRow,
};
pub use shape::{estimate, size_padded, Fanout, PaddedLayout, TreeShape};
pub use style::{CommitmentStyle, StyleProfile};

/// Error enumeration shared by every layer of the estimator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A caller supplied value is outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The requested style key is not part of the catalog.
    #[error("unknown style `{0}` (expected one of aztec, zama, soundness)")]
    UnknownStyle(String),
    /// A single candidate could not be evaluated by the evaluation boundary.
    #[error("evaluation failed for leaves={leaves}, fanout={fanout}: {reason}")]
    EvaluationFailure {
        leaves: u64,
        fanout: u64,
        reason: String,
    },
    /// Every candidate handed to the selector failed.
    #[error("no successful layouts computed")]
    NoViableCandidate,
    /// Every (leaves, fanout) pair of a sweep failed.
    #[error("no data rows collected")]
    NoDataCollected,
    /// Internal arithmetic produced an impossible layout.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LayoutError::InvalidInput(reason.into())
    }
}
