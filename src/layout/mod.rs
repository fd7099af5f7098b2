//! Layout evaluation and the orchestration built on top of it.
//!
//! [`evaluate`] is the single unit of work: one style, one leaf count and one
//! fanout produce a [`LayoutReport`]. [`select_best`] and [`sweep`] repeat it
//! across parameter grids through the [`LayoutSource`] boundary and reduce the
//! results. A failing candidate is logged and recorded as a
//! [`SkippedCandidate`]; only a batch without any success is an error.

mod evaluate;
mod metric;
mod select;
mod source;
mod sweep;

pub use evaluate::{evaluate, LayoutReport};
pub use metric::{Metric, MetricValue};
pub use select::{select_best, BestSelection, Candidate};
pub use source::{Evaluator, LayoutSource};
pub use sweep::{generate_leaf_counts, sweep, RawLine, Sweep, SweepRow, SweepSummary};

use crate::LayoutError;

/// Candidate that failed evaluation and was excluded from a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    pub leaves: u64,
    pub fanout: u64,
    pub error: LayoutError,
}
