use super::evaluate::{evaluate, LayoutReport};
use super::metric::{Metric, MetricValue};
use crate::style::CommitmentStyle;
use crate::LayoutError;

/// Evaluation boundary used by the selector and the sweeper.
///
/// Implementations must be stateless per call: the orchestration may invoke
/// them in any order and, with the `parallel` feature, from several threads.
pub trait LayoutSource: Sync {
    fn evaluate(
        &self,
        style: CommitmentStyle,
        leaves: u64,
        fanout: u64,
    ) -> Result<LayoutReport, LayoutError>;

    /// Extracts the ranking value of `metric`. Sources whose records may lack
    /// a field report [`MetricValue::Unavailable`].
    fn metric(&self, report: &LayoutReport, metric: Metric) -> MetricValue {
        metric.value_of(report)
    }
}

/// In-process evaluator backed by [`evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl LayoutSource for Evaluator {
    fn evaluate(
        &self,
        style: CommitmentStyle,
        leaves: u64,
        fanout: u64,
    ) -> Result<LayoutReport, LayoutError> {
        evaluate(style, leaves, fanout)
    }
}

impl<F> LayoutSource for F
where
    F: Fn(CommitmentStyle, u64, u64) -> Result<LayoutReport, LayoutError> + Sync,
{
    fn evaluate(
        &self,
        style: CommitmentStyle,
        leaves: u64,
        fanout: u64,
    ) -> Result<LayoutReport, LayoutError> {
        self(style, leaves, fanout)
    }
}
