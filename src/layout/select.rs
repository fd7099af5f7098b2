use serde::Serialize;
use tracing::{info, warn};

use super::evaluate::LayoutReport;
use super::metric::{Metric, MetricValue};
use super::source::LayoutSource;
use super::SkippedCandidate;
use crate::style::CommitmentStyle;
use crate::utils::map_ordered;
use crate::LayoutError;

/// Successfully evaluated fanout together with its ranking value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub fanout: u64,
    pub metric_value: MetricValue,
    #[serde(skip)]
    pub report: LayoutReport,
}

/// Outcome of [`select_best`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSelection {
    pub leaves: u64,
    pub style: CommitmentStyle,
    pub metric: Metric,
    /// Successful candidates in input fanout order.
    pub candidates: Vec<Candidate>,
    /// Failed candidates in input fanout order.
    pub skipped: Vec<SkippedCandidate>,
    chosen: usize,
}

impl BestSelection {
    /// Winning candidate.
    pub fn best(&self) -> &Candidate {
        &self.candidates[self.chosen]
    }

    pub fn chosen_fanout(&self) -> u64 {
        self.best().fanout
    }

    pub fn metric_value(&self) -> MetricValue {
        self.best().metric_value
    }

    /// Returns `true` when `candidate` carries the winning fanout. Repeated
    /// entries of that fanout all match.
    pub fn is_best(&self, candidate: &Candidate) -> bool {
        candidate.fanout == self.chosen_fanout()
    }
}

/// Evaluates every fanout for a fixed leaf count and style and picks the one
/// minimising `metric`.
///
/// Failed evaluations are skipped. The first candidate in `fanouts` order that
/// reaches the minimum wins.
pub fn select_best<S>(
    source: &S,
    leaves: u64,
    style: CommitmentStyle,
    fanouts: &[u64],
    metric: Metric,
) -> Result<BestSelection, LayoutError>
where
    S: LayoutSource + ?Sized,
{
    if fanouts.is_empty() {
        return Err(LayoutError::invalid("at least one fanout is required"));
    }

    let outcomes = map_ordered(fanouts, |&fanout| source.evaluate(style, leaves, fanout));

    let mut candidates = Vec::with_capacity(fanouts.len());
    let mut skipped = Vec::new();
    for (&fanout, outcome) in fanouts.iter().zip(outcomes) {
        match outcome {
            Ok(report) => candidates.push(Candidate {
                fanout,
                metric_value: source.metric(&report, metric),
                report,
            }),
            Err(error) => {
                warn!(leaves, fanout, %error, "skipping fanout");
                skipped.push(SkippedCandidate {
                    leaves,
                    fanout,
                    error,
                });
            }
        }
    }

    // min_by_key keeps the first of several equal minima.
    let chosen = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| candidate.metric_value)
        .map(|(index, _)| index)
        .ok_or(LayoutError::NoViableCandidate)?;

    info!(
        leaves,
        style = %style,
        metric = %metric,
        fanout = candidates[chosen].fanout,
        "selected best layout"
    );

    Ok(BestSelection {
        leaves,
        style,
        metric,
        candidates,
        skipped,
        chosen,
    })
}
