use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::evaluate::LayoutReport;
use crate::LayoutError;

/// Size metrics a layout can be ranked by. Smaller is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    TreeHeight,
    TotalNodes,
    ProofBranchLength,
    PerProofBytes,
    #[default]
    TotalCommitmentBytes,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::TreeHeight,
        Metric::TotalNodes,
        Metric::ProofBranchLength,
        Metric::PerProofBytes,
        Metric::TotalCommitmentBytes,
    ];

    /// Field name of the metric inside the interchange record.
    pub const fn key(self) -> &'static str {
        match self {
            Metric::TreeHeight => "treeHeight",
            Metric::TotalNodes => "totalNodes",
            Metric::ProofBranchLength => "proofBranchLength",
            Metric::PerProofBytes => "perProofBytes",
            Metric::TotalCommitmentBytes => "totalCommitmentBytes",
        }
    }

    /// Reads the metric from a report.
    pub fn value_of(self, report: &LayoutReport) -> MetricValue {
        let value = match self {
            Metric::TreeHeight => u64::from(report.tree_height),
            Metric::TotalNodes => report.total_nodes,
            Metric::ProofBranchLength => u64::from(report.proof_branch_length),
            Metric::PerProofBytes => report.per_proof_bytes,
            Metric::TotalCommitmentBytes => report.total_commitment_bytes,
        };
        MetricValue::Finite(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = LayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.key() == value)
            .ok_or_else(|| {
                LayoutError::InvalidInput(format!(
                    "unknown metric `{value}` (expected one of treeHeight, totalNodes, \
                     proofBranchLength, perProofBytes, totalCommitmentBytes)"
                ))
            })
    }
}

/// Ranked value of a metric.
///
/// `Unavailable` orders after every finite value so a candidate lacking the
/// metric is never preferred over one that has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricValue {
    Finite(u64),
    Unavailable,
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Finite(value) => value as f64,
            MetricValue::Unavailable => f64::INFINITY,
        }
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            MetricValue::Finite(value) => Some(value),
            MetricValue::Unavailable => None,
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Finite(value) => serializer.serialize_u64(*value),
            MetricValue::Unavailable => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_ranks_last() {
        assert!(MetricValue::Finite(u64::MAX) < MetricValue::Unavailable);
        assert!(MetricValue::Finite(3) < MetricValue::Finite(4));
        assert_eq!(MetricValue::Unavailable.as_f64(), f64::INFINITY);
    }

    #[test]
    fn metric_keys_parse() {
        for metric in Metric::ALL {
            assert_eq!(metric.key().parse::<Metric>(), Ok(metric));
        }
        assert!("proofBytes".parse::<Metric>().is_err());
    }
}
