use serde::Serialize;
use tracing::{debug, warn};

use super::evaluate::LayoutReport;
use super::source::LayoutSource;
use super::SkippedCandidate;
use crate::style::CommitmentStyle;
use crate::utils::map_ordered;
use crate::LayoutError;

/// Numeric summary of one evaluated (leaves, fanout) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub leaves: u64,
    pub fanout: u64,
    pub tree_height: u32,
    pub total_nodes: u64,
    pub proof_branch_length: u32,
    pub per_proof_bytes: u64,
    pub total_commitment_bytes: u64,
    #[serde(skip)]
    raw: LayoutReport,
}

impl SweepRow {
    /// Full report the row was derived from.
    pub fn raw(&self) -> &LayoutReport {
        &self.raw
    }

    /// Row for the enumerated `(leaves, fanout)` pair; sizes come from `report`.
    pub fn new(leaves: u64, fanout: u64, report: LayoutReport) -> Self {
        Self {
            leaves,
            fanout,
            tree_height: report.tree_height,
            total_nodes: report.total_nodes,
            proof_branch_length: report.proof_branch_length,
            per_proof_bytes: report.per_proof_bytes,
            total_commitment_bytes: report.total_commitment_bytes,
            raw: report,
        }
    }
}

/// Result table of [`sweep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    pub style: CommitmentStyle,
    /// Leaf counts generated for the sweep, in order.
    pub leaf_counts: Vec<u64>,
    /// Successful rows in (leaf count, fanout) enumeration order.
    pub rows: Vec<SweepRow>,
    /// Failed pairs in enumeration order.
    pub skipped: Vec<SkippedCandidate>,
}

/// Structured summary `{style, rows}` of a sweep.
#[derive(Debug, Serialize)]
pub struct SweepSummary<'a> {
    pub style: CommitmentStyle,
    pub rows: &'a [SweepRow],
}

/// Raw record `{style, leaves, fanout, raw}` of one sweep row.
#[derive(Debug, Serialize)]
pub struct RawLine<'a> {
    pub style: CommitmentStyle,
    pub leaves: u64,
    pub fanout: u64,
    pub raw: &'a LayoutReport,
}

impl Sweep {
    pub fn summary(&self) -> SweepSummary<'_> {
        SweepSummary {
            style: self.style,
            rows: &self.rows,
        }
    }

    pub fn raw_lines(&self) -> impl Iterator<Item = RawLine<'_>> + '_ {
        self.rows.iter().map(move |row| RawLine {
            style: self.style,
            leaves: row.leaves,
            fanout: row.fanout,
            raw: row.raw(),
        })
    }
}

/// Generates the leaf counts of a sweep.
///
/// When both bounds are exact powers of two the counts are `2^p` with `p`
/// advancing by `log_step` from `log2(leaf_min)` up to `log2(leaf_max)`.
/// Otherwise the counts double from `leaf_min` while they stay within
/// `leaf_max` and `log_step` is ignored.
pub fn generate_leaf_counts(
    leaf_min: u64,
    leaf_max: u64,
    log_step: u32,
) -> Result<Vec<u64>, LayoutError> {
    if leaf_min == 0 || leaf_max < leaf_min {
        return Err(LayoutError::invalid(
            "leaf-min must be > 0 and <= leaf-max",
        ));
    }
    if log_step == 0 {
        return Err(LayoutError::invalid("step must be > 0"));
    }

    let mut counts = Vec::new();
    if !(leaf_min.is_power_of_two() && leaf_max.is_power_of_two()) {
        let mut leaves = leaf_min;
        while leaves <= leaf_max {
            counts.push(leaves);
            match leaves.checked_mul(2) {
                Some(next) => leaves = next,
                None => break,
            }
        }
        return Ok(counts);
    }

    let end = leaf_max.trailing_zeros();
    let mut power = leaf_min.trailing_zeros();
    while power <= end {
        counts.push(1u64 << power);
        match power.checked_add(log_step) {
            Some(next) => power = next,
            None => break,
        }
    }
    Ok(counts)
}

/// Evaluates every (leaf count, fanout) pair for `style`.
///
/// Leaf counts form the outer loop and fanouts the inner loop; rows keep that
/// order. Failing pairs are logged and left out of the table.
pub fn sweep<S>(
    source: &S,
    style: CommitmentStyle,
    leaf_min: u64,
    leaf_max: u64,
    log_step: u32,
    fanouts: &[u64],
) -> Result<Sweep, LayoutError>
where
    S: LayoutSource + ?Sized,
{
    let leaf_counts = generate_leaf_counts(leaf_min, leaf_max, log_step)?;
    debug!(?leaf_counts, ?fanouts, style = %style, "starting sweep");

    let pairs: Vec<(u64, u64)> = leaf_counts
        .iter()
        .flat_map(|&leaves| fanouts.iter().map(move |&fanout| (leaves, fanout)))
        .collect();
    let outcomes = map_ordered(&pairs, |&(leaves, fanout)| {
        source.evaluate(style, leaves, fanout)
    });

    let mut rows = Vec::with_capacity(pairs.len());
    let mut skipped = Vec::new();
    for (&(leaves, fanout), outcome) in pairs.iter().zip(outcomes) {
        match outcome {
            Ok(report) => rows.push(SweepRow::new(leaves, fanout, report)),
            Err(error) => {
                warn!(leaves, fanout, %error, "skipping sweep point");
                skipped.push(SkippedCandidate {
                    leaves,
                    fanout,
                    error,
                });
            }
        }
    }

    if rows.is_empty() {
        return Err(LayoutError::NoDataCollected);
    }

    Ok(Sweep {
        style,
        leaf_counts,
        rows,
        skipped,
    })
}
