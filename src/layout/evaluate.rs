use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shape::{estimate, Fanout};
use crate::style::CommitmentStyle;
use crate::LayoutError;

/// Size estimate for one (style, leaves, fanout) configuration.
///
/// The serialised field names form the interchange record consumed by
/// downstream tooling and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub style: CommitmentStyle,
    pub style_name: String,
    pub note: String,
    pub leaves: u64,
    pub fanout: u64,
    pub tree_height: u32,
    pub total_nodes: u64,
    pub nodes_per_level: Vec<u64>,
    pub hash_bytes: u64,
    /// Siblings-per-level path length; equal to the tree height.
    pub proof_branch_length: u32,
    /// Path plus root, one digest each.
    pub per_proof_bytes: u64,
    pub per_proof_bits: u64,
    /// Every node of the tree stored once.
    pub total_commitment_bytes: u64,
}

/// Evaluates a single configuration.
///
/// `fanout` must be one of 2, 4 or 8; any other value, a zero leaf count or a
/// byte total beyond `u64` fails with [`LayoutError::InvalidInput`].
pub fn evaluate(
    style: CommitmentStyle,
    leaves: u64,
    fanout: u64,
) -> Result<LayoutReport, LayoutError> {
    let fanout = Fanout::try_from(fanout)?;
    let shape = estimate(leaves, fanout)?;
    let profile = style.profile();
    let hash_bytes = profile.hash_bytes;

    let proof_branch_length = shape.height;
    let per_proof_bytes = (u64::from(proof_branch_length) + 1)
        .checked_mul(hash_bytes)
        .ok_or_else(|| LayoutError::invalid("proof size exceeds u64"))?;
    let per_proof_bits = per_proof_bytes
        .checked_mul(8)
        .ok_or_else(|| LayoutError::invalid("proof size in bits exceeds u64"))?;
    let total_commitment_bytes = shape
        .total_nodes
        .checked_mul(hash_bytes)
        .ok_or_else(|| LayoutError::invalid("commitment size exceeds u64"))?;

    debug!(
        style = %style,
        leaves,
        fanout = fanout.as_u64(),
        height = shape.height,
        total_nodes = shape.total_nodes,
        "evaluated layout"
    );

    Ok(LayoutReport {
        style,
        style_name: profile.display_name.to_owned(),
        note: profile.note.to_owned(),
        leaves,
        fanout: fanout.as_u64(),
        tree_height: shape.height,
        total_nodes: shape.total_nodes,
        nodes_per_level: shape.nodes_per_level,
        hash_bytes,
        proof_branch_length,
        per_proof_bytes,
        per_proof_bits,
        total_commitment_bytes,
    })
}
