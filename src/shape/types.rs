use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fanouts accepted by the exact tree estimator.
///
/// | Variant | Children per node |
/// |---------|-------------------|
/// | `Binary` | 2 |
/// | `Quaternary` | 4 |
/// | `Octal` | 8 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
pub enum Fanout {
    Binary,
    Quaternary,
    Octal,
}

impl Fanout {
    /// Canonical order of the supported fanouts.
    pub const ALL: [Fanout; 3] = [Fanout::Binary, Fanout::Quaternary, Fanout::Octal];

    pub const fn as_u64(self) -> u64 {
        match self {
            Fanout::Binary => 2,
            Fanout::Quaternary => 4,
            Fanout::Octal => 8,
        }
    }
}

impl TryFrom<u64> for Fanout {
    type Error = LayoutError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Fanout::Binary),
            4 => Ok(Fanout::Quaternary),
            8 => Ok(Fanout::Octal),
            _ => Err(LayoutError::InvalidInput(format!(
                "fanout must be one of 2, 4, or 8 (got {value})"
            ))),
        }
    }
}

impl From<Fanout> for u64 {
    fn from(fanout: Fanout) -> Self {
        fanout.as_u64()
    }
}

impl fmt::Display for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

/// Exact ragged tree shape produced by [`estimate`](super::estimate).
///
/// `nodes_per_level` runs from the leaf level to the root. The first entry is
/// the leaf count, every following entry is the ceiling of its predecessor
/// divided by the fanout, and the last entry is always `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeShape {
    /// Number of reduction steps from the leaves to the root.
    pub height: u32,
    /// Sum of all level sizes including the root.
    pub total_nodes: u64,
    /// Level sizes ordered from leaves to root.
    pub nodes_per_level: Vec<u64>,
}

impl TreeShape {
    /// Number of leaves the shape was computed for.
    pub fn leaves(&self) -> u64 {
        self.nodes_per_level.first().copied().unwrap_or(0)
    }

    /// Number of non-leaf nodes.
    pub fn internal_nodes(&self) -> u64 {
        self.total_nodes.saturating_sub(self.leaves())
    }
}

/// Layout of the smallest full k-ary tree able to hold `leaves`.
///
/// | Field | Definition |
/// |-------|------------|
/// | `height` | smallest `h` with `arity^h >= leaves` |
/// | `full_leaves` | `arity^height` |
/// | `padding_leaves` | `full_leaves - leaves` |
/// | `total_nodes` | `(arity^(height+1) - 1) / (arity - 1)` |
/// | `internal_nodes` | `total_nodes - full_leaves` |
/// | `leaf_nodes` | `full_leaves` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddedLayout {
    pub leaves: u64,
    pub arity: u64,
    pub height: u32,
    pub full_leaves: u64,
    pub padding_leaves: u64,
    pub total_nodes: u64,
    pub internal_nodes: u64,
    pub leaf_nodes: u64,
}

impl PaddedLayout {
    /// Share of the leaf level occupied by padding, in `[0, 1)`.
    pub fn padding_fraction(&self) -> f64 {
        if self.leaf_nodes == 0 {
            return 0.0;
        }
        self.padding_leaves as f64 / self.leaf_nodes as f64
    }
}
