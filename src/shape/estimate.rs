use super::types::{Fanout, TreeShape};
use crate::LayoutError;

/// Computes the exact level-by-level shape of a tree over `leaves` leaves.
///
/// Every level is the ceiling of the previous one divided by the fanout, so
/// a partially filled node on the right edge still counts as one node. The
/// reduction terminates because the fanout is at least two.
pub fn estimate(leaves: u64, fanout: Fanout) -> Result<TreeShape, LayoutError> {
    if leaves == 0 {
        return Err(LayoutError::invalid("leaves must be positive"));
    }
    let arity = fanout.as_u64();

    let mut height = 0u32;
    let mut nodes = leaves;
    let mut total_nodes = 0u64;
    let mut nodes_per_level = Vec::new();

    while nodes > 1 {
        nodes_per_level.push(nodes);
        total_nodes = accumulate(total_nodes, nodes)?;
        height += 1;
        nodes = nodes.div_ceil(arity);
    }
    nodes_per_level.push(nodes);
    total_nodes = accumulate(total_nodes, nodes)?;

    if nodes_per_level.len() != height as usize + 1 {
        return Err(LayoutError::InvariantViolation(
            "height does not match level count",
        ));
    }

    Ok(TreeShape {
        height,
        total_nodes,
        nodes_per_level,
    })
}

fn accumulate(total: u64, level: u64) -> Result<u64, LayoutError> {
    total
        .checked_add(level)
        .ok_or_else(|| LayoutError::invalid("total node count exceeds u64"))
}
