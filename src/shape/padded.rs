use super::types::PaddedLayout;
use crate::LayoutError;

/// Sizes the smallest full `arity`-ary tree holding at least `leaves` leaves.
///
/// The height is found with an integer power accumulator; floating-point
/// logarithms are off by one near exact powers of the arity. The node total
/// uses the closed form `(arity^(h+1) - 1) / (arity - 1)` evaluated in
/// 128-bit arithmetic.
pub fn size_padded(leaves: u64, arity: u64) -> Result<PaddedLayout, LayoutError> {
    if leaves == 0 {
        return Err(LayoutError::invalid("leaves must be > 0"));
    }
    if arity <= 1 {
        return Err(LayoutError::invalid("arity must be >= 2"));
    }

    let mut height = 0u32;
    let mut full_leaves = 1u64;
    while full_leaves < leaves {
        full_leaves = full_leaves
            .checked_mul(arity)
            .ok_or_else(|| LayoutError::invalid("padded leaf count exceeds u64"))?;
        height += 1;
    }
    if height > 0 && full_leaves / arity >= leaves {
        return Err(LayoutError::InvariantViolation("padded height is not minimal"));
    }

    let padding_leaves = full_leaves
        .checked_sub(leaves)
        .ok_or(LayoutError::InvariantViolation("negative padding"))?;

    let next_power = u128::from(full_leaves) * u128::from(arity);
    let total_nodes = u64::try_from((next_power - 1) / u128::from(arity - 1))
        .map_err(|_| LayoutError::invalid("padded node count exceeds u64"))?;
    let internal_nodes = total_nodes
        .checked_sub(full_leaves)
        .ok_or(LayoutError::InvariantViolation(
            "leaf level larger than the whole tree",
        ))?;

    Ok(PaddedLayout {
        leaves,
        arity,
        height,
        full_leaves,
        padding_leaves,
        total_nodes,
        internal_nodes,
        leaf_nodes: full_leaves,
    })
}
