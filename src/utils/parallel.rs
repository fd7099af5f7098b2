#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static PARALLEL_ENABLED: AtomicBool = AtomicBool::new(true);

const DEFAULT_CHUNK_SIZE: usize = 64;

pub fn preferred_chunk_size(total_items: usize) -> usize {
    if total_items == 0 {
        1
    } else {
        DEFAULT_CHUNK_SIZE.min(total_items.max(1))
    }
}

#[cfg(feature = "parallel")]
pub fn parallelism_enabled() -> bool {
    PARALLEL_ENABLED.load(Ordering::SeqCst)
}

#[cfg(not(feature = "parallel"))]
pub fn parallelism_enabled() -> bool {
    false
}

#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = PARALLEL_ENABLED.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

/// Restores the previous parallelism setting when dropped.
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        PARALLEL_ENABLED.store(self.previous, Ordering::SeqCst);
    }
}

/// Applies `f` to every item and returns the results in input order,
/// independent of the order in which workers finish.
pub fn map_ordered<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if parallelism_enabled() {
        use rayon::prelude::*;
        return items
            .par_iter()
            .with_min_len(preferred_chunk_size(items.len()))
            .map(f)
            .collect();
    }
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_is_bounded() {
        assert_eq!(preferred_chunk_size(0), 1);
        assert_eq!(preferred_chunk_size(5), 5);
        assert_eq!(preferred_chunk_size(10_000), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn map_preserves_order() {
        let items: Vec<u64> = (0..500).collect();
        let squares = map_ordered(&items, |value| value * value);
        assert_eq!(squares.len(), 500);
        assert!(squares.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn borrowed_state_crosses_workers() {
        let offsets = vec![10u64, 20, 30];
        let offsets = offsets.as_slice();
        let items: Vec<usize> = (0..300).map(|index| index % 3).collect();
        let shifted = map_ordered(&items, |&index| offsets[index]);
        let expected: Vec<u64> = items.iter().map(|&index| offsets[index]).collect();
        assert_eq!(shifted, expected);
    }
}
