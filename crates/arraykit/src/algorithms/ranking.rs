//! Top-k frequency ranking.
//!
//! ## Purpose
//!
//! This module selects the `k` most frequent values of a sequence.
//!
//! ## Design notes
//!
//! * **Bucket**: Groups values by occurrence count and walks counts downward. O(n).
//! * **Heap**: Keeps a min-heap of the `k` best `(count, value)` pairs. O(n log k).
//!
//! ## Key concepts
//!
//! * **Unordered result**: The returned values are a set. Their order, and the
//!   choice among values tied at the cut-off count, are unspecified and may
//!   differ between strategies and between runs. Callers that need a stable
//!   order must sort the result themselves.
//!
//! ## Invariants
//!
//! * The result contains `min(k, distinct)` distinct values.
//! * No excluded value occurs more often than any included value.

// External dependencies
use core::cmp::Reverse;
use core::hash::Hash;
use std::collections::BinaryHeap;

// Internal dependencies
use crate::primitives::counting::FrequencyTable;

// ============================================================================
// Strategy
// ============================================================================

/// Implementation used for top-k selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopKStrategy {
    /// Bucket by frequency. Linear time, O(n) extra space.
    #[default]
    Bucket,

    /// Bounded min-heap of size k. O(n log k) time, O(k) heap space.
    Heap,
}

impl TopKStrategy {
    /// Select the `k` most frequent values of `nums` with this strategy.
    #[inline]
    pub fn apply<T: Hash + Ord + Copy>(self, nums: &[T], k: usize) -> Vec<T> {
        match self {
            Self::Bucket => top_k_frequent(nums, k),
            Self::Heap => top_k_frequent_heap(nums, k),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bucket => "Bucket",
            Self::Heap => "Heap",
        }
    }
}

// ============================================================================
// Bucket Selection
// ============================================================================

/// The `k` most frequent values, by bucketing values under their counts.
///
/// `k = 0` yields an empty vector; `k` above the number of distinct values
/// yields every distinct value.
///
/// ```
/// use arraykit::prelude::*;
///
/// let mut top = top_k_frequent(&[1, 1, 1, 2, 2, 3], 2);
/// top.sort();
/// assert_eq!(top, vec![1, 2]);
/// ```
pub fn top_k_frequent<T: Hash + Eq + Copy>(nums: &[T], k: usize) -> Vec<T> {
    if k == 0 || nums.is_empty() {
        return Vec::new();
    }

    let buckets = FrequencyTable::from_items(nums.iter().copied()).into_buckets();

    let mut result = Vec::with_capacity(k.min(nums.len()));
    for bucket in buckets.into_iter().rev() {
        for value in bucket {
            result.push(value);
            if result.len() == k {
                return result;
            }
        }
    }

    result
}

// ============================================================================
// Heap Selection
// ============================================================================

/// Heap-based variant of [`top_k_frequent`].
pub fn top_k_frequent_heap<T: Hash + Ord + Copy>(nums: &[T], k: usize) -> Vec<T> {
    if k == 0 || nums.is_empty() {
        return Vec::new();
    }

    let counts = FrequencyTable::from_items(nums.iter().copied());

    // Min-heap on count: the root is the weakest of the current k candidates
    let mut heap: BinaryHeap<Reverse<(usize, T)>> =
        BinaryHeap::with_capacity(k.min(counts.distinct()) + 1);
    for (&value, count) in counts.iter() {
        heap.push(Reverse((count, value)));
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.into_iter().map(|Reverse((_, value))| value).collect()
}
