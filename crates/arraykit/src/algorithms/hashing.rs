//! Hash-set and hash-map membership checks.
//!
//! ## Purpose
//!
//! This module answers "have I seen this before?" style questions in linear
//! time: duplicate detection, anagram comparison, unsorted two-sum, and the
//! longest run of consecutive integers.
//!
//! ## Design notes
//!
//! * **Hashing**: Uses the `ahash`-backed containers from `primitives::counting`.
//! * **Overflow**: Arithmetic that leaves the range of `T` means "no such value".
//! * **Generics**: Integer problems are generic over `PrimInt`.
//!
//! ## Invariants
//!
//! * Inputs are never mutated.
//! * Every function runs in O(n) expected time.

// External dependencies
use core::hash::Hash;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::counting::{
    FastMap, FastSet, FrequencyTable, map_with_capacity, set_with_capacity,
};

// ============================================================================
// Anagram Strategy
// ============================================================================

/// Implementation used to compare character multisets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnagramStrategy {
    /// Count characters of one string and cancel them with the other. O(n).
    #[default]
    Counting,

    /// Sort both character sequences and compare. O(n log n).
    Sorting,
}

impl AnagramStrategy {
    /// Compare `s` and `t` with this strategy.
    #[inline]
    pub fn apply(self, s: &str, t: &str) -> bool {
        match self {
            Self::Counting => is_anagram(s, t),
            Self::Sorting => is_anagram_sorted(s, t),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Counting => "Counting",
            Self::Sorting => "Sorting",
        }
    }
}

// ============================================================================
// Duplicate Detection
// ============================================================================

/// Check whether any value occurs at least twice.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert!(has_duplicate(&[1, 2, 3, 1]));
/// assert!(!has_duplicate(&[1, 2, 3, 4]));
/// ```
pub fn has_duplicate<T: Hash + Eq>(nums: &[T]) -> bool {
    let mut seen = set_with_capacity(nums.len());
    // `insert` returns false when the value was already present
    !nums.iter().all(|value| seen.insert(value))
}

// ============================================================================
// Anagram Check
// ============================================================================

/// Check whether `t` is a rearrangement of the characters of `s`.
///
/// Comparison is case-sensitive and counts every `char`, including spaces.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert!(is_anagram("anagram", "nagaram"));
/// assert!(!is_anagram("rat", "car"));
/// ```
pub fn is_anagram(s: &str, t: &str) -> bool {
    // Equal multisets of chars always encode to the same number of bytes
    if s.len() != t.len() {
        return false;
    }

    let mut counts = FrequencyTable::from_items(s.chars());
    for ch in t.chars() {
        if !counts.remove(&ch) {
            return false;
        }
    }
    counts.is_empty()
}

/// Sorting-based variant of [`is_anagram`].
pub fn is_anagram_sorted(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut a: Vec<char> = s.chars().collect();
    let mut b: Vec<char> = t.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

// ============================================================================
// Two-Sum (unsorted)
// ============================================================================

/// Find two distinct indices whose values sum to `target`.
///
/// Scans left to right, remembering the first index of each value. The first
/// element whose complement has already been seen ends the scan, so the
/// result is `(earlier, later)` with `earlier < later`.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum<T: PrimInt + Hash>(nums: &[T], target: T) -> Option<(usize, usize)> {
    let mut first_index: FastMap<T, usize> = map_with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        if let Some(complement) = target.checked_sub(&value) {
            if let Some(&j) = first_index.get(&complement) {
                return Some((j, i));
            }
        }
        first_index.entry(value).or_insert(i);
    }

    None
}

// ============================================================================
// Longest Consecutive Run
// ============================================================================

/// Length of the longest run of consecutive integers present in `nums`.
///
/// Order and duplicates are irrelevant. Counting starts only at values whose
/// predecessor is absent, so each run is walked once.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
/// assert_eq!(longest_consecutive::<i32>(&[]), 0);
/// ```
pub fn longest_consecutive<T: PrimInt + Hash>(nums: &[T]) -> usize {
    let mut present: FastSet<T> = set_with_capacity(nums.len());
    present.extend(nums.iter().copied());

    let mut longest = 0;
    for &start in &present {
        let is_run_start = match start.checked_sub(&T::one()) {
            Some(prev) => !present.contains(&prev),
            None => true,
        };
        if !is_run_start {
            continue;
        }

        let mut length = 1;
        let mut current = start;
        while let Some(next) = current.checked_add(&T::one()) {
            if !present.contains(&next) {
                break;
            }
            length += 1;
            current = next;
        }
        longest = longest.max(length);
    }

    longest
}
