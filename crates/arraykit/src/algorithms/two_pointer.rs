//! Converging two-pointer scans.
//!
//! ## Purpose
//!
//! This module provides the problems solved by walking one index from each
//! end of a sequence toward the other: palindrome check, two-sum over sorted
//! input, three-sum, container with most water, and trapped rain water.
//!
//! ## Design notes
//!
//! * **Space**: Every scan uses O(1) extra space beyond its output.
//! * **Wide sums**: Pair and triple sums are compared in `i128`, so no
//!   intermediate sum can overflow for element types up to 64 bits.
//! * **Generics**: Integer problems are generic over `PrimInt`.
//!
//! ## Key concepts
//!
//! * **Sorted pair search**: If the pair sum is too small only advancing the
//!   left index can help; if too large only retreating the right index can.
//! * **Container**: Moving the taller side inward can never increase the
//!   area, so the shorter side is always the one advanced.
//! * **Rain water**: Water above a bar is bounded by the smaller of the two
//!   running maxima; the side with the smaller maximum is settled first.
//!
//! ## Invariants
//!
//! * `left < right` holds inside every scan loop.
//! * Three-sum triplets are ascending and pairwise distinct as multisets.

// External dependencies
use core::cmp::Ordering;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::numeric::{from_count, saturating_mul, widen};

// ============================================================================
// Trap Strategy
// ============================================================================

/// Implementation used for trapped rain water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrapStrategy {
    /// Converging pointers with running maxima. O(n) time, O(1) space.
    #[default]
    TwoPointer,

    /// Precomputed left and right maxima. O(n) time, O(n) space.
    PrefixArrays,
}

impl TrapStrategy {
    /// Compute trapped water for `height` with this strategy.
    #[inline]
    pub fn apply<T: PrimInt>(self, height: &[T]) -> T {
        match self {
            Self::TwoPointer => trap(height),
            Self::PrefixArrays => crate::algorithms::prefix::trap_prefix(height),
        }
    }

    /// Like [`apply`](Self::apply), but `None` when the total does not fit in `T`.
    #[inline]
    pub fn checked_apply<T: PrimInt>(self, height: &[T]) -> Option<T> {
        match self {
            Self::TwoPointer => checked_trap(height),
            Self::PrefixArrays => crate::algorithms::prefix::checked_trap_prefix(height),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TwoPointer => "TwoPointer",
            Self::PrefixArrays => "PrefixArrays",
        }
    }
}

// ============================================================================
// Palindrome
// ============================================================================

/// Check whether `s` reads the same both ways, ignoring case and every
/// non-alphanumeric character.
///
/// Characters are lowercased before filtering, so a character whose lowercase
/// form expands to several characters contributes only the alphanumeric ones.
/// Strings with no alphanumeric characters (including the empty string) are
/// palindromes.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
/// assert!(is_palindrome(" "));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = folded_alphanumerics(s);

    loop {
        let Some(front) = chars.next() else {
            return true;
        };
        let Some(back) = chars.next_back() else {
            // `front` was the middle character
            return true;
        };
        if front != back {
            return false;
        }
    }
}

/// Lowercase `s` and drop every non-alphanumeric character.
///
/// `is_palindrome(s) == is_palindrome(&normalize_alphanumeric(s))` for every `s`.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(normalize_alphanumeric("Race-Car!"), "racecar");
/// assert_eq!(normalize_alphanumeric("\u{130}i"), "ii");
/// ```
pub fn normalize_alphanumeric(s: &str) -> String {
    folded_alphanumerics(s).collect()
}

/// The lowercased alphanumeric characters of `s`, walkable from both ends.
fn folded_alphanumerics(s: &str) -> impl DoubleEndedIterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
}

// ============================================================================
// Two-Sum (sorted)
// ============================================================================

/// Find a pair in non-decreasing `numbers` summing to `target`.
///
/// Returns **1-based** indices `(i, j)` with `i < j`, or `None` when no pair
/// exists. Input that is not sorted gives an unspecified (but safe) answer.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((1, 2)));
/// assert_eq!(two_sum_sorted(&[2, 3, 4], 6), Some((1, 3)));
/// ```
pub fn two_sum_sorted<T: PrimInt>(numbers: &[T], target: T) -> Option<(usize, usize)> {
    if numbers.len() < 2 {
        return None;
    }

    let target = widen(target);
    let mut left = 0;
    let mut right = numbers.len() - 1;

    while left < right {
        let sum = widen(numbers[left]) + widen(numbers[right]);
        match sum.cmp(&target) {
            Ordering::Equal => return Some((left + 1, right + 1)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    None
}

// ============================================================================
// Three-Sum
// ============================================================================

/// All unique triplets summing to zero.
///
/// Each triplet is ascending and the list is in lexicographic order. Equal
/// adjacent values are skipped at all three positions, so no two triplets are
/// permutations of each other.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(three_sum(&[-1, 0, 1, 2, -1, -4]), vec![[-1, -1, 2], [-1, 0, 1]]);
/// assert!(three_sum(&[0, 1, 1]).is_empty());
/// ```
pub fn three_sum<T: PrimInt>(nums: &[T]) -> Vec<[T; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let mut triplets = Vec::new();

    for i in 0..n.saturating_sub(2) {
        let first = sorted[i];
        if widen(first) > 0 {
            // Everything to the right is at least as large
            break;
        }
        if i > 0 && first == sorted[i - 1] {
            continue;
        }

        let mut left = i + 1;
        let mut right = n - 1;
        while left < right {
            let sum = widen(first) + widen(sorted[left]) + widen(sorted[right]);
            match sum.cmp(&0) {
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
                Ordering::Equal => {
                    triplets.push([first, sorted[left], sorted[right]]);
                    left += 1;
                    right -= 1;
                    while left < right && sorted[left] == sorted[left - 1] {
                        left += 1;
                    }
                    while left < right && sorted[right] == sorted[right + 1] {
                        right -= 1;
                    }
                }
            }
        }
    }

    triplets
}

// ============================================================================
// Container With Most Water
// ============================================================================

/// Largest `width × min(height)` over all pairs of bars.
///
/// Fewer than two bars hold no water. The area saturates at `T::max_value()`;
/// see [`checked_max_area`].
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
/// ```
pub fn max_area<T: PrimInt>(height: &[T]) -> T {
    if height.len() < 2 {
        return T::zero();
    }

    let mut best = T::zero();
    let mut left = 0;
    let mut right = height.len() - 1;

    while left < right {
        let width = from_count::<T>(right - left);
        let area = saturating_mul(height[left].min(height[right]), width);
        best = best.max(area);

        if height[left] < height[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    best
}

/// Overflow-checked variant of [`max_area`].
///
/// Returns `None` if the area of any pair of bars does not fit in `T`.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(checked_max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), Some(49));
/// assert_eq!(checked_max_area(&[200u8, 0, 0, 200]), None);
/// ```
pub fn checked_max_area<T: PrimInt>(height: &[T]) -> Option<T> {
    if height.len() < 2 {
        return Some(T::zero());
    }

    let mut best = T::zero();
    let mut left = 0;
    let mut right = height.len() - 1;

    while left < right {
        let shorter = height[left].min(height[right]);
        // A zero-height side holds nothing, however wide
        let area = if shorter == T::zero() {
            T::zero()
        } else {
            shorter.checked_mul(&T::from(right - left)?)?
        };
        best = best.max(area);

        if height[left] < height[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    Some(best)
}

// ============================================================================
// Trapped Rain Water (two pointers)
// ============================================================================

/// Total water trapped between bars, in O(1) extra space.
///
/// The total saturates at `T::max_value()`; see [`checked_trap`].
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(trap(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
/// assert_eq!(trap(&[4, 2, 0, 3, 2, 5]), 9);
/// assert_eq!(trap(&[u8::MAX, 0, 0, u8::MAX]), u8::MAX);
/// ```
pub fn trap<T: PrimInt>(height: &[T]) -> T {
    checked_trap(height).unwrap_or_else(T::max_value)
}

/// Overflow-checked variant of [`trap`].
///
/// Returns `None` if the total does not fit in `T`. Every bar adds a
/// non-negative amount, so the scan stops at the first overflow.
pub fn checked_trap<T: PrimInt>(height: &[T]) -> Option<T> {
    if height.len() < 3 {
        return Some(T::zero());
    }

    let mut left = 0;
    let mut right = height.len() - 1;
    let mut left_max = height[left];
    let mut right_max = height[right];
    let mut water = T::zero();

    while left < right {
        if left_max < right_max {
            left += 1;
            left_max = left_max.max(height[left]);
            water = water.checked_add(&left_max.checked_sub(&height[left])?)?;
        } else {
            right -= 1;
            right_max = right_max.max(height[right]);
            water = water.checked_add(&right_max.checked_sub(&height[right])?)?;
        }
    }

    Some(water)
}
