//! Prefix/suffix accumulation.
//!
//! ## Purpose
//!
//! This module provides the two problems solved by combining a running value
//! from the left with a running value from the right: product of all other
//! elements, and trapped rain water via precomputed left/right maxima.
//!
//! ## Key concepts
//!
//! * **Prefix product**: `out[i]` first holds the product of `nums[..i]`; a
//!   second right-to-left pass multiplies in the product of `nums[i + 1..]`.
//! * **No division**: Zeros in the input need no special casing.
//!
//! ## Invariants
//!
//! * Outputs have the same length as their input.
//! * Apart from the output, `product_except_self` uses O(1) extra space.

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Product Except Self
// ============================================================================

/// For each index, the product of every other element.
///
/// Every output and running product must fit in `T`; see [`checked_product_except_self`]
/// for an overflow-aware variant. An empty input yields an empty output and a
/// single element yields `[1]` (the empty product).
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// assert_eq!(product_except_self(&[-1, 1, 0, -3, 3]), vec![0, 0, 9, 0, 0]);
/// ```
pub fn product_except_self<T: PrimInt>(nums: &[T]) -> Vec<T> {
    let n = nums.len();
    let mut out = vec![T::one(); n];

    let mut prefix = T::one();
    for i in 0..n {
        out[i] = prefix;
        if i + 1 < n {
            prefix = prefix * nums[i];
        }
    }

    let mut suffix = T::one();
    for i in (0..n).rev() {
        out[i] = out[i] * suffix;
        if i > 0 {
            suffix = suffix * nums[i];
        }
    }

    out
}

/// Overflow-checked variant of [`product_except_self`].
///
/// Returns `None` if an output, or a running prefix or suffix product it is
/// built from, does not fit in `T`. The product of the whole slice is never
/// formed, so `[2, i32::MAX]` still succeeds.
pub fn checked_product_except_self<T: PrimInt>(nums: &[T]) -> Option<Vec<T>> {
    let n = nums.len();
    let mut out = vec![T::one(); n];

    let mut prefix = Some(T::one());
    for i in 0..n {
        out[i] = prefix?;
        if i + 1 < n {
            prefix = prefix.and_then(|p| p.checked_mul(&nums[i]));
        }
    }

    let mut suffix = Some(T::one());
    for i in (0..n).rev() {
        out[i] = out[i].checked_mul(&suffix?)?;
        if i > 0 {
            suffix = suffix.and_then(|s| s.checked_mul(&nums[i]));
        }
    }

    Some(out)
}

// ============================================================================
// Trapped Rain Water (prefix arrays)
// ============================================================================

/// Total water trapped between bars, using precomputed left and right maxima.
///
/// O(n) time and O(n) extra space. Agrees with
/// [`trap`](crate::algorithms::two_pointer::trap) on every input, including
/// saturating at `T::max_value()`.
///
/// ```
/// use arraykit::prelude::*;
///
/// assert_eq!(trap_prefix(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
/// ```
pub fn trap_prefix<T: PrimInt>(height: &[T]) -> T {
    checked_trap_prefix(height).unwrap_or_else(T::max_value)
}

/// Overflow-checked variant of [`trap_prefix`].
///
/// Returns `None` if the total does not fit in `T`.
pub fn checked_trap_prefix<T: PrimInt>(height: &[T]) -> Option<T> {
    let n = height.len();
    if n < 3 {
        return Some(T::zero());
    }

    let mut left_max = vec![T::zero(); n];
    left_max[0] = height[0];
    for i in 1..n {
        left_max[i] = left_max[i - 1].max(height[i]);
    }

    let mut right_max = vec![T::zero(); n];
    right_max[n - 1] = height[n - 1];
    for i in (0..n - 1).rev() {
        right_max[i] = right_max[i + 1].max(height[i]);
    }

    (0..n).try_fold(T::zero(), |water, i| {
        let level = left_max[i].min(right_max[i]);
        water.checked_add(&level.checked_sub(&height[i])?)
    })
}
