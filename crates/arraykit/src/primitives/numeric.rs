//! Integer widening and conversion helpers.
//!
//! Sums of two or three elements are compared in `i128` so that the pointer
//! scans stay correct near the bounds of narrower types.

// External dependencies
use num_traits::PrimInt;

/// Widen a value to `i128`, saturating values that do not fit (`u128` above `i128::MAX`).
#[inline]
pub fn widen<T: PrimInt>(value: T) -> i128 {
    match value.to_i128() {
        Some(v) => v,
        None if value > T::zero() => i128::MAX,
        None => i128::MIN,
    }
}

/// Convert a count (width, length) into `T`, saturating at `T::max_value()`.
#[inline]
pub fn from_count<T: PrimInt>(count: usize) -> T {
    T::from(count).unwrap_or_else(T::max_value)
}

/// Saturating multiplication for any primitive integer.
#[inline]
pub fn saturating_mul<T: PrimInt>(a: T, b: T) -> T {
    match a.checked_mul(&b) {
        Some(product) => product,
        None if (a < T::zero()) != (b < T::zero()) => T::min_value(),
        None => T::max_value(),
    }
}
