//! Precondition validation for arraykit inputs.
//!
//! ## Purpose
//!
//! This module checks the documented preconditions of each problem: minimum
//! lengths, sortedness, non-negative heights, and the range of `k`. The free
//! algorithm functions assume these hold; the validated facade calls these
//! checks first and reports violations as [`ArrayKitError`].
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Reported indices always point into the checked slice.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not run the algorithms themselves.

// External dependencies
use core::hash::Hash;
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::counting::FrequencyTable;
use crate::primitives::errors::ArrayKitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for arraykit inputs and parameters.
///
/// Provides static methods that return `Result<(), ArrayKitError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Length Validation
    // ========================================================================

    /// Validate that `len` is at least `min` for `operation`.
    pub fn validate_min_len(
        operation: &'static str,
        len: usize,
        min: usize,
    ) -> Result<(), ArrayKitError> {
        if len < min {
            return Err(ArrayKitError::TooFewElements {
                operation,
                got: len,
                min,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Ordering Validation
    // ========================================================================

    /// Validate that `values` is non-decreasing.
    pub fn validate_sorted<T: PartialOrd>(values: &[T]) -> Result<(), ArrayKitError> {
        match values.windows(2).position(|w| w[1] < w[0]) {
            Some(i) => Err(ArrayKitError::NotSorted { index: i + 1 }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Value Validation
    // ========================================================================

    /// Validate that every height is zero or positive.
    pub fn validate_heights<T: PrimInt>(height: &[T]) -> Result<(), ArrayKitError> {
        match height.iter().position(|&h| h < T::zero()) {
            Some(index) => Err(ArrayKitError::NegativeHeight { index }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate `k` against the number of distinct values in `nums`.
    ///
    /// # Notes
    ///
    /// * `k` must be at least 1.
    /// * `k` must not exceed the distinct count, so the answer is well defined.
    pub fn validate_top_k<T: Hash + Eq>(nums: &[T], k: usize) -> Result<(), ArrayKitError> {
        let distinct = FrequencyTable::from_items(nums.iter()).distinct();
        if k == 0 || k > distinct {
            return Err(ArrayKitError::InvalidK { k, distinct });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ArrayKitError> {
        if let Some(param) = duplicate_param {
            return Err(ArrayKitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
