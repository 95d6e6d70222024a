//! Error types for arraykit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the validated facade
//! and by board construction. The free algorithm functions never return
//! errors; they answer out-of-contract input with a documented default.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., offending index, actual vs. minimum length).
//! * **Deferred**: Builder misuse is recorded and reported when `build()` is called.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Too-short inputs, unsorted input, negative heights.
//! 2. **Parameter validation**: Invalid `k` for top-k selection.
//! 3. **Precondition violations**: Missing two-sum solution, overflowing products.
//! 4. **Board construction**: Malformed Sudoku rows.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for arraykit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayKitError {
    /// Input is shorter than the operation requires.
    TooFewElements {
        /// Name of the operation (e.g., "product_except_self").
        operation: &'static str,
        /// Number of elements provided.
        got: usize,
        /// Minimum required elements.
        min: usize,
    },

    /// Input to a sorted-input operation decreases at `index`.
    NotSorted {
        /// First index whose value is smaller than its predecessor.
        index: usize,
    },

    /// A height is below zero.
    NegativeHeight {
        /// Index of the offending height.
        index: usize,
    },

    /// `k` must be at least 1 and at most the number of distinct values.
    InvalidK {
        /// The `k` provided.
        k: usize,
        /// Number of distinct values in the input.
        distinct: usize,
    },

    /// The input admits no pair summing to the target.
    NoSolution {
        /// Name of the operation.
        operation: &'static str,
    },

    /// An intermediate result does not fit in the element type.
    ArithmeticOverflow {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Sudoku rows are malformed.
    InvalidBoard(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayKitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewElements { operation, got, min } => {
                write!(
                    f,
                    "Too few elements for {operation}: got {got}, need at least {min}"
                )
            }
            Self::NotSorted { index } => {
                write!(f, "Input is not sorted: value at index {index} decreases")
            }
            Self::NegativeHeight { index } => {
                write!(f, "Invalid height at index {index} (must be >= 0)")
            }
            Self::InvalidK { k, distinct } => {
                write!(
                    f,
                    "Invalid k: {k} (must be between 1 and the distinct count {distinct})"
                )
            }
            Self::NoSolution { operation } => {
                write!(f, "No solution exists for {operation}")
            }
            Self::ArithmeticOverflow { operation } => {
                write!(f, "Arithmetic overflow in {operation}")
            }
            Self::InvalidBoard(msg) => write!(f, "Invalid board: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for ArrayKitError {}
