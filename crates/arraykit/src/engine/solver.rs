//! Validated facade over the problem catalog.
//!
//! ## Purpose
//!
//! This module provides [`Solver`], the configured executor behind the
//! fluent API. Each method checks the problem's preconditions (in `Strict`
//! mode), dispatches to the configured algorithm strategy, and turns
//! contract violations into [`ArrayKitError`] values.
//!
//! ## Design notes
//!
//! * **Honest signatures**: Problems without preconditions return plain
//!   values; problems with preconditions return `Result`.
//! * **Logging**: Rejections are logged at `debug`, strategy dispatch at `trace`.
//! * **Stateless**: A `Solver` is `Copy` configuration; calls share nothing.
//!
//! ## Non-goals
//!
//! * This module does not implement any algorithm itself.

// External dependencies
use core::hash::Hash;
use log::{debug, trace};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::hashing::{self, AnagramStrategy};
use crate::algorithms::ranking::TopKStrategy;
use crate::algorithms::two_pointer::{self, TrapStrategy};
use crate::algorithms::{prefix, sudoku};
use crate::engine::validator::Validator;
use crate::primitives::board::SudokuBoard;
use crate::primitives::errors::ArrayKitError;

// ============================================================================
// Validation Mode
// ============================================================================

/// How the [`Solver`] treats out-of-contract input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Check preconditions and report violations as errors.
    #[default]
    Strict,

    /// Skip checks; out-of-contract input yields the documented default.
    Permissive,
}

// ============================================================================
// Solver
// ============================================================================

/// Validated facade over the problem catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solver {
    anagram_strategy: AnagramStrategy,
    top_k_strategy: TopKStrategy,
    trap_strategy: TrapStrategy,
    validation: ValidationMode,
}

impl Solver {
    /// Create a solver from explicit settings.
    ///
    /// Most callers go through the fluent builder instead.
    pub fn new(
        anagram_strategy: AnagramStrategy,
        top_k_strategy: TopKStrategy,
        trap_strategy: TrapStrategy,
        validation: ValidationMode,
    ) -> Self {
        Self {
            anagram_strategy,
            top_k_strategy,
            trap_strategy,
            validation,
        }
    }

    // ========================================================================
    // Configuration Accessors
    // ========================================================================

    /// Configured anagram strategy.
    pub fn anagram_strategy(&self) -> AnagramStrategy {
        self.anagram_strategy
    }

    /// Configured top-k strategy.
    pub fn top_k_strategy(&self) -> TopKStrategy {
        self.top_k_strategy
    }

    /// Configured rain water strategy.
    pub fn trap_strategy(&self) -> TrapStrategy {
        self.trap_strategy
    }

    /// Configured validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    // ========================================================================
    // Hashing Problems
    // ========================================================================

    /// Whether any value occurs at least twice.
    pub fn has_duplicate<T: Hash + Eq>(&self, nums: &[T]) -> bool {
        hashing::has_duplicate(nums)
    }

    /// Whether `t` is an anagram of `s`, using the configured strategy.
    pub fn is_anagram(&self, s: &str, t: &str) -> bool {
        trace!("is_anagram: {} strategy", self.anagram_strategy.name());
        self.anagram_strategy.apply(s, t)
    }

    /// Indices `(earlier, later)` of two values summing to `target`.
    ///
    /// In `Strict` mode a missing solution is an error and `Ok(None)` is never
    /// returned.
    pub fn two_sum<T: PrimInt + Hash>(
        &self,
        nums: &[T],
        target: T,
    ) -> Result<Option<(usize, usize)>, ArrayKitError> {
        const OP: &str = "two_sum";
        self.guard(OP, || Validator::validate_min_len(OP, nums.len(), 2))?;
        let found = hashing::two_sum(nums, target);
        self.require_solution(OP, found)
    }

    /// The `k` most frequent values, in unspecified order.
    pub fn top_k_frequent<T: Hash + Ord + Copy>(
        &self,
        nums: &[T],
        k: usize,
    ) -> Result<Vec<T>, ArrayKitError> {
        self.guard("top_k_frequent", || Validator::validate_top_k(nums, k))?;
        trace!("top_k_frequent: {} strategy", self.top_k_strategy.name());
        Ok(self.top_k_strategy.apply(nums, k))
    }

    /// Length of the longest run of consecutive integers.
    pub fn longest_consecutive<T: PrimInt + Hash>(&self, nums: &[T]) -> usize {
        hashing::longest_consecutive(nums)
    }

    /// Whether no digit repeats in any row, column, or box.
    pub fn is_valid_sudoku(&self, board: &SudokuBoard) -> bool {
        sudoku::is_valid_sudoku(board)
    }

    // ========================================================================
    // Prefix Problems
    // ========================================================================

    /// Product of all other elements at each index.
    ///
    /// `Strict` mode requires at least two elements and reports overflow as
    /// [`ArrayKitError::ArithmeticOverflow`].
    pub fn product_except_self<T: PrimInt>(&self, nums: &[T]) -> Result<Vec<T>, ArrayKitError> {
        const OP: &str = "product_except_self";
        match self.validation {
            ValidationMode::Permissive => Ok(prefix::product_except_self(nums)),
            ValidationMode::Strict => {
                self.guard(OP, || Validator::validate_min_len(OP, nums.len(), 2))?;
                prefix::checked_product_except_self(nums).ok_or_else(|| Self::overflow(OP))
            }
        }
    }

    // ========================================================================
    // Two-Pointer Problems
    // ========================================================================

    /// Whether `s` is a palindrome ignoring case and non-alphanumerics.
    pub fn is_palindrome(&self, s: &str) -> bool {
        two_pointer::is_palindrome(s)
    }

    /// 1-based indices of a pair in sorted `numbers` summing to `target`.
    ///
    /// `Strict` mode rejects unsorted input and a missing solution.
    pub fn two_sum_sorted<T: PrimInt>(
        &self,
        numbers: &[T],
        target: T,
    ) -> Result<Option<(usize, usize)>, ArrayKitError> {
        const OP: &str = "two_sum_sorted";
        self.guard(OP, || {
            Validator::validate_min_len(OP, numbers.len(), 2)?;
            Validator::validate_sorted(numbers)
        })?;
        let found = two_pointer::two_sum_sorted(numbers, target);
        self.require_solution(OP, found)
    }

    /// All unique zero-sum triplets.
    pub fn three_sum<T: PrimInt>(&self, nums: &[T]) -> Vec<[T; 3]> {
        two_pointer::three_sum(nums)
    }

    /// Largest container area between two bars.
    ///
    /// `Strict` mode reports an area that does not fit in `T` as
    /// [`ArrayKitError::ArithmeticOverflow`]; `Permissive` mode saturates.
    pub fn max_area<T: PrimInt>(&self, height: &[T]) -> Result<T, ArrayKitError> {
        const OP: &str = "max_area";
        match self.validation {
            ValidationMode::Permissive => Ok(two_pointer::max_area(height)),
            ValidationMode::Strict => {
                self.guard(OP, || {
                    Validator::validate_min_len(OP, height.len(), 2)?;
                    Validator::validate_heights(height)
                })?;
                two_pointer::checked_max_area(height).ok_or_else(|| Self::overflow(OP))
            }
        }
    }

    /// Total trapped rain water, using the configured strategy.
    ///
    /// `Strict` mode reports a total that does not fit in `T` as
    /// [`ArrayKitError::ArithmeticOverflow`]; `Permissive` mode saturates.
    pub fn trap<T: PrimInt>(&self, height: &[T]) -> Result<T, ArrayKitError> {
        const OP: &str = "trap";
        self.guard(OP, || Validator::validate_heights(height))?;
        trace!("{OP}: {} strategy", self.trap_strategy.name());
        match self.validation {
            ValidationMode::Permissive => Ok(self.trap_strategy.apply(height)),
            ValidationMode::Strict => self
                .trap_strategy
                .checked_apply(height)
                .ok_or_else(|| Self::overflow(OP)),
        }
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Run `check` in `Strict` mode, logging any rejection.
    fn guard<F>(&self, operation: &'static str, check: F) -> Result<(), ArrayKitError>
    where
        F: FnOnce() -> Result<(), ArrayKitError>,
    {
        if self.validation == ValidationMode::Permissive {
            return Ok(());
        }
        check().map_err(|err| {
            debug!("{operation}: rejected input: {err}");
            err
        })
    }

    /// Log and build the overflow error for `operation`.
    fn overflow(operation: &'static str) -> ArrayKitError {
        debug!("{operation}: result does not fit in the element type");
        ArrayKitError::ArithmeticOverflow { operation }
    }

    /// Turn a missing pair into an error in `Strict` mode.
    fn require_solution(
        &self,
        operation: &'static str,
        found: Option<(usize, usize)>,
    ) -> Result<Option<(usize, usize)>, ArrayKitError> {
        match (found, self.validation) {
            (None, ValidationMode::Strict) => {
                debug!("{operation}: no pair sums to the target");
                Err(ArrayKitError::NoSolution { operation })
            }
            (found, _) => Ok(found),
        }
    }
}
