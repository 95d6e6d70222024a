//! High-level API for arraykit.
//!
//! ## Purpose
//!
//! This module provides the validated entry point to every problem. It
//! implements a fluent builder for choosing algorithm strategies and the
//! validation mode, producing a [`Solver`] whose methods check preconditions
//! at the boundary before dispatching to the pure functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder misuse is reported when `.build()` is called.
//! * **Immutable**: The built `Solver` is plain `Copy` configuration.
//!
//! ## Key concepts
//!
//! * **Strategies**: Anagram (Counting/Sorting), top-k (Bucket/Heap), and
//!   rain water (TwoPointer/PrefixArrays).
//! * **Validation mode**: `Strict` rejects out-of-contract input with an
//!   [`ArrayKitError`]; `Permissive` skips the checks and returns the
//!   documented defaults of the free functions.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ArrayKitBuilder`] via `ArrayKit::new()`.
//! 2. Chain configuration methods (`.top_k_strategy()`, `.validation()`, etc.).
//! 3. Call `.build()` to obtain a [`Solver`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::hashing::AnagramStrategy;
pub use crate::algorithms::ranking::TopKStrategy;
pub use crate::algorithms::two_pointer::TrapStrategy;
pub use crate::engine::solver::{Solver, ValidationMode};
pub use crate::fixtures::catalog::{Fixture, SCENARIOS, Scenario, run_catalog};
pub use crate::fixtures::report::{CatalogReport, ScenarioOutcome};
pub use crate::primitives::board::SudokuBoard;
pub use crate::primitives::errors::ArrayKitError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Solver`].
#[derive(Debug, Clone, Default)]
pub struct ArrayKitBuilder {
    /// Anagram comparison strategy.
    pub anagram_strategy: Option<AnagramStrategy>,

    /// Top-k selection strategy.
    pub top_k_strategy: Option<TopKStrategy>,

    /// Rain water strategy.
    pub trap_strategy: Option<TrapStrategy>,

    /// Precondition checking mode.
    pub validation: Option<ValidationMode>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ArrayKitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anagram comparison strategy.
    pub fn anagram_strategy(mut self, strategy: AnagramStrategy) -> Self {
        if self.anagram_strategy.is_some() {
            self.duplicate_param = Some("anagram_strategy");
        }
        self.anagram_strategy = Some(strategy);
        self
    }

    /// Set the top-k selection strategy.
    pub fn top_k_strategy(mut self, strategy: TopKStrategy) -> Self {
        if self.top_k_strategy.is_some() {
            self.duplicate_param = Some("top_k_strategy");
        }
        self.top_k_strategy = Some(strategy);
        self
    }

    /// Set the rain water strategy.
    pub fn trap_strategy(mut self, strategy: TrapStrategy) -> Self {
        if self.trap_strategy.is_some() {
            self.duplicate_param = Some("trap_strategy");
        }
        self.trap_strategy = Some(strategy);
        self
    }

    /// Set the precondition checking mode.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        if self.validation.is_some() {
            self.duplicate_param = Some("validation");
        }
        self.validation = Some(mode);
        self
    }

    /// Validate the configuration and build a [`Solver`].
    pub fn build(self) -> Result<Solver, ArrayKitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Solver::new(
            self.anagram_strategy.unwrap_or_default(),
            self.top_k_strategy.unwrap_or_default(),
            self.trap_strategy.unwrap_or_default(),
            self.validation.unwrap_or_default(),
        ))
    }
}

