//! # arraykit — Classic array, string and two-pointer algorithms for Rust
//!
//! A catalog of textbook solutions to the classic array/string problems:
//! duplicate detection, anagram check, two-sum (unsorted and sorted), top-k
//! frequency, product except self, Sudoku validation, longest consecutive
//! run, palindrome check, three-sum, container with most water, and trapped
//! rain water.
//!
//! Every problem is a pure function over an in-memory slice, generic over
//! the primitive integer types where it makes sense. A fluent builder
//! produces a [`Solver`](prelude::Solver) that checks each problem's
//! preconditions at the boundary and lets you pick between alternative
//! implementations.
//!
//! ## Techniques
//!
//! | Technique | Problems |
//! |---|---|
//! | Hash sets and maps | `has_duplicate`, `is_anagram`, `two_sum`, `top_k_frequent`, `longest_consecutive`, `is_valid_sudoku` |
//! | Prefix/suffix accumulation | `product_except_self`, `trap_prefix` |
//! | Converging two pointers | `is_palindrome`, `two_sum_sorted`, `three_sum`, `max_area`, `trap` |
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! assert!(has_duplicate(&[1, 2, 3, 1]));
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert_eq!(trap(&[4, 2, 0, 3, 2, 5]), 9);
//! ```
//!
//! ### Validated solver
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let solver = ArrayKit::new()
//!     .top_k_strategy(Heap)          // Bounded min-heap instead of buckets
//!     .trap_strategy(PrefixArrays)   // Precomputed left/right maxima
//!     .build()?;
//!
//! let mut top = solver.top_k_frequent(&[1, 1, 1, 2, 2, 3], 2)?;
//! top.sort(); // result order is unspecified
//! assert_eq!(top, vec![1, 2]);
//!
//! // Strict validation rejects out-of-contract input
//! assert!(solver.two_sum_sorted(&[3, 1, 2], 4).is_err());
//! # Result::<(), ArrayKitError>::Ok(())
//! ```
//!
//! ### Example catalog
//!
//! ```rust
//! use arraykit::prelude::*;
//!
//! let report = run_catalog(&ArrayKit::new().build()?)?;
//! assert!(report.all_passed());
//! println!("{}", report);
//! # Result::<(), ArrayKitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The free functions never fail: out-of-contract input (too short, no
//! solution, `k = 0`) yields a documented default such as `0`, `None`, or an
//! empty vector. The [`Solver`](prelude::Solver) in `Strict` mode (the
//! default) reports the same situations as
//! [`ArrayKitError`](prelude::ArrayKitError) instead; `Permissive` mode
//! mirrors the free functions.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the problem solutions.
mod algorithms;

// Layer 3: Engine - validation and dispatch.
mod engine;

// Layer 4: Fixtures - shared scenario table.
mod fixtures;

// High-level fluent API.
mod api;

// Standard arraykit prelude.
pub mod prelude {
    pub use crate::algorithms::hashing::{
        has_duplicate, is_anagram, is_anagram_sorted, longest_consecutive, two_sum,
    };
    pub use crate::algorithms::prefix::{
        checked_product_except_self, checked_trap_prefix, product_except_self, trap_prefix,
    };
    pub use crate::algorithms::ranking::{top_k_frequent, top_k_frequent_heap};
    pub use crate::algorithms::sudoku::is_valid_sudoku;
    pub use crate::algorithms::two_pointer::{
        checked_max_area, checked_trap, is_palindrome, max_area, normalize_alphanumeric,
        three_sum, trap, two_sum_sorted,
    };
    pub use crate::api::{
        AnagramStrategy::Counting,
        AnagramStrategy::Sorting,
        ArrayKitBuilder as ArrayKit, ArrayKitError, CatalogReport, Fixture, SCENARIOS, Scenario,
        ScenarioOutcome, Solver, SudokuBoard,
        TopKStrategy::Bucket,
        TopKStrategy::Heap,
        TrapStrategy::PrefixArrays,
        TrapStrategy::TwoPointer,
        ValidationMode::Permissive,
        ValidationMode::Strict,
        run_catalog,
    };
    pub use crate::api::{AnagramStrategy, TopKStrategy, TrapStrategy, ValidationMode};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod fixtures {
        pub use crate::fixtures::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
