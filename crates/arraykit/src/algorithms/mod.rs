//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the problem solutions themselves. Every function is
//! pure, allocation-bounded by its input, and answers out-of-contract input
//! with a documented default instead of an error.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Fixtures
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Hash-set and hash-map membership checks.
pub mod hashing;

/// Top-k frequency ranking.
pub mod ranking;

/// Prefix/suffix accumulation.
pub mod prefix;

/// Sudoku validity.
pub mod sudoku;

/// Converging two-pointer scans.
pub mod two_pointer;
