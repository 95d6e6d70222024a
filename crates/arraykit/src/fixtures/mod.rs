//! Layer 4: Fixtures
//!
//! # Purpose
//!
//! This layer holds the shared scenario table (problem → input → expected
//! output) used by the demonstration program and the test suite, and the
//! report produced by running it.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Fixtures ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scenario table and runner.
pub mod catalog;

/// Scenario outcomes and report formatting.
pub mod report;
