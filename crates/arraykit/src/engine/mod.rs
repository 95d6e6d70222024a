//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer checks problem preconditions and dispatches validated input
//! to the configured algorithm strategies.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Fixtures
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Precondition validation.
pub mod validator;

/// Validated execution facade.
pub mod solver;
