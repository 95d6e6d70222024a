//! Tests for the validated solver.
//!
//! These tests verify how the solver treats out-of-contract input in each
//! validation mode:
//! - `Strict` reports violations as `ArrayKitError`
//! - `Permissive` mirrors the free functions and their defaults
//!
//! ## Test Organization
//!
//! 1. **Strict Mode** - One test per precondition
//! 2. **Permissive Mode** - Documented defaults
//! 3. **Strategy Dispatch** - Configured strategies are used
//! 4. **Error Messages** - Display output

use arraykit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn strict() -> Solver {
    ArrayKit::new().validation(Strict).build().unwrap()
}

fn permissive() -> Solver {
    ArrayKit::new().validation(Permissive).build().unwrap()
}

// ============================================================================
// Strict Mode Tests
// ============================================================================

/// Test that two-sum needs two elements and a solution.
#[test]
fn test_strict_two_sum() {
    let solver = strict();
    assert_eq!(solver.two_sum(&[2, 7, 11, 15], 9), Ok(Some((0, 1))));
    assert_eq!(
        solver.two_sum(&[1], 1),
        Err(ArrayKitError::TooFewElements {
            operation: "two_sum",
            got: 1,
            min: 2
        })
    );
    assert_eq!(
        solver.two_sum(&[1, 2, 3], 100),
        Err(ArrayKitError::NoSolution {
            operation: "two_sum"
        })
    );
}

/// Test that top-k requires `1 <= k <= distinct`.
#[test]
fn test_strict_top_k() {
    let solver = strict();
    let mut top = solver.top_k_frequent(&[1, 1, 1, 2, 2, 3], 2).unwrap();
    top.sort();
    assert_eq!(top, vec![1, 2]);

    assert_eq!(
        solver.top_k_frequent(&[1, 2, 3], 0),
        Err(ArrayKitError::InvalidK { k: 0, distinct: 3 })
    );
    assert_eq!(
        solver.top_k_frequent(&[1, 1, 2], 3),
        Err(ArrayKitError::InvalidK { k: 3, distinct: 2 })
    );
    assert_eq!(
        solver.top_k_frequent::<i32>(&[], 1),
        Err(ArrayKitError::InvalidK { k: 1, distinct: 0 })
    );
}

/// Test that product except self needs two elements and reports overflow.
#[test]
fn test_strict_product_except_self() {
    let solver = strict();
    assert_eq!(solver.product_except_self(&[1, 2, 3, 4]), Ok(vec![24, 12, 8, 6]));
    assert_eq!(
        solver.product_except_self(&[5]),
        Err(ArrayKitError::TooFewElements {
            operation: "product_except_self",
            got: 1,
            min: 2
        })
    );
    assert_eq!(
        solver.product_except_self(&[i32::MAX, 2, 3]),
        Err(ArrayKitError::ArithmeticOverflow {
            operation: "product_except_self"
        })
    );
    assert_eq!(solver.product_except_self(&[2, i32::MAX]), Ok(vec![i32::MAX, 2]));
}

/// Test that sorted two-sum rejects unsorted input before searching.
#[test]
fn test_strict_two_sum_sorted() {
    let solver = strict();
    assert_eq!(solver.two_sum_sorted(&[2, 7, 11, 15], 9), Ok(Some((1, 2))));
    assert_eq!(
        solver.two_sum_sorted(&[1, 3, 2, 4], 5),
        Err(ArrayKitError::NotSorted { index: 2 })
    );
    assert_eq!(
        solver.two_sum_sorted(&[1, 2, 3], 10),
        Err(ArrayKitError::NoSolution {
            operation: "two_sum_sorted"
        })
    );
    assert!(matches!(
        solver.two_sum_sorted(&[4], 4),
        Err(ArrayKitError::TooFewElements { .. })
    ));
}

/// Test that container area needs two non-negative bars.
#[test]
fn test_strict_max_area() {
    let solver = strict();
    assert_eq!(solver.max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), Ok(49));
    assert!(matches!(
        solver.max_area(&[3]),
        Err(ArrayKitError::TooFewElements { got: 1, .. })
    ));
    assert_eq!(
        solver.max_area(&[1, -1, 2]),
        Err(ArrayKitError::NegativeHeight { index: 1 })
    );
    assert_eq!(
        solver.max_area(&[200u8, 0, 0, 200]),
        Err(ArrayKitError::ArithmeticOverflow {
            operation: "max_area"
        })
    );
}

/// Test that rain water rejects negative heights but accepts short input.
#[test]
fn test_strict_trap() {
    let solver = strict();
    assert_eq!(solver.trap(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), Ok(6));
    assert_eq!(solver.trap::<i32>(&[]), Ok(0));
    assert_eq!(
        solver.trap(&[2, 0, -3, 2]),
        Err(ArrayKitError::NegativeHeight { index: 2 })
    );
}

/// Test that rain water totals beyond the element type are reported.
#[test]
fn test_strict_trap_overflow() {
    for strategy in [TwoPointer, PrefixArrays] {
        let solver = ArrayKit::new().trap_strategy(strategy).build().unwrap();
        assert_eq!(
            solver.trap(&[i32::MAX, 0, 0, i32::MAX]),
            Err(ArrayKitError::ArithmeticOverflow { operation: "trap" })
        );
        assert_eq!(
            solver.trap(&[u8::MAX, 0, 0, u8::MAX]),
            Err(ArrayKitError::ArithmeticOverflow { operation: "trap" })
        );
        assert_eq!(solver.trap(&[100u8, 0, 0, 100]), Ok(200));
    }
}

/// Test that problems without preconditions return plain values.
#[test]
fn test_strict_unchecked_problems() {
    let solver = strict();
    assert!(!solver.has_duplicate::<i32>(&[]));
    assert!(solver.is_anagram("", ""));
    assert_eq!(solver.longest_consecutive::<i32>(&[]), 0);
    assert!(solver.is_valid_sudoku(&SudokuBoard::empty()));
    assert!(solver.is_palindrome(""));
    assert!(solver.three_sum::<i32>(&[]).is_empty());
}

// ============================================================================
// Permissive Mode Tests
// ============================================================================

/// Test that permissive mode returns the free-function defaults.
#[test]
fn test_permissive_defaults() {
    let solver = permissive();
    assert_eq!(solver.two_sum(&[1], 1), Ok(None));
    assert_eq!(solver.two_sum(&[1, 2, 3], 100), Ok(None));
    assert_eq!(solver.top_k_frequent(&[1, 2, 3], 0), Ok(vec![]));
    assert_eq!(solver.product_except_self::<i32>(&[]), Ok(vec![]));
    assert_eq!(solver.product_except_self(&[5]), Ok(vec![1]));
    assert_eq!(solver.two_sum_sorted(&[1, 2, 3], 10), Ok(None));
    assert_eq!(solver.max_area(&[3]), Ok(0));
}

/// Test that permissive mode saturates instead of reporting overflow.
#[test]
fn test_permissive_saturates() {
    let solver = permissive();
    assert_eq!(solver.max_area(&[200u8, 0, 0, 200]), Ok(u8::MAX));
    assert_eq!(solver.trap(&[i32::MAX, 0, 0, i32::MAX]), Ok(i32::MAX));
    assert_eq!(solver.trap(&[u8::MAX, 0, 0, u8::MAX]), Ok(u8::MAX));
}

/// Test that permissive top-k returns every value when `k` is too large.
#[test]
fn test_permissive_top_k_clamps() {
    let mut all = permissive().top_k_frequent(&[3, 1, 2, 1], 10).unwrap();
    all.sort();
    assert_eq!(all, vec![1, 2, 3]);
}

/// Test that permissive mode agrees with strict mode on valid input.
#[test]
fn test_permissive_matches_strict_on_valid_input() {
    let (s, p) = (strict(), permissive());
    assert_eq!(s.two_sum(&[3, 2, 4], 6), p.two_sum(&[3, 2, 4], 6));
    assert_eq!(
        s.product_except_self(&[-1, 1, 0, -3, 3]),
        p.product_except_self(&[-1, 1, 0, -3, 3])
    );
    assert_eq!(s.two_sum_sorted(&[2, 3, 4], 6), p.two_sum_sorted(&[2, 3, 4], 6));
    assert_eq!(s.max_area(&[1, 1]), p.max_area(&[1, 1]));
    assert_eq!(s.trap(&[4, 2, 0, 3, 2, 5]), p.trap(&[4, 2, 0, 3, 2, 5]));
}

// ============================================================================
// Strategy Dispatch Tests
// ============================================================================

/// Test that every strategy combination gives the same answers.
#[test]
fn test_strategies_agree_through_solver() {
    let solvers = [
        ArrayKit::new().build().unwrap(),
        ArrayKit::new()
            .anagram_strategy(Sorting)
            .top_k_strategy(Heap)
            .trap_strategy(PrefixArrays)
            .build()
            .unwrap(),
    ];
    for solver in solvers {
        assert!(solver.is_anagram("anagram", "nagaram"));
        assert!(!solver.is_anagram("rat", "car"));
        assert_eq!(solver.top_k_frequent(&[4, 4, 4, 1, 2, 2, 3], 1), Ok(vec![4]));
        assert_eq!(solver.trap(&[4, 2, 0, 3, 2, 5]), Ok(9));
    }
}

/// Test that `Solver::new` and the builder produce the same configuration.
#[test]
fn test_solver_new_matches_builder() {
    let built = ArrayKit::new()
        .anagram_strategy(Sorting)
        .validation(Permissive)
        .build()
        .unwrap();
    let direct = Solver::new(Sorting, Bucket, TwoPointer, Permissive);
    assert_eq!(built, direct);
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test that errors render the offending values.
#[test]
fn test_error_messages() {
    let solver = strict();

    let err = solver.two_sum(&[1], 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Too few elements for two_sum: got 1, need at least 2"
    );

    let err = solver.two_sum_sorted(&[2, 1], 3).unwrap_err();
    assert!(err.to_string().contains("index 1"));

    let err = solver.top_k_frequent(&[1], 2).unwrap_err();
    assert!(err.to_string().contains("Invalid k: 2"));

    let err: Box<dyn std::error::Error> = Box::new(ArrayKitError::NoSolution {
        operation: "two_sum",
    });
    assert_eq!(err.to_string(), "No solution exists for two_sum");
}
