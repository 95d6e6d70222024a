//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed to call the
//! free functions, configure a solver, and run the scenario catalog with a
//! single import.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Strategy variants and build-time validation

use arraykit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the free functions are available without qualification.
#[test]
fn test_prelude_free_functions() {
    assert!(has_duplicate(&[1, 2, 1]));
    assert!(is_anagram("ab", "ba"));
    assert!(is_anagram_sorted("ab", "ba"));
    assert_eq!(two_sum(&[1, 2], 3), Some((0, 1)));
    assert_eq!(top_k_frequent(&[1, 1, 2], 1), vec![1]);
    assert_eq!(top_k_frequent_heap(&[1, 1, 2], 1), vec![1]);
    assert_eq!(product_except_self(&[2, 3]), vec![3, 2]);
    assert_eq!(checked_product_except_self(&[2, 3]), Some(vec![3, 2]));
    assert!(is_valid_sudoku(&SudokuBoard::empty()));
    assert_eq!(longest_consecutive(&[2, 1]), 2);
    assert!(is_palindrome("aba"));
    assert_eq!(normalize_alphanumeric("A-b"), "ab");
    assert_eq!(two_sum_sorted(&[1, 2], 3), Some((1, 2)));
    assert_eq!(three_sum(&[-1, 0, 1]), vec![[-1, 0, 1]]);
    assert_eq!(max_area(&[1, 1]), 1);
    assert_eq!(trap(&[2, 0, 2]), 2);
    assert_eq!(trap_prefix(&[2, 0, 2]), 2);
}

/// Test that the scenario catalog is reachable from the prelude.
#[test]
fn test_prelude_catalog() {
    let solver: Solver = ArrayKit::new().build().unwrap();
    let report: CatalogReport = run_catalog(&solver).unwrap();
    assert_eq!(report.len(), SCENARIOS.len());

    let first: &Scenario = &SCENARIOS[0];
    let outcome: ScenarioOutcome = first.run(&solver).unwrap();
    assert_eq!(outcome.problem, first.fixture.problem());
    assert!(matches!(first.fixture, Fixture::HasDuplicate { .. }));
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test that every strategy variant is exported.
#[test]
fn test_prelude_strategy_variants() {
    for anagram in [Counting, Sorting] {
        for top_k in [Bucket, Heap] {
            for trap_strategy in [TwoPointer, PrefixArrays] {
                for mode in [Strict, Permissive] {
                    let solver = ArrayKit::new()
                        .anagram_strategy(anagram)
                        .top_k_strategy(top_k)
                        .trap_strategy(trap_strategy)
                        .validation(mode)
                        .build()
                        .unwrap();
                    assert_eq!(solver.anagram_strategy(), anagram);
                    assert_eq!(solver.top_k_strategy(), top_k);
                    assert_eq!(solver.trap_strategy(), trap_strategy);
                    assert_eq!(solver.validation(), mode);
                }
            }
        }
    }
}

/// Test builder defaults.
#[test]
fn test_prelude_builder_defaults() {
    let solver = ArrayKit::new().build().unwrap();
    assert_eq!(solver.anagram_strategy(), AnagramStrategy::Counting);
    assert_eq!(solver.top_k_strategy(), TopKStrategy::Bucket);
    assert_eq!(solver.trap_strategy(), TrapStrategy::TwoPointer);
    assert_eq!(solver.validation(), ValidationMode::Strict);
    assert_eq!(solver, Solver::default());
}

/// Test that setting a parameter twice is reported at build time.
#[test]
fn test_prelude_duplicate_parameter() {
    let result = ArrayKit::new().top_k_strategy(Bucket).top_k_strategy(Heap).build();
    assert_eq!(
        result,
        Err(ArrayKitError::DuplicateParameter {
            parameter: "top_k_strategy"
        })
    );

    let result = ArrayKit::new().validation(Strict).validation(Strict).build();
    assert!(matches!(
        result,
        Err(ArrayKitError::DuplicateParameter { parameter: "validation" })
    ));
}
