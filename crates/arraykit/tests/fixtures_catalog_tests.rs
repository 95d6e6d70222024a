//! Tests for the scenario catalog and its report.
//!
//! These tests run the shared example table through every solver
//! configuration and check the report helpers and formatting.
//!
//! ## Test Organization
//!
//! 1. **Catalog Coverage** - Every problem has scenarios, names are unique
//! 2. **Catalog Runs** - All scenarios pass under every configuration
//! 3. **Mismatches** - Failing scenarios are reported, not hidden
//! 4. **Report Formatting** - Summary and table layout

use std::collections::BTreeSet;

use arraykit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Every combination of strategies and validation modes.
fn all_solvers() -> Vec<Solver> {
    let mut solvers = Vec::new();
    for anagram in [Counting, Sorting] {
        for top_k in [Bucket, Heap] {
            for trap_strategy in [TwoPointer, PrefixArrays] {
                for mode in [Strict, Permissive] {
                    solvers.push(Solver::new(anagram, top_k, trap_strategy, mode));
                }
            }
        }
    }
    solvers
}

// ============================================================================
// Catalog Coverage Tests
// ============================================================================

/// Test that every problem is covered by at least one scenario.
#[test]
fn test_catalog_covers_every_problem() {
    let problems: BTreeSet<&str> = SCENARIOS.iter().map(|s| s.fixture.problem()).collect();
    let expected: BTreeSet<&str> = [
        "has_duplicate",
        "is_anagram",
        "two_sum",
        "top_k_frequent",
        "product_except_self",
        "is_valid_sudoku",
        "longest_consecutive",
        "is_palindrome",
        "two_sum_sorted",
        "three_sum",
        "max_area",
        "trap",
    ]
    .into_iter()
    .collect();
    assert_eq!(problems, expected);
}

/// Test that scenario names are unique and prefixed by their problem.
#[test]
fn test_catalog_names() {
    let names: BTreeSet<&str> = SCENARIOS.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), SCENARIOS.len(), "scenario names must be unique");

    for scenario in SCENARIOS {
        let prefix = format!("{}/", scenario.fixture.problem());
        assert!(
            scenario.name.starts_with(&prefix),
            "{} should start with {prefix}",
            scenario.name
        );
    }
}

// ============================================================================
// Catalog Run Tests
// ============================================================================

/// Test that the whole catalog passes under every configuration.
#[test]
fn test_catalog_passes_all_configurations() {
    for solver in all_solvers() {
        let report = run_catalog(&solver).unwrap();
        assert_eq!(report.len(), SCENARIOS.len());
        assert!(
            report.all_passed(),
            "catalog failed for {solver:?}:\n{report}"
        );
        assert_eq!(report.passed_count(), report.len());
        assert_eq!(report.failures().count(), 0);
    }
}

/// Test that outcomes are reported in table order.
#[test]
fn test_catalog_outcome_order() {
    let report = run_catalog(&Solver::default()).unwrap();
    for (outcome, scenario) in report.outcomes.iter().zip(SCENARIOS) {
        assert_eq!(outcome.name, scenario.name);
        assert_eq!(outcome.problem, scenario.fixture.problem());
    }
}

/// Test that top-k scenarios pass regardless of result order.
#[test]
fn test_catalog_top_k_compared_as_set() {
    let scenario = Scenario {
        name: "top_k_frequent/reordered",
        fixture: Fixture::TopKFrequent {
            nums: &[3, 3, 3, 1, 1, 2],
            k: 2,
            expected: &[1, 3],
        },
    };
    for strategy in [Bucket, Heap] {
        let solver = ArrayKit::new().top_k_strategy(strategy).build().unwrap();
        assert!(scenario.run(&solver).unwrap().passed);
    }
}

// ============================================================================
// Mismatch Tests
// ============================================================================

/// Test that a wrong expectation is reported as a failure.
#[test]
fn test_scenario_mismatch() {
    let scenario = Scenario {
        name: "trap/wrong",
        fixture: Fixture::Trap {
            height: &[2, 0, 2],
            expected: 3,
        },
    };
    let outcome = scenario.run(&Solver::default()).unwrap();
    assert!(!outcome.passed);
    assert_eq!(outcome.problem, "trap");
    assert_eq!(outcome.input, "[2, 0, 2]");
    assert_eq!(outcome.expected, "3");
    assert_eq!(outcome.actual, "2");
}

/// Test that a malformed board surfaces as an error.
#[test]
fn test_scenario_bad_board() {
    let mut rows = ["........."; 9];
    rows[4] = "....0....";
    let scenario = Scenario {
        name: "is_valid_sudoku/malformed",
        fixture: Fixture::ValidSudoku {
            rows,
            expected: true,
        },
    };
    assert!(matches!(
        scenario.run(&Solver::default()),
        Err(ArrayKitError::InvalidBoard(_))
    ));
}

/// Test that strict validation errors propagate out of the runner.
#[test]
fn test_scenario_strict_rejection() {
    let scenario = Scenario {
        name: "two_sum_sorted/unsorted",
        fixture: Fixture::TwoSumSorted {
            numbers: &[3, 1, 2],
            target: 5,
            expected: (1, 3),
        },
    };
    assert_eq!(
        scenario.run(&Solver::default()),
        Err(ArrayKitError::NotSorted { index: 1 })
    );
}

// ============================================================================
// Report Formatting Tests
// ============================================================================

/// Test report helpers on a mixed report.
#[test]
fn test_report_mixed() {
    let solver = Solver::default();
    let good = SCENARIOS[0].run(&solver).unwrap();
    let bad = Scenario {
        name: "max_area/wrong",
        fixture: Fixture::MaxArea {
            height: &[1, 1],
            expected: 5,
        },
    }
    .run(&solver)
    .unwrap();

    let report = CatalogReport::new(vec![good, bad]);
    assert_eq!(report.len(), 2);
    assert!(!report.is_empty());
    assert_eq!(report.passed_count(), 1);
    assert!(!report.all_passed());

    let failures: Vec<&str> = report.failures().map(|o| o.name).collect();
    assert_eq!(failures, vec!["max_area/wrong"]);

    let text = report.to_string();
    assert!(text.starts_with("Summary:\n"));
    assert!(text.contains("  Scenarios: 2\n"));
    assert!(text.contains("  Passed: 1\n"));
    assert!(text.contains("  Failed: 1\n"));
    assert!(text.contains("Results:\n"));
    assert!(text.contains("FAIL"));
    assert!(text.contains("expected 5"));
}

/// Test that long cells are shortened in the table.
#[test]
fn test_report_shortens_long_cells() {
    let long_input = format!("{:?}", (0..40).collect::<Vec<i32>>());
    let report = CatalogReport::new(vec![ScenarioOutcome {
        name: "has_duplicate/long",
        problem: "has_duplicate",
        input: long_input.clone(),
        expected: "false".to_string(),
        actual: "false".to_string(),
        passed: true,
    }]);
    let text = report.to_string();
    assert!(!text.contains(&long_input));
    assert!(text.contains("[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10..."));
}

/// Test that an empty report formats without a table body.
#[test]
fn test_report_empty() {
    let report = CatalogReport::default();
    assert!(report.is_empty());
    assert!(report.all_passed());
    assert!(report.to_string().contains("  Scenarios: 0\n"));
}
