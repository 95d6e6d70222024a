//! Scenario table and runner.
//!
//! ## Purpose
//!
//! This module holds the canonical example inputs for every problem together
//! with their expected outputs. The same table drives the demonstration
//! program and the acceptance tests.
//!
//! ## Key concepts
//!
//! * **Fixture**: One problem invocation with typed input and expected output.
//! * **Comparison**: Top-k results are compared as sets (sorted first); every
//!   other problem is compared exactly.
//!
//! ## Invariants
//!
//! * Every fixture satisfies its problem's preconditions, so running the
//!   table through a `Strict` solver never returns a validation error.

// External dependencies
use core::fmt::Debug;
use log::{debug, warn};

// Internal dependencies
use crate::engine::solver::Solver;
use crate::fixtures::report::{CatalogReport, ScenarioOutcome};
use crate::primitives::board::SudokuBoard;
use crate::primitives::errors::ArrayKitError;

// ============================================================================
// Fixture
// ============================================================================

/// One problem invocation with its expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Duplicate detection.
    HasDuplicate {
        /// Input values.
        nums: &'static [i32],
        /// Expected answer.
        expected: bool,
    },

    /// Anagram check.
    IsAnagram {
        /// First string.
        s: &'static str,
        /// Second string.
        t: &'static str,
        /// Expected answer.
        expected: bool,
    },

    /// Unsorted two-sum (0-based indices).
    TwoSum {
        /// Input values.
        nums: &'static [i32],
        /// Target sum.
        target: i32,
        /// Expected `(earlier, later)` indices.
        expected: (usize, usize),
    },

    /// Top-k frequent values (compared as a set).
    TopKFrequent {
        /// Input values.
        nums: &'static [i32],
        /// Number of values to select.
        k: usize,
        /// Expected values in ascending order.
        expected: &'static [i32],
    },

    /// Product of all other elements.
    ProductExceptSelf {
        /// Input values.
        nums: &'static [i32],
        /// Expected products.
        expected: &'static [i32],
    },

    /// Sudoku validity.
    ValidSudoku {
        /// Nine rows of nine cells.
        rows: [&'static str; 9],
        /// Expected answer.
        expected: bool,
    },

    /// Longest consecutive run.
    LongestConsecutive {
        /// Input values.
        nums: &'static [i32],
        /// Expected run length.
        expected: usize,
    },

    /// Palindrome check.
    IsPalindrome {
        /// Input string.
        s: &'static str,
        /// Expected answer.
        expected: bool,
    },

    /// Sorted two-sum (1-based indices).
    TwoSumSorted {
        /// Non-decreasing input values.
        numbers: &'static [i32],
        /// Target sum.
        target: i32,
        /// Expected 1-based indices.
        expected: (usize, usize),
    },

    /// Zero-sum triplets.
    ThreeSum {
        /// Input values.
        nums: &'static [i32],
        /// Expected triplets in lexicographic order.
        expected: &'static [[i32; 3]],
    },

    /// Container with most water.
    MaxArea {
        /// Bar heights.
        height: &'static [i32],
        /// Expected area.
        expected: i32,
    },

    /// Trapped rain water.
    Trap {
        /// Bar heights.
        height: &'static [i32],
        /// Expected volume.
        expected: i32,
    },
}

impl Fixture {
    /// Name of the problem this fixture exercises.
    pub fn problem(&self) -> &'static str {
        match self {
            Self::HasDuplicate { .. } => "has_duplicate",
            Self::IsAnagram { .. } => "is_anagram",
            Self::TwoSum { .. } => "two_sum",
            Self::TopKFrequent { .. } => "top_k_frequent",
            Self::ProductExceptSelf { .. } => "product_except_self",
            Self::ValidSudoku { .. } => "is_valid_sudoku",
            Self::LongestConsecutive { .. } => "longest_consecutive",
            Self::IsPalindrome { .. } => "is_palindrome",
            Self::TwoSumSorted { .. } => "two_sum_sorted",
            Self::ThreeSum { .. } => "three_sum",
            Self::MaxArea { .. } => "max_area",
            Self::Trap { .. } => "trap",
        }
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// A named fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Unique name, `problem/case`.
    pub name: &'static str,

    /// Input and expected output.
    pub fixture: Fixture,
}

impl Scenario {
    /// Run the fixture through `solver` and compare against the expected output.
    ///
    /// Returns an error only if the solver rejects the input.
    pub fn run(&self, solver: &Solver) -> Result<ScenarioOutcome, ArrayKitError> {
        let outcome = match self.fixture {
            Fixture::HasDuplicate { nums, expected } => {
                let actual = solver.has_duplicate(nums);
                self.outcome(format!("{nums:?}"), expected, actual)
            }
            Fixture::IsAnagram { s, t, expected } => {
                let actual = solver.is_anagram(s, t);
                self.outcome(format!("{s:?}, {t:?}"), expected, actual)
            }
            Fixture::TwoSum {
                nums,
                target,
                expected,
            } => {
                let actual = solver.two_sum(nums, target)?;
                self.outcome(format!("{nums:?}, target={target}"), Some(expected), actual)
            }
            Fixture::TopKFrequent { nums, k, expected } => {
                let mut actual = solver.top_k_frequent(nums, k)?;
                actual.sort_unstable();
                self.outcome(format!("{nums:?}, k={k}"), expected.to_vec(), actual)
            }
            Fixture::ProductExceptSelf { nums, expected } => {
                let actual = solver.product_except_self(nums)?;
                self.outcome(format!("{nums:?}"), expected.to_vec(), actual)
            }
            Fixture::ValidSudoku { rows, expected } => {
                let board = SudokuBoard::parse(&rows)?;
                let actual = solver.is_valid_sudoku(&board);
                self.outcome(format!("rows[0]={:?}, ...", rows[0]), expected, actual)
            }
            Fixture::LongestConsecutive { nums, expected } => {
                let actual = solver.longest_consecutive(nums);
                self.outcome(format!("{nums:?}"), expected, actual)
            }
            Fixture::IsPalindrome { s, expected } => {
                let actual = solver.is_palindrome(s);
                self.outcome(format!("{s:?}"), expected, actual)
            }
            Fixture::TwoSumSorted {
                numbers,
                target,
                expected,
            } => {
                let actual = solver.two_sum_sorted(numbers, target)?;
                self.outcome(
                    format!("{numbers:?}, target={target}"),
                    Some(expected),
                    actual,
                )
            }
            Fixture::ThreeSum { nums, expected } => {
                let actual = solver.three_sum(nums);
                self.outcome(format!("{nums:?}"), expected.to_vec(), actual)
            }
            Fixture::MaxArea { height, expected } => {
                let actual = solver.max_area(height)?;
                self.outcome(format!("{height:?}"), expected, actual)
            }
            Fixture::Trap { height, expected } => {
                let actual = solver.trap(height)?;
                self.outcome(format!("{height:?}"), expected, actual)
            }
        };

        if outcome.passed {
            debug!("{}: ok", self.name);
        } else {
            warn!(
                "{}: expected {}, got {}",
                self.name, outcome.expected, outcome.actual
            );
        }

        Ok(outcome)
    }

    fn outcome<E>(&self, input: String, expected: E, actual: E) -> ScenarioOutcome
    where
        E: Debug + PartialEq,
    {
        ScenarioOutcome {
            name: self.name,
            problem: self.fixture.problem(),
            input,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            passed: expected == actual,
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Run every scenario in [`SCENARIOS`] through `solver`.
pub fn run_catalog(solver: &Solver) -> Result<CatalogReport, ArrayKitError> {
    let outcomes = SCENARIOS
        .iter()
        .map(|scenario| scenario.run(solver))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CatalogReport::new(outcomes))
}

// ============================================================================
// Scenario Table
// ============================================================================

const VALID_BOARD: [&str; 9] = [
    "53..7....",
    "6..195...",
    ".98....6.",
    "8...6...3",
    "4..8.3..1",
    "7...2...6",
    ".6....28.",
    "...419..5",
    "....8..79",
];

// Same as VALID_BOARD with the top-left 5 replaced by an 8, repeating the 8
// already in the top-left box and in column 0.
const DUPLICATE_EIGHT_BOARD: [&str; 9] = [
    "83..7....",
    "6..195...",
    ".98....6.",
    "8...6...3",
    "4..8.3..1",
    "7...2...6",
    ".6....28.",
    "...419..5",
    "....8..79",
];

/// Canonical example inputs for every problem.
pub const SCENARIOS: &[Scenario] = &[
    // Hashing
    Scenario {
        name: "has_duplicate/repeat",
        fixture: Fixture::HasDuplicate {
            nums: &[1, 2, 3, 1],
            expected: true,
        },
    },
    Scenario {
        name: "has_duplicate/distinct",
        fixture: Fixture::HasDuplicate {
            nums: &[1, 2, 3, 4],
            expected: false,
        },
    },
    Scenario {
        name: "has_duplicate/many",
        fixture: Fixture::HasDuplicate {
            nums: &[1, 1, 1, 3, 3, 4, 3, 2, 4, 2],
            expected: true,
        },
    },
    Scenario {
        name: "is_anagram/match",
        fixture: Fixture::IsAnagram {
            s: "anagram",
            t: "nagaram",
            expected: true,
        },
    },
    Scenario {
        name: "is_anagram/mismatch",
        fixture: Fixture::IsAnagram {
            s: "rat",
            t: "car",
            expected: false,
        },
    },
    Scenario {
        name: "two_sum/basic",
        fixture: Fixture::TwoSum {
            nums: &[2, 7, 11, 15],
            target: 9,
            expected: (0, 1),
        },
    },
    Scenario {
        name: "two_sum/middle",
        fixture: Fixture::TwoSum {
            nums: &[3, 2, 4],
            target: 6,
            expected: (1, 2),
        },
    },
    Scenario {
        name: "two_sum/equal_values",
        fixture: Fixture::TwoSum {
            nums: &[3, 3],
            target: 6,
            expected: (0, 1),
        },
    },
    Scenario {
        name: "top_k_frequent/basic",
        fixture: Fixture::TopKFrequent {
            nums: &[1, 1, 1, 2, 2, 3],
            k: 2,
            expected: &[1, 2],
        },
    },
    Scenario {
        name: "top_k_frequent/single",
        fixture: Fixture::TopKFrequent {
            nums: &[1],
            k: 1,
            expected: &[1],
        },
    },
    Scenario {
        name: "longest_consecutive/basic",
        fixture: Fixture::LongestConsecutive {
            nums: &[100, 4, 200, 1, 3, 2],
            expected: 4,
        },
    },
    Scenario {
        name: "longest_consecutive/with_repeat",
        fixture: Fixture::LongestConsecutive {
            nums: &[0, 3, 7, 2, 5, 8, 4, 6, 0, 1],
            expected: 9,
        },
    },
    Scenario {
        name: "is_valid_sudoku/valid",
        fixture: Fixture::ValidSudoku {
            rows: VALID_BOARD,
            expected: true,
        },
    },
    Scenario {
        name: "is_valid_sudoku/duplicate_8",
        fixture: Fixture::ValidSudoku {
            rows: DUPLICATE_EIGHT_BOARD,
            expected: false,
        },
    },
    // Prefix accumulation
    Scenario {
        name: "product_except_self/basic",
        fixture: Fixture::ProductExceptSelf {
            nums: &[1, 2, 3, 4],
            expected: &[24, 12, 8, 6],
        },
    },
    Scenario {
        name: "product_except_self/zero",
        fixture: Fixture::ProductExceptSelf {
            nums: &[-1, 1, 0, -3, 3],
            expected: &[0, 0, 9, 0, 0],
        },
    },
    // Two pointers
    Scenario {
        name: "is_palindrome/sentence",
        fixture: Fixture::IsPalindrome {
            s: "A man, a plan, a canal: Panama",
            expected: true,
        },
    },
    Scenario {
        name: "is_palindrome/mismatch",
        fixture: Fixture::IsPalindrome {
            s: "race a car",
            expected: false,
        },
    },
    Scenario {
        name: "is_palindrome/blank",
        fixture: Fixture::IsPalindrome {
            s: " ",
            expected: true,
        },
    },
    Scenario {
        name: "two_sum_sorted/basic",
        fixture: Fixture::TwoSumSorted {
            numbers: &[2, 7, 11, 15],
            target: 9,
            expected: (1, 2),
        },
    },
    Scenario {
        name: "two_sum_sorted/ends",
        fixture: Fixture::TwoSumSorted {
            numbers: &[2, 3, 4],
            target: 6,
            expected: (1, 3),
        },
    },
    Scenario {
        name: "two_sum_sorted/negative",
        fixture: Fixture::TwoSumSorted {
            numbers: &[-1, 0],
            target: -1,
            expected: (1, 2),
        },
    },
    Scenario {
        name: "three_sum/basic",
        fixture: Fixture::ThreeSum {
            nums: &[-1, 0, 1, 2, -1, -4],
            expected: &[[-1, -1, 2], [-1, 0, 1]],
        },
    },
    Scenario {
        name: "three_sum/none",
        fixture: Fixture::ThreeSum {
            nums: &[0, 1, 1],
            expected: &[],
        },
    },
    Scenario {
        name: "three_sum/zeros",
        fixture: Fixture::ThreeSum {
            nums: &[0, 0, 0],
            expected: &[[0, 0, 0]],
        },
    },
    Scenario {
        name: "max_area/basic",
        fixture: Fixture::MaxArea {
            height: &[1, 8, 6, 2, 5, 4, 8, 3, 7],
            expected: 49,
        },
    },
    Scenario {
        name: "max_area/pair",
        fixture: Fixture::MaxArea {
            height: &[1, 1],
            expected: 1,
        },
    },
    Scenario {
        name: "trap/basic",
        fixture: Fixture::Trap {
            height: &[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1],
            expected: 6,
        },
    },
    Scenario {
        name: "trap/basin",
        fixture: Fixture::Trap {
            height: &[4, 2, 0, 3, 2, 5],
            expected: 9,
        },
    },
];
