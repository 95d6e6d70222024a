//! arraykit Catalog Examples
//!
//! This example demonstrates the problem catalog:
//! - Running every canonical scenario with the default solver
//! - Switching algorithm strategies
//! - Strict versus permissive handling of out-of-contract input
//! - Parsing and checking Sudoku boards
//! - Timing the linear-time solutions on larger inputs
//!
//! Each scenario includes the expected output as comments.

use arraykit::prelude::*;
use std::time::Instant;

fn main() -> Result<(), ArrayKitError> {
    println!("{}", "=".repeat(80));
    println!("arraykit - Catalog Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_default_catalog()?;
    example_2_alternative_strategies()?;
    example_3_validation_modes()?;
    example_4_sudoku_boards()?;
    example_5_benchmark()?;

    Ok(())
}

/// Example 1: Default Catalog
/// Runs every canonical scenario through the default solver
fn example_1_default_catalog() -> Result<(), ArrayKitError> {
    println!("Example 1: Default Catalog");
    println!("{}", "-".repeat(80));

    let solver = ArrayKit::new().build()?;
    let report = run_catalog(&solver)?;
    println!("{}", report);

    /* Expected Output:
    Summary:
      Scenarios: 29
      Passed: 29
      Failed: 0

    Results:
    Scenario                       Input                                Output                   Status
    ---------------------------------------------------------------------------------------------------
    has_duplicate/repeat           [1, 2, 3, 1]                         true                     ok
    has_duplicate/distinct         [1, 2, 3, 4]                         false                    ok
    ...
    trap/basin                     [4, 2, 0, 3, 2, 5]                   9                        ok
    */

    println!();
    Ok(())
}

/// Example 2: Alternative Strategies
/// Every strategy combination reproduces the same catalog
fn example_2_alternative_strategies() -> Result<(), ArrayKitError> {
    println!("Example 2: Alternative Strategies");
    println!("{}", "-".repeat(80));

    let solver = ArrayKit::new()
        .anagram_strategy(Sorting) // Compare sorted characters
        .top_k_strategy(Heap) // Bounded min-heap of size k
        .trap_strategy(PrefixArrays) // Precomputed left/right maxima
        .build()?;

    let report = run_catalog(&solver)?;
    println!(
        "Strategies: anagram={}, top_k={}, trap={}",
        solver.anagram_strategy().name(),
        solver.top_k_strategy().name(),
        solver.trap_strategy().name()
    );
    println!("Passed {}/{} scenarios", report.passed_count(), report.len());

    /* Expected Output:
    Strategies: anagram=Sorting, top_k=Heap, trap=PrefixArrays
    Passed 29/29 scenarios
    */

    println!();
    Ok(())
}

/// Example 3: Validation Modes
/// Strict mode reports contract violations; permissive mode returns defaults
fn example_3_validation_modes() -> Result<(), ArrayKitError> {
    println!("Example 3: Validation Modes");
    println!("{}", "-".repeat(80));

    let strict = ArrayKit::new().validation(Strict).build()?;
    let permissive = ArrayKit::new().validation(Permissive).build()?;

    let unsorted = [3, 1, 2];
    let short = [7];

    println!("two_sum_sorted({:?}, 5):", unsorted);
    println!("  strict:     {:?}", strict.two_sum_sorted(&unsorted, 5));
    println!("  permissive: {:?}", permissive.two_sum_sorted(&unsorted, 5));

    println!("max_area({:?}):", short);
    println!("  strict:     {:?}", strict.max_area(&short));
    println!("  permissive: {:?}", permissive.max_area(&short));

    println!("top_k_frequent([1, 2, 3], 0):");
    match strict.top_k_frequent(&[1, 2, 3], 0) {
        Ok(top) => println!("  strict:     {:?}", top),
        Err(err) => println!("  strict:     error: {}", err),
    }

    /* Expected Output:
    two_sum_sorted([3, 1, 2], 5):
      strict:     Err(NotSorted { index: 1 })
      permissive: Ok(Some((1, 3)))
    max_area([7]):
      strict:     Err(TooFewElements { operation: "max_area", got: 1, min: 2 })
      permissive: Ok(0)
    top_k_frequent([1, 2, 3], 0):
      strict:     error: Invalid k: 0 (must be between 1 and the distinct count 3)
    */

    println!();
    Ok(())
}

/// Example 4: Sudoku Boards
/// Parses row strings and checks partial-board validity
fn example_4_sudoku_boards() -> Result<(), ArrayKitError> {
    println!("Example 4: Sudoku Boards");
    println!("{}", "-".repeat(80));

    let rows = [
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
    let board = SudokuBoard::parse(&rows)?;
    println!("{}", board);
    println!("Filled cells: {}", board.filled().count());
    println!("Valid: {}", is_valid_sudoku(&board));

    // A malformed row is rejected at parse time
    let mut bad = rows;
    bad[2] = ".98..x.6.";
    if let Err(err) = SudokuBoard::parse(&bad) {
        println!("Rejected: {}", err);
    }

    /* Expected Output:
    53..7....
    6..195...
    .98....6.
    8...6...3
    4..8.3..1
    7...2...6
    .6....28.
    ...419..5
    ....8..79
    Filled cells: 30
    Valid: true
    Rejected: Invalid board: unexpected character 'x' at row 2, column 5
    */

    println!();
    Ok(())
}

/// Example 5: Benchmark
/// Times the linear-time solutions on a larger synthetic input
fn example_5_benchmark() -> Result<(), ArrayKitError> {
    println!("Example 5: Benchmark");
    println!("{}", "-".repeat(80));

    // Deterministic pseudo-random values in [0, 1000)
    let n = 100_000;
    let nums: Vec<i64> = (0..n as i64).map(|i| (i * 7_919 + 13) % 1_000).collect();

    let solver = ArrayKit::new().build()?;

    let start = Instant::now();
    let top = solver.top_k_frequent(&nums, 10)?;
    println!("top_k_frequent: {} values in {:?}", top.len(), start.elapsed());

    let start = Instant::now();
    let water = solver.trap(&nums)?;
    println!("trap: {} units in {:?}", water, start.elapsed());

    let start = Instant::now();
    let run = solver.longest_consecutive(&nums);
    println!("longest_consecutive: {} in {:?}", run, start.elapsed());

    println!();
    Ok(())
}
