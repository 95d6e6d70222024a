//! Scenario outcomes and report formatting.
//!
//! ## Purpose
//!
//! This module defines the result of running one scenario and the report
//! collecting every outcome of a catalog run, with a human-readable
//! `Display` table.
//!
//! ## Invariants
//!
//! * `passed` is true iff the actual result matches the expected result
//!   under the problem's comparison rule (unordered problems compare sorted).
//!
//! ## Non-goals
//!
//! * This module does not run scenarios; it only stores and formats results.

// External dependencies
use std::fmt::{Display, Formatter, Result};

/// Width beyond which table cells are shortened with an ellipsis.
const MAX_CELL_WIDTH: usize = 36;

// ============================================================================
// Scenario Outcome
// ============================================================================

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Scenario name (e.g., "two_sum/basic").
    pub name: &'static str,

    /// Problem the scenario exercises (e.g., "two_sum").
    pub problem: &'static str,

    /// Rendered input.
    pub input: String,

    /// Rendered expected output.
    pub expected: String,

    /// Rendered actual output.
    pub actual: String,

    /// Whether actual matched expected.
    pub passed: bool,
}

// ============================================================================
// Catalog Report
// ============================================================================

/// Every outcome of a catalog run, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogReport {
    /// Outcomes in the order the scenarios were run.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl CatalogReport {
    /// Wrap a list of outcomes.
    pub fn new(outcomes: Vec<ScenarioOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of scenarios run.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if no scenario was run.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of scenarios that matched.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Check if every scenario matched.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Scenarios that did not match.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CatalogReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Scenarios: {}", self.len())?;
        writeln!(f, "  Passed: {}", self.passed_count())?;
        writeln!(f, "  Failed: {}", self.len() - self.passed_count())?;
        writeln!(f)?;

        writeln!(f, "Results:")?;
        writeln!(
            f,
            "{:<30} {:<36} {:<24} {:<6}",
            "Scenario", "Input", "Output", "Status"
        )?;
        writeln!(f, "{:-<width$}", "", width = 99)?;

        for outcome in &self.outcomes {
            let status = if outcome.passed { "ok" } else { "FAIL" };
            writeln!(
                f,
                "{:<30} {:<36} {:<24} {:<6}",
                outcome.name,
                shorten(&outcome.input),
                shorten(&outcome.actual),
                status
            )?;
            if !outcome.passed {
                writeln!(f, "{:>30} expected {}", "", outcome.expected)?;
            }
        }

        Ok(())
    }
}

fn shorten(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut short: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
    short.push_str("...");
    short
}
