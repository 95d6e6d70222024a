//! Sudoku board representation.
//!
//! ## Purpose
//!
//! This module provides the fixed 9×9 grid consumed by the Sudoku validity
//! check. Construction is the only place the board shape and cell characters
//! are checked; once built, a board is always well formed.
//!
//! ## Key concepts
//!
//! * **Cells**: `None` for a blank (`'.'`), `Some(d)` for a digit `d` in `1..=9`.
//! * **Boxes**: The grid is divided into nine 3×3 boxes, numbered row-major.
//!
//! ## Non-goals
//!
//! * This module does not check whether digits conflict.
//! * This module does not solve boards.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::ArrayKitError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 9;

/// Side length of one box.
pub const BOX_SIZE: usize = 3;

/// Character denoting a blank cell.
pub const BLANK: char = '.';

// ============================================================================
// Board
// ============================================================================

/// A 9×9 grid of optional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SudokuBoard {
    cells: [[Option<u8>; BOARD_SIZE]; BOARD_SIZE],
}

impl SudokuBoard {
    /// Parse nine row strings of nine characters each.
    ///
    /// Whitespace inside a row is ignored so that rows may be written as
    /// `"5 3 . . 7 . . . ."`.
    pub fn parse(rows: &[&str]) -> Result<Self, ArrayKitError> {
        if rows.len() != BOARD_SIZE {
            return Err(ArrayKitError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let mut c = 0;
            for ch in row.chars().filter(|ch| !ch.is_whitespace()) {
                if c == BOARD_SIZE {
                    return Err(ArrayKitError::InvalidBoard(format!(
                        "row {r} has more than {BOARD_SIZE} cells"
                    )));
                }
                cells[r][c] = Self::parse_cell(ch, r, c)?;
                c += 1;
            }
            if c != BOARD_SIZE {
                return Err(ArrayKitError::InvalidBoard(format!(
                    "row {r} has {c} cells, expected {BOARD_SIZE}"
                )));
            }
        }

        Ok(Self { cells })
    }

    /// Build a board from a character grid.
    pub fn from_grid(grid: &[[char; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, ArrayKitError> {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                cells[r][c] = Self::parse_cell(ch, r, c)?;
            }
        }
        Ok(Self { cells })
    }

    /// A board with every cell blank.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Digit at `(row, col)`, or `None` for a blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below 9.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    /// Index of the 3×3 box containing `(row, col)`.
    #[inline]
    pub fn box_index(row: usize, col: usize) -> usize {
        (row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE
    }

    /// Iterate over filled cells as `(row, col, digit)`.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|d| (r, c, d)))
        })
    }

    fn parse_cell(ch: char, row: usize, col: usize) -> Result<Option<u8>, ArrayKitError> {
        match ch {
            BLANK => Ok(None),
            '1'..='9' => Ok(Some(ch as u8 - b'0')),
            other => Err(ArrayKitError::InvalidBoard(format!(
                "unexpected character {other:?} at row {row}, column {col}"
            ))),
        }
    }
}

impl Default for SudokuBoard {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(d) => write!(f, "{d}")?,
                    None => write!(f, "{BLANK}")?,
                }
            }
        }
        Ok(())
    }
}
