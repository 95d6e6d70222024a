//! Sudoku validity.
//!
//! A board is valid when no digit repeats within a row, a column, or a 3×3
//! box. Blank cells are ignored and the board need not be solvable. Each
//! unit's seen-set is a 9-bit mask.

// Internal dependencies
use crate::primitives::board::{BOARD_SIZE, SudokuBoard};

/// Check that no filled digit repeats in any row, column, or box.
///
/// ```
/// use arraykit::prelude::*;
///
/// let board = SudokuBoard::parse(&[
///     "53..7....", "6..195...", ".98....6.",
///     "8...6...3", "4..8.3..1", "7...2...6",
///     ".6....28.", "...419..5", "....8..79",
/// ])?;
/// assert!(is_valid_sudoku(&board));
/// # Result::<(), ArrayKitError>::Ok(())
/// ```
pub fn is_valid_sudoku(board: &SudokuBoard) -> bool {
    let mut rows = [0u16; BOARD_SIZE];
    let mut cols = [0u16; BOARD_SIZE];
    let mut boxes = [0u16; BOARD_SIZE];

    for (r, c, digit) in board.filled() {
        let bit = 1u16 << digit;
        let b = SudokuBoard::box_index(r, c);

        if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[b] & bit != 0 {
            return false;
        }

        rows[r] |= bit;
        cols[c] |= bit;
        boxes[b] |= bit;
    }

    true
}
