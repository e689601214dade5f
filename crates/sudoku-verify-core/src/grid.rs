use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A (row, col) cell coordinate, both in 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A complete, correct solution: the default input and the base grid for
/// the mutation scenarios in the tests.
pub const SAMPLE_SOLUTION: [[u8; 9]; 9] = [
    [6, 2, 4, 5, 3, 9, 1, 8, 7],
    [5, 1, 9, 7, 2, 8, 6, 3, 4],
    [8, 3, 7, 6, 1, 4, 2, 9, 5],
    [1, 4, 3, 8, 6, 5, 7, 2, 9],
    [9, 5, 8, 2, 4, 7, 3, 6, 1],
    [7, 6, 2, 3, 9, 1, 4, 5, 8],
    [3, 7, 1, 9, 5, 6, 8, 4, 2],
    [4, 9, 6, 1, 8, 2, 5, 7, 3],
    [2, 8, 5, 4, 7, 3, 9, 1, 6],
];

/// Failure to read grid text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    /// A character that is neither an ASCII digit nor whitespace.
    #[error("unexpected character {0:?} in grid text")]
    UnexpectedChar(char),
    /// The text did not hold exactly 81 cell digits.
    #[error("expected 81 cell digits, found {0}")]
    WrongCellCount(usize),
}

/// An immutable 9x9 grid of cell values.
///
/// Cells are plain `u8`s: anything outside 1..=9 is representable and is
/// rejected by validation, not by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Build a grid from 9 rows of 9 values.
    pub fn from_rows(cells: [[u8; 9]; 9]) -> Self {
        Self { cells }
    }

    /// The canonical solved grid shipped with the tool.
    pub fn sample() -> Self {
        Self::from_rows(SAMPLE_SOLUTION)
    }

    /// Parse grid text: exactly 81 digit characters in row-major order,
    /// whitespace ignored.
    ///
    /// `0` parses fine; it is outside the 1-9 domain and fails validation,
    /// not parsing.
    pub fn from_text(text: &str) -> Result<Self, GridParseError> {
        let mut cells = [[0u8; 9]; 9];
        let mut count = 0usize;
        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .ok_or(GridParseError::UnexpectedChar(ch))?;
            if count < 81 {
                cells[count / 9][count % 9] = digit as u8;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }

    /// Value at `pos`.
    pub fn value(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Copy of the grid with one cell replaced.
    pub fn with_value(&self, pos: Position, value: u8) -> Self {
        let mut cells = self.cells;
        cells[pos.row][pos.col] = value;
        Self { cells }
    }
}
