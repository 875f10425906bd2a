//! Coordinate lookup inside a [`KeyMatrix`](crate::KeyMatrix).

use std::fmt::{self, Display, Formatter};

use crate::key_matrix::SIZE;

/// A `(row, col)` cell address, both components in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Only built inside the crate, from indices already reduced modulo 5.
    pub(crate) fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE, "({row},{col}) is outside the matrix");
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// The cell to the right, wrapping around to the first column.
    pub fn right(self) -> Self {
        Self::new(self.row, (self.col + 1) % SIZE)
    }

    /// The cell below, wrapping around to the first row.
    pub fn below(self) -> Self {
        Self::new((self.row + 1) % SIZE, self.col)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The key matrix never holds `j`, so lookups treat it as `i`.
pub fn fold_j(letter: char) -> char {
    if letter == 'j' {
        'i'
    } else {
        letter
    }
}

/// Scans `rows` top to bottom, left to right, returning the first cell holding `letter`.
pub(crate) fn locate(rows: &[[char; SIZE]; SIZE], letter: char) -> Option<Coordinate> {
    rows.iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|&c| c == letter)
            .map(|col| Coordinate::new(row, col))
    })
}
