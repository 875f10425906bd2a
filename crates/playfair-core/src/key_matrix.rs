//! The 5×5 Playfair key matrix.
//!
//! The keyword is followed by the full alphabet, every `j` is merged into `i`
//! and repeated letters are dropped, leaving exactly 25 letters that are laid
//! out row by row.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::options::Source;
use crate::position::{self, Coordinate};
use crate::{PlayfairOptions, Result};

/// Filler appended after the keyword.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Width and height of the matrix.
pub const SIZE: usize = 5;

/// Concatenates `keyword` with [`ALPHABET`], replaces `j` by `i` and keeps only
/// the first occurrence of every character.
pub fn dedup_key(keyword: &str) -> String {
    let mut seen = HashSet::new();
    keyword
        .chars()
        .chain(ALPHABET.chars())
        .map(position::fold_j)
        .filter(|&c| seen.insert(c))
        .collect()
}

/// Fills a deduplicated key into the matrix, row by row.
///
/// # Panics
/// Panics unless `key` holds exactly 25 characters.
fn layout(key: &str) -> [[char; SIZE]; SIZE] {
    assert_eq!(
        key.chars().count(),
        SIZE * SIZE,
        "invalid key length for key {key:?}"
    );

    let mut rows = [[' '; SIZE]; SIZE];
    for (i, c) in key.chars().enumerate() {
        rows[i / SIZE][i % SIZE] = c;
    }
    rows
}

/// A permutation of `a..z` without `j`, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    rows: [[char; SIZE]; SIZE],
}

impl KeyMatrix {
    /// Builds the matrix for `keyword`.
    ///
    /// Uppercase letters are folded, everything else is handled according to
    /// `options.non_letters`.
    ///
    /// # Panics
    /// Panics if the deduplicated key does not hold exactly 25 letters, which
    /// can only happen if [`ALPHABET`] itself is broken.
    pub fn from_keyword(keyword: &str, options: &PlayfairOptions) -> Result<Self> {
        let keyword = options.non_letters.normalize(keyword, Source::Keyword)?;
        let key = dedup_key(&keyword);
        let matrix = Self { rows: layout(&key) };
        debug!("built key matrix {:?} for keyword {:?}", key, keyword);

        Ok(matrix)
    }

    pub fn row(&self, index: usize) -> String {
        self.rows[index].iter().collect()
    }

    pub fn cell(&self, at: Coordinate) -> char {
        self.rows[at.row()][at.col()]
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Position of `letter`, `None` if it is not in the matrix.
    ///
    /// `j` is never found, fold it with [`fold_j`](crate::position::fold_j) first.
    pub fn locate(&self, letter: char) -> Option<Coordinate> {
        position::locate(&self.rows, letter)
    }
}

impl Display for KeyMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for index in 0..SIZE {
            writeln!(f, "{}", self.row(index))?;
        }
        Ok(())
    }
}
