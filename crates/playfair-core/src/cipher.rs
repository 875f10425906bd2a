use log::{debug, trace};

use crate::options::Source;
use crate::position::{fold_j, Coordinate};
use crate::{Digraph, Digraphs, KeyMatrix, PlayfairError, PlayfairOptions, Result};

/// Playfair encryption with a fixed key matrix.
#[derive(Debug, Clone)]
pub struct Playfair {
    matrix: KeyMatrix,
    options: PlayfairOptions,
}

impl Playfair {
    /// Builds the key matrix once, it is reused for every call to [`encrypt`](Self::encrypt).
    pub fn new(keyword: &str, options: PlayfairOptions) -> Result<Self> {
        options.padding_letter()?;
        let matrix = KeyMatrix::from_keyword(keyword, &options)?;

        Ok(Self { matrix, options })
    }

    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// Encrypts `plaintext`.
    ///
    /// The whole text is validated before the first digraph is produced, so
    /// either everything is encrypted or an error is returned.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let text = self
            .options
            .non_letters
            .normalize(plaintext, Source::Plaintext)?;
        let padding = self.options.padding_letter()?;
        debug!(
            "encrypting {} letters with padding {:?}",
            text.len(),
            padding
        );

        let mut ciphertext = String::with_capacity(text.len() + text.len() / 2 + 1);
        for digraph in Digraphs::with_padding(&text, padding) {
            let encrypted = self.encrypt_digraph(digraph)?;
            ciphertext.push(encrypted.0);
            ciphertext.push(encrypted.1);
        }

        Ok(ciphertext)
    }

    /// Applies the row, column or rectangle rule, in that order of precedence.
    ///
    /// `j` is looked up as `i`; output letters always come from the matrix.
    pub fn encrypt_digraph(&self, digraph: Digraph) -> Result<Digraph> {
        let first = self.position_of(digraph.0)?;
        let second = self.position_of(digraph.1)?;

        let (to_first, to_second) = if first.row() == second.row() {
            (first.right(), second.right())
        } else if first.col() == second.col() {
            (first.below(), second.below())
        } else {
            (
                Coordinate::new(first.row(), second.col()),
                Coordinate::new(second.row(), first.col()),
            )
        };
        let encrypted = Digraph(self.matrix.cell(to_first), self.matrix.cell(to_second));
        trace!(
            "{} at {} {} -> {} at {} {}",
            digraph,
            first,
            second,
            encrypted,
            to_first,
            to_second
        );

        Ok(encrypted)
    }

    fn position_of(&self, letter: char) -> Result<Coordinate> {
        self.matrix
            .locate(fold_j(letter))
            .ok_or(PlayfairError::UnmappableLetter(letter))
    }
}
