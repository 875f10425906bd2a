use crate::{PlayfairError, Result};

/// The letter inserted between repeated letters and after a trailing single letter.
pub const DEFAULT_PADDING: char = 'x';

/// Options controlling how keyword and plaintext are normalized before encryption.
///
/// Uppercase ASCII letters are always folded to lowercase, independent of these options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayfairOptions {
    /// Filler letter used by the digraph segmentation, `x` by default.
    pub padding: char,

    /// What happens to characters that are not ASCII letters.
    pub non_letters: NonLetterPolicy,
}

impl Default for PlayfairOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            non_letters: NonLetterPolicy::Reject,
        }
    }
}

impl PlayfairOptions {
    pub fn with_padding(mut self, padding: char) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_non_letters(mut self, policy: NonLetterPolicy) -> Self {
        self.non_letters = policy;
        self
    }

    /// Returns the padding letter lowercased, or an error if it can not live in a key matrix.
    pub(crate) fn padding_letter(&self) -> Result<char> {
        let padding = self.padding.to_ascii_lowercase();
        if !padding.is_ascii_lowercase() || padding == 'j' {
            return Err(PlayfairError::InvalidPaddingLetter(self.padding));
        }
        Ok(padding)
    }
}

/// Policy for characters outside `a-z` / `A-Z`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NonLetterPolicy {
    /// Fail with an error naming the first offending character.
    #[default]
    Reject,
    /// Drop the character silently.
    Skip,
}

/// Where a text comes from, only used to pick the matching error variant.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Source {
    Keyword,
    Plaintext,
}

impl NonLetterPolicy {
    /// Folds ASCII letters to lowercase and applies the policy to everything else.
    pub(crate) fn normalize(self, text: &str, source: Source) -> Result<String> {
        let mut normalized = String::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            if character.is_ascii_alphabetic() {
                normalized.push(character.to_ascii_lowercase());
                continue;
            }
            if self == NonLetterPolicy::Skip {
                continue;
            }
            return Err(match source {
                Source::Keyword => PlayfairError::InvalidKeywordCharacter {
                    character,
                    position,
                },
                Source::Plaintext => PlayfairError::InvalidPlaintextCharacter {
                    character,
                    position,
                },
            });
        }
        Ok(normalized)
    }
}
