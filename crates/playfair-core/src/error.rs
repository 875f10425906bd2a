use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayfairError {
    /// Represents a keyword character that is not an ASCII letter, for example a digit or a space
    #[error("Keyword contains the invalid character {character:?} at position {position}")]
    InvalidKeywordCharacter { character: char, position: usize },

    /// Represents a plaintext character that is not an ASCII letter
    #[error("Plaintext contains the invalid character {character:?} at position {position}")]
    InvalidPlaintextCharacter { character: char, position: usize },

    /// Represents a padding letter that cannot be placed into a key matrix, for example `j` or `7`
    #[error("Padding must be an ASCII letter other than 'j', got {0:?}")]
    InvalidPaddingLetter(char),

    /// Represents a letter that has no cell in the key matrix
    #[error("Letter {0:?} has no position in the key matrix")]
    UnmappableLetter(char),

    /// Represents a failure to read the plaintext from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    #[error("API Error: No keyword set")]
    KeywordNotSet,

    #[error("API Error: No plaintext set")]
    PlaintextNotSet,
}
