//! # Playfair Core API
//!
//! The Playfair cipher encrypts letter pairs with a 5×5 matrix derived from a keyword.
//! Encryption happens in three stages:
//! - [`KeyMatrix`] turns the keyword into the matrix
//! - [`Digraphs`] splits the plaintext into letter pairs, padding with `x`
//! - [`Playfair`] maps every pair through the matrix
//!
//! # Usage Examples
//!
//! ## Build a key matrix
//!
//! ```rust
//! let matrix = playfair_core::build_matrix("haoye").expect("keyword is valid");
//!
//! assert_eq!(matrix.to_string(), "haoye\nbcdfg\niklmn\npqrst\nuvwxz\n");
//! ```
//!
//! ## Encrypt a message
//!
//! ```rust
//! let ciphertext = playfair_core::encrypt("helloworld", "haoye").expect("input is valid");
//!
//! assert_eq!(ciphertext, "ahmwrdodwrfw");
//! ```
//!
//! ## Encrypt with options
//!
//! ```rust
//! use playfair_core::{NonLetterPolicy, PlayfairOptions};
//!
//! let ciphertext = playfair_core::api::encrypt::prepare()
//!     .with_keyword("playfair example")
//!     .with_message("Hide the gold in the tree stump!")
//!     .with_options(PlayfairOptions::default().with_non_letters(NonLetterPolicy::Skip))
//!     .execute()
//!     .expect("Failed to encrypt message");
//!
//! assert_eq!(ciphertext, "bmodzbxdnabekudmuixmmouvif");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod cipher;
pub mod digraph;
pub mod error;
pub mod key_matrix;
pub mod options;
pub mod position;
pub mod result;

pub use crate::cipher::Playfair;
pub use crate::digraph::{segment, Digraph, Digraphs};
pub use crate::error::PlayfairError;
pub use crate::key_matrix::KeyMatrix;
pub use crate::options::{NonLetterPolicy, PlayfairOptions};
pub use crate::position::Coordinate;
pub use crate::result::Result;

/// Builds the key matrix for `keyword` with the default options.
pub fn build_matrix(keyword: &str) -> Result<KeyMatrix> {
    KeyMatrix::from_keyword(keyword, &PlayfairOptions::default())
}

/// Encrypts `plaintext` under `keyword` with the default options.
pub fn encrypt(plaintext: &str, keyword: &str) -> Result<String> {
    Playfair::new(keyword, PlayfairOptions::default())?.encrypt(plaintext)
}
