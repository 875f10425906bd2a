use std::fs;
use std::path::{Path, PathBuf};

use crate::{Playfair, PlayfairError, PlayfairOptions, Result};

pub fn prepare() -> EncryptApi {
    EncryptApi::default()
}

#[derive(Default, Debug)]
pub struct EncryptApi {
    message: Option<String>,
    file: Option<PathBuf>,
    keyword: Option<String>,
    options: PlayfairOptions,
}

impl EncryptApi {
    pub fn with_options(mut self, options: PlayfairOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Read the plaintext from a file, a message set as well takes precedence
    pub fn with_file<A: AsRef<Path>>(mut self, file: A) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    /// Set the keyword
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    /// Set the keyword
    /// If `None` is passed, [`execute`](Self::execute) fails with [`PlayfairError::KeywordNotSet`]
    pub fn use_keyword<S: AsRef<str>>(mut self, keyword: Option<S>) -> Self {
        self.keyword = keyword.map(|s| s.as_ref().to_string());
        self
    }

    pub fn execute(self) -> Result<String> {
        let Some(keyword) = self.keyword else {
            return Err(PlayfairError::KeywordNotSet);
        };
        let plaintext = match (self.message, self.file) {
            (Some(message), _) => message,
            (None, Some(file)) => {
                let text = fs::read_to_string(file)
                    .map_err(|source| PlayfairError::ReadError { source })?;
                // a trailing newline is an artefact of the file, not part of the text
                text.trim_end_matches(['\r', '\n']).to_string()
            }
            (None, None) => return Err(PlayfairError::PlaintextNotSet),
        };

        Playfair::new(&keyword, self.options)?.encrypt(&plaintext)
    }
}
