use std::path::PathBuf;

use clap::Args;
use playfair_core::PlayfairOptions;

use crate::CliResult;

/// Encrypts a text message or the content of a file
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Keyword the matrix is derived from, prompted for if omitted
    #[arg(short, long, value_name = "keyword")]
    pub keyword: Option<String>,

    /// A text message that will be encrypted
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "file",
        conflicts_with = "file"
    )]
    pub message: Option<String>,

    /// File containing the text to encrypt
    #[arg(short, long, value_name = "plaintext file")]
    pub file: Option<PathBuf>,
}

impl EncryptArgs {
    pub fn run(self, options: PlayfairOptions) -> CliResult<()> {
        let keyword = crate::cli::resolve_keyword(self.keyword, crate::cli::ask_for_keyword)?;

        let ciphertext = playfair_core::api::encrypt::prepare()
            .with_keyword(&keyword)
            .use_message(self.message)
            .use_file(self.file)
            .with_options(options)
            .execute()?;

        println!("{ciphertext}");
        Ok(())
    }
}
