use clap::{Parser, Subcommand};
use dialoguer::Password;
use playfair_core::{NonLetterPolicy, PlayfairError, PlayfairOptions};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Letter inserted between repeated letters and after a trailing single letter
    #[arg(long, value_name = "letter", default_value = "x", global = true)]
    pub padding: char,

    /// Drop characters that are not ASCII letters instead of failing
    #[arg(long, global = true)]
    pub skip_non_letters: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn options(&self) -> PlayfairOptions {
        let policy = if self.skip_non_letters {
            NonLetterPolicy::Skip
        } else {
            NonLetterPolicy::Reject
        };

        PlayfairOptions::default()
            .with_padding(self.padding)
            .with_non_letters(policy)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Matrix(matrix::MatrixArgs),
    Encrypt(encrypt::EncryptArgs),
    Demo(demo::DemoArgs),
}

/// Prompts for the keyword without echoing it, `None` if the terminal is not interactive.
pub fn ask_for_keyword() -> Option<String> {
    Password::new()
        .with_prompt("Keyword")
        .allow_empty_password(true)
        .interact()
        .ok()
}

/// Takes the keyword given on the command line, otherwise the one `ask` comes up with.
pub fn resolve_keyword(
    keyword: Option<String>,
    ask: impl FnOnce() -> Option<String>,
) -> CliResult<String> {
    keyword.or_else(ask).ok_or(PlayfairError::KeywordNotSet)
}
