use clap::Args;
use playfair_core::{KeyMatrix, PlayfairOptions};

use crate::CliResult;

/// Prints the key matrix of a keyword, one row per line
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Keyword the matrix is derived from, prompted for if omitted
    #[arg(short, long, value_name = "keyword")]
    pub keyword: Option<String>,
}

impl MatrixArgs {
    pub fn run(self, options: PlayfairOptions) -> CliResult<()> {
        let keyword = crate::cli::resolve_keyword(self.keyword, crate::cli::ask_for_keyword)?;

        print!("{}", KeyMatrix::from_keyword(&keyword, &options)?);
        Ok(())
    }
}
