use clap::Parser;
use playfair_core::PlayfairError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, PlayfairError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.options();

    match args.command {
        Commands::Matrix(args) => args.run(options),
        Commands::Encrypt(args) => args.run(options),
        Commands::Demo(args) => args.run(options),
    }
}
