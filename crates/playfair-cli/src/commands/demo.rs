use clap::Args;
use log::info;
use playfair_core::{Playfair, PlayfairOptions};

use crate::CliResult;

const DEMO_KEYWORD: &str = "haoye";
const DEMO_PLAINTEXT: &str = "helloworld";

/// Prints the matrix and ciphertext of the sample "helloworld" under keyword "haoye"
#[derive(Args, Debug)]
pub struct DemoArgs {}

impl DemoArgs {
    pub fn run(self, options: PlayfairOptions) -> CliResult<()> {
        info!("demo with keyword {DEMO_KEYWORD:?} and plaintext {DEMO_PLAINTEXT:?}");
        let cipher = Playfair::new(DEMO_KEYWORD, options)?;

        print!("{}", cipher.matrix());
        println!("ciphertext:{}", cipher.encrypt(DEMO_PLAINTEXT)?);
        Ok(())
    }
}
