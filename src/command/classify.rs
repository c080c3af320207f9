use anyhow::Result;
use clap::Parser;
use katsuyou::Config;

use crate::command::WordArgs;

#[derive(Parser)]
pub(crate) struct ClassifyArgs {
    #[command(flatten)]
    word: WordArgs,
}

pub(crate) fn run(config: &Config, args: &ClassifyArgs) -> Result<()> {
    let word = args.word.record()?;
    let class = config.conjugator().classify(&word)?;
    println!("{class}");
    Ok(())
}
