use anyhow::Result;
use clap::Parser;
use katsuyou::Config;

use crate::command::{OutputFormat, WordArgs};

#[derive(Parser)]
pub(crate) struct CheckArgs {
    /// The answer to check.
    answer: String,
    #[command(flatten)]
    word: WordArgs,
    /// The form the answer is for, like `polite` or `past_negative`.
    #[arg(long)]
    form: String,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    output_format: Option<String>,
}

pub(crate) fn run(config: &Config, args: &CheckArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;
    let word = args.word.record()?;

    let verdict = config
        .conjugator()
        .check_answer(&args.answer, &word, &args.form, word.class)?;

    match format {
        OutputFormat::Rich => println!("{verdict}"),
        OutputFormat::Json => super::print_json(&verdict, false)?,
        OutputFormat::JsonPretty => super::print_json(&verdict, true)?,
    }

    Ok(())
}
