use std::io::Write;

use anyhow::Result;
use clap::Parser;
use katsuyou::{Config, ConjugationForm, ConjugationSet};

use crate::command::{OutputFormat, WordArgs};

#[derive(Parser)]
pub(crate) struct FormsArgs {
    #[command(flatten)]
    word: WordArgs,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    output_format: Option<String>,
}

pub(crate) fn run(config: &Config, args: &FormsArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;
    let word = args.word.record()?;

    let set = config.conjugator().build_forms(&word, word.class)?;

    match format {
        OutputFormat::Rich => print_rich(&set),
        OutputFormat::Json => super::print_json(&set, false),
        OutputFormat::JsonPretty => super::print_json(&set, true),
    }
}

fn print_rich(set: &ConjugationSet) -> Result<()> {
    let o = std::io::stdout();
    let mut o = o.lock();

    writeln!(o, "Class: {}", set.class())?;

    if set.is_degenerate() {
        writeln!(o, "Could not conjugate, showing the dictionary form")?;
    }

    for (form, value) in set.iter() {
        writeln!(o, "{}: {}", form.title(), display(value))?;
    }

    Ok(())
}

fn display(form: &ConjugationForm) -> String {
    let mut out = if form.kanji.is_empty() || form.kanji == form.hiragana {
        form.hiragana.clone()
    } else {
        format!("{} [{}]", form.kanji, form.hiragana)
    };

    if let Some(romaji) = &form.romaji {
        out.push_str(" (");
        out.push_str(romaji);
        out.push(')');
    }

    out
}
