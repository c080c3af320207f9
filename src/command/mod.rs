pub(crate) mod check;
pub(crate) mod classify;
pub(crate) mod enrich;
pub(crate) mod forms;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use katsuyou::{MorphologicalClass, PartOfSpeech, WordRecord};

/// Arguments describing a single word.
#[derive(Args)]
pub(crate) struct WordArgs {
    /// Reading of the word in hiragana, like `のむ`.
    hiragana: String,
    /// Written form of the word, like `飲む`.
    #[arg(long)]
    kanji: Option<String>,
    /// Romaji of the dictionary form, used to derive the romaji of
    /// adjectives.
    #[arg(long)]
    romaji: Option<String>,
    /// Morphological class of the word, which skips classification. Like
    /// `godan`, `ichidan`, `irregular-verb`, `i-adjective`, `na-adjective` or
    /// `irregular-i-adjective`.
    #[arg(long)]
    class: Option<String>,
    /// Part of speech of the word, like `verb` or `adjective`.
    #[arg(long)]
    pos: Option<String>,
    /// Type string as found in word lists, like `ichidan`.
    #[arg(long = "type", name = "type")]
    declared_type: Option<String>,
}

impl WordArgs {
    /// Construct the word record described by the arguments.
    pub(crate) fn record(&self) -> Result<WordRecord> {
        let mut word = WordRecord::new(self.kanji.as_deref().unwrap_or_default(), &self.hiragana);
        word.romaji = self.romaji.clone();
        word.declared_type = self.declared_type.clone();
        word.part_of_speech = self.pos.as_deref().map(PartOfSpeech::parse);

        if let Some(class) = &self.class {
            let class = MorphologicalClass::parse(class)
                .with_context(|| anyhow!("Unknown class `{class}`"))?;
            word.class = Some(class);
        }

        Ok(word)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormat {
    Rich,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub(crate) fn parse(output_format: Option<&str>) -> Result<Self> {
        Ok(match output_format {
            Some("rich") | None => OutputFormat::Rich,
            Some("json") => OutputFormat::Json,
            Some("json-pretty") => OutputFormat::JsonPretty,
            Some(name) => bail!("Unsupported output format: {}", name),
        })
    }
}

/// Print a value as JSON.
pub(crate) fn print_json<T>(value: &T, pretty: bool) -> Result<()>
where
    T: ?Sized + serde::Serialize,
{
    let o = std::io::stdout();
    let mut o = o.lock();

    if pretty {
        serde_json::to_writer_pretty(&mut o, value)?;
    } else {
        serde_json::to_writer(&mut o, value)?;
    }

    std::io::Write::write_all(&mut o, b"\n")?;
    Ok(())
}
