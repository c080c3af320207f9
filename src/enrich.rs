//! Fill in missing conjugations of JSON word lists.
//!
//! Records are kept as raw JSON so that fields this crate knows nothing about
//! survive a round trip untouched.


use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::ops::Add;
use std::path::Path;

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::conjugation::ConjugationForm;
use crate::conjugator::Conjugator;
use crate::exceptions;
use crate::word::WordRecord;

/// Key holding the conjugations of a record.
pub const CONJUGATIONS: &str = "conjugations";

/// Key in the document root recording the version of the exception data the
/// word list was enriched with.
pub const EXCEPTIONS_VERSION: &str = "exceptions_version";

/// Summary of an enrichment pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct EnrichReport {
    /// Number of records visited.
    pub records: usize,
    /// Records which had at least one form filled in.
    pub enriched: usize,
    /// Total number of forms filled in.
    pub forms: usize,
    /// Records skipped because they could not be read or classified.
    pub skipped: usize,
    /// Records skipped because their ending could not be conjugated.
    pub degenerate: usize,
}

impl Add for EnrichReport {
    type Output = EnrichReport;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Self {
            records: self.records + other.records,
            enriched: self.enriched + other.enriched,
            forms: self.forms + other.forms,
            skipped: self.skipped + other.skipped,
            degenerate: self.degenerate + other.degenerate,
        }
    }
}

impl fmt::Display for EnrichReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} enriched with {} forms, {} skipped, {} degenerate",
            self.records, self.enriched, self.forms, self.skipped, self.degenerate
        )
    }
}

/// Enrich every record in place, in parallel on the current rayon pool.
pub fn enrich_words(conjugator: &Conjugator, words: &mut [Value]) -> EnrichReport {
    let report = words
        .par_iter_mut()
        .map(|value| enrich_record(conjugator, value))
        .reduce(EnrichReport::default, Add::add);

    tracing::info!(%report, "Enriched word list");
    report
}

/// Enrich a single record, filling only conjugations which are absent.
pub fn enrich_record(conjugator: &Conjugator, value: &mut Value) -> EnrichReport {
    let mut report = EnrichReport {
        records: 1,
        ..EnrichReport::default()
    };

    let word = match WordRecord::deserialize(&*value) {
        Ok(word) => word,
        Err(error) => {
            tracing::debug!(%error, "Skipping unreadable record");
            report.skipped += 1;
            return report;
        }
    };

    let set = match conjugator.build_forms(&word, None) {
        Ok(set) => set,
        Err(error) => {
            tracing::debug!(hiragana = %word.hiragana, %error, "Skipping record");
            report.skipped += 1;
            return report;
        }
    };

    if let Some(error) = set.unconjugable(&word) {
        tracing::warn!(kanji = %word.kanji, %error, "Skipping degenerate record");
        report.degenerate += 1;
        return report;
    }

    let Some(object) = value.as_object_mut() else {
        report.skipped += 1;
        return report;
    };

    let conjugations = object
        .entry(CONJUGATIONS)
        .or_insert_with(|| Value::Object(Map::new()));

    let Some(conjugations) = conjugations.as_object_mut() else {
        tracing::warn!(hiragana = %word.hiragana, "Conjugations is not an object");
        report.skipped += 1;
        return report;
    };

    for (form, computed) in set.iter() {
        let stored = conjugations.contains_key(form.ident())
            || form.alias().is_some_and(|alias| conjugations.contains_key(alias.ident()));

        if stored {
            continue;
        }

        conjugations.insert(form.ident().to_owned(), to_value(computed));
        report.forms += 1;
    }

    if report.forms > 0 {
        report.enriched += 1;
    }

    report
}

fn to_value(form: &ConjugationForm) -> Value {
    let mut object = Map::new();
    object.insert("kanji".to_owned(), Value::String(form.kanji.clone()));
    object.insert("hiragana".to_owned(), Value::String(form.hiragana.clone()));

    if let Some(romaji) = &form.romaji {
        object.insert("romaji".to_owned(), Value::String(romaji.clone()));
    }

    Value::Object(object)
}

/// A word list document, either a top-level array of records or an object
/// with a `words` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already parsed document.
    pub fn new(root: Value) -> Result<Self> {
        let is_list = match &root {
            Value::Array(..) => true,
            Value::Object(object) => matches!(object.get("words"), Some(Value::Array(..))),
            _ => false,
        };

        if !is_list {
            bail!("Expected an array of words or an object with a `words` array");
        }

        Ok(Self { root })
    }

    /// Load a document, decompressing it if the path ends in `.gz`.
    pub fn load(path: &Path) -> Result<Self> {
        let f = File::open(path).with_context(|| path.display().to_string())?;
        let mut input = BufReader::new(f);

        let root = if is_gzip(path) {
            read_json(GzDecoder::new(input))
        } else {
            read_json(&mut input)
        };

        let root = root.with_context(|| path.display().to_string())?;

        Self::new(root).with_context(|| path.display().to_string())
    }

    /// Save a document, compressing it if the path ends in `.gz`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let f = File::create(path).with_context(|| path.display().to_string())?;
        let output = BufWriter::new(f);

        if is_gzip(path) {
            let mut output = GzEncoder::new(output, Compression::default());
            write_json(&mut output, &self.root)?;
            output.finish()?.flush()?;
        } else {
            let mut output = output;
            write_json(&mut output, &self.root)?;
            output.flush()?;
        }

        Ok(())
    }

    /// Access the records of the document.
    pub fn words_mut(&mut self) -> &mut [Value] {
        let words = match &mut self.root {
            Value::Array(words) => Some(words),
            Value::Object(object) => match object.get_mut("words") {
                Some(Value::Array(words)) => Some(words),
                _ => None,
            },
            _ => None,
        };

        words.map(Vec::as_mut_slice).unwrap_or_default()
    }

    /// The version of the exception data the document was last enriched
    /// with, if recorded.
    pub fn exceptions_version(&self) -> Option<u64> {
        self.root.as_object()?.get(EXCEPTIONS_VERSION)?.as_u64()
    }

    /// Record the current [`exceptions::VERSION`] in the document.
    ///
    /// Only documents with an object root can carry it, returns `false` for
    /// a top-level array.
    pub fn stamp_exceptions_version(&mut self) -> bool {
        let Value::Object(object) = &mut self.root else {
            return false;
        };

        object.insert(
            EXCEPTIONS_VERSION.to_owned(),
            Value::from(exceptions::VERSION),
        );

        true
    }

    /// Access the root value of the document.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

fn read_json<R>(mut input: R) -> Result<Value>
where
    R: Read,
{
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    Ok(serde_json::from_slice(&data)?)
}

fn write_json<W>(output: &mut W, value: &Value) -> Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut *output, value)?;
    output.write_all(b"\n")?;
    Ok(())
}
