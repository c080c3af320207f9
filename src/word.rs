use serde::{Deserialize, Serialize};

use crate::class::{MorphologicalClass, PartOfSpeech};

/// A dictionary-form word as found in vocabulary lists.
///
/// Only `hiragana` is required for conjugation. Field names follow the JSON
/// datasets, so both `kana` and `hiragana` are accepted for the reading.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Written form, may be empty for kana-only words.
    #[serde(default)]
    pub kanji: String,
    /// Reading in hiragana.
    #[serde(default, alias = "kana", alias = "reading")]
    pub hiragana: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    /// Declared morphological class, skips heuristic classification.
    #[serde(
        default,
        alias = "morphological_class",
        alias = "morphologicalClass",
        skip_serializing_if = "Option::is_none"
    )]
    pub class: Option<MorphologicalClass>,
    #[serde(
        default,
        alias = "pos",
        alias = "partOfSpeech",
        skip_serializing_if = "Option::is_none"
    )]
    pub part_of_speech: Option<PartOfSpeech>,
    /// Free-form type string as found in the source data, like `ichidan`.
    #[serde(
        default,
        rename = "type",
        alias = "verb_type",
        alias = "declared_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub declared_type: Option<String>,
    #[serde(
        default,
        alias = "english",
        alias = "meaning",
        alias = "englishGloss",
        skip_serializing_if = "Option::is_none"
    )]
    pub english_gloss: Option<String>,
}

impl WordRecord {
    /// Construct a record from its written form and reading.
    pub fn new(kanji: impl Into<String>, hiragana: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            hiragana: hiragana.into(),
            ..Self::default()
        }
    }

    /// Set the romaji of the record.
    pub fn with_romaji(mut self, romaji: impl Into<String>) -> Self {
        self.romaji = Some(romaji.into());
        self
    }

    /// Set the declared class of the record.
    pub fn with_class(mut self, class: MorphologicalClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the part of speech tag of the record.
    pub fn with_part_of_speech(mut self, pos: PartOfSpeech) -> Self {
        self.part_of_speech = Some(pos);
        self
    }

    /// Set the declared type string of the record.
    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }
}
