use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::form::Form;

/// The morphological class of a word, which decides how it conjugates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MorphologicalClass {
    /// Godan (五段) verb.
    Godan,
    /// Ichidan (一段) verb.
    Ichidan,
    /// Irregular する and compound する verbs.
    IrregularVerb,
    /// I-adjective.
    IAdjective,
    /// Na-adjective.
    NaAdjective,
    /// The irregular i-adjective いい.
    IrregularIAdjective,
}

impl MorphologicalClass {
    pub const ALL: [MorphologicalClass; 6] = [
        MorphologicalClass::Godan,
        MorphologicalClass::Ichidan,
        MorphologicalClass::IrregularVerb,
        MorphologicalClass::IAdjective,
        MorphologicalClass::NaAdjective,
        MorphologicalClass::IrregularIAdjective,
    ];

    /// Test if the class is a verb class.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            MorphologicalClass::Godan
                | MorphologicalClass::Ichidan
                | MorphologicalClass::IrregularVerb
        )
    }

    /// The forms derived for words of this class.
    pub fn forms(&self) -> &'static [Form] {
        if self.is_verb() {
            Form::VERB
        } else {
            Form::ADJECTIVE
        }
    }

    /// Canonical name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            MorphologicalClass::Godan => "godan",
            MorphologicalClass::Ichidan => "ichidan",
            MorphologicalClass::IrregularVerb => "irregular-verb",
            MorphologicalClass::IAdjective => "i-adjective",
            MorphologicalClass::NaAdjective => "na-adjective",
            MorphologicalClass::IrregularIAdjective => "irregular-i-adjective",
        }
    }

    /// Parse a class from the spellings found in word lists and from the
    /// JMdict part of speech keywords.
    pub fn parse(string: &str) -> Option<Self> {
        let string = normalize(string);

        let class = match string.as_str() {
            "godan" | "godan-verb" | "u-verb" | "v5" => MorphologicalClass::Godan,
            "ichidan" | "ichidan-verb" | "ru-verb" | "v1" => MorphologicalClass::Ichidan,
            "irregular" | "irregular-verb" | "suru" | "suru-verb" | "vs" | "vs-i" => {
                MorphologicalClass::IrregularVerb
            }
            "i-adjective" | "i-adj" | "adj-i" | "keiyoushi" => MorphologicalClass::IAdjective,
            "na-adjective" | "na-adj" | "adj-na" | "keiyoudoushi" => {
                MorphologicalClass::NaAdjective
            }
            "irregular-i-adjective" | "irregular-adjective" | "adj-ix" | "ii" => {
                MorphologicalClass::IrregularIAdjective
            }
            _ => return None,
        };

        Some(class)
    }
}

impl fmt::Display for MorphologicalClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl<'de> Deserialize<'de> for MorphologicalClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;

        MorphologicalClass::parse(&string).ok_or_else(|| {
            de::Error::custom(format_args!("unknown morphological class `{string}`"))
        })
    }
}

/// Coarse part of speech tag carried by a word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartOfSpeech {
    Verb,
    Adjective,
    /// Anything which does not conjugate, like nouns or adverbs.
    Other,
}

impl PartOfSpeech {
    /// Parse a part of speech tag.
    pub fn parse(string: &str) -> Self {
        match normalize(string).as_str() {
            "verb" | "v" | "doushi" => PartOfSpeech::Verb,
            "adjective" | "adj" | "keiyoushi" => PartOfSpeech::Adjective,
            _ => PartOfSpeech::Other,
        }
    }
}

impl<'de> Deserialize<'de> for PartOfSpeech {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Ok(PartOfSpeech::parse(&string))
    }
}

/// The interpretation of a free-form declared type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// The type names a morphological class.
    Class(MorphologicalClass),
    /// The type only names a part of speech.
    PartOfSpeech(PartOfSpeech),
}

impl DeclaredType {
    /// Parse a declared type, returns `None` if it is not recognized.
    pub fn parse(string: &str) -> Option<Self> {
        if let Some(class) = MorphologicalClass::parse(string) {
            return Some(DeclaredType::Class(class));
        }

        let pos = match normalize(string).as_str() {
            "verb" | "v" | "doushi" => PartOfSpeech::Verb,
            "adjective" | "adj" => PartOfSpeech::Adjective,
            "noun" | "n" | "adverb" | "adv" | "expression" | "exp" | "particle" | "pronoun"
            | "counter" | "conjunction" | "interjection" => PartOfSpeech::Other,
            _ => return None,
        };

        Some(DeclaredType::PartOfSpeech(pos))
    }
}

/// Normalize a name into lowercase kebab-case, so that `IrregularVerb`,
/// `irregular_verb` and `irregular verb` all become `irregular-verb`.
fn normalize(string: &str) -> String {
    let chars = string.trim().chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(string.len());

    for (n, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && n > 0 {
            let prev = chars[n - 1];
            let next = chars.get(n + 1).copied();

            // Word boundaries: `naA` and the `IA` in `IAdjective`.
            let boundary = prev.is_ascii_lowercase()
                || (prev.is_ascii_uppercase() && next.is_some_and(|c| c.is_ascii_lowercase()));

            if boundary {
                out.push('-');
            }
        }

        match c {
            '_' | ' ' => out.push('-'),
            c => out.push(c.to_ascii_lowercase()),
        }
    }

    out
}
