//! Determine the morphological class of a word.


use crate::class::{DeclaredType, MorphologicalClass, PartOfSpeech};
use crate::error::{Error, Result};
use crate::exceptions::Exceptions;
use crate::word::WordRecord;

/// Classify the given word.
///
/// An explicitly declared class always wins. Otherwise the declared type and
/// part of speech are consulted, falling back to surface form heuristics.
pub fn classify(word: &WordRecord, exceptions: &Exceptions) -> Result<MorphologicalClass> {
    if let Some(class) = word.class {
        return Ok(class);
    }

    let hiragana = word.hiragana.trim();

    if hiragana.is_empty() {
        return Err(Error::EmptyBaseForm);
    }

    let declared = match word.declared_type.as_deref() {
        Some(string) => Some(
            DeclaredType::parse(string)
                .ok_or_else(|| Error::UnknownDeclaredClass(string.to_owned()))?,
        ),
        None => None,
    };

    let mut pos = word.part_of_speech;

    match declared {
        // An ichidan tag only counts if the reading agrees with it.
        Some(DeclaredType::Class(MorphologicalClass::Ichidan)) => {
            if hiragana.ends_with('る') {
                return Ok(MorphologicalClass::Ichidan);
            }

            tracing::debug!(hiragana, "Declared ichidan without る ending");
            pos = Some(PartOfSpeech::Verb);
        }
        Some(DeclaredType::Class(class)) => return Ok(class),
        Some(DeclaredType::PartOfSpeech(declared)) => {
            pos = pos.or(Some(declared));
        }
        None => {}
    }

    if hiragana == "いい" {
        return Ok(MorphologicalClass::IrregularIAdjective);
    }

    match pos {
        Some(PartOfSpeech::Verb) => {
            if hiragana.ends_with("する") {
                return Ok(MorphologicalClass::IrregularVerb);
            }

            return Ok(MorphologicalClass::Godan);
        }
        Some(PartOfSpeech::Other) => {
            return Err(Error::UnknownClass(hiragana.to_owned()));
        }
        Some(PartOfSpeech::Adjective) | None => {}
    }

    if exceptions.is_na_adjective(hiragana) {
        tracing::debug!(hiragana, "Special na-adjective");
        return Ok(MorphologicalClass::NaAdjective);
    }

    if hiragana.ends_with('い') {
        return Ok(MorphologicalClass::IAdjective);
    }

    Ok(MorphologicalClass::NaAdjective)
}
