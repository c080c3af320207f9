//! Best-effort romaji for conjugated forms.
//!
//! Adjectives follow the conventions of the vocabulary data, which derive the
//! romaji of a form from the romaji of the dictionary form. Verb forms are
//! romanized from their derived hiragana.

#[cfg(test)]
mod tests;

use wana_kana::ConvertJapanese;

use crate::class::MorphologicalClass;
use crate::form::Form;

/// Romanize the given kana.
pub fn romanize(kana: &str) -> String {
    kana.to_romaji()
}

/// Derive the romaji of a form.
///
/// `base` is the romaji of the dictionary form if the word has one, and
/// `hiragana` is the hiragana of the dictionary form and of the derived form
/// respectively.
pub(crate) fn derive(
    class: MorphologicalClass,
    form: Form,
    base: Option<&str>,
    dictionary: &str,
    derived: &str,
) -> String {
    let base = match base.map(str::trim) {
        Some(base) if !base.is_empty() => base.to_owned(),
        _ => romanize(dictionary),
    };

    if form == Form::Present {
        return base;
    }

    match class {
        MorphologicalClass::IAdjective => {
            let (Some(stem), Some(suffix)) = (base.strip_suffix('i'), adjective_i(form)) else {
                return romanize(derived);
            };

            format!("{stem}{suffix}")
        }
        MorphologicalClass::NaAdjective => {
            let Some(suffix) = adjective_na(form) else {
                return romanize(derived);
            };

            format!("{base} {suffix}")
        }
        MorphologicalClass::IrregularIAdjective => {
            let prefix = base
                .strip_suffix("ii")
                .or_else(|| base.strip_suffix("yoi"));

            let (Some(prefix), Some(suffix)) = (prefix, adjective_ii(form)) else {
                return romanize(derived);
            };

            format!("{prefix}{suffix}")
        }
        _ => romanize(derived),
    }
}

fn adjective_i(form: Form) -> Option<&'static str> {
    match form {
        Form::Past => Some("katta"),
        Form::Negative => Some("kunai"),
        Form::NegativePast => Some("kunakatta"),
        Form::Adverbial => Some("ku"),
        _ => None,
    }
}

fn adjective_ii(form: Form) -> Option<&'static str> {
    match form {
        Form::Past => Some("yokatta"),
        Form::Negative => Some("yokunai"),
        Form::NegativePast => Some("yokunakatta"),
        Form::Adverbial => Some("yoku"),
        _ => None,
    }
}

fn adjective_na(form: Form) -> Option<&'static str> {
    match form {
        Form::Past => Some("datta"),
        Form::Negative => Some("dewa nai"),
        Form::NegativePast => Some("dewa nakatta"),
        Form::Adverbial => Some("ni"),
        _ => None,
    }
}
