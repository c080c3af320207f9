//! Module which performs inflection, based on a word's class.

use crate::class::MorphologicalClass;
use crate::form::Form;
use crate::inflection::{godan, tables, Inflections};
use crate::kana::{self, Fragments};

/// Conjugate the given written form and reading as the given class.
///
/// If the word does not end in anything the class can conjugate, every form
/// is the unchanged dictionary form and the result is marked as degenerate.
pub fn conjugate<'a>(
    kanji: &'a str,
    reading: &'a str,
    class: MorphologicalClass,
) -> Inflections<'a> {
    let mut inflections = Inflections::new(class, kanji, reading);

    let populated = match class {
        MorphologicalClass::Godan => populate_godan(&mut inflections, kanji, reading),
        MorphologicalClass::Ichidan => populate_ichidan(&mut inflections, kanji, reading),
        MorphologicalClass::IrregularVerb => populate_suru(&mut inflections, kanji, reading),
        MorphologicalClass::IAdjective => populate_i(&mut inflections, kanji, reading),
        MorphologicalClass::NaAdjective => populate_na(&mut inflections, kanji, reading),
        MorphologicalClass::IrregularIAdjective => populate_ii(&mut inflections, kanji, reading),
    };

    if populated.is_none() {
        tracing::debug!(kanji, reading, %class, "Unconjugable ending");
        inflections.fill_degenerate();
    }

    inflections
}

fn populate_godan<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    let mut r = reading.chars();
    let u = r.next_back()?;
    let r = r.as_str();

    let g = if godan::is_iku(kanji, reading) {
        godan::IKU
    } else {
        godan::row(u)?
    };

    let k = kanji_stem(kanji, reading, g.u);

    tables::godan(g, |stem, suffix, form| {
        inflections.insert(form, Fragments::new([k], [r], [stem, suffix]));
    });

    Some(())
}

fn populate_ichidan<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    let r = reading.strip_suffix('る')?;
    let k = kanji.strip_suffix('る').unwrap_or(kanji);

    tables::ichidan(|suffix, form| {
        inflections.insert(form, Fragments::new([k], [r], [suffix]));
    });

    Some(())
}

fn populate_suru<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    let (k, r) = extract_suru(kanji, reading)?;

    tables::suru(|suffix, form| {
        inflections.insert(form, Fragments::new([k], [r], [suffix]));
    });

    Some(())
}

fn populate_i<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    let r = reading.strip_suffix('い')?;
    let k = kanji.strip_suffix('い').unwrap_or(kanji);

    tables::adjective_i(|suffix, form| {
        inflections.insert(form, Fragments::new([k], [r], [suffix]));
    });

    Some(())
}

fn populate_na<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    tables::adjective_na(|suffix, form| {
        inflections.insert(form, Fragments::new([kanji], [reading], [suffix]));
    });

    Some(())
}

fn populate_ii<'a>(
    inflections: &mut Inflections<'a>,
    kanji: &'a str,
    reading: &'a str,
) -> Option<()> {
    let (k, written, r) = extract_ii(kanji, reading)?;

    inflections.insert(Form::Present, Fragments::new([kanji], [reading], []));

    tables::adjective_ii(|conventional, yo, suffix, form| {
        let k_yo = match (conventional, written) {
            (None, _) => yo,
            (Some(_), Some(written)) => written,
            // Bare いい is conventionally written with 良 where it is kept.
            (Some(conventional), None) if k.is_empty() => conventional,
            (Some(_), None) => yo,
        };

        inflections.insert(form, Fragments::new([k, k_yo], [r, yo], [suffix]));
    });

    Some(())
}

/// Get the written stem of a godan verb.
///
/// The written form is split into its kanji prefix and okurigana. If the
/// okurigana agrees with the reading, the final kana is removed from it.
/// Otherwise the written form is used whole and suffixes are concatenated
/// directly onto it.
fn kanji_stem<'a>(kanji: &'a str, reading: &str, u: char) -> &'a str {
    let (_, tail) = kana::split_okurigana(kanji);

    if reading.ends_with(tail) {
        if let Some(stem) = kanji.strip_suffix(u) {
            return stem;
        }
    }

    if !kanji.is_empty() {
        tracing::trace!(kanji, reading, "No okurigana split");
    }

    kanji
}

/// Extract the stems of a する verb, which might be written as 為る.
fn extract_suru<'a>(kanji: &'a str, reading: &'a str) -> Option<(&'a str, &'a str)> {
    let r = reading.strip_suffix("する")?;

    let k = kanji
        .strip_suffix("する")
        .or_else(|| kanji.strip_suffix("為る"))
        .unwrap_or(kanji);

    Some((k, r))
}

/// Extract the stems of いい or one of its compounds, and the kanji the word
/// writes よ with if any.
fn extract_ii<'a>(
    kanji: &'a str,
    reading: &'a str,
) -> Option<(&'a str, Option<&'static str>, &'a str)> {
    let r = reading
        .strip_suffix("いい")
        .or_else(|| reading.strip_suffix("よい"))?;

    for written in ["良", "好"] {
        if let Some(k) = kanji
            .strip_suffix('い')
            .and_then(|k| k.strip_suffix(written))
        {
            return Some((k, Some(written), r));
        }
    }

    let k = kanji
        .strip_suffix("いい")
        .or_else(|| kanji.strip_suffix("よい"))
        .unwrap_or(kanji);

    Some((k, None, r))
}
