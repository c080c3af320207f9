//! Kana classification and kanji/reading fragment pairs.


use core::fmt;

use crate::concat::Concat;

/// Test if a character is hiragana, including the iteration marks.
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309d}'..='\u{309f}')
}

/// Split a written form into its prefix and its trailing hiragana tail (the
/// okurigana).
///
/// A form written entirely in hiragana is treated as all tail.
///
/// ```
/// use katsuyou::kana::split_okurigana;
///
/// assert_eq!(split_okurigana("見つかる"), ("見", "つかる"));
/// assert_eq!(split_okurigana("飲む"), ("飲", "む"));
/// assert_eq!(split_okurigana("勉強"), ("勉強", ""));
/// ```
pub fn split_okurigana(text: &str) -> (&str, &str) {
    let mut index = text.len();

    for (n, c) in text.char_indices().rev() {
        if !is_hiragana(c) {
            break;
        }

        index = n;
    }

    text.split_at(index)
}

/// A kanji/reading pair made up of many text fragments, sharing a common kana
/// suffix.
#[derive(Debug, Default, Clone)]
pub struct Fragments<'a> {
    // Text prefix.
    text: Concat<'a, 3>,
    // Reading prefix.
    reading: Concat<'a, 3>,
    // Suffix always guaranteed to be kana.
    suffix: Concat<'a, 4>,
}

impl<'a> Fragments<'a> {
    /// Construct a kanji/reading pair with a common suffix.
    pub fn new<A, B, C>(text: A, reading: B, suffix: C) -> Self
    where
        A: IntoIterator<Item = &'a str>,
        B: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        Fragments {
            text: Concat::from_iter(text),
            reading: Concat::from_iter(reading),
            suffix: Concat::from_iter(suffix),
        }
    }

    /// The written (kanji) form with its suffix.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.text.write_to(&mut out);
        self.suffix.write_to(&mut out);
        out
    }

    /// The reading (hiragana) form with its suffix.
    pub fn to_reading(&self) -> String {
        let mut out = String::new();
        self.reading.write_to(&mut out);
        self.suffix.write_to(&mut out);
        out
    }
}

impl fmt::Display for Fragments<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            text,
            reading,
            suffix,
        } = self;

        if text == reading {
            write!(f, "{text}{suffix}")
        } else {
            write!(f, "{text}{suffix} [{reading}{suffix}]")
        }
    }
}
