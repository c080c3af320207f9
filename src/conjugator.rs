//! The conjugation engine, composing classification, the rule tables and
//! answer verification.

#[cfg(test)]
mod tests;

use crate::class::MorphologicalClass;
use crate::conjugation::ConjugationSet;
use crate::error::{Error, Result};
use crate::exceptions::Exceptions;
use crate::form::Form;
use crate::inflection;
use crate::verify::Verdict;
use crate::word::WordRecord;

static DEFAULT: Conjugator = Conjugator::new();

/// A conjugator with a configured exception set.
///
/// The conjugator holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Conjugator {
    exceptions: Exceptions,
    romaji: bool,
}

impl Conjugator {
    /// A conjugator using the built-in exceptions, producing romaji.
    pub const fn new() -> Self {
        Self {
            exceptions: Exceptions::builtin(),
            romaji: true,
        }
    }

    /// A conjugator using the given exceptions.
    pub fn with_exceptions(exceptions: Exceptions) -> Self {
        Self {
            exceptions,
            ..Self::new()
        }
    }

    /// Set whether romaji should be produced.
    pub fn romaji(self, romaji: bool) -> Self {
        Self { romaji, ..self }
    }

    /// Access the exception set in use.
    pub fn exceptions(&self) -> &Exceptions {
        &self.exceptions
    }

    /// Determine the morphological class of a word.
    pub fn classify(&self, word: &WordRecord) -> Result<MorphologicalClass> {
        crate::classify::classify(word, &self.exceptions)
    }

    /// Build every form of a word.
    ///
    /// If `class` is not specified, the word is classified first. A word
    /// whose ending cannot be conjugated as its class produces a degenerate
    /// set rather than an error.
    pub fn build_forms(
        &self,
        word: &WordRecord,
        class: Option<MorphologicalClass>,
    ) -> Result<ConjugationSet> {
        let hiragana = word.hiragana.trim();

        if hiragana.is_empty() {
            return Err(Error::EmptyBaseForm);
        }

        let class = match class {
            Some(class) => class,
            None => self.classify(word)?,
        };

        let inflections = inflection::conjugate(word.kanji.trim(), hiragana, class);
        Ok(ConjugationSet::from_inflections(
            &inflections,
            word,
            self.romaji,
        ))
    }

    /// Check an answer for the named form of a word.
    ///
    /// `past_negative` and `negative_past` are accepted for each other, since
    /// word lists spell them differently for verbs and adjectives.
    pub fn check_answer(
        &self,
        input: &str,
        word: &WordRecord,
        form_name: &str,
        class: Option<MorphologicalClass>,
    ) -> Result<Verdict> {
        let form = Form::parse(form_name).ok_or_else(|| Error::UnknownForm(form_name.to_owned()))?;
        let set = self.build_forms(word, class)?;

        let expected = set
            .get(form)
            .or_else(|| set.get(form.alias()?))
            .ok_or(Error::FormNotApplicable {
                form,
                class: set.class(),
            })?;

        Ok(Verdict::new(input, expected.hiragana.clone()))
    }
}

impl Default for Conjugator {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Determine the morphological class of a word using the built-in
/// exceptions.
pub fn classify(word: &WordRecord) -> Result<MorphologicalClass> {
    DEFAULT.classify(word)
}

/// Build every form of a word using the built-in exceptions.
///
/// ```
/// use katsuyou::{Form, MorphologicalClass, WordRecord};
///
/// let word = WordRecord::new("飲む", "のむ");
/// let forms = katsuyou::build_forms(&word, Some(MorphologicalClass::Godan))?;
///
/// assert_eq!(forms.get(Form::Past).map(|f| f.hiragana.as_str()), Some("のんだ"));
/// # Ok::<_, katsuyou::Error>(())
/// ```
pub fn build_forms(word: &WordRecord, class: Option<MorphologicalClass>) -> Result<ConjugationSet> {
    DEFAULT.build_forms(word, class)
}

/// Check an answer for the named form of a word using the built-in
/// exceptions.
pub fn check_answer(
    input: &str,
    word: &WordRecord,
    form_name: &str,
    class: Option<MorphologicalClass>,
) -> Result<Verdict> {
    DEFAULT.check_answer(input, word, form_name, class)
}
