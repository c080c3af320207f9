//! The set of forms derived for a single word.


use fixed_map::Map;
use serde::{Deserialize, Serialize};

use crate::class::MorphologicalClass;
use crate::error::Error;
use crate::form::Form;
use crate::inflection::Inflections;
use crate::romaji;
use crate::word::WordRecord;

/// A single derived form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationForm {
    /// Written form, empty if the word has no written form.
    #[serde(default)]
    pub kanji: String,
    pub hiragana: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
}

/// Every form derived for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationSet {
    class: MorphologicalClass,
    degenerate: bool,
    forms: Map<Form, ConjugationForm>,
}

impl ConjugationSet {
    /// Construct an empty set for the given class.
    pub fn new(class: MorphologicalClass) -> Self {
        Self {
            class,
            degenerate: false,
            forms: Map::new(),
        }
    }

    /// Build a set out of derived inflections.
    pub(crate) fn from_inflections(
        inflections: &Inflections<'_>,
        word: &WordRecord,
        with_romaji: bool,
    ) -> Self {
        let class = inflections.class;
        let dictionary = inflections.dictionary.to_reading();
        let mut forms = Map::new();

        for (form, fragments) in inflections.iter() {
            let kanji = if inflections.has_kanji() {
                fragments.to_text()
            } else {
                String::new()
            };

            let hiragana = fragments.to_reading();

            // Degenerate forms are the dictionary form, and so is their romaji.
            let target = if inflections.is_degenerate() {
                Form::Present
            } else {
                form
            };

            let romaji = with_romaji.then(|| {
                romaji::derive(class, target, word.romaji.as_deref(), &dictionary, &hiragana)
            });

            forms.insert(
                form,
                ConjugationForm {
                    kanji,
                    hiragana,
                    romaji,
                },
            );
        }

        Self {
            class,
            degenerate: inflections.is_degenerate(),
            forms,
        }
    }

    /// The class the forms were derived for.
    pub fn class(&self) -> MorphologicalClass {
        self.class
    }

    /// Test if the word could not be conjugated, in which case every form is
    /// the unchanged dictionary form.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// The error describing why the set is degenerate, if it is.
    pub fn unconjugable(&self, word: &WordRecord) -> Option<Error> {
        if !self.degenerate {
            return None;
        }

        Some(Error::UnconjugableEnding {
            word: word.hiragana.trim().to_owned(),
            class: self.class,
        })
    }

    /// Get a form.
    pub fn get(&self, form: Form) -> Option<&ConjugationForm> {
        self.forms.get(form)
    }

    /// Test if the set contains the given form.
    pub fn contains(&self, form: Form) -> bool {
        self.forms.contains_key(form)
    }

    /// Insert a form, replacing any existing one.
    pub fn insert(&mut self, form: Form, value: ConjugationForm) -> Option<ConjugationForm> {
        self.forms.insert(form, value)
    }

    /// Number of forms in the set.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Test if the set has no forms.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over forms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &ConjugationForm)> + '_ {
        self.forms.iter()
    }

    /// Copy every form in `other` which is absent from this set, returning
    /// the number of forms filled. Existing forms are never replaced.
    pub fn fill_missing(&mut self, other: &ConjugationSet) -> usize {
        let mut filled = 0;

        for (form, value) in other.iter() {
            if self.forms.contains_key(form) {
                continue;
            }

            self.forms.insert(form, value.clone());
            filled += 1;
        }

        filled
    }
}
