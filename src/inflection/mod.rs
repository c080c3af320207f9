//! Table driven derivation of conjugated forms.

#[cfg(test)]
mod tests;

pub(crate) mod godan;
pub(crate) mod tables;

pub use self::conjugate::conjugate;
mod conjugate;

use fixed_map::Map;

use crate::class::MorphologicalClass;
use crate::form::Form;
use crate::kana::Fragments;

/// A collection of inflections derived for a single word.
#[non_exhaustive]
pub struct Inflections<'a> {
    /// The class the inflections were derived for.
    pub class: MorphologicalClass,
    /// The dictionary form.
    pub dictionary: Fragments<'a>,
    has_kanji: bool,
    degenerate: bool,
    inflections: Map<Form, Fragments<'a>>,
}

impl<'a> Inflections<'a> {
    pub(crate) fn new(class: MorphologicalClass, kanji: &'a str, reading: &'a str) -> Self {
        Self {
            class,
            dictionary: Fragments::new([kanji], [reading], []),
            has_kanji: !kanji.is_empty(),
            degenerate: false,
            inflections: Map::new(),
        }
    }

    /// Insert an inflection.
    pub(crate) fn insert(&mut self, form: Form, fragments: Fragments<'a>) {
        self.inflections.insert(form, fragments);
    }

    /// Replace every form of the class with the dictionary form and mark the
    /// collection as degenerate.
    pub(crate) fn fill_degenerate(&mut self) {
        self.inflections = Map::new();

        for &form in self.class.forms() {
            self.inflections.insert(form, self.dictionary.clone());
        }

        self.degenerate = true;
    }

    /// Test if the word had a written (kanji) form.
    pub fn has_kanji(&self) -> bool {
        self.has_kanji
    }

    /// Test if the word could not be conjugated, in which case every form is
    /// the unchanged dictionary form.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Test if an inflection exists.
    pub fn contains(&self, form: Form) -> bool {
        self.inflections.contains_key(form)
    }

    /// Get an inflection.
    pub fn get(&self, form: Form) -> Option<&Fragments<'a>> {
        self.inflections.get(form)
    }

    /// Iterate over all inflections.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &Fragments<'a>)> + '_ {
        self.inflections.iter()
    }
}
