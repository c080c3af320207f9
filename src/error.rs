use thiserror::Error;

use crate::class::MorphologicalClass;
use crate::form::Form;

/// Errors raised while classifying or conjugating a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The word has no hiragana reading to derive forms from.
    #[error("word has an empty hiragana base form")]
    EmptyBaseForm,
    /// No class was declared and no heuristic applies.
    #[error("could not determine a morphological class for `{0}`")]
    UnknownClass(String),
    /// The declared type string is not recognized.
    #[error("unknown declared type `{0}`")]
    UnknownDeclaredClass(String),
    /// The terminal character of the word is not covered by any rule table.
    #[error("`{word}` does not end in anything conjugable as {class}")]
    UnconjugableEnding {
        word: String,
        class: MorphologicalClass,
    },
    /// The form name is not known.
    #[error("unknown form `{0}`")]
    UnknownForm(String),
    /// The form exists, but is not produced for the given class.
    #[error("form `{form}` is not produced for {class}")]
    FormNotApplicable {
        form: Form,
        class: MorphologicalClass,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
