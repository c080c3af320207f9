//! Conjugation of Japanese verbs and adjectives.
//!
//! Words are classified into a [`MorphologicalClass`], after which a table
//! driven rule engine derives their conjugated forms in kanji, hiragana and
//! romaji.
//!
//! ```
//! use katsuyou::{Form, WordRecord};
//!
//! let word = WordRecord::new("楽しい", "たのしい");
//! let forms = katsuyou::build_forms(&word, None)?;
//!
//! let negative = forms.get(Form::Negative).unwrap();
//! assert_eq!(negative.kanji, "楽しくない");
//! assert_eq!(negative.hiragana, "たのしくない");
//!
//! let verdict = katsuyou::check_answer("たのしく", &word, "adverbial", None)?;
//! assert!(verdict.is_correct);
//! # Ok::<_, katsuyou::Error>(())
//! ```

mod concat;
pub use self::concat::Concat;

mod class;
pub use self::class::{DeclaredType, MorphologicalClass, PartOfSpeech};

mod classify;

mod conjugation;
pub use self::conjugation::{ConjugationForm, ConjugationSet};

mod conjugator;
pub use self::conjugator::{build_forms, check_answer, classify, Conjugator};

pub mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;

pub mod enrich;

mod error;
pub use self::error::{Error, Result};

pub mod exceptions;
pub use self::exceptions::Exceptions;

mod form;
pub use self::form::Form;

pub mod inflection;
pub use self::inflection::Inflections;

pub mod kana;

pub mod romaji;

mod verify;
pub use self::verify::Verdict;

mod word;
pub use self::word::WordRecord;
