//! Words which look like i-adjectives but conjugate as na-adjectives.
//!
//! This cannot be derived from the surface form, so it is maintained as data.
//! Bump [`VERSION`] whenever [`NA_ADJECTIVES`] changes. Enriched word lists
//! record the version they were enriched with, see
//! [`Document::exceptions_version`].
//!
//! [`Document::exceptions_version`]: crate::enrich::Document::exceptions_version

use std::collections::BTreeSet;

/// Version of the built-in exception data.
pub const VERSION: u32 = 1;

/// Built-in na-adjectives listed by reading.
pub static NA_ADJECTIVES: &[&str] = &[
    "あいまい",
    "きらい",
    "きれい",
    "しつれい",
    "ていねい",
    "とくい",
    "べんり",
    "ゆうめい",
    "れいせい",
];

/// The exception set used during classification, made up of the built-in
/// data and optional additions from configuration.
#[derive(Debug, Clone, Default)]
pub struct Exceptions {
    extra: BTreeSet<String>,
}

impl Exceptions {
    /// Only the built-in exceptions.
    pub const fn builtin() -> Self {
        Self {
            extra: BTreeSet::new(),
        }
    }

    /// Built-in exceptions extended with the given readings.
    pub fn with_extra<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            extra: iter.into_iter().map(Into::into).collect(),
        }
    }

    /// Test if the given reading is a listed na-adjective.
    pub fn is_na_adjective(&self, hiragana: &str) -> bool {
        NA_ADJECTIVES.contains(&hiragana) || self.extra.contains(hiragana)
    }

    /// Number of exceptions added on top of the built-in data.
    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }
}
