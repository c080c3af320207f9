use std::fmt;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

macro_rules! form {
    ($vis:vis enum $name:ident { $({$variant:ident, $ident:literal, $title:literal $(,)?}),* $(,)? }) => {
        /// A named conjugated form.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize, Key)]
        #[serde(rename_all = "snake_case")]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// The key used for the form in word lists, like `polite_past`.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $ident,)*
                }
            }

            /// Longer title for the form.
            $vis fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title,)*
                }
            }

            /// Parse a form from its key. Dashes are accepted in place of
            /// underscores.
            $vis fn parse(string: &str) -> Option<$name> {
                let string = string.trim().to_ascii_lowercase().replace('-', "_");

                match string.as_str() {
                    $($ident => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    }
}

form! {
    pub enum Form {
        {Present, "present", "辞書形 (じしょけい) dictionary form / present"},
        {Polite, "polite", "～ます, polite present"},
        {PoliteNegative, "polite_negative", "～ません, polite negative"},
        {Negative, "negative", "～ない, not doing ~, the absence of ~"},
        {Past, "past", "過去形 (かこけい) past tense"},
        {PolitePast, "polite_past", "～ました, polite past"},
        {PastNegative, "past_negative", "～なかった, did not ~"},
        {NegativePast, "negative_past", "～なかった, was not ~"},
        {Adverbial, "adverbial", "連用形 (れんようけい) adverbial, ～く / ～に"},
    }
}

impl Form {
    /// Forms produced for verbs.
    pub const VERB: &'static [Form] = &[
        Form::Polite,
        Form::PoliteNegative,
        Form::Negative,
        Form::PastNegative,
        Form::Past,
        Form::PolitePast,
    ];

    /// Forms produced for adjectives.
    pub const ADJECTIVE: &'static [Form] = &[
        Form::Present,
        Form::Past,
        Form::Negative,
        Form::NegativePast,
        Form::Adverbial,
    ];

    /// Verb and adjective word lists spell the plain past negative
    /// differently, this maps one spelling onto the other.
    pub fn alias(&self) -> Option<Form> {
        match self {
            Form::PastNegative => Some(Form::NegativePast),
            Form::NegativePast => Some(Form::PastNegative),
            _ => None,
        }
    }
}

impl fmt::Display for Form {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}
