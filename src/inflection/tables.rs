//! Suffix tables for each class.
//!
//! Each function feeds the suffixes which make up a form to the given
//! callback, leaving it up to the caller how to attach them to a stem.

use crate::form::Form;
use crate::inflection::godan::Godan;

use Form::*;

/// Perform godan conjugations. The callback receives the stem alternation
/// and the auxiliary attached to it.
pub(crate) fn godan(g: &'static Godan, mut r: impl FnMut(&'static str, &'static str, Form)) {
    r(g.i, "ます", Polite);
    r(g.i, "ません", PoliteNegative);
    r(g.a, "ない", Negative);
    r(g.a, "なかった", PastNegative);
    r("", g.past, Past);
    r(g.i, "ました", PolitePast);
}

/// Perform ichidan conjugations.
pub(crate) fn ichidan(mut r: impl FnMut(&'static str, Form)) {
    r("ます", Polite);
    r("ません", PoliteNegative);
    r("ない", Negative);
    r("なかった", PastNegative);
    r("た", Past);
    r("ました", PolitePast);
}

/// Perform する conjugations, attached to the stem of a compound.
pub(crate) fn suru(mut r: impl FnMut(&'static str, Form)) {
    r("します", Polite);
    r("しません", PoliteNegative);
    r("しない", Negative);
    r("しなかった", PastNegative);
    r("した", Past);
    r("しました", PolitePast);
}

/// Perform i-adjective conjugations, attached to the stem without い.
pub(crate) fn adjective_i(mut r: impl FnMut(&'static str, Form)) {
    r("い", Present);
    r("かった", Past);
    r("くない", Negative);
    r("くなかった", NegativePast);
    r("く", Adverbial);
}

/// Perform いい conjugations. The callback receives the replacement for い
/// in the kanji channel, the replacement in the reading channel and the
/// shared suffix.
///
/// The kanji `Some(..)` is only used where written Japanese conventionally
/// keeps the kanji, so 良くない but よかった.
pub(crate) fn adjective_ii(mut r: impl FnMut(Option<&'static str>, &'static str, &'static str, Form)) {
    r(None, "よ", "かった", Past);
    r(Some("良"), "よ", "くない", Negative);
    r(None, "よ", "くなかった", NegativePast);
    r(Some("良"), "よ", "く", Adverbial);
}

/// Perform na-adjective conjugations, attached to the whole word.
pub(crate) fn adjective_na(mut r: impl FnMut(&'static str, Form)) {
    r("", Present);
    r("だった", Past);
    r("ではない", Negative);
    r("ではなかった", NegativePast);
    r("に", Adverbial);
}
