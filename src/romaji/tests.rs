use super::{derive, romanize};
use crate::class::MorphologicalClass::*;
use crate::form::Form::*;

#[test]
fn test_adjective_i() {
    let r = |form| derive(IAdjective, form, Some("tanoshii"), "たのしい", "");
    assert_eq!(r(Present), "tanoshii");
    assert_eq!(r(Past), "tanoshikatta");
    assert_eq!(r(Negative), "tanoshikunai");
    assert_eq!(r(NegativePast), "tanoshikunakatta");
    assert_eq!(r(Adverbial), "tanoshiku");
}

#[test]
fn test_adjective_i_without_romaji() {
    assert_eq!(
        derive(IAdjective, Past, None, "たかい", "たかかった"),
        "takakatta"
    );
    assert_eq!(
        derive(IAdjective, Past, Some("  "), "たかい", "たかかった"),
        "takakatta"
    );
}

#[test]
fn test_adjective_na() {
    let r = |form| derive(NaAdjective, form, Some("taihen"), "たいへん", "");
    assert_eq!(r(Present), "taihen");
    assert_eq!(r(Past), "taihen datta");
    assert_eq!(r(Negative), "taihen dewa nai");
    assert_eq!(r(NegativePast), "taihen dewa nakatta");
    assert_eq!(r(Adverbial), "taihen ni");
}

#[test]
fn test_adjective_ii() {
    let r = |form| derive(IrregularIAdjective, form, Some("ii"), "いい", "");
    assert_eq!(r(Past), "yokatta");
    assert_eq!(r(Negative), "yokunai");
    assert_eq!(r(NegativePast), "yokunakatta");
    assert_eq!(r(Adverbial), "yoku");

    assert_eq!(
        derive(IrregularIAdjective, Negative, Some("kakkoii"), "かっこいい", ""),
        "kakkoyokunai"
    );
}

#[test]
fn test_verbs() {
    assert_eq!(derive(Godan, Polite, Some("nomu"), "のむ", "のみます"), "nomimasu");
    assert_eq!(derive(Godan, Past, None, "のむ", "のんだ"), "nonda");
    assert_eq!(derive(Ichidan, Negative, None, "たべる", "たべない"), "tabenai");
    assert_eq!(romanize("しました"), "shimashita");
}
