use super::conjugate;
use crate::class::MorphologicalClass::{self, *};
use crate::form::Form::{self, *};

macro_rules! test_case {
    ($kanji:expr, $reading:expr, $class:expr, { $($form:ident => ($k:expr, $r:expr)),* $(,)? }) => {{
        let inflections = conjugate($kanji, $reading, $class);
        assert!(!inflections.is_degenerate(), "{} / {} is degenerate", $kanji, $reading);

        $(
            let fragments = inflections.get($form).expect(stringify!($form));
            assert_eq!(fragments.to_text(), $k, "{} {:?} (kanji)", $reading, $form);
            assert_eq!(fragments.to_reading(), $r, "{} {:?} (reading)", $reading, $form);
        )*
    }};
}

fn forms(kanji: &str, reading: &str, class: MorphologicalClass) -> Vec<(Form, String)> {
    conjugate(kanji, reading, class)
        .iter()
        .map(|(form, fragments)| (form, fragments.to_reading()))
        .collect()
}

#[test]
fn test_godan_nomu() {
    test_case!("飲む", "のむ", Godan, {
        Polite => ("飲みます", "のみます"),
        PoliteNegative => ("飲みません", "のみません"),
        Negative => ("飲まない", "のまない"),
        PastNegative => ("飲まなかった", "のまなかった"),
        Past => ("飲んだ", "のんだ"),
        PolitePast => ("飲みました", "のみました"),
    });
}

#[test]
fn test_godan_rows() {
    test_case!("書く", "かく", Godan, { Past => ("書いた", "かいた"), Negative => ("書かない", "かかない") });
    test_case!("泳ぐ", "およぐ", Godan, { Past => ("泳いだ", "およいだ"), Polite => ("泳ぎます", "およぎます") });
    test_case!("話す", "はなす", Godan, { Past => ("話した", "はなした"), Negative => ("話さない", "はなさない") });
    test_case!("待つ", "まつ", Godan, { Past => ("待った", "まった"), Polite => ("待ちます", "まちます") });
    test_case!("死ぬ", "しぬ", Godan, { Past => ("死んだ", "しんだ"), Negative => ("死なない", "しなない") });
    test_case!("遊ぶ", "あそぶ", Godan, { Past => ("遊んだ", "あそんだ"), Polite => ("遊びます", "あそびます") });
    test_case!("帰る", "かえる", Godan, { Past => ("帰った", "かえった"), Negative => ("帰らない", "かえらない") });
    test_case!("買う", "かう", Godan, { Past => ("買った", "かった"), Negative => ("買わない", "かわない") });
}

#[test]
fn test_godan_past_never_uses_i_stem() {
    for (kanji, reading) in [("飲む", "のむ"), ("読む", "よむ"), ("住む", "すむ")] {
        let inflections = conjugate(kanji, reading, Godan);
        let past = inflections.get(Past).unwrap().to_reading();
        assert!(past.ends_with("んだ"), "{past}");
        assert!(!past.ends_with("みた"), "{past}");
    }
}

#[test]
fn test_godan_iku() {
    test_case!("行く", "いく", Godan, { Past => ("行った", "いった"), Negative => ("行かない", "いかない") });
    test_case!("いく", "いく", Godan, { Past => ("いった", "いった") });
    test_case!("出て行く", "でていく", Godan, { Past => ("出て行った", "でていった") });
    // Only the exact kana word or written 行く takes the special row.
    test_case!("ひく", "ひく", Godan, { Past => ("ひいた", "ひいた") });
}

#[test]
fn test_godan_okurigana() {
    test_case!("見つかる", "みつかる", Godan, {
        Polite => ("見つかります", "みつかります"),
        Past => ("見つかった", "みつかった"),
    });

    // No okurigana in the written form, fall back to concatenation.
    test_case!("飲", "のむ", Godan, {
        Polite => ("飲みます", "のみます"),
        Past => ("飲んだ", "のんだ"),
    });
}

#[test]
fn test_godan_degenerate() {
    let inflections = conjugate("", "のみ", Godan);
    assert!(inflections.is_degenerate());

    for form in Form::VERB {
        let fragments = inflections.get(*form).unwrap();
        assert_eq!(fragments.to_reading(), "のみ");
    }

    assert!(!inflections.contains(Adverbial));
}

#[test]
fn test_ichidan() {
    test_case!("食べる", "たべる", Ichidan, {
        Polite => ("食べます", "たべます"),
        PoliteNegative => ("食べません", "たべません"),
        Negative => ("食べない", "たべない"),
        PastNegative => ("食べなかった", "たべなかった"),
        Past => ("食べた", "たべた"),
        PolitePast => ("食べました", "たべました"),
    });

    test_case!("見つける", "みつける", Ichidan, { Negative => ("見つけない", "みつけない") });
    // Written form without る is used as the stem directly.
    test_case!("寝", "ねる", Ichidan, { Past => ("寝た", "ねた") });

    assert!(conjugate("", "たべ", Ichidan).is_degenerate());
}

#[test]
fn test_suru() {
    test_case!("", "する", IrregularVerb, {
        Polite => ("します", "します"),
        PoliteNegative => ("しません", "しません"),
        Negative => ("しない", "しない"),
        PastNegative => ("しなかった", "しなかった"),
        Past => ("した", "した"),
        PolitePast => ("しました", "しました"),
    });

    test_case!("勉強する", "べんきょうする", IrregularVerb, {
        Negative => ("勉強しない", "べんきょうしない"),
        Past => ("勉強した", "べんきょうした"),
        Polite => ("勉強します", "べんきょうします"),
    });

    test_case!("為る", "する", IrregularVerb, { Past => ("した", "した") });
    test_case!("愛為る", "あいする", IrregularVerb, { Past => ("愛した", "あいした") });
    test_case!("電話", "でんわする", IrregularVerb, { Negative => ("電話しない", "でんわしない") });

    assert!(conjugate("来る", "くる", IrregularVerb).is_degenerate());
}

#[test]
fn test_adjective_i() {
    test_case!("楽しい", "たのしい", IAdjective, {
        Present => ("楽しい", "たのしい"),
        Past => ("楽しかった", "たのしかった"),
        Negative => ("楽しくない", "たのしくない"),
        NegativePast => ("楽しくなかった", "たのしくなかった"),
        Adverbial => ("楽しく", "たのしく"),
    });

    assert!(conjugate("大変", "たいへん", IAdjective).is_degenerate());
}

#[test]
fn test_adjective_i_round_trip() {
    for (kanji, reading) in [("楽しい", "たのしい"), ("高い", "たかい"), ("", "おいしい")] {
        let inflections = conjugate(kanji, reading, IAdjective);
        let past = inflections.get(Past).unwrap().to_reading();
        let stem = past.strip_suffix("かった").unwrap();
        assert_eq!(Some(stem), reading.strip_suffix('い'));
    }
}

#[test]
fn test_adjective_na() {
    test_case!("大変", "たいへん", NaAdjective, {
        Present => ("大変", "たいへん"),
        Past => ("大変だった", "たいへんだった"),
        Negative => ("大変ではない", "たいへんではない"),
        NegativePast => ("大変ではなかった", "たいへんではなかった"),
        Adverbial => ("大変に", "たいへんに"),
    });

    test_case!("綺麗", "きれい", NaAdjective, { Past => ("綺麗だった", "きれいだった") });
}

#[test]
fn test_adjective_ii() {
    test_case!("いい", "いい", IrregularIAdjective, {
        Present => ("いい", "いい"),
        Past => ("よかった", "よかった"),
        Negative => ("良くない", "よくない"),
        NegativePast => ("よくなかった", "よくなかった"),
        Adverbial => ("良く", "よく"),
    });

    test_case!("良い", "いい", IrregularIAdjective, {
        Past => ("よかった", "よかった"),
        Negative => ("良くない", "よくない"),
    });

    test_case!("格好いい", "かっこいい", IrregularIAdjective, {
        Past => ("格好よかった", "かっこよかった"),
        Negative => ("格好よくない", "かっこよくない"),
    });

    test_case!("格好良い", "かっこいい", IrregularIAdjective, {
        Negative => ("格好良くない", "かっこよくない"),
        Adverbial => ("格好良く", "かっこよく"),
    });

    let inflections = conjugate("", "いい", IrregularIAdjective);
    assert_ne!(inflections.get(Negative).unwrap().to_reading(), "いくない");
}

#[test]
fn test_deterministic() {
    for class in MorphologicalClass::ALL {
        assert_eq!(forms("飲む", "のむ", class), forms("飲む", "のむ", class));
    }
}
