use super::Conjugator;
use crate::class::MorphologicalClass::{self, *};
use crate::class::PartOfSpeech;
use crate::error::Error;
use crate::exceptions::Exceptions;
use crate::form::Form;
use crate::word::WordRecord;

fn nomu() -> WordRecord {
    WordRecord::new("飲む", "のむ").with_romaji("nomu")
}

#[test]
fn test_build_forms_verb() {
    let set = super::build_forms(&nomu(), Some(Godan)).unwrap();
    assert_eq!(set.class(), Godan);
    assert!(!set.is_degenerate());
    assert_eq!(set.len(), Form::VERB.len());
    assert!(!set.contains(Form::Present));

    let polite = set.get(Form::Polite).unwrap();
    assert_eq!(polite.kanji, "飲みます");
    assert_eq!(polite.hiragana, "のみます");
    assert_eq!(polite.romaji.as_deref(), Some("nomimasu"));
}

#[test]
fn test_build_forms_classifies() {
    let word = WordRecord::new("食べる", "たべる")
        .with_part_of_speech(PartOfSpeech::Verb)
        .with_declared_type("ichidan");

    let set = super::build_forms(&word, None).unwrap();
    assert_eq!(set.class(), Ichidan);
    assert_eq!(set.get(Form::Negative).unwrap().kanji, "食べない");

    let word = WordRecord::new("", "たのしい").with_romaji("tanoshii");
    let set = super::build_forms(&word, None).unwrap();
    assert_eq!(set.class(), IAdjective);
    assert_eq!(set.len(), Form::ADJECTIVE.len());

    let past = set.get(Form::Past).unwrap();
    assert_eq!(past.kanji, "");
    assert_eq!(past.hiragana, "たのしかった");
    assert_eq!(past.romaji.as_deref(), Some("tanoshikatta"));
}

#[test]
fn test_build_forms_explicit_class_wins() {
    let word = WordRecord::new("", "きれい").with_class(IAdjective);
    let set = super::build_forms(&word, None).unwrap();
    assert_eq!(set.class(), IAdjective);

    let set = super::build_forms(&word, Some(NaAdjective)).unwrap();
    assert_eq!(set.get(Form::Past).unwrap().hiragana, "きれいだった");
}

#[test]
fn test_build_forms_errors() {
    let word = WordRecord::new("", "  ");
    assert_eq!(super::build_forms(&word, Some(Godan)), Err(Error::EmptyBaseForm));

    let word = WordRecord::new("本", "ほん").with_part_of_speech(PartOfSpeech::Other);
    assert_eq!(
        super::build_forms(&word, None),
        Err(Error::UnknownClass(String::from("ほん")))
    );
}

#[test]
fn test_build_forms_degenerate() {
    let word = WordRecord::new("", "のみ").with_romaji("nomi");
    let set = super::build_forms(&word, Some(Godan)).unwrap();
    assert!(set.is_degenerate());

    for (_, form) in set.iter() {
        assert_eq!(form.hiragana, "のみ");
        assert_eq!(form.romaji.as_deref(), Some("nomi"));
    }

    assert_eq!(
        set.unconjugable(&word),
        Some(Error::UnconjugableEnding {
            word: String::from("のみ"),
            class: Godan,
        })
    );
}

#[test]
fn test_without_romaji() {
    let conjugator = Conjugator::new().romaji(false);
    let set = conjugator.build_forms(&nomu(), Some(Godan)).unwrap();
    assert!(set.iter().all(|(_, form)| form.romaji.is_none()));
}

#[test]
fn test_extra_exceptions() {
    let word = WordRecord::new("", "ゆかい");
    assert_eq!(super::classify(&word), Ok(IAdjective));

    let conjugator = Conjugator::with_exceptions(Exceptions::with_extra(["ゆかい"]));
    assert_eq!(conjugator.classify(&word), Ok(NaAdjective));

    let set = conjugator.build_forms(&word, None).unwrap();
    assert_eq!(set.get(Form::Negative).unwrap().hiragana, "ゆかいではない");
}

#[test]
fn test_check_answer() {
    let word = nomu();

    let verdict = super::check_answer("のみます", &word, "polite", Some(Godan)).unwrap();
    assert!(verdict.is_correct);
    assert_eq!(verdict.feedback, "Correct!");

    let verdict = super::check_answer("のむます", &word, "polite", Some(Godan)).unwrap();
    assert!(!verdict.is_correct);
    assert_eq!(verdict.expected, "のみます");
    assert_eq!(verdict.feedback, "Incorrect. The correct answer is のみます.");

    let verdict = super::check_answer(" のんだ ", &word, "past", Some(Godan)).unwrap();
    assert!(verdict.is_correct);
}

#[test]
fn test_check_answer_aliases() {
    let verdict = super::check_answer("のまなかった", &nomu(), "negative_past", Some(Godan)).unwrap();
    assert!(verdict.is_correct);

    let word = WordRecord::new("楽しい", "たのしい");
    let verdict = super::check_answer("たのしくなかった", &word, "past-negative", None).unwrap();
    assert!(verdict.is_correct);
}

#[test]
fn test_check_answer_errors() {
    let word = nomu();

    assert_eq!(
        super::check_answer("のむ", &word, "volitional", Some(Godan)),
        Err(Error::UnknownForm(String::from("volitional")))
    );

    assert_eq!(
        super::check_answer("のむく", &word, "adverbial", Some(Godan)),
        Err(Error::FormNotApplicable {
            form: Form::Adverbial,
            class: Godan,
        })
    );
}

#[test]
fn test_deterministic() {
    for class in MorphologicalClass::ALL {
        let a = super::build_forms(&nomu(), Some(class)).unwrap();
        let b = super::build_forms(&nomu(), Some(class)).unwrap();
        assert_eq!(a, b);
    }
}
