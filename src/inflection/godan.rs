/// A row of the godan suffix table, keyed by the dictionary-form final kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Godan {
    /// The final kana in dictionary form.
    pub(crate) u: char,
    /// Stem used before ない / なかった.
    pub(crate) a: &'static str,
    /// Stem used before ます / ません / ました.
    pub(crate) i: &'static str,
    /// Euphonic past fusion, which already includes the た / だ.
    pub(crate) past: &'static str,
}

/// The U godan table.
pub(crate) static U: &Godan = &Godan {
    u: 'う',
    a: "わ",
    i: "い",
    past: "った",
};

/// The TSU godan table.
pub(crate) static TSU: &Godan = &Godan {
    u: 'つ',
    a: "た",
    i: "ち",
    past: "った",
};

/// The RU godan table.
pub(crate) static RU: &Godan = &Godan {
    u: 'る',
    a: "ら",
    i: "り",
    past: "った",
};

/// The KU godan table.
pub(crate) static KU: &Godan = &Godan {
    u: 'く',
    a: "か",
    i: "き",
    past: "いた",
};

/// The GU godan table.
pub(crate) static GU: &Godan = &Godan {
    u: 'ぐ',
    a: "が",
    i: "ぎ",
    past: "いだ",
};

/// The MU godan table.
pub(crate) static MU: &Godan = &Godan {
    u: 'む',
    a: "ま",
    i: "み",
    past: "んだ",
};

/// The BU godan table.
pub(crate) static BU: &Godan = &Godan {
    u: 'ぶ',
    a: "ば",
    i: "び",
    past: "んだ",
};

/// The NU godan table.
pub(crate) static NU: &Godan = &Godan {
    u: 'ぬ',
    a: "な",
    i: "に",
    past: "んだ",
};

/// The SU godan table.
pub(crate) static SU: &Godan = &Godan {
    u: 'す',
    a: "さ",
    i: "し",
    past: "した",
};

/// The IKU/YUKU godan table.
pub(crate) static IKU: &Godan = &Godan {
    u: 'く',
    a: "か",
    i: "き",
    past: "った",
};

/// Look up the regular row for the given dictionary-form final kana.
pub(crate) fn row(u: char) -> Option<&'static Godan> {
    let g = match u {
        'う' => U,
        'つ' => TSU,
        'る' => RU,
        'く' => KU,
        'ぐ' => GU,
        'む' => MU,
        'ぶ' => BU,
        'ぬ' => NU,
        'す' => SU,
        _ => return None,
    };

    Some(g)
}

/// Test if the word is 行く or one of its compounds, which take the
/// [`IKU`] row.
pub(crate) fn is_iku(kanji: &str, reading: &str) -> bool {
    if kanji.ends_with("行く") || kanji.ends_with("逝く") {
        return true;
    }

    matches!(reading, "いく" | "ゆく") && (kanji.is_empty() || kanji == reading)
}
