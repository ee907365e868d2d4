//! Japanese: conjugated verbs back to dictionary form, suru-verbs back to
//! their noun stem (`追加して` → `追加`).

use crate::cascade::{Cascade, CompoundRule, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::{self, *};
use crate::script::{is_hiragana, is_kanji, is_katakana};

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[
        (LightVerb, 0.88),
        (Polite, 0.85),
        (Connective, 0.82),
        (Past, 0.82),
        (Imperative, 0.8),
    ],
    fallback: 0.72,
};

/// A suru-noun: two or more kanji/katakana (`追加`, `トグル`).
fn suru_noun(stem: &str) -> bool {
    stem.chars().count() >= 2 && stem.chars().all(|c| is_kanji(c) || is_katakana(c))
}

/// A godan `-す` verb stem: one kanji (`隠`) or ending in kana (`増や`).
fn godan_su(stem: &str) -> bool {
    let mut chars = stem.chars();
    match (chars.next(), chars.next_back()) {
        (Some(only), None) => is_kanji(only),
        (_, Some(last)) => is_hiragana(last),
        _ => false,
    }
}

fn after_te(base: &str) -> bool {
    base.ends_with('て') || base.ends_with('で')
}

fn light_verb(suffix: &'static str, category: Conjugation) -> SuffixRule {
    SuffixRule::new(suffix, "", category).guard(suru_noun)
}

fn su_verb(suffix: &'static str, category: Conjugation) -> SuffixRule {
    SuffixRule::new(suffix, "す", category).guard(godan_su)
}

pub fn normalizer() -> Cascade {
    Cascade::builder("ja", &CONFIDENCE, is_hiragana)
        .irregular(&[
            ("待って", "待つ"),
            ("待った", "待つ"),
            ("行って", "行く"),
            ("言って", "言う"),
            ("使って", "使う"),
            ("来て", "来る"),
        ])
        .compound(CompoundRule::suffix("ください", Request))
        .compound(CompoundRule::suffix("なさい", Request))
        .compound(CompoundRule::suffix("ちょうだい", Request))
        .compound(CompoundRule::suffix("いる", Progressive).guard(after_te))
        .compound(CompoundRule::suffix("います", Progressive).guard(after_te))
        .suffixes([
            light_verb("する", LightVerb),
            light_verb("します", Polite),
            light_verb("しました", Past),
            light_verb("して", Connective),
            light_verb("した", Past),
            light_verb("しろ", Imperative),
            light_verb("せよ", Imperative),
            light_verb("しよう", Imperative),
            su_verb("します", Polite),
            su_verb("しました", Past),
            su_verb("して", Connective),
            su_verb("した", Past),
            SuffixRule::new("えます", "える", Polite),
            SuffixRule::new("けます", "ける", Polite),
            SuffixRule::new("せます", "せる", Polite),
            SuffixRule::new("べます", "べる", Polite),
            SuffixRule::new("めます", "める", Polite),
            SuffixRule::new("れます", "れる", Polite),
            SuffixRule::new("ちます", "つ", Polite),
            SuffixRule::new("きます", "く", Polite),
            SuffixRule::new("ぎます", "ぐ", Polite),
            SuffixRule::new("みます", "む", Polite),
            SuffixRule::new("びます", "ぶ", Polite),
            SuffixRule::new("ります", "る", Polite),
            SuffixRule::new("います", "う", Polite),
            SuffixRule::new("えました", "える", Past),
            SuffixRule::new("れました", "れる", Past),
            SuffixRule::new("きました", "く", Past),
            SuffixRule::new("ちました", "つ", Past),
            SuffixRule::new("りました", "る", Past),
            SuffixRule::new("えて", "える", Connective),
            SuffixRule::new("けて", "ける", Connective),
            SuffixRule::new("せて", "せる", Connective),
            SuffixRule::new("べて", "べる", Connective),
            SuffixRule::new("めて", "める", Connective),
            SuffixRule::new("れて", "れる", Connective),
            SuffixRule::new("いて", "く", Connective),
            SuffixRule::new("いで", "ぐ", Connective),
            SuffixRule::new("んで", "む", Connective),
            SuffixRule::new("えた", "える", Past),
            SuffixRule::new("れた", "れる", Past),
            SuffixRule::new("せた", "せる", Past),
            SuffixRule::new("いた", "く", Past),
            SuffixRule::new("えろ", "える", Imperative),
            SuffixRule::new("れろ", "れる", Imperative),
            SuffixRule::new("せろ", "せる", Imperative),
        ])
        .fallbacks([
            SuffixRule::new("って", "る", Heuristic),
            SuffixRule::new("った", "る", Heuristic),
            SuffixRule::new("んだ", "む", Heuristic),
            light_verb("し", Heuristic),
        ])
        .build()
}
