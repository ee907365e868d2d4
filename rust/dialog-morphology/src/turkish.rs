//! Turkish: polite, progressive, past and infinitive suffixes stripped back
//! to the bare imperative (`ekleyin` → `ekle`).

use crate::cascade::{Cascade, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::is_latin;

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[
        (Polite, 0.85),
        (Infinitive, 0.85),
        (Progressive, 0.82),
        (Past, 0.8),
    ],
    fallback: 0.75,
};

pub fn normalizer() -> Cascade {
    let past = ["di", "dı", "du", "dü", "ti", "tı", "tu", "tü"]
        .map(|suffix| SuffixRule::new(suffix, "", Past).min_stem(3));
    let progressive = ["iyor", "ıyor", "uyor", "üyor"]
        .map(|suffix| SuffixRule::new(suffix, "", Progressive).min_stem(3));
    Cascade::builder("tr", &CONFIDENCE, is_latin)
        .min_len(4)
        .irregular(&[
            ("kaydedin", "kaydet"),
            ("kaydediniz", "kaydet"),
            ("kaydetmek", "kaydet"),
            ("gidin", "git"),
            ("edin", "et"),
        ])
        .suffixes([
            SuffixRule::new("yiniz", "", Polite).min_stem(2),
            SuffixRule::new("yınız", "", Polite).min_stem(2),
            SuffixRule::new("iniz", "", Polite).min_stem(3),
            SuffixRule::new("ınız", "", Polite).min_stem(3),
            SuffixRule::new("yin", "", Polite).min_stem(2),
            SuffixRule::new("yın", "", Polite).min_stem(2),
            SuffixRule::new("liyor", "le", Progressive).min_stem(2),
            SuffixRule::new("lıyor", "la", Progressive).min_stem(2),
            SuffixRule::new("mek", "", Infinitive).min_stem(2),
            SuffixRule::new("mak", "", Infinitive).min_stem(2),
        ])
        .suffixes(progressive)
        .suffixes(past)
        .fallbacks(["in", "ın", "un", "ün"].map(|suffix| SuffixRule::new(suffix, "", Heuristic).min_stem(3)))
        .build()
}
