//! Arabic: diacritics and tatweel folded away, leading conjunctions
//! stripped, plural and feminine imperatives reduced to the masculine
//! singular imperative the lexicon is written in.

use crate::cascade::{Cascade, CompoundRule, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::{is_arabic, is_arabic_mark};

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[(Imperative, 0.82)],
    fallback: 0.72,
};

fn strip_marks(word: &str) -> Option<String> {
    word.chars()
        .any(is_arabic_mark)
        .then(|| word.chars().filter(|c| !is_arabic_mark(*c)).collect())
}

pub fn normalizer() -> Cascade {
    Cascade::builder("ar", &CONFIDENCE, is_arabic)
        .irregular(&[
            ("أضيفوا", "أضف"),
            ("أضيفي", "أضف"),
            ("احذفوا", "احذف"),
            ("احذفي", "احذف"),
            ("ضعوا", "ضع"),
            ("ضعي", "ضع"),
            ("زيدوا", "زد"),
            ("زيدي", "زد"),
            ("انتظروا", "انتظر"),
            ("انتظري", "انتظر"),
            ("أظهروا", "أظهر"),
            ("أخفوا", "أخف"),
            ("أخفي", "أخف"),
        ])
        .compound(CompoundRule::prefix("و", Conjunction))
        .compound(CompoundRule::prefix("ف", Conjunction))
        .fold(strip_marks)
        .suffixes([SuffixRule::new("وا", "", Imperative).min_stem(2)])
        .fallbacks([SuffixRule::new("ي", "", Heuristic).min_stem(3)])
        .build()
}
