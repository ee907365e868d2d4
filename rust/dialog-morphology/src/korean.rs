//! Korean: polite and past endings back to the `-다` dictionary form, and
//! `하다` light verbs back to their noun (`추가해요` → `추가`).

use crate::cascade::{Cascade, CompoundRule, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::is_hangul;

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[
        (LightVerb, 0.88),
        (Polite, 0.85),
        (Past, 0.85),
        (Imperative, 0.82),
        (Connective, 0.8),
        (Nominalized, 0.8),
    ],
    fallback: 0.75,
};

pub fn normalizer() -> Cascade {
    Cascade::builder("ko", &CONFIDENCE, is_hangul)
        .irregular(&[("해", "하다"), ("줘", "주다"), ("가", "가다"), ("와", "오다")])
        .canonical_endings(&["다"])
        .compound(CompoundRule::suffix("주세요", Request))
        .compound(CompoundRule::suffix("줘요", Request))
        .compound(CompoundRule::suffix("줘", Request))
        .compound(CompoundRule::suffix("주십시오", Request))
        .suffixes([
            SuffixRule::new("하다", "", LightVerb),
            SuffixRule::new("한다", "", LightVerb),
            SuffixRule::new("하세요", "", LightVerb),
            SuffixRule::new("하십시오", "", LightVerb),
            SuffixRule::new("합니다", "", LightVerb),
            SuffixRule::new("해요", "", LightVerb),
            SuffixRule::new("해라", "", LightVerb),
            SuffixRule::new("해", "", LightVerb),
            SuffixRule::new("했다", "", Past),
            SuffixRule::new("했어요", "", Past),
            SuffixRule::new("했습니다", "", Past),
            SuffixRule::new("하기", "", Nominalized),
            SuffixRule::new("하고", "", Connective),
            SuffixRule::new("하자", "", Imperative),
            SuffixRule::new("었다", "다", Past),
            SuffixRule::new("었어요", "다", Past),
            SuffixRule::new("았다", "다", Past),
            SuffixRule::new("으세요", "다", Polite),
            SuffixRule::new("세요", "다", Polite),
            SuffixRule::new("어요", "다", Polite),
            SuffixRule::new("아요", "다", Polite),
            SuffixRule::new("려요", "리다", Polite),
            SuffixRule::new("와요", "오다", Polite),
            SuffixRule::new("내요", "내다", Polite),
            SuffixRule::new("겨요", "기다", Polite),
            SuffixRule::new("여요", "이다", Polite),
            SuffixRule::new("려", "리다", Imperative),
            SuffixRule::new("겨", "기다", Imperative),
            SuffixRule::new("와", "오다", Imperative),
            SuffixRule::new("기", "다", Nominalized).min_stem(2),
        ])
        .fallbacks([
            SuffixRule::new("여", "이다", Heuristic),
            SuffixRule::new("내", "내다", Heuristic),
            SuffixRule::new("어", "다", Heuristic),
            SuffixRule::new("아", "다", Heuristic),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphologicalNormalizer;
    use crate::result::Conjugation;
    use pretty_assertions::assert_eq;

    #[test]
    fn light_verb_reduces_to_noun() {
        let ko = normalizer();
        for form in ["추가하다", "추가해요", "추가해", "추가합니다", "추가하세요", "추가했다"] {
            assert_eq!(ko.normalize(form).stem, "추가", "{form}");
        }
    }

    #[test]
    fn request_auxiliary_is_stripped() {
        let result = normalizer().normalize("추가해주세요");
        assert_eq!(result.stem, "추가");
        assert_eq!(result.confidence, 0.88);
        assert_eq!(result.metadata.conjugation_type, Some(Conjugation::Request));
    }

    #[test]
    fn contracted_stems_regain_their_ending() {
        let ko = normalizer();
        assert_eq!(ko.normalize("기다려요").stem, "기다리다");
        assert_eq!(ko.normalize("가져와").stem, "가져오다");
        assert_eq!(ko.normalize("숨겨").stem, "숨기다");
        assert_eq!(ko.normalize("넣으세요").stem, "넣다");
    }

    #[test]
    fn bare_vowel_ending_is_a_fallback() {
        let result = normalizer().normalize("넣어");
        assert_eq!(result.stem, "넣다");
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn dictionary_forms_are_fixed_points() {
        let ko = normalizer();
        for word in ["넣다", "기다리다", "보내다", "숨기다", "추가", "대기"] {
            let result = ko.normalize(word);
            assert!(result.is_unchanged(), "{word}");
        }
    }
}
