//! Russian: imperatives and past forms back to the infinitive, with the
//! reflexive `-ся` re-attached (`переключись` → `переключиться`).

use crate::cascade::{Cascade, CompoundRule, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::is_cyrillic;

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[(Imperative, 0.85), (Polite, 0.85), (Past, 0.8)],
    fallback: 0.75,
};

pub fn normalizer() -> Cascade {
    Cascade::builder("ru", &CONFIDENCE, is_cyrillic)
        .min_len(3)
        .irregular(&[
            ("переключи", "переключить"),
            ("переключите", "переключить"),
            ("добавь", "добавить"),
            ("удали", "удалить"),
            ("покажи", "показать"),
            ("покажите", "показать"),
            ("скрой", "скрыть"),
            ("скройте", "скрыть"),
            ("положи", "положить"),
            ("помести", "поместить"),
            ("поместите", "поместить"),
            ("установи", "установить"),
            ("увеличь", "увеличить"),
            ("подожди", "подождать"),
            ("подождите", "подождать"),
            ("жди", "ждать"),
            ("получи", "получить"),
            ("отправь", "отправить"),
            ("запиши", "записать"),
            ("запишите", "записать"),
            ("выведи", "вывести"),
            ("преобразуй", "преобразовать"),
        ])
        .canonical_endings(&["ть", "ти", "чь", "ться", "тись"])
        .compound(CompoundRule::suffix("ся", Reflexive).reattach("ся").min_base(3))
        .compound(CompoundRule::suffix("сь", Reflexive).reattach("ся").min_base(3))
        .suffixes([
            SuffixRule::new("уйте", "овать", Polite).min_stem(2),
            SuffixRule::new("уй", "овать", Imperative).min_stem(2),
            SuffixRule::new("ите", "ить", Polite).min_stem(2),
            SuffixRule::new("ьте", "ить", Polite).min_stem(2),
            SuffixRule::new("йте", "ть", Polite).min_stem(2),
            SuffixRule::new("ил", "ить", Past).min_stem(2),
            SuffixRule::new("ила", "ить", Past).min_stem(2),
            SuffixRule::new("или", "ить", Past).min_stem(2),
            SuffixRule::new("ал", "ать", Past).min_stem(2),
            SuffixRule::new("ала", "ать", Past).min_stem(2),
            SuffixRule::new("ял", "ять", Past).min_stem(2),
            SuffixRule::new("ел", "еть", Past).min_stem(2),
        ])
        .fallbacks([
            SuffixRule::new("ь", "ить", Heuristic).min_stem(3),
            SuffixRule::new("и", "ить", Heuristic).min_stem(3),
            SuffixRule::new("й", "ть", Heuristic).min_stem(3),
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
    fn irregular_imperative() {
        let result = normalizer().normalize("переключи");
        assert_eq!(result.stem, "переключить");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn reflexive_is_reattached() {
        let result = normalizer().normalize("переключись");
        assert_eq!(result.stem, "переключиться");
        assert_eq!(result.metadata.conjugation_type, Some(Conjugation::Reflexive));
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn polite_and_past_forms() {
        let ru = normalizer();
        assert_eq!(ru.normalize("добавьте").stem, "добавить");
        assert_eq!(ru.normalize("удалите").stem, "удалить");
        assert_eq!(ru.normalize("добавил").stem, "добавить");
        assert_eq!(ru.normalize("преобразуйте").stem, "преобразовать");
    }

    #[test]
    fn soft_sign_fallback() {
        let result = normalizer().normalize("сохрань");
        assert_eq!(result.stem, "сохранить");
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn infinitives_are_fixed_points() {
        let ru = normalizer();
        for word in ["добавить", "переключиться", "вывести", "ждать"] {
            assert!(ru.normalize(word).is_unchanged(), "{word}");
        }
    }
}
