//! German: imperatives, participles and preterites back to the infinitive.
//!
//! Separable prefixes (`füge … hinzu`) are a word-order concern and are
//! handled by patterns, not here.

use crate::cascade::{Cascade, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::is_latin;

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.95,
    compound: 0.9,
    rules: &[(Participle, 0.82), (Past, 0.8)],
    fallback: 0.75,
};

pub fn normalizer() -> Cascade {
    Cascade::builder("de", &CONFIDENCE, is_latin)
        .min_len(3)
        .irregular(&[
            ("zeig", "zeigen"),
            ("hol", "holen"),
            ("setz", "setzen"),
            ("wart", "warten"),
            ("send", "senden"),
            ("lösch", "löschen"),
            ("entfern", "entfernen"),
            ("erhöh", "erhöhen"),
            ("füg", "fügen"),
            ("leg", "legen"),
            ("verbirg", "verbergen"),
            ("verbirgt", "verbergen"),
        ])
        .canonical_endings(&["en", "ern", "eln"])
        .suffixes([
            SuffixRule::new("et", "en", Participle).with_prefix("ge").min_stem(2),
            SuffixRule::new("t", "en", Participle).with_prefix("ge").min_stem(2),
            SuffixRule::new("ete", "en", Past).min_stem(3),
        ])
        .fallbacks([
            SuffixRule::new("e", "en", Heuristic).min_stem(3),
            SuffixRule::new("t", "en", Heuristic).min_stem(4),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphologicalNormalizer;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_imperatives_are_irregular() {
        let result = normalizer().normalize("Zeig");
        assert_eq!(result.stem, "zeigen");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn participle_circumfix() {
        let de = normalizer();
        assert_eq!(de.normalize("gezeigt").stem, "zeigen");
        assert_eq!(de.normalize("gewartet").stem, "warten");
        assert_eq!(
            de.normalize("gewartet").metadata.removed_suffixes,
            vec!["et".to_string()]
        );
    }

    #[test]
    fn preterite_and_fallbacks() {
        let de = normalizer();
        assert_eq!(de.normalize("wartete").stem, "warten");
        assert_eq!(de.normalize("warte").stem, "warten");
        assert_eq!(de.normalize("zeige").stem, "zeigen");
        assert_eq!(de.normalize("entfernt").stem, "entfernen");
        assert_eq!(de.normalize("zeige").confidence, 0.75);
    }

    #[test]
    fn infinitives_are_fixed_points() {
        let de = normalizer();
        for word in ["zeigen", "hinzufügen", "warten", "verbergen"] {
            assert!(de.normalize(word).is_unchanged(), "{word}");
        }
    }
}
