//! Spanish: imperatives, preterites, gerunds and enclitic pronouns back to
//! the infinitive (`agrégalo` → `agregar`).

use crate::cascade::{Cascade, CompoundRule, SuffixRule};
use crate::confidence::ConfidenceTable;
use crate::result::Conjugation::*;
use crate::script::is_latin;

pub static CONFIDENCE: ConfidenceTable = ConfidenceTable {
    irregular: 0.95,
    orthographic: 0.9,
    compound: 0.88,
    rules: &[
        (Gerund, 0.85),
        (Participle, 0.82),
        (Past, 0.82),
        (Imperative, 0.8),
    ],
    fallback: 0.75,
};

const ENCLITICS: &[&str] = &["lo", "la", "los", "las", "le", "les", "me", "te", "se", "nos"];

fn unaccent(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        other => other,
    }
}

/// Imperatives gain a written accent when a pronoun is attached
/// (`agrega` + `lo` → `agrégalo`); infinitives take them as-is.
fn takes_enclitic(base: &str) -> bool {
    base.ends_with('r') || base.chars().any(|c| unaccent(c) != c)
}

/// Drop acute accents everywhere except on the final letter, which marks
/// the preterite (`agregó`).
fn fold_accents(word: &str) -> Option<String> {
    let count = word.chars().count();
    let folded: String = word
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 1 < count { unaccent(c) } else { c })
        .collect();
    (folded != word).then_some(folded)
}

pub fn normalizer() -> Cascade {
    let mut builder = Cascade::builder("es", &CONFIDENCE, is_latin)
        .min_len(3)
        .irregular(&[
            ("muestra", "mostrar"),
            ("muestre", "mostrar"),
            ("pon", "poner"),
            ("ponga", "poner"),
            ("obtén", "obtener"),
            ("obten", "obtener"),
            ("obtenga", "obtener"),
            ("añade", "añadir"),
            ("convierte", "convertir"),
            ("convierta", "convertir"),
            ("esconde", "esconder"),
            ("establece", "establecer"),
            ("trae", "traer"),
            ("remueve", "remover"),
            ("envía", "enviar"),
            ("haz", "hacer"),
        ])
        .canonical_endings(&["ar", "er", "ir", "arse", "erse", "irse"])
        .fold(fold_accents)
        .suffixes([
            SuffixRule::new("ando", "ar", Gerund).min_stem(2),
            SuffixRule::new("ado", "ar", Participle).min_stem(2),
            SuffixRule::new("ada", "ar", Participle).min_stem(2),
            SuffixRule::new("ió", "ir", Past).min_stem(2),
            SuffixRule::new("ó", "ar", Past).min_stem(2),
            SuffixRule::new("gué", "gar", Past),
            SuffixRule::new("qué", "car", Past),
            SuffixRule::new("é", "ar", Past).min_stem(2),
            SuffixRule::new("ad", "ar", Imperative).min_stem(2),
            SuffixRule::new("ed", "er", Imperative).min_stem(2),
            SuffixRule::new("id", "ir", Imperative).min_stem(2),
            SuffixRule::new("gue", "gar", Imperative),
            SuffixRule::new("que", "car", Imperative),
        ])
        .fallbacks([
            SuffixRule::new("iendo", "er", Heuristic).min_stem(2),
            SuffixRule::new("ido", "er", Heuristic).min_stem(2),
            SuffixRule::new("en", "ar", Heuristic).min_stem(3),
            SuffixRule::new("a", "ar", Heuristic).min_stem(3),
            SuffixRule::new("e", "ar", Heuristic).min_stem(3),
        ]);
    for enclitic in ENCLITICS {
        builder = builder.compound(
            CompoundRule::suffix(enclitic, Enclitic)
                .min_base(3)
                .guard(takes_enclitic),
        );
    }
    builder.build()
}
