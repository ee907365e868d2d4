//! Per-language confidence tables.
//!
//! Each language declares exactly one [`ConfidenceTable`]. Rules never carry
//! their own confidence literal; they carry a [`Conjugation`] tag and the
//! table decides how much that category is worth in that language.

use crate::result::Conjugation;

/// Confidence assigned to each tier of a cascade.
#[derive(Debug)]
pub struct ConfidenceTable {
    /// Exact irregular-form lookups.
    pub irregular: f64,
    /// Orthographic folds (diacritics, accents). Applied as a ceiling on
    /// whatever the folded word normalizes to.
    pub orthographic: f64,
    /// Compound strips (reflexive, enclitic, request auxiliaries). Applied as
    /// a ceiling on the recursively normalized base.
    pub compound: f64,
    /// Compositional suffix rules, by category.
    pub rules: &'static [(Conjugation, f64)],
    /// Generic single-character or ambiguous heuristics.
    pub fallback: f64,
}

impl ConfidenceTable {
    /// Confidence for a compositional rule of the given category.
    ///
    /// Categories missing from the table are treated as heuristics.
    pub fn for_rule(&self, category: Conjugation) -> f64 {
        self.rules
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, confidence)| *confidence)
            .unwrap_or(self.fallback)
    }
}
