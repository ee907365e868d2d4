//! The output of a normalizer: a stem plus how sure we are about it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The grammatical category a normalization rule recognized.
///
/// Every rule in a [`crate::Cascade`] is tagged with one of these, and the
/// language's [`crate::ConfidenceTable`] maps the tag to a confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conjugation {
    /// Found verbatim in the irregular-form table.
    Irregular,
    /// Diacritics or other orthographic noise removed.
    Orthographic,
    /// A reflexive marker stripped and re-attached (ru `-ся`).
    Reflexive,
    /// An enclitic pronoun stripped (es `agrégalo`).
    Enclitic,
    /// A polite request auxiliary stripped (ja `ください`, ko `주세요`).
    Request,
    /// A leading conjunction stripped (ar `و`).
    Conjunction,
    /// A light-verb ending reduced to its noun stem (ja `する`, ko `하다`).
    LightVerb,
    /// Polite/formal register.
    Polite,
    /// Past tense.
    Past,
    /// Progressive aspect.
    Progressive,
    /// Gerund.
    Gerund,
    /// Past participle.
    Participle,
    /// Connective form (ja te-form).
    Connective,
    /// Imperative mood.
    Imperative,
    /// Infinitive reduced to the imperative stem (tr `-mek`).
    Infinitive,
    /// Nominalized verb (ko `-기`).
    Nominalized,
    /// Ambiguous heuristic, used only when nothing specific matched.
    Heuristic,
}

impl fmt::Display for Conjugation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Irregular => "irregular",
            Self::Orthographic => "orthographic",
            Self::Reflexive => "reflexive",
            Self::Enclitic => "enclitic",
            Self::Request => "request",
            Self::Conjunction => "conjunction",
            Self::LightVerb => "light-verb",
            Self::Polite => "polite",
            Self::Past => "past",
            Self::Progressive => "progressive",
            Self::Gerund => "gerund",
            Self::Participle => "participle",
            Self::Connective => "connective",
            Self::Imperative => "imperative",
            Self::Infinitive => "infinitive",
            Self::Nominalized => "nominalized",
            Self::Heuristic => "heuristic",
        };
        write!(f, "{name}")
    }
}

/// What a normalizer removed on its way to the stem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationMetadata {
    /// Affixes stripped, outermost first.
    pub removed_suffixes: Vec<String>,
    /// The category of the rule that fired, if any did.
    pub conjugation_type: Option<Conjugation>,
}

/// The result of normalizing one word.
///
/// `confidence == 1.0` together with `stem == word` means the word was
/// already in canonical form. That is a fixed point, never a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub stem: String,
    pub confidence: f64,
    pub metadata: NormalizationMetadata,
}

impl NormalizationResult {
    /// The word is returned as-is.
    pub fn unchanged(word: &str) -> Self {
        NormalizationResult {
            stem: word.to_string(),
            confidence: 1.0,
            metadata: NormalizationMetadata::default(),
        }
    }

    pub(crate) fn changed(
        stem: impl Into<String>,
        confidence: f64,
        removed: Vec<String>,
        conjugation: Conjugation,
    ) -> Self {
        NormalizationResult {
            stem: stem.into(),
            confidence: confidence.clamp(0.0, 1.0),
            metadata: NormalizationMetadata {
                removed_suffixes: removed,
                conjugation_type: Some(conjugation),
            },
        }
    }

    /// Fold a further reduction of this result's stem into it: `inner`'s
    /// stem, the weaker confidence, and both sets of removed affixes, outer
    /// first. The outermost category is kept.
    pub(crate) fn then(mut self, inner: NormalizationResult) -> Self {
        self.stem = inner.stem;
        self.confidence = self.confidence.min(inner.confidence);
        self.metadata
            .removed_suffixes
            .extend(inner.metadata.removed_suffixes);
        self
    }

    /// True when no rule fired.
    pub fn is_unchanged(&self) -> bool {
        self.metadata.conjugation_type.is_none()
    }
}

impl fmt::Display for NormalizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.metadata.conjugation_type {
            Some(kind) => write!(f, "{} ({kind}, conf={:.2})", self.stem, self.confidence),
            None => write!(f, "{} (canonical)", self.stem),
        }
    }
}
