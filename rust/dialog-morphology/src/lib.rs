//! # Dialog Morphology
//!
//! Morphological normalizers that reduce inflected verbs to the dictionary
//! form a command lexicon is written in: `переключи` → `переключить`,
//! `追加してください` → `追加`, `agrégalo` → `agregar`.
//!
//! Every language is a [`Cascade`] over declarative tables, evaluated in the
//! fixed order documented in [`cascade`], with confidences drawn from one
//! [`ConfidenceTable`] per language.
//!
//! ```text
//! word ─▶ irregular ─▶ canonical? ─▶ compound ─▶ fold ─▶ suffix ─▶ fallback ─▶ unchanged
//! ```
//!
//! Normalization is a pure function. A word that is already canonical comes
//! back unchanged with confidence `1.0`.

pub mod arabic;
pub mod cascade;
pub mod confidence;
pub mod german;
pub mod japanese;
pub mod korean;
pub mod result;
pub mod russian;
pub mod script;
pub mod spanish;
pub mod turkish;

pub use cascade::{Affix, Cascade, CascadeBuilder, CompoundRule, SuffixRule};
pub use confidence::ConfidenceTable;
pub use result::{Conjugation, NormalizationMetadata, NormalizationResult};

/// Reduces a word to its dictionary form.
pub trait MorphologicalNormalizer: Send + Sync + std::fmt::Debug {
    /// The language code this normalizer handles.
    fn language(&self) -> &str;

    /// Cheap script and length pre-filter.
    fn is_normalizable(&self, word: &str) -> bool;

    /// Normalize `word`. Never fails; an unrecognized word comes back
    /// unchanged with confidence `1.0`.
    fn normalize(&self, word: &str) -> NormalizationResult;
}

/// Language codes with a built-in normalizer.
pub const LANGUAGES: &[&str] = &["ja", "ko", "es", "ru", "tr", "de", "ar"];

/// The built-in normalizer for `code`, if the language needs one.
pub fn normalizer_for(code: &str) -> Option<Box<dyn MorphologicalNormalizer>> {
    let cascade = match code {
        "ja" => japanese::normalizer(),
        "ko" => korean::normalizer(),
        "es" => spanish::normalizer(),
        "ru" => russian::normalizer(),
        "tr" => turkish::normalizer(),
        "de" => german::normalizer(),
        "ar" => arabic::normalizer(),
        _ => return None,
    };
    Some(Box::new(cascade))
}
