//! Tokens produced by the [`crate::tokenizer`].
//!
//! A token keeps its verbatim surface text and its byte range into the
//! input, so role values can be sliced out of the original string exactly
//! as the user wrote them. Recognition adds the dictionary form
//! (`normalized`) and what the dictionary entry stands for (`canonical`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A single token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text, exactly as written.
    pub value: String,
    /// The dictionary form, when the token was recognized through
    /// normalization (`追加して` → `追加`).
    pub normalized: Option<String>,
    /// For keywords the action name, for markers the role tag.
    pub canonical: Option<String>,
    pub kind: TokenKind,
    pub language: String,
    /// Byte offsets into the input.
    pub range: Range<usize>,
    /// 1.0 unless recognition needed a normalizer.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A command word from the language's keyword dictionary.
    Keyword,
    /// `#id`, `.class`, `@attr`, `*prop`, `<tag/>`.
    Selector,
    /// A bare word that is not in the dictionary.
    Identifier,
    /// Quoted or bracketed text, numbers, durations, paths and URLs.
    Literal,
    /// A role marker or particle.
    Marker,
    Punctuation,
    /// Anything else, including unterminated quotes.
    Unknown,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        range: Range<usize>,
        language: impl Into<String>,
    ) -> Self {
        Token {
            value: value.into(),
            normalized: None,
            canonical: None,
            kind,
            language: language.into(),
            range,
            confidence: 1.0,
        }
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    pub fn with_normalized(mut self, normalized: impl Into<String>, confidence: f64) -> Self {
        self.normalized = Some(normalized.into());
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Whether this token can fill a role at all.
    pub fn is_value(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::Literal | TokenKind::Selector
        )
    }

    /// Case-insensitive comparison against the surface text, the dictionary
    /// form, and (for keywords) the action name.
    pub fn matches_text(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.value.to_lowercase() == text
            || self.normalized.as_deref().is_some_and(|n| n.to_lowercase() == text)
            || (self.kind == TokenKind::Keyword && self.canonical.as_deref() == Some(text.as_str()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.normalized {
            Some(normalized) => write!(f, "{}({})", self.value, normalized),
            None => write!(f, "{}", self.value),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Selector => "selector",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "literal",
            TokenKind::Marker => "marker",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_text_checks_every_form() {
        let token = Token::new(TokenKind::Keyword, "Agrega", 0..6, "es")
            .with_normalized("agregar", 0.75)
            .with_canonical("add");
        assert!(token.matches_text("agrega"));
        assert!(token.matches_text("AGREGAR"));
        assert!(token.matches_text("add"));
        assert!(!token.matches_text("poner"));
        assert_eq!(token.confidence, 0.75);
    }

    #[test]
    fn marker_canonical_is_not_matched_as_text() {
        let token = Token::new(TokenKind::Marker, "to", 4..6, "en").with_canonical("destination");
        assert!(!token.matches_text("destination"));
        assert!(!token.is_value());
    }

    #[test]
    fn display_shows_dictionary_form() {
        let token = Token::new(TokenKind::Keyword, "追加して", 0..12, "ja").with_normalized("追加", 0.82);
        assert_eq!(token.to_string(), "追加して(追加)");
    }
}
