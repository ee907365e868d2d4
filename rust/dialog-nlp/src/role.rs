//! Semantic roles and the markers that signal them.
//!
//! Roles abstract away language-specific syntax (prepositions, case
//! particles, word order) into universal categories. `add milk to list`,
//! `ミルクをリストに追加` and `agregar leche a lista` all bind `milk` to
//! [`SemanticRole::Patient`] and `list` to [`SemanticRole::Destination`].
//! Each language says how it marks a role with a [`RoleMarker`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::token::TokenKind;

/// The semantic role of an argument in a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    /// The thing acted upon. Usually unmarked in prepositional languages
    /// (`add milk`), marked by case in others (`ミルクを`).
    Patient,
    /// Where the patient ends up: `to`, `into`, `に`.
    Destination,
    /// Where something comes from: `from`, `から`.
    Source,
    /// The state or value to reach: `set x to 5`.
    Goal,
    /// How something is done: `show x with fade`.
    Manner,
    /// How much: `increment x by 2`.
    Quantity,
    /// How long: `wait 2s`.
    Duration,
    /// The means or format used: `fetch /api as json`.
    Method,
    /// When the command applies: `show x when visible`.
    Condition,
}

impl SemanticRole {
    pub const ALL: [SemanticRole; 9] = [
        SemanticRole::Patient,
        SemanticRole::Destination,
        SemanticRole::Source,
        SemanticRole::Goal,
        SemanticRole::Manner,
        SemanticRole::Quantity,
        SemanticRole::Duration,
        SemanticRole::Method,
        SemanticRole::Condition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Destination => "destination",
            Self::Source => "source",
            Self::Goal => "goal",
            Self::Manner => "manner",
            Self::Quantity => "quantity",
            Self::Duration => "duration",
            Self::Method => "method",
            Self::Condition => "condition",
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of value a role accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// A quoted string, number, duration, path or bare word.
    Literal,
    /// A CSS-style selector: `#id`, `.class`, `@attr`, `*prop`, `<tag/>`.
    Selector,
    /// A bare identifier naming something in scope.
    Reference,
    /// A run of value tokens, read up to the next marker or literal.
    Expression,
}

impl ValueType {
    /// Whether a token of `kind` can fill a role of this type.
    ///
    /// Keywords, markers, punctuation and unknown spans never fill a role.
    pub fn accepts(&self, kind: TokenKind) -> bool {
        match self {
            ValueType::Literal => matches!(kind, TokenKind::Literal | TokenKind::Identifier),
            ValueType::Selector => kind == TokenKind::Selector,
            ValueType::Reference => kind == TokenKind::Identifier,
            ValueType::Expression => matches!(
                kind,
                TokenKind::Identifier | TokenKind::Literal | TokenKind::Selector
            ),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Literal => write!(f, "literal"),
            ValueType::Selector => write!(f, "selector"),
            ValueType::Reference => write!(f, "reference"),
            ValueType::Expression => write!(f, "expression"),
        }
    }
}

/// Which side of its role value a marker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPosition {
    /// A preposition: `to list`.
    #[default]
    Before,
    /// A postposition or case particle: `リスト に`.
    After,
}

/// How a language marks one semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMarker {
    pub primary: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub position: MarkerPosition,
}

impl RoleMarker {
    /// A preposition.
    pub fn before(primary: impl Into<String>) -> Self {
        RoleMarker {
            primary: primary.into(),
            alternatives: Vec::new(),
            position: MarkerPosition::Before,
        }
    }

    /// A postposition or particle.
    pub fn after(primary: impl Into<String>) -> Self {
        RoleMarker {
            position: MarkerPosition::After,
            ..RoleMarker::before(primary)
        }
    }

    pub fn alt(mut self, alternative: impl Into<String>) -> Self {
        self.alternatives.push(alternative.into());
        self
    }

    /// The primary form followed by every alternative.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}
