//! Language patterns.
//!
//! A pattern is a template of token specs for one command in one language,
//! plus extraction rules that say where each role's value is found. Patterns
//! are either hand-authored or generated from a schema by
//! [`crate::generate`]; the matcher treats both the same way.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::role::ValueType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TokenSpec {
    /// Matches a token whose text, dictionary form or action equals
    /// `value` or one of `alternatives`.
    Literal {
        value: String,
        #[serde(default)]
        alternatives: Vec<String>,
    },
    /// Captures a role value.
    Role {
        role: String,
        /// Falls back to the schema's types for the role when empty.
        #[serde(default)]
        expected_types: Vec<ValueType>,
    },
    Group {
        #[serde(default)]
        optional: bool,
        tokens: Vec<TokenSpec>,
    },
}

impl TokenSpec {
    pub fn literal(value: impl Into<String>) -> Self {
        TokenSpec::Literal {
            value: value.into(),
            alternatives: Vec::new(),
        }
    }

    pub fn literal_with(value: impl Into<String>, alternatives: Vec<String>) -> Self {
        TokenSpec::Literal {
            value: value.into(),
            alternatives,
        }
    }

    pub fn role(role: impl Into<String>) -> Self {
        TokenSpec::Role {
            role: role.into(),
            expected_types: Vec::new(),
        }
    }

    pub fn optional(tokens: Vec<TokenSpec>) -> Self {
        TokenSpec::Group {
            optional: true,
            tokens,
        }
    }

    /// Every literal form this spec (and any nested spec) can match.
    pub fn literal_forms(&self) -> Vec<&str> {
        match self {
            TokenSpec::Literal {
                value,
                alternatives,
            } => std::iter::once(value.as_str())
                .chain(alternatives.iter().map(String::as_str))
                .collect(),
            TokenSpec::Role { .. } => Vec::new(),
            TokenSpec::Group { tokens, .. } => {
                tokens.iter().flat_map(TokenSpec::literal_forms).collect()
            }
        }
    }

    /// The number of leaves under this spec, in pre-order.
    pub fn leaves(&self) -> usize {
        match self {
            TokenSpec::Group { tokens, .. } => tokens.iter().map(TokenSpec::leaves).sum(),
            _ => 1,
        }
    }
}

impl fmt::Display for TokenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSpec::Literal {
                value,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{value}")
                } else {
                    write!(f, "{value}|{}", alternatives.join("|"))
                }
            }
            TokenSpec::Role { role, .. } => write!(f, "{{{role}}}"),
            TokenSpec::Group { optional, tokens } => {
                let inner = tokens
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                if *optional {
                    write!(f, "[{inner}]")
                } else {
                    write!(f, "({inner})")
                }
            }
        }
    }
}

/// Where a role's value is found once the template has matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extraction {
    /// The role leaf at this index of the flattened (pre-order) template.
    Position(usize),
    /// The value adjacent to one of these marker forms, on the side given by
    /// `position`.
    Marker {
        marker: String,
        #[serde(default)]
        alternatives: Vec<String>,
        #[serde(default)]
        position: crate::role::MarkerPosition,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePattern {
    pub id: String,
    pub language: String,
    /// The action name of the command this pattern parses.
    pub command: String,
    /// Higher is tried first.
    pub priority: i32,
    pub template: Vec<TokenSpec>,
    #[serde(default)]
    pub extraction: IndexMap<String, Extraction>,
}

impl LanguagePattern {
    pub fn new(
        id: impl Into<String>,
        language: impl Into<String>,
        command: impl Into<String>,
        priority: i32,
    ) -> Self {
        LanguagePattern {
            id: id.into(),
            language: language.into(),
            command: command.into(),
            priority,
            template: Vec::new(),
            extraction: IndexMap::new(),
        }
    }

    pub fn token(mut self, spec: TokenSpec) -> Self {
        self.template.push(spec);
        self
    }

    pub fn extract(mut self, role: impl Into<String>, extraction: Extraction) -> Self {
        self.extraction.insert(role.into(), extraction);
        self
    }

    /// Role names captured anywhere in the template or named by an
    /// extraction rule, in first-seen order.
    pub fn roles(&self) -> Vec<&str> {
        fn collect<'a>(specs: &'a [TokenSpec], out: &mut Vec<&'a str>) {
            for spec in specs {
                match spec {
                    TokenSpec::Role { role, .. } if !out.contains(&role.as_str()) => {
                        out.push(role)
                    }
                    TokenSpec::Group { tokens, .. } => collect(tokens, out),
                    _ => {}
                }
            }
        }
        let mut roles = Vec::new();
        collect(&self.template, &mut roles);
        for role in self.extraction.keys() {
            if !roles.contains(&role.as_str()) {
                roles.push(role);
            }
        }
        roles
    }

    /// Role names in template order, ignoring extraction rules.
    pub fn role_order(&self) -> Vec<&str> {
        fn collect<'a>(specs: &'a [TokenSpec], out: &mut Vec<&'a str>) {
            for spec in specs {
                match spec {
                    TokenSpec::Role { role, .. } => out.push(role),
                    TokenSpec::Group { tokens, .. } => collect(tokens, out),
                    TokenSpec::Literal { .. } => {}
                }
            }
        }
        let mut roles = Vec::new();
        collect(&self.template, &mut roles);
        roles
    }

    /// Every literal form anywhere in the template.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.template.iter().flat_map(TokenSpec::literal_forms)
    }
}

impl fmt::Display for LanguagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self
            .template
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{template}")
    }
}
