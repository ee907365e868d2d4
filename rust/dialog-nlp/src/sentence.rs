//! The canonical parse result.
//!
//! A [`SemanticNode`] is language-agnostic: `add milk to groceries`,
//! `ミルク を 追加` and `agregar leche a compras` all produce an `add` node.
//! It serializes to plain JSON for typed consumers, with roles in schema
//! order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::ValueType;
use crate::score::Confidence;

/// One role's value, as written in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleValue {
    pub text: String,
    pub value_type: ValueType,
}

impl RoleValue {
    pub fn new(text: impl Into<String>, value_type: ValueType) -> Self {
        RoleValue {
            text: text.into(),
            value_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticNode {
    /// The command's canonical action name.
    pub action: String,
    /// Role name → value.
    pub roles: IndexMap<String, RoleValue>,
    pub confidence: Confidence,
}

impl SemanticNode {
    pub fn new(action: impl Into<String>) -> Self {
        SemanticNode {
            action: action.into(),
            roles: IndexMap::new(),
            confidence: Confidence::CERTAIN,
        }
    }

    pub fn with_role(mut self, name: impl Into<String>, value: RoleValue) -> Self {
        self.roles.insert(name.into(), value);
        self
    }

    /// The text bound to role `name`.
    pub fn role(&self, name: &str) -> Option<&str> {
        self.roles.get(name).map(|v| v.text.as_str())
    }
}

impl fmt::Display for SemanticNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        for (role, value) in &self.roles {
            write!(f, " [{}: {}]", role, value.text)?;
        }
        write!(f, " (confidence: {})", self.confidence)
    }
}
