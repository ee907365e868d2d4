//! Command schemas.
//!
//! A schema is the language-independent description of a command: its
//! canonical action name and the roles it takes. Each role carries one
//! position per word order plus per-language marker overrides, which is
//! everything the [`crate::derive`] step needs to work out a language's
//! surface syntax without a hand-written pattern.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::role::{SemanticRole, ValueType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// The role's name within its command (`item`, `list`).
    pub name: String,
    pub role: SemanticRole,
    pub required: bool,
    pub expected_types: Vec<ValueType>,
    pub svo_position: u8,
    pub sov_position: u8,
    /// Falls back to `svo_position` when absent.
    pub vso_position: Option<u8>,
    /// Language code → marker used instead of the profile's default for
    /// this role, both when rendering and when matching.
    #[serde(default)]
    pub marker_override: IndexMap<String, String>,
    /// Language code → marker used only when rendering. Wins over
    /// `marker_override`; an empty string renders no marker at all.
    #[serde(default)]
    pub render_override: IndexMap<String, String>,
}

impl RoleDefinition {
    /// An optional role accepting literals, selectors and references.
    /// Positions default to declaration order when added to a schema.
    pub fn new(name: impl Into<String>, role: SemanticRole) -> Self {
        RoleDefinition {
            name: name.into(),
            role,
            required: false,
            expected_types: vec![ValueType::Literal, ValueType::Selector, ValueType::Reference],
            svo_position: 0,
            sov_position: 0,
            vso_position: None,
            marker_override: IndexMap::new(),
            render_override: IndexMap::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn types(mut self, types: &[ValueType]) -> Self {
        self.expected_types = types.to_vec();
        self
    }

    pub fn svo(mut self, position: u8) -> Self {
        self.svo_position = position;
        self
    }

    pub fn sov(mut self, position: u8) -> Self {
        self.sov_position = position;
        self
    }

    pub fn vso(mut self, position: u8) -> Self {
        self.vso_position = Some(position);
        self
    }

    pub fn marker(mut self, language: &str, marker: &str) -> Self {
        self.marker_override
            .insert(language.to_string(), marker.to_string());
        self
    }

    pub fn render(mut self, language: &str, marker: &str) -> Self {
        self.render_override
            .insert(language.to_string(), marker.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSchema {
    /// The canonical action name (`add`, `toggle`).
    pub action: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// The role filled when a command has a single bare argument.
    pub primary_role: String,
    pub roles: Vec<RoleDefinition>,
}

impl CommandSchema {
    pub fn role(&self, name: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.role(name).is_some()
    }

    pub fn required_roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter().filter(|r| r.required)
    }

    /// Role names are unique and the primary role is one of them.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, role) in self.roles.iter().enumerate() {
            if self.roles[..i].iter().any(|r| r.name == role.name) {
                return Err(RegistryError::DuplicateRole {
                    action: self.action.clone(),
                    role: role.name.clone(),
                });
            }
        }
        if !self.has_role(&self.primary_role) {
            return Err(RegistryError::InvalidPrimaryRole {
                action: self.action.clone(),
                role: self.primary_role.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing schemas ergonomically.
pub struct SchemaBuilder {
    action: String,
    category: String,
    description: String,
    primary_role: Option<String>,
    roles: Vec<RoleDefinition>,
}

impl SchemaBuilder {
    pub fn new(action: impl Into<String>, category: impl Into<String>) -> Self {
        SchemaBuilder {
            action: action.into(),
            category: category.into(),
            description: String::new(),
            primary_role: None,
            roles: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a role. Unset positions default to declaration order.
    pub fn role(mut self, mut role: RoleDefinition) -> Self {
        let order = u8::try_from(self.roles.len() + 1).unwrap_or(u8::MAX);
        if role.svo_position == 0 {
            role.svo_position = order;
        }
        if role.sov_position == 0 {
            role.sov_position = order;
        }
        self.roles.push(role);
        self
    }

    /// Mark the primary role. Defaults to the first role added.
    pub fn primary(mut self, name: impl Into<String>) -> Self {
        self.primary_role = Some(name.into());
        self
    }

    pub fn build(self) -> CommandSchema {
        let primary_role = self
            .primary_role
            .or_else(|| self.roles.first().map(|r| r.name.clone()))
            .unwrap_or_default();
        CommandSchema {
            action: self.action,
            category: self.category,
            description: self.description,
            primary_role,
            roles: self.roles,
        }
    }
}
