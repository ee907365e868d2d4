//! Schema-driven derivation of surface syntax.
//!
//! Given a command schema and a language profile, [`derive`] works out the
//! order in which the command's roles appear in that language and the
//! marker each one takes. [`render`] uses the same derivation to turn a
//! [`SemanticNode`] back into text, and [`crate::generate`] uses it to build
//! patterns, so parsing and generation cannot disagree.
//!
//! Marker resolution, first hit wins:
//!
//! ```text
//! render_override[lang]   (may be "", meaning no marker)
//! marker_override[lang]
//! profile.role_markers[role].primary
//! ""
//! ```

use serde::Serialize;

use crate::profile::{LanguageProfile, VerbPosition, WordOrder};
use crate::role::{MarkerPosition, SemanticRole, ValueType};
use crate::schema::{CommandSchema, RoleDefinition};
use crate::sentence::SemanticNode;

/// One role of a command as it surfaces in a particular language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRole {
    pub name: String,
    pub role: SemanticRole,
    /// The marker used when rendering; empty for an unmarked role.
    pub marker: String,
    /// Other marker forms accepted when parsing.
    pub alternatives: Vec<String>,
    pub position: MarkerPosition,
    pub required: bool,
    pub expected_types: Vec<ValueType>,
}

/// The roles of `schema` in `profile`'s surface order, with their markers.
pub fn derive(schema: &CommandSchema, profile: &LanguageProfile) -> Vec<DerivedRole> {
    let mut roles: Vec<&RoleDefinition> = schema.roles.iter().collect();
    roles.sort_by_key(|role| position(role, profile.word_order));
    roles
        .into_iter()
        .map(|role| derive_role(role, profile))
        .collect()
}

fn position(role: &RoleDefinition, order: WordOrder) -> u8 {
    match order {
        WordOrder::Svo | WordOrder::V2 => role.svo_position,
        WordOrder::Sov => role.sov_position,
        WordOrder::Vso => role.vso_position.unwrap_or(role.svo_position),
    }
}

fn derive_role(role: &RoleDefinition, profile: &LanguageProfile) -> DerivedRole {
    let lang = profile.code.as_str();
    let default = profile.role_marker(role.role);
    let marker = role
        .render_override
        .get(lang)
        .or_else(|| role.marker_override.get(lang))
        .cloned()
        .or_else(|| default.map(|m| m.primary.clone()))
        .unwrap_or_default();

    let mut alternatives: Vec<String> = Vec::new();
    let candidates = role
        .marker_override
        .get(lang)
        .map(String::as_str)
        .into_iter()
        .chain(default.into_iter().flat_map(|m| m.forms()));
    for candidate in candidates {
        if !candidate.is_empty()
            && candidate != marker
            && !alternatives.iter().any(|a| a == candidate)
        {
            alternatives.push(candidate.to_string());
        }
    }

    DerivedRole {
        name: role.name.clone(),
        role: role.role,
        marker,
        alternatives,
        position: profile.marker_position_for(role.role),
        required: role.required,
        expected_types: role.expected_types.clone(),
    }
}

/// Surface text for `node` in `profile`'s language. Roles absent from the
/// node are left out.
pub fn render(node: &SemanticNode, schema: &CommandSchema, profile: &LanguageProfile) -> String {
    let verb = profile
        .keyword_for(&node.action)
        .map_or(node.action.as_str(), |k| k.primary.as_str());

    let roles = derive(schema, profile);
    let mut words: Vec<&str> = Vec::new();
    for role in &roles {
        let Some(value) = node.role(&role.name) else {
            continue;
        };
        let marker = (!role.marker.is_empty()).then_some(role.marker.as_str());
        match (marker, role.position) {
            (None, _) => words.push(value),
            (Some(marker), MarkerPosition::Before) => words.extend([marker, value]),
            (Some(marker), MarkerPosition::After) => words.extend([value, marker]),
        }
    }

    match profile.verb.position {
        VerbPosition::Start | VerbPosition::Second => words.insert(0, verb),
        VerbPosition::End => words.push(verb),
    }
    words.join(" ")
}
