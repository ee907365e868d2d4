//! Pattern generation and validation from schemas.
//!
//! Every (schema, profile) pair with a keyword for the command yields a
//! canonical pattern, so a language gets full command coverage from its
//! profile alone. SOV languages, where case particles rather than position
//! identify roles, also get every reordering of the roles.
//!
//! The same derivation checks hand-authored patterns: anything a pattern
//! disagrees with is reported as [`Drift`], which is informational.

use std::fmt;

use serde::Serialize;

use crate::derive::{DerivedRole, derive};
use crate::error::RegistryError;
use crate::pattern::{Extraction, LanguagePattern, TokenSpec};
use crate::profile::{LanguageProfile, VerbPosition, WordOrder};
use crate::role::MarkerPosition;
use crate::schema::CommandSchema;

pub const GENERATED_PRIORITY: i32 = 100;
pub const PERMUTATION_PRIORITY: i32 = 90;
/// Schemas with more roles than this get no reordered patterns.
const MAX_PERMUTED_ROLES: usize = 3;

/// Patterns for `schema` in `profile`'s language, best first. Empty when
/// the language has no keyword for the command.
pub fn generate_patterns(schema: &CommandSchema, profile: &LanguageProfile) -> Vec<LanguagePattern> {
    let Some(keyword) = profile.keyword_for(&schema.action) else {
        return Vec::new();
    };
    let verb = TokenSpec::literal_with(keyword.primary.clone(), keyword.alternatives.clone());
    let roles = derive(schema, profile);
    let id = format!("{}-{}-generated", schema.action, profile.code);

    let mut patterns = vec![assemble(
        LanguagePattern::new(&id, &profile.code, &schema.action, GENERATED_PRIORITY),
        &roles,
        &verb,
        profile.verb.position,
    )];

    if profile.word_order == WordOrder::Sov && (2..=MAX_PERMUTED_ROLES).contains(&roles.len()) {
        let orders = permutations(roles.len());
        for (k, order) in orders.iter().skip(1).enumerate() {
            let reordered: Vec<DerivedRole> = order.iter().map(|&i| roles[i].clone()).collect();
            let priority = PERMUTATION_PRIORITY - i32::try_from(k).unwrap_or(0);
            patterns.push(assemble(
                LanguagePattern::new(
                    format!("{id}-{}", k + 1),
                    &profile.code,
                    &schema.action,
                    priority,
                ),
                &reordered,
                &verb,
                profile.verb.position,
            ));
        }
    }
    patterns
}

fn assemble(
    mut pattern: LanguagePattern,
    roles: &[DerivedRole],
    verb: &TokenSpec,
    position: VerbPosition,
) -> LanguagePattern {
    let verb_first = matches!(position, VerbPosition::Start | VerbPosition::Second);
    let mut leaves = 0;
    if verb_first {
        pattern.template.push(verb.clone());
        leaves += 1;
    }
    for role in roles {
        let (unit, offset) = role_unit(role);
        let extraction = if role.marker.is_empty() {
            Extraction::Position(leaves + offset)
        } else {
            Extraction::Marker {
                marker: role.marker.clone(),
                alternatives: role.alternatives.clone(),
                position: role.position,
            }
        };
        leaves += unit.iter().map(TokenSpec::leaves).sum::<usize>();
        if role.required {
            pattern.template.extend(unit);
        } else {
            pattern.template.push(TokenSpec::optional(unit));
        }
        pattern.extraction.insert(role.name.clone(), extraction);
    }
    if !verb_first {
        pattern.template.push(verb.clone());
    }
    pattern
}

/// The specs for one role and the leaf offset of the role itself within
/// them.
fn role_unit(role: &DerivedRole) -> (Vec<TokenSpec>, usize) {
    let value = TokenSpec::role(role.name.clone());
    let marker = if !role.marker.is_empty() {
        Some(TokenSpec::literal_with(role.marker.clone(), role.alternatives.clone()))
    } else if let Some((first, rest)) = role.alternatives.split_first() {
        Some(TokenSpec::optional(vec![TokenSpec::literal_with(
            first.clone(),
            rest.to_vec(),
        )]))
    } else {
        None
    };
    match (marker, role.position) {
        (None, _) => (vec![value], 0),
        (Some(marker), MarkerPosition::Before) => (vec![marker, value], 1),
        (Some(marker), MarkerPosition::After) => (vec![value, marker], 0),
    }
}

/// All orderings of `0..n`, identity first.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(current: &mut Vec<usize>, n: usize, out: &mut Vec<Vec<usize>>) {
        if current.len() == n {
            out.push(current.clone());
            return;
        }
        for i in 0..n {
            if !current.contains(&i) {
                current.push(i);
                extend(current, n, out);
                current.pop();
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(n), n, &mut out);
    out
}

/// A difference between a pattern and what its schema derives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Drift {
    RoleOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },
    MarkerDrift {
        role: String,
        expected: String,
        found: String,
    },
    MissingRequired {
        role: String,
    },
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::RoleOrder { expected, found } => write!(
                f,
                "roles in order [{}], expected [{}]",
                found.join(", "),
                expected.join(", ")
            ),
            Drift::MarkerDrift {
                role,
                expected,
                found,
            } => write!(f, "role '{role}' marked by '{found}', expected '{expected}'"),
            Drift::MissingRequired { role } => write!(f, "required role '{role}' is never bound"),
        }
    }
}

#[derive(Debug)]
pub struct PatternReport {
    pub pattern: String,
    pub errors: Vec<RegistryError>,
    pub drift: Vec<Drift>,
}

impl PatternReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_drift(&self) -> bool {
        !self.drift.is_empty()
    }
}

/// Check `pattern` against `schema` and the derivation for `profile`.
pub fn validate_pattern(
    pattern: &LanguagePattern,
    schema: &CommandSchema,
    profile: &LanguageProfile,
) -> PatternReport {
    let mut report = PatternReport {
        pattern: pattern.id.clone(),
        errors: Vec::new(),
        drift: Vec::new(),
    };

    let roles = pattern.roles();
    for role in &roles {
        if !schema.has_role(role) {
            report.errors.push(RegistryError::SchemaMismatch {
                pattern: pattern.id.clone(),
                command: schema.action.clone(),
                role: role.to_string(),
            });
        }
    }
    for required in schema.required_roles() {
        if !roles.contains(&required.name.as_str()) {
            report.drift.push(Drift::MissingRequired {
                role: required.name.clone(),
            });
        }
    }

    let derived = derive(schema, profile);
    let found: Vec<String> = pattern
        .role_order()
        .into_iter()
        .filter(|role| schema.has_role(role))
        .map(str::to_string)
        .collect();
    let expected: Vec<String> = derived
        .iter()
        .filter(|role| found.contains(&role.name))
        .map(|role| role.name.clone())
        .collect();
    // SOV languages order roles freely.
    if profile.word_order != WordOrder::Sov && found != expected {
        report.drift.push(Drift::RoleOrder { expected, found });
    }

    let leaves = flatten(&pattern.template);
    for role in derived.iter().filter(|r| !r.marker.is_empty()) {
        let Some(at) = leaves
            .iter()
            .position(|leaf| matches!(leaf, TokenSpec::Role { role: name, .. } if *name == role.name))
        else {
            continue;
        };
        let neighbour = match role.position {
            MarkerPosition::Before => at.checked_sub(1).and_then(|i| leaves.get(i)),
            MarkerPosition::After => leaves.get(at + 1),
        };
        let forms = neighbour.map(|leaf| leaf.literal_forms()).unwrap_or_default();
        let accepted = std::iter::once(&role.marker).chain(&role.alternatives);
        if !accepted.into_iter().any(|m| forms.contains(&m.as_str())) {
            report.drift.push(Drift::MarkerDrift {
                role: role.name.clone(),
                expected: role.marker.clone(),
                found: forms.first().map_or_else(String::new, |f| f.to_string()),
            });
        }
    }

    report
}

/// Leaves of a template in pre-order.
fn flatten(specs: &[TokenSpec]) -> Vec<&TokenSpec> {
    specs
        .iter()
        .flat_map(|spec| match spec {
            TokenSpec::Group { tokens, .. } => flatten(tokens),
            leaf => vec![leaf],
        })
        .collect()
}
