//! Structural matching of a token stream against a language's patterns.
//!
//! Each template is expanded into its linear alternatives (an optional group
//! is first tried included, then skipped) and every alternative is matched
//! against the whole token stream with backtracking over the length of
//! expression roles. The first pattern, in priority order, with an
//! alternative that consumes every token and binds every required role
//! wins. There is no scoring across patterns.

use std::cmp::Reverse;
use std::ops::Range;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::pattern::{Extraction, LanguagePattern, TokenSpec};
use crate::role::{MarkerPosition, ValueType};
use crate::schema::CommandSchema;
use crate::score::{self, Confidence};
use crate::token::{Token, TokenKind};

/// A successful structural match.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'p> {
    pub pattern: &'p LanguagePattern,
    /// Role name → token index range.
    pub bindings: IndexMap<String, Range<usize>>,
    pub confidence: Confidence,
}

/// One leaf of a linearized template, with its pre-order index in the
/// original template.
#[derive(Debug, Clone, Copy)]
struct Leaf<'p> {
    spec: &'p TokenSpec,
    index: usize,
}

/// A role leaf bound to a token range.
#[derive(Debug, Clone)]
struct Slot<'p> {
    role: &'p str,
    index: usize,
    range: Range<usize>,
}

pub struct PatternMatcher<'a> {
    schemas: &'a IndexMap<String, CommandSchema>,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(schemas: &'a IndexMap<String, CommandSchema>) -> Self {
        PatternMatcher { schemas }
    }

    /// The highest-priority pattern that matches `tokens`. Patterns of equal
    /// priority are tried in the order given.
    pub fn best<'p>(
        &self,
        tokens: &[Token],
        patterns: impl IntoIterator<Item = &'p LanguagePattern>,
    ) -> Option<Match<'p>> {
        let tokens = strip_trailing_punctuation(tokens);
        if tokens.is_empty() {
            return None;
        }
        let mut patterns: Vec<&'p LanguagePattern> = patterns.into_iter().collect();
        patterns.sort_by_key(|pattern| Reverse(pattern.priority));
        let found = patterns
            .into_iter()
            .find_map(|pattern| self.match_pattern(tokens, pattern));
        if let Some(found) = &found {
            debug!(
                pattern = %found.pattern.id,
                priority = found.pattern.priority,
                confidence = %found.confidence,
                "matched"
            );
        }
        found
    }

    /// Match one pattern against the whole token stream.
    pub fn match_pattern<'p>(
        &self,
        tokens: &[Token],
        pattern: &'p LanguagePattern,
    ) -> Option<Match<'p>> {
        let schema = self.schemas.get(&pattern.command)?;
        let tokens = strip_trailing_punctuation(tokens);
        for leaves in linearize(&pattern.template, &mut 0) {
            let mut slots = Vec::new();
            if !self.bind(schema, tokens, &leaves, 0, &mut slots) {
                continue;
            }
            let bindings = extract(pattern, tokens, &slots);
            if schema
                .required_roles()
                .any(|role| !bindings.contains_key(&role.name))
            {
                trace!(pattern = %pattern.id, "required role unbound");
                continue;
            }
            let confidence = score::combine(tokens.iter().map(|t| t.confidence));
            return Some(Match {
                pattern,
                bindings,
                confidence,
            });
        }
        None
    }

    /// Match `leaves` against `tokens[pos..]`, consuming every token.
    fn bind<'p>(
        &self,
        schema: &CommandSchema,
        tokens: &[Token],
        leaves: &[Leaf<'p>],
        pos: usize,
        slots: &mut Vec<Slot<'p>>,
    ) -> bool {
        let Some((leaf, rest)) = leaves.split_first() else {
            return pos == tokens.len();
        };
        match leaf.spec {
            TokenSpec::Literal {
                value,
                alternatives,
            } => tokens.get(pos).is_some_and(|token| {
                literal_matches(token, value, alternatives)
                    && self.bind(schema, tokens, rest, pos + 1, slots)
            }),
            TokenSpec::Role {
                role,
                expected_types,
            } => {
                let types = if expected_types.is_empty() {
                    schema
                        .role(role)
                        .map_or(&[][..], |r| r.expected_types.as_slice())
                } else {
                    expected_types.as_slice()
                };
                let longest = if types.contains(&ValueType::Expression) {
                    expression_len(tokens, pos, rest)
                } else {
                    tokens
                        .get(pos)
                        .filter(|token| types.iter().any(|ty| ty.accepts(token.kind)))
                        .map_or(0, |_| 1)
                };
                for len in (1..=longest).rev() {
                    slots.push(Slot {
                        role,
                        index: leaf.index,
                        range: pos..pos + len,
                    });
                    if self.bind(schema, tokens, rest, pos + len, slots) {
                        return true;
                    }
                    slots.pop();
                }
                false
            }
            // Groups never survive linearization.
            TokenSpec::Group { .. } => false,
        }
    }
}

fn literal_matches(token: &Token, value: &str, alternatives: &[String]) -> bool {
    token.kind != TokenKind::Punctuation
        && (token.matches_text(value) || alternatives.iter().any(|alt| token.matches_text(alt)))
}

/// The longest run of value tokens at `pos` that stops before any token a
/// later literal would match.
fn expression_len(tokens: &[Token], pos: usize, rest: &[Leaf<'_>]) -> usize {
    tokens[pos.min(tokens.len())..]
        .iter()
        .take_while(|token| {
            token.is_value()
                && !rest.iter().any(|leaf| match leaf.spec {
                    TokenSpec::Literal {
                        value,
                        alternatives,
                    } => literal_matches(token, value, alternatives),
                    _ => false,
                })
        })
        .count()
}

/// Expand optional groups into every linear alternative, included before
/// skipped, numbering leaves in pre-order.
fn linearize<'p>(specs: &'p [TokenSpec], next: &mut usize) -> Vec<Vec<Leaf<'p>>> {
    let mut alternatives: Vec<Vec<Leaf<'p>>> = vec![Vec::new()];
    for spec in specs {
        match spec {
            TokenSpec::Group { optional, tokens } => {
                let inner = linearize(tokens, next);
                let mut expanded = Vec::new();
                for prefix in &alternatives {
                    for sub in &inner {
                        let mut joined = prefix.clone();
                        joined.extend(sub.iter().copied());
                        expanded.push(joined);
                    }
                    if *optional {
                        expanded.push(prefix.clone());
                    }
                }
                alternatives = expanded;
            }
            _ => {
                let leaf = Leaf {
                    spec,
                    index: *next,
                };
                *next += 1;
                for alternative in &mut alternatives {
                    alternative.push(leaf);
                }
            }
        }
    }
    alternatives
}

/// Role bindings from the matched slots, then refined by the pattern's
/// extraction rules.
fn extract(
    pattern: &LanguagePattern,
    tokens: &[Token],
    slots: &[Slot<'_>],
) -> IndexMap<String, Range<usize>> {
    let mut bindings = IndexMap::new();
    for slot in slots {
        bindings
            .entry(slot.role.to_string())
            .or_insert_with(|| slot.range.clone());
    }
    for (role, extraction) in &pattern.extraction {
        let range = match extraction {
            Extraction::Position(index) => slots
                .iter()
                .find(|slot| slot.index == *index)
                .map(|slot| slot.range.clone()),
            Extraction::Marker {
                marker,
                alternatives,
                position,
            } => tokens
                .iter()
                .enumerate()
                .filter(|(_, token)| literal_matches(token, marker, alternatives))
                .find_map(|(m, _)| {
                    slots
                        .iter()
                        .find(|slot| match position {
                            MarkerPosition::Before => slot.range.start == m + 1,
                            MarkerPosition::After => slot.range.end == m,
                        })
                        .map(|slot| slot.range.clone())
                }),
        };
        if let Some(range) = range {
            bindings.insert(role.clone(), range);
        }
    }
    bindings
}

fn strip_trailing_punctuation(tokens: &[Token]) -> &[Token] {
    let end = tokens
        .iter()
        .rposition(|t| t.kind != TokenKind::Punctuation)
        .map_or(0, |i| i + 1);
    &tokens[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::SemanticRole;
    use crate::schema::{RoleDefinition, SchemaBuilder};
    use crate::testing;
    use pretty_assertions::assert_eq;

    fn tokens(code: &str, text: &str) -> Vec<Token> {
        let (profile, lexicon, normalizer) = testing::language(code);
        crate::tokenizer::tokenize(text, &profile, &lexicon, normalizer.as_deref()).collect()
    }

    fn add_en() -> LanguagePattern {
        LanguagePattern::new("add-en", "en", "add", 100)
            .token(TokenSpec::literal("add"))
            .token(TokenSpec::role("item"))
            .token(TokenSpec::optional(vec![
                TokenSpec::literal("to"),
                TokenSpec::role("list"),
            ]))
    }

    fn values<'t>(tokens: &'t [Token], found: &Match<'_>) -> Vec<(String, Vec<&'t str>)> {
        found
            .bindings
            .iter()
            .map(|(role, range)| {
                let words = tokens[range.clone()].iter().map(|t| t.value.as_str()).collect();
                (role.clone(), words)
            })
            .collect()
    }

    #[test]
    fn optional_group_binds_when_present() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let tokens = tokens("en", "add milk to groceries");
        let pattern = add_en();
        let found = matcher.match_pattern(&tokens, &pattern).unwrap();
        assert_eq!(
            values(&tokens, &found),
            vec![
                ("item".to_string(), vec!["milk"]),
                ("list".to_string(), vec!["groceries"]),
            ]
        );
        assert_eq!(found.confidence, Confidence::CERTAIN);
    }

    #[test]
    fn optional_group_is_skipped_when_absent() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let tokens = tokens("en", "add milk!");
        let pattern = add_en();
        let found = matcher.match_pattern(&tokens, &pattern).unwrap();
        assert_eq!(found.bindings.len(), 1);
        assert_eq!(found.bindings["item"], 1..2);
    }

    #[test]
    fn leftover_tokens_fail_the_match() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let tokens = tokens("en", "add milk to groceries please");
        assert!(matcher.match_pattern(&tokens, &add_en()).is_none());
    }

    #[test]
    fn expression_roles_stop_at_the_next_literal() {
        let mut schemas = testing::schemas();
        let log = SchemaBuilder::new("log", "output")
            .role(
                RoleDefinition::new("value", SemanticRole::Patient)
                    .required()
                    .types(&[ValueType::Expression]),
            )
            .role(RoleDefinition::new("target", SemanticRole::Destination))
            .build();
        schemas.insert(log.action.clone(), log);
        let matcher = PatternMatcher::new(&schemas);
        let pattern = LanguagePattern::new("log-en", "en", "log", 100)
            .token(TokenSpec::literal("log"))
            .token(TokenSpec::role("value"))
            .token(TokenSpec::optional(vec![
                TokenSpec::literal("to"),
                TokenSpec::role("target"),
            ]));
        let tokens = tokens("en", "log total price to #out");
        let found = matcher.match_pattern(&tokens, &pattern).unwrap();
        assert_eq!(found.bindings["value"], 1..3);
        assert_eq!(found.bindings["target"], 4..5);
    }

    #[test]
    fn marker_extraction_takes_the_adjacent_span() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        // Object-first variant: both roles are bound positionally, then the
        // marker rule re-resolves `list`.
        let pattern = LanguagePattern::new("add-ja", "ja", "add", 100)
            .token(TokenSpec::role("list"))
            .token(TokenSpec::literal("に"))
            .token(TokenSpec::role("item"))
            .token(TokenSpec::literal("を"))
            .token(TokenSpec::literal("追加"))
            .extract(
                "list",
                Extraction::Marker {
                    marker: "に".to_string(),
                    alternatives: Vec::new(),
                    position: MarkerPosition::After,
                },
            )
            .extract("item", Extraction::Position(2));
        let tokens = tokens("ja", "リスト に ミルク を 追加");
        let found = matcher.match_pattern(&tokens, &pattern).unwrap();
        assert_eq!(found.bindings["list"], 0..1);
        assert_eq!(found.bindings["item"], 2..3);
    }

    #[test]
    fn missing_required_role_rejects_the_pattern() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let pattern = LanguagePattern::new("add-bare", "en", "add", 100)
            .token(TokenSpec::literal("add"))
            .token(TokenSpec::optional(vec![TokenSpec::role("item")]));
        let tokens = tokens("en", "add");
        assert!(matcher.match_pattern(&tokens, &pattern).is_none());
    }

    #[test]
    fn higher_priority_wins_when_both_match() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let high = LanguagePattern {
            id: "high".to_string(),
            priority: 10,
            ..add_en()
        };
        let low = LanguagePattern {
            id: "low".to_string(),
            priority: 5,
            ..add_en()
        };
        let tokens = tokens("en", "add milk");
        let found = matcher.best(&tokens, [&high, &low]).unwrap();
        assert_eq!(found.pattern.id, "high");
    }

    #[test]
    fn priority_decides_whatever_the_argument_order() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let high = LanguagePattern {
            id: "high".to_string(),
            priority: 10,
            ..add_en()
        };
        let low = LanguagePattern {
            id: "low".to_string(),
            priority: 5,
            ..add_en()
        };
        let tokens = tokens("en", "add milk");
        let found = matcher.best(&tokens, [&low, &high]).unwrap();
        assert_eq!(found.pattern.id, "high");
    }

    #[test]
    fn equal_priorities_keep_the_given_order() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let first = LanguagePattern {
            id: "first".to_string(),
            ..add_en()
        };
        let second = LanguagePattern {
            id: "second".to_string(),
            ..add_en()
        };
        let tokens = tokens("en", "add milk");
        let found = matcher.best(&tokens, [&first, &second]).unwrap();
        assert_eq!(found.pattern.id, "first");
    }

    #[test]
    fn normalized_tokens_lower_the_confidence() {
        let schemas = testing::schemas();
        let matcher = PatternMatcher::new(&schemas);
        let pattern = LanguagePattern::new("add-ja", "ja", "add", 100)
            .token(TokenSpec::role("item"))
            .token(TokenSpec::literal("を"))
            .token(TokenSpec::literal("追加"));
        let tokens = tokens("ja", "ミルクを追加して");
        let found = matcher.match_pattern(&tokens, &pattern).unwrap();
        assert!(found.confidence < Confidence::CERTAIN);
        assert_eq!(found.confidence, Confidence::new(tokens[2].confidence));
    }
}
