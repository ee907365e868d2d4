//! Role segments: the token spans a match bound to each role.
//!
//! A segment's text is sliced verbatim out of the input using the byte
//! ranges of its first and last tokens, so `"hello world"` keeps its quotes
//! and `#list .item` keeps its spacing.

use std::ops::Range;

use crate::matcher::Match;
use crate::role::ValueType;
use crate::token::{Token, TokenKind};

/// A span of tokens assigned to a role.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// The role name within its command.
    pub role: String,
    /// The input text the segment covers.
    pub text: String,
    /// Token indices included in this segment.
    pub token_range: Range<usize>,
    pub value_type: ValueType,
}

/// Segments for every role bound by `found`, in binding order.
pub fn segment_tokens(input: &str, tokens: &[Token], found: &Match<'_>) -> Vec<Segment> {
    found
        .bindings
        .iter()
        .filter_map(|(role, range)| {
            let span = tokens.get(range.clone())?;
            let (first, last) = (span.first()?, span.last()?);
            let text = input.get(first.range.start..last.range.end)?;
            Some(Segment {
                role: role.clone(),
                text: text.to_string(),
                token_range: range.clone(),
                value_type: value_type(span),
            })
        })
        .collect()
}

fn value_type(span: &[Token]) -> ValueType {
    match span {
        [token] => match token.kind {
            TokenKind::Selector => ValueType::Selector,
            TokenKind::Identifier => ValueType::Reference,
            _ => ValueType::Literal,
        },
        _ => ValueType::Expression,
    }
}
