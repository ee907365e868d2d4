//! The parser pipeline: from raw text to a canonical [`SemanticNode`], and
//! back out to any registered language.
//!
//! ```text
//! text ─▶ tokenize (profile, lexicon, normalizer)
//!      ─▶ match (patterns, highest priority first)
//!      ─▶ segment (verbatim role text)
//!      ─▶ gate (confidence ≥ threshold)
//!      ─▶ SemanticNode ─▶ render (any language)
//! ```
//!
//! Every stage is a pure function of the input and the frozen [`Registry`],
//! so one `Parser` can serve any number of threads.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::ParserConfig;
use crate::derive;
use crate::input::Input;
use crate::matcher::PatternMatcher;
use crate::registry::Registry;
use crate::score::Confidence;
use crate::segment::segment_tokens;
use crate::sentence::{RoleValue, SemanticNode};
use crate::token::Token;
use crate::tokenizer::tokenize;

/// What happened to one parse, for callers that need more than
/// [`Parser::parse`]'s `Option`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Matched(SemanticNode),
    /// No pattern consumed the input. The ordinary result for foreign or
    /// malformed text.
    NoMatch,
    /// A pattern matched, but normalization left too little confidence.
    BelowThreshold {
        node: SemanticNode,
        threshold: Confidence,
    },
    /// The input's locale has no profile.
    UnsupportedLanguage,
}

impl ParseOutcome {
    pub fn into_node(self) -> Option<SemanticNode> {
        match self {
            ParseOutcome::Matched(node) => Some(node),
            _ => None,
        }
    }
}

/// The parser. Cheap to clone; holds the registry by `Arc`.
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Arc<Registry>,
    config: ParserConfig,
}

impl Parser {
    pub fn new(registry: Arc<Registry>) -> Self {
        Parser {
            registry,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Tokenize `text` as language `code`. `None` if the language is not
    /// registered.
    pub fn tokenize(&self, text: &str, code: &str) -> Option<Vec<Token>> {
        let profile = self.registry.profile(code)?;
        let lexicon = self.registry.lexicon(code)?;
        let normalizer = self.registry.normalizer(code);
        Some(tokenize(text, profile, lexicon, normalizer).collect())
    }

    /// Parse `input` into a canonical node, or `None` when nothing matched
    /// with enough confidence. Never panics, whatever the input.
    #[instrument(skip(self, input), fields(locale = %input.locale))]
    pub fn parse(&self, input: &Input) -> Option<SemanticNode> {
        self.parse_detailed(input).into_node()
    }

    pub fn parse_detailed(&self, input: &Input) -> ParseOutcome {
        // Stage 1: Tokenize
        let Some(tokens) = self.tokenize(&input.text, &input.locale) else {
            debug!(locale = %input.locale, "no profile for locale");
            return ParseOutcome::UnsupportedLanguage;
        };

        // Stage 2: Match against the language's patterns, best first
        let matcher = PatternMatcher::new(self.registry.schemas());
        let Some(found) = matcher.best(&tokens, self.registry.patterns(&input.locale)) else {
            return ParseOutcome::NoMatch;
        };
        let Some(schema) = self.registry.schema(&found.pattern.command) else {
            return ParseOutcome::NoMatch;
        };

        // Stage 3: Segment role values out of the input, in schema order
        let segments = segment_tokens(&input.text, &tokens, &found);
        let mut node = SemanticNode::new(schema.action.clone());
        for role in &schema.roles {
            if let Some(segment) = segments.iter().find(|s| s.role == role.name) {
                node.roles.insert(
                    role.name.clone(),
                    RoleValue::new(segment.text.clone(), segment.value_type),
                );
            }
        }
        node.confidence = found.confidence;

        // Stage 4: Confidence gate
        let threshold = input.threshold.unwrap_or(self.config.threshold);
        if !node.confidence.passes(threshold) {
            debug!(
                action = %node.action,
                confidence = %node.confidence,
                %threshold,
                "rejected below threshold"
            );
            return ParseOutcome::BelowThreshold { node, threshold };
        }
        ParseOutcome::Matched(node)
    }

    /// Surface text for `node` in language `code`.
    pub fn render(&self, node: &SemanticNode, code: &str) -> Option<String> {
        let schema = self.registry.schema(&node.action)?;
        let profile = self.registry.profile(code)?;
        Some(derive::render(node, schema, profile))
    }

    /// Parse `input` and render it in the canonical language, ready for
    /// the single-language command parser.
    #[instrument(skip(self, input), fields(locale = %input.locale))]
    pub fn compile(&self, input: &Input) -> Option<String> {
        let node = self.parse(input)?;
        self.render(&node, &self.config.canonical_language)
    }

    /// Parse `text` as language `from` and render it in `to`.
    #[instrument(skip(self))]
    pub fn translate(&self, text: &str, from: &str, to: &str) -> Option<String> {
        let node = self.parse(&Input::new(text).with_locale(from))?;
        self.render(&node, to)
    }
}
