//! # Dialog NLP
//!
//! A multilingual command parser and generator. One declarative command
//! (`add milk to groceries`) is recognized in many languages, whatever their
//! word order or script, and comes out as one canonical [`SemanticNode`]:
//! an action plus typed semantic roles.
//!
//! ## Core Ideas
//!
//! - **Data, not code, per language**: a [`LanguageProfile`] declares word
//!   order, role markers, keywords and word-boundary strategy. Adding a
//!   language means adding a profile.
//! - **Schemas drive both directions**: a [`CommandSchema`] lists a
//!   command's roles with a position per word order. [`derive`] turns it
//!   into a language's surface syntax, which both generates patterns and
//!   renders nodes back to text.
//! - **Morphology before lookup**: words that miss the dictionary are
//!   normalized (`追加して` → `追加`) and looked up again; the normalizer's
//!   confidence carries through to the result.
//! - **Gate, don't guess**: a parse below the confidence threshold is
//!   rejected, never returned.
//!
//! ## Architecture
//!
//! ```text
//! Input → Tokenize (profile + lexicon + normalizer)
//!   → Match (patterns by priority) → Segment → Confidence gate
//!     → SemanticNode → Render (any language)
//! ```

pub mod config;
pub mod derive;
pub mod error;
pub mod generate;
pub mod input;
pub mod lexicon;
pub mod matcher;
pub mod parse;
pub mod pattern;
pub mod profile;
pub mod registry;
pub mod role;
pub mod schema;
pub mod score;
pub mod segment;
pub mod sentence;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ParserConfig;
pub use derive::{DerivedRole, derive, render};
pub use error::RegistryError;
pub use generate::{Drift, PatternReport, generate_patterns, validate_pattern};
pub use input::Input;
pub use lexicon::Lexicon;
pub use matcher::{Match, PatternMatcher};
pub use parse::{ParseOutcome, Parser};
pub use pattern::{Extraction, LanguagePattern, TokenSpec};
pub use profile::{BoundaryStrategy, LanguageProfile, VerbPosition, WordOrder};
pub use registry::{Registry, RegistryBuilder};
pub use role::{MarkerPosition, RoleMarker, SemanticRole, ValueType};
pub use schema::{CommandSchema, RoleDefinition, SchemaBuilder};
pub use score::Confidence;
pub use sentence::{RoleValue, SemanticNode};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

pub use dialog_morphology::{MorphologicalNormalizer, NormalizationResult};
