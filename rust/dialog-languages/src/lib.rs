//! # Dialog Languages
//!
//! The built-in command set and language tables for [`dialog_nlp`]:
//! thirteen command schemas and twelve language profiles, plus the few
//! hand-authored patterns that generation cannot derive.
//!
//! ```no_run
//! use std::sync::Arc;
//! use dialog_nlp::{Input, Parser};
//!
//! # fn main() -> Result<(), dialog_nlp::RegistryError> {
//! let parser = Parser::new(Arc::new(dialog_languages::registry()?));
//! let node = parser.parse(&Input::new("ミルク を 追加").with_locale("ja"));
//! assert_eq!(node.map(|n| n.action), Some("add".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! | Code | Language   | Order | Boundaries |
//! |------|------------|-------|------------|
//! | en   | English    | SVO   | whitespace |
//! | es   | Spanish    | SVO   | whitespace |
//! | fr   | French     | SVO   | whitespace |
//! | de   | German     | V2    | whitespace |
//! | ru   | Russian    | SVO   | whitespace |
//! | ar   | Arabic     | VSO   | prefixes   |
//! | tr   | Turkish    | SOV   | particles  |
//! | ja   | Japanese   | SOV   | dictionary |
//! | ko   | Korean     | SOV   | particles  |
//! | zh   | Chinese    | SVO   | dictionary |
//! | id   | Indonesian | SVO   | whitespace |
//! | vi   | Vietnamese | SVO   | whitespace |

pub mod languages;
pub mod schemas;

use std::sync::Arc;

use dialog_nlp::{Parser, Registry, RegistryBuilder, RegistryError};
use tracing::debug;

pub use languages::CODES;

/// A builder preloaded with every built-in schema, profile, normalizer and
/// pattern. Callers may register more before building.
pub fn builder() -> RegistryBuilder {
    let mut builder = Registry::builder();
    for profile in languages::profiles() {
        builder = builder.register_profile(profile);
    }
    for schema in schemas::schemas() {
        builder = builder.register_schema(schema);
    }
    for code in dialog_morphology::LANGUAGES {
        if let Some(normalizer) = dialog_morphology::normalizer_for(code) {
            builder = builder.register_normalizer(normalizer);
        }
    }
    builder
        .register_patterns(languages::patterns())
        .with_generated_patterns()
}

/// The built-in registry.
pub fn registry() -> Result<Registry, RegistryError> {
    let registry = builder().build()?;
    debug!(languages = ?registry.languages().collect::<Vec<_>>(), "built-in registry ready");
    Ok(registry)
}

/// A parser over the built-in registry with default configuration.
pub fn parser() -> Result<Parser, RegistryError> {
    Ok(Parser::new(Arc::new(registry()?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_builds_with_every_language() -> Result<()> {
        let registry = registry()?;
        let codes: Vec<&str> = registry.languages().collect();
        assert_eq!(codes, CODES);
        for code in CODES {
            assert!(!registry.patterns(code).is_empty(), "{code}");
        }
        Ok(())
    }

    #[test]
    fn it_attaches_a_normalizer_where_one_exists() -> Result<()> {
        let registry = registry()?;
        for code in dialog_morphology::LANGUAGES {
            assert!(registry.normalizer(code).is_some(), "{code}");
        }
        assert!(registry.normalizer("en").is_none());
        Ok(())
    }

    #[test]
    fn it_has_no_pattern_drifting_from_its_schema() -> Result<()> {
        for report in registry()?.validate() {
            assert!(report.is_valid(), "{}: {:?}", report.pattern, report.errors);
            assert!(!report.has_drift(), "{}: {:?}", report.pattern, report.drift);
        }
        Ok(())
    }
}
