//! Parser configuration.
//!
//! ```json
//! { "threshold": 0.8, "canonical_language": "en" }
//! ```
//!
//! Both fields are optional.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::score::Confidence;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Parses scoring below this are rejected.
    pub threshold: Confidence,
    /// The language [`crate::Parser::compile`] renders into.
    pub canonical_language: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            threshold: Confidence::DEFAULT_THRESHOLD,
            canonical_language: "en".to_string(),
        }
    }
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let mut config: ParserConfig = serde_json::from_str(json)?;
        config.threshold = Confidence::new(config.threshold.value());
        Ok(config)
    }
}
