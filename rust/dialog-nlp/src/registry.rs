//! The immutable registry of languages, commands and patterns.
//!
//! Everything the parser consults is collected by a [`RegistryBuilder`] at
//! startup, validated once, and frozen into a [`Registry`]. The registry is
//! passed explicitly (usually behind an `Arc`) to whoever parses; there is
//! no global pattern table.

use std::collections::BTreeMap;

use dialog_morphology::MorphologicalNormalizer;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::generate::{PatternReport, generate_patterns, validate_pattern};
use crate::lexicon::Lexicon;
use crate::pattern::LanguagePattern;
use crate::profile::LanguageProfile;
use crate::schema::CommandSchema;

#[derive(Default)]
pub struct RegistryBuilder {
    profiles: IndexMap<String, LanguageProfile>,
    schemas: Vec<CommandSchema>,
    normalizers: Vec<Box<dyn MorphologicalNormalizer>>,
    patterns: Vec<LanguagePattern>,
    generate: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile. A later profile with the same code replaces an
    /// earlier one.
    pub fn register_profile(mut self, profile: LanguageProfile) -> Self {
        self.profiles.insert(profile.code.clone(), profile);
        self
    }

    pub fn register_schema(mut self, schema: CommandSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn register_normalizer(mut self, normalizer: Box<dyn MorphologicalNormalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    pub fn register_pattern(mut self, pattern: LanguagePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn register_patterns(mut self, patterns: impl IntoIterator<Item = LanguagePattern>) -> Self {
        self.patterns.extend(patterns);
        self
    }

    /// Also generate schema-derived patterns for every profile. They are
    /// placed after hand-authored patterns of the same priority.
    pub fn with_generated_patterns(mut self) -> Self {
        self.generate = true;
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut schemas = IndexMap::new();
        for schema in self.schemas {
            schema.validate()?;
            if schemas.contains_key(&schema.action) {
                return Err(RegistryError::DuplicateSchema {
                    action: schema.action,
                });
            }
            schemas.insert(schema.action.clone(), schema);
        }

        let mut normalizers = BTreeMap::new();
        for normalizer in self.normalizers {
            let language = normalizer.language().to_string();
            if !self.profiles.contains_key(&language) {
                return Err(RegistryError::MissingProfile { language });
            }
            normalizers.insert(language, normalizer);
        }

        let mut patterns: IndexMap<String, Vec<LanguagePattern>> = self
            .profiles
            .keys()
            .map(|code| (code.clone(), Vec::new()))
            .collect();
        for pattern in self.patterns {
            check_pattern(&pattern, &schemas)?;
            if let Some(list) = patterns.get_mut(&pattern.language) {
                list.push(pattern);
            } else {
                return Err(RegistryError::UnknownLanguage {
                    pattern: pattern.id,
                    language: pattern.language,
                });
            }
        }
        if self.generate {
            for (code, profile) in &self.profiles {
                if let Some(list) = patterns.get_mut(code) {
                    list.extend(schemas.values().flat_map(|s| generate_patterns(s, profile)));
                }
            }
        }
        for list in patterns.values_mut() {
            // Stable: equal priorities keep declaration order.
            list.sort_by_key(|p| std::cmp::Reverse(p.priority));
        }

        let lexicons = self
            .profiles
            .values()
            .map(|profile| {
                let code = profile.code.as_str();
                let overrides = schemas
                    .values()
                    .flat_map(|s| &s.roles)
                    .filter_map(|role| role.marker_override.get(code))
                    .map(String::as_str);
                let literals = patterns
                    .get(code)
                    .into_iter()
                    .flatten()
                    .flat_map(LanguagePattern::literals);
                let lexicon = Lexicon::from_profile(profile).with_markers(overrides.chain(literals));
                (code.to_string(), lexicon)
            })
            .collect();

        let registry = Registry {
            profiles: self.profiles,
            schemas,
            normalizers,
            patterns,
            lexicons,
        };
        debug!(
            languages = registry.profiles.len(),
            commands = registry.schemas.len(),
            patterns = registry.patterns.values().map(Vec::len).sum::<usize>(),
            "registry built"
        );
        for report in registry.validate() {
            for drift in &report.drift {
                warn!(pattern = %report.pattern, %drift, "pattern drifts from its schema");
            }
        }
        Ok(registry)
    }
}

fn check_pattern(
    pattern: &LanguagePattern,
    schemas: &IndexMap<String, CommandSchema>,
) -> Result<(), RegistryError> {
    let schema = schemas
        .get(&pattern.command)
        .ok_or_else(|| RegistryError::UnknownCommand {
            pattern: pattern.id.clone(),
            command: pattern.command.clone(),
        })?;
    match pattern.roles().into_iter().find(|role| !schema.has_role(role)) {
        Some(role) => Err(RegistryError::SchemaMismatch {
            pattern: pattern.id.clone(),
            command: pattern.command.clone(),
            role: role.to_string(),
        }),
        None => Ok(()),
    }
}

/// Frozen language, command and pattern tables. `Send + Sync`.
#[derive(Debug)]
pub struct Registry {
    profiles: IndexMap<String, LanguageProfile>,
    schemas: IndexMap<String, CommandSchema>,
    normalizers: BTreeMap<String, Box<dyn MorphologicalNormalizer>>,
    patterns: IndexMap<String, Vec<LanguagePattern>>,
    lexicons: IndexMap<String, Lexicon>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn schema(&self, action: &str) -> Option<&CommandSchema> {
        self.schemas.get(action)
    }

    pub fn schemas(&self) -> &IndexMap<String, CommandSchema> {
        &self.schemas
    }

    pub fn profile(&self, code: &str) -> Option<&LanguageProfile> {
        self.profiles.get(code)
    }

    /// Patterns for `code`, highest priority first.
    pub fn patterns(&self, code: &str) -> &[LanguagePattern] {
        self.patterns.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lexicon(&self, code: &str) -> Option<&Lexicon> {
        self.lexicons.get(code)
    }

    pub fn normalizer(&self, code: &str) -> Option<&dyn MorphologicalNormalizer> {
        self.normalizers.get(code).map(|normalizer| &**normalizer)
    }

    /// Language codes in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// A report for every registered pattern.
    pub fn validate(&self) -> Vec<PatternReport> {
        self.patterns
            .iter()
            .flat_map(|(code, patterns)| {
                let profile = self.profiles.get(code);
                patterns.iter().filter_map(move |pattern| {
                    let schema = self.schemas.get(&pattern.command)?;
                    Some(validate_pattern(pattern, schema, profile?))
                })
            })
            .collect()
    }
}
