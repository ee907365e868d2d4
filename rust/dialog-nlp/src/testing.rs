//! Small English, Japanese and Korean tables shared by the unit tests.

use dialog_morphology::{MorphologicalNormalizer, normalizer_for};
use indexmap::IndexMap;

use crate::lexicon::Lexicon;
use crate::pattern::{LanguagePattern, TokenSpec};
use crate::profile::{LanguageProfile, WordOrder};
use crate::registry::{Registry, RegistryBuilder};
use crate::role::{RoleMarker, SemanticRole, ValueType};
use crate::schema::{CommandSchema, RoleDefinition, SchemaBuilder};

pub fn english() -> LanguageProfile {
    LanguageProfile::new("en", "English", WordOrder::Svo)
        .keyword("add", "add", &[])
        .keyword("fetch", "fetch", &[])
        .keyword("log", "log", &[])
        .keyword("wait", "wait", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("to").alt("into"))
        .marker(SemanticRole::Source, RoleMarker::before("from"))
}

pub fn japanese() -> LanguageProfile {
    LanguageProfile::new("ja", "Japanese", WordOrder::Sov)
        .without_spaces()
        .keyword("add", "追加", &["追加する", "加える"])
        .marker(SemanticRole::Patient, RoleMarker::after("を"))
        .marker(SemanticRole::Destination, RoleMarker::after("に"))
        .marker(SemanticRole::Source, RoleMarker::after("から"))
}

pub fn korean() -> LanguageProfile {
    LanguageProfile::new("ko", "Korean", WordOrder::Sov)
        .keyword("add", "추가", &[])
        .marker(SemanticRole::Patient, RoleMarker::after("를").alt("을"))
        .marker(SemanticRole::Destination, RoleMarker::after("에"))
        .particles(&["를", "을", "에", "에서", "로"])
}

pub fn schemas() -> IndexMap<String, CommandSchema> {
    [
        SchemaBuilder::new("add", "collection")
            .role(RoleDefinition::new("item", SemanticRole::Patient).required().sov(2))
            .role(RoleDefinition::new("list", SemanticRole::Destination).sov(1))
            .build(),
        SchemaBuilder::new("fetch", "network")
            .role(
                RoleDefinition::new("source", SemanticRole::Source)
                    .required()
                    .render("en", ""),
            )
            .build(),
        SchemaBuilder::new("log", "output")
            .role(
                RoleDefinition::new("value", SemanticRole::Patient)
                    .required()
                    .types(&[ValueType::Expression]),
            )
            .build(),
    ]
    .into_iter()
    .map(|schema| (schema.action.clone(), schema))
    .collect()
}

/// Profile, bare lexicon and normalizer for one fixture language.
pub fn language(
    code: &str,
) -> (LanguageProfile, Lexicon, Option<Box<dyn MorphologicalNormalizer>>) {
    let profile = match code {
        "ja" => japanese(),
        "ko" => korean(),
        _ => english(),
    };
    let lexicon = Lexicon::from_profile(&profile);
    (profile, lexicon, normalizer_for(code))
}

pub fn builder() -> RegistryBuilder {
    let mut builder = Registry::builder()
        .register_profile(english())
        .register_profile(japanese())
        .register_profile(korean());
    for schema in schemas().into_values() {
        builder = builder.register_schema(schema);
    }
    for code in ["ja", "ko"] {
        if let Some(normalizer) = normalizer_for(code) {
            builder = builder.register_normalizer(normalizer);
        }
    }
    builder
        .register_pattern(
            LanguagePattern::new("add-en-short", "en", "add", 100)
                .token(TokenSpec::literal("add"))
                .token(TokenSpec::role("item"))
                .token(TokenSpec::literal("onto"))
                .token(TokenSpec::role("list")),
        )
        .with_generated_patterns()
}

pub fn registry() -> Registry {
    builder().build().unwrap()
}
