//! English: SVO with prepositions.

use dialog_nlp::{
    Extraction, LanguagePattern, LanguageProfile, MarkerPosition, RoleMarker, SemanticRole,
    TokenSpec, WordOrder,
};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("en", "English", WordOrder::Svo)
        .keyword("add", "add", &["append"])
        .keyword("remove", "remove", &["delete"])
        .keyword("toggle", "toggle", &["switch"])
        .keyword("put", "put", &["place"])
        .keyword("set", "set", &[])
        .keyword("show", "show", &["display"])
        .keyword("hide", "hide", &[])
        .keyword("increment", "increment", &["increase"])
        .keyword("wait", "wait", &["pause"])
        .keyword("fetch", "fetch", &["get"])
        .keyword("send", "send", &["dispatch"])
        .keyword("log", "log", &["print"])
        .keyword("convert", "convert", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("to").alt("into"))
        .marker(SemanticRole::Source, RoleMarker::before("from"))
        .marker(SemanticRole::Goal, RoleMarker::before("to"))
        .marker(SemanticRole::Manner, RoleMarker::before("with"))
        .marker(SemanticRole::Quantity, RoleMarker::before("by"))
        .marker(SemanticRole::Method, RoleMarker::before("as"))
        .marker(SemanticRole::Condition, RoleMarker::before("when").alt("if"))
}

pub fn patterns() -> Vec<LanguagePattern> {
    vec![
        // wait for 2s
        LanguagePattern::new("wait-en-for", "en", "wait", 105)
            .token(TokenSpec::literal("wait"))
            .token(TokenSpec::literal("for"))
            .token(TokenSpec::role("duration"))
            .extract(
                "duration",
                Extraction::Marker {
                    marker: "for".to_string(),
                    alternatives: Vec::new(),
                    position: MarkerPosition::Before,
                },
            ),
    ]
}
