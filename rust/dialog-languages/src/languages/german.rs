//! German: verb-second. Separable verbs split around their object
//! (`füge Milch zur Liste hinzu`), which generation cannot derive, so the
//! split form of `hinzufügen` is hand-authored. Its leading half is listed
//! with the `add` keywords so it tokenizes as a verb, not as a marker.

use dialog_nlp::{
    Extraction, LanguagePattern, LanguageProfile, MarkerPosition, RoleMarker, SemanticRole,
    TokenSpec, VerbPosition, WordOrder,
};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("de", "German", WordOrder::V2)
        .verb_at(VerbPosition::Second)
        .keyword("add", "hinzufügen", &["füge", "füg"])
        .keyword("remove", "entfernen", &["löschen"])
        .keyword("toggle", "umschalten", &[])
        .keyword("put", "legen", &["platzieren"])
        .keyword("set", "setzen", &["festlegen"])
        .keyword("show", "zeigen", &["anzeigen"])
        .keyword("hide", "verbergen", &["ausblenden"])
        .keyword("increment", "erhöhen", &[])
        .keyword("wait", "warten", &[])
        .keyword("fetch", "holen", &["abrufen"])
        .keyword("send", "senden", &["schicken"])
        .keyword("log", "protokollieren", &[])
        .keyword("convert", "konvertieren", &["umwandeln"])
        .marker(
            SemanticRole::Destination,
            RoleMarker::before("zu").alt("zur").alt("zum"),
        )
        .marker(SemanticRole::Source, RoleMarker::before("von").alt("aus"))
        .marker(SemanticRole::Goal, RoleMarker::before("auf").alt("in"))
        .marker(SemanticRole::Manner, RoleMarker::before("mit"))
        .marker(SemanticRole::Quantity, RoleMarker::before("um"))
        .marker(SemanticRole::Method, RoleMarker::before("als"))
        .marker(SemanticRole::Condition, RoleMarker::before("wenn"))
}

pub fn patterns() -> Vec<LanguagePattern> {
    vec![
        // füge Milch [zur Einkaufsliste] hinzu
        LanguagePattern::new("add-de-separable", "de", "add", 110)
            .token(TokenSpec::literal_with("füge", vec!["füg".to_string()]))
            .token(TokenSpec::role("item"))
            .token(TokenSpec::optional(vec![
                TokenSpec::literal_with("zu", vec!["zur".to_string(), "zum".to_string()]),
                TokenSpec::role("list"),
            ]))
            .token(TokenSpec::literal("hinzu"))
            .extract("item", Extraction::Position(1))
            .extract(
                "list",
                Extraction::Marker {
                    marker: "zu".to_string(),
                    alternatives: vec!["zur".to_string(), "zum".to_string()],
                    position: MarkerPosition::Before,
                },
            ),
    ]
}
