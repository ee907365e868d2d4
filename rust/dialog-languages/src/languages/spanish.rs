//! Spanish: SVO with prepositions; verbs inflect heavily, so most
//! conjugated forms reach the lexicon through the normalizer.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("es", "Spanish", WordOrder::Svo)
        .keyword("add", "agregar", &["añadir"])
        .keyword("remove", "quitar", &["eliminar", "remover"])
        .keyword("toggle", "alternar", &[])
        .keyword("put", "poner", &["colocar"])
        .keyword("set", "establecer", &["fijar"])
        .keyword("show", "mostrar", &[])
        .keyword("hide", "ocultar", &["esconder"])
        .keyword("increment", "incrementar", &["aumentar"])
        .keyword("wait", "esperar", &[])
        .keyword("fetch", "obtener", &["traer"])
        .keyword("send", "enviar", &[])
        .keyword("log", "registrar", &[])
        .keyword("convert", "convertir", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("a").alt("en"))
        .marker(SemanticRole::Source, RoleMarker::before("de").alt("desde"))
        .marker(SemanticRole::Goal, RoleMarker::before("a"))
        .marker(SemanticRole::Manner, RoleMarker::before("con"))
        .marker(SemanticRole::Quantity, RoleMarker::before("por"))
        .marker(SemanticRole::Method, RoleMarker::before("como"))
        .marker(SemanticRole::Condition, RoleMarker::before("cuando").alt("si"))
}
