//! French: SVO with prepositions. Imperatives are listed as keyword
//! alternatives; there is no French normalizer.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("fr", "French", WordOrder::Svo)
        .keyword("add", "ajouter", &["ajoute", "ajoutez"])
        .keyword("remove", "supprimer", &["supprime", "retirer", "retire"])
        .keyword("toggle", "basculer", &["bascule"])
        .keyword("put", "mettre", &["mets", "placer", "place"])
        .keyword("set", "définir", &["définis", "régler", "règle"])
        .keyword("show", "afficher", &["affiche", "montrer", "montre"])
        .keyword("hide", "masquer", &["masque", "cacher", "cache"])
        .keyword("increment", "incrémenter", &["incrémente", "augmenter", "augmente"])
        .keyword("wait", "attendre", &["attends", "attendez"])
        .keyword("fetch", "récupérer", &["récupère", "chercher", "cherche"])
        .keyword("send", "envoyer", &["envoie"])
        .keyword("log", "journaliser", &["journalise", "enregistrer", "enregistre"])
        .keyword("convert", "convertir", &["convertis"])
        .marker(
            SemanticRole::Destination,
            RoleMarker::before("à").alt("dans").alt("au"),
        )
        .marker(
            SemanticRole::Source,
            RoleMarker::before("de").alt("depuis").alt("du"),
        )
        .marker(SemanticRole::Goal, RoleMarker::before("en").alt("à"))
        .marker(SemanticRole::Manner, RoleMarker::before("avec"))
        .marker(SemanticRole::Quantity, RoleMarker::before("par"))
        .marker(SemanticRole::Method, RoleMarker::before("comme"))
        .marker(SemanticRole::Condition, RoleMarker::before("quand").alt("si"))
}
