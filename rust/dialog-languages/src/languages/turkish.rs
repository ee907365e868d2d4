//! Turkish: SOV and agglutinative. Case suffixes attach to the noun, often
//! after an apostrophe (`#liste'ye`), and are split off as particles.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("tr", "Turkish", WordOrder::Sov)
        .keyword("add", "ekle", &[])
        .keyword("remove", "kaldır", &["sil"])
        .keyword("toggle", "değiştir", &[])
        .keyword("put", "koy", &[])
        .keyword("set", "ayarla", &[])
        .keyword("show", "göster", &[])
        .keyword("hide", "gizle", &[])
        .keyword("increment", "artır", &[])
        .keyword("wait", "bekle", &[])
        .keyword("fetch", "getir", &[])
        .keyword("send", "gönder", &[])
        .keyword("log", "kaydet", &[])
        .keyword("convert", "dönüştür", &[])
        .marker(SemanticRole::Destination, RoleMarker::after("ye").alt("ya"))
        .marker(
            SemanticRole::Source,
            RoleMarker::after("den").alt("dan").alt("ten").alt("tan"),
        )
        .marker(SemanticRole::Goal, RoleMarker::after("olarak"))
        .marker(SemanticRole::Manner, RoleMarker::after("ile").alt("yle").alt("yla"))
        .marker(SemanticRole::Quantity, RoleMarker::after("kadar"))
        .marker(SemanticRole::Method, RoleMarker::after("biçiminde"))
        .marker(SemanticRole::Condition, RoleMarker::after("iken"))
        .particles(&["ye", "ya", "den", "dan", "ten", "tan", "yle", "yla"])
        .min_stem(3)
}
