//! Russian: SVO with prepositions; imperatives normalize to infinitives.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("ru", "Russian", WordOrder::Svo)
        .keyword("add", "добавить", &[])
        .keyword("remove", "удалить", &[])
        .keyword("toggle", "переключить", &[])
        .keyword("put", "поместить", &["положить"])
        .keyword("set", "установить", &[])
        .keyword("show", "показать", &[])
        .keyword("hide", "скрыть", &[])
        .keyword("increment", "увеличить", &[])
        .keyword("wait", "ждать", &["подождать"])
        .keyword("fetch", "получить", &[])
        .keyword("send", "отправить", &[])
        .keyword("log", "записать", &["вывести"])
        .keyword("convert", "преобразовать", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("в").alt("во").alt("к"))
        .marker(SemanticRole::Source, RoleMarker::before("из").alt("от"))
        .marker(SemanticRole::Goal, RoleMarker::before("в"))
        .marker(SemanticRole::Manner, RoleMarker::before("с").alt("со"))
        .marker(SemanticRole::Quantity, RoleMarker::before("на"))
        .marker(SemanticRole::Method, RoleMarker::before("как"))
        .marker(SemanticRole::Condition, RoleMarker::before("когда").alt("если"))
}
