//! Arabic: verb-initial, with prepositions that fuse onto the following
//! word (`بالأحمر`, `للقائمة`).

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("ar", "Arabic", WordOrder::Vso)
        .keyword("add", "أضف", &[])
        .keyword("remove", "احذف", &["أزل"])
        .keyword("toggle", "بدل", &["بدّل"])
        .keyword("put", "ضع", &[])
        .keyword("set", "عين", &["اضبط"])
        .keyword("show", "أظهر", &["اعرض"])
        .keyword("hide", "أخف", &[])
        .keyword("increment", "زد", &[])
        .keyword("wait", "انتظر", &[])
        .keyword("fetch", "اجلب", &[])
        .keyword("send", "أرسل", &[])
        .keyword("log", "سجل", &[])
        .keyword("convert", "حول", &["حوّل"])
        .marker(SemanticRole::Destination, RoleMarker::before("إلى").alt("ل"))
        .marker(SemanticRole::Source, RoleMarker::before("من"))
        .marker(SemanticRole::Goal, RoleMarker::before("إلى"))
        .marker(SemanticRole::Manner, RoleMarker::before("ب"))
        .marker(SemanticRole::Quantity, RoleMarker::before("بمقدار"))
        .marker(SemanticRole::Method, RoleMarker::before("بصيغة"))
        .marker(SemanticRole::Condition, RoleMarker::before("عندما").alt("إذا"))
        .prefix_rule("بال", "ب")
        .prefix_rule("لل", "ل")
}
