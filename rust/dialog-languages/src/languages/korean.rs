//! Korean: SOV with particles attached to the preceding word
//! (`우유를`, `목록에`), split off during tokenization.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("ko", "Korean", WordOrder::Sov)
        .keyword("add", "추가", &[])
        .keyword("remove", "제거", &["삭제"])
        .keyword("toggle", "전환", &[])
        .keyword("put", "넣다", &[])
        .keyword("set", "설정", &[])
        .keyword("show", "표시", &["보이다"])
        .keyword("hide", "숨기다", &[])
        .keyword("increment", "증가", &[])
        .keyword("wait", "기다리다", &["대기"])
        .keyword("fetch", "가져오다", &[])
        .keyword("send", "보내다", &[])
        .keyword("log", "기록", &[])
        .keyword("convert", "변환", &[])
        .marker(SemanticRole::Patient, RoleMarker::after("를").alt("을"))
        .marker(SemanticRole::Destination, RoleMarker::after("에").alt("에게"))
        .marker(SemanticRole::Source, RoleMarker::after("에서").alt("부터"))
        .marker(SemanticRole::Goal, RoleMarker::after("로").alt("으로"))
        .marker(SemanticRole::Manner, RoleMarker::after("로서").alt("으로서"))
        .marker(SemanticRole::Quantity, RoleMarker::after("만큼"))
        .marker(SemanticRole::Method, RoleMarker::after("형식으로"))
        .marker(SemanticRole::Duration, RoleMarker::after("동안"))
        .marker(SemanticRole::Condition, RoleMarker::after("때"))
        .particles(&[
            "를", "을", "에", "에게", "에서", "로", "으로", "부터", "만큼", "로서", "으로서", "동안",
            "때",
        ])
}
