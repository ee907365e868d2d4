//! Japanese: SOV, postpositional particles, no spaces.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("ja", "Japanese", WordOrder::Sov)
        .without_spaces()
        .keyword("add", "追加", &["追加する", "加える"])
        .keyword("remove", "削除", &["削除する", "取り除く"])
        .keyword("toggle", "切り替え", &["切り替える", "トグル"])
        .keyword("put", "置く", &["入れる"])
        .keyword("set", "設定", &["設定する"])
        .keyword("show", "表示", &["表示する"])
        .keyword("hide", "非表示", &["隠す"])
        .keyword("increment", "増加", &["増やす"])
        .keyword("wait", "待つ", &["待機"])
        .keyword("fetch", "取得", &["取得する"])
        .keyword("send", "送信", &["送る"])
        .keyword("log", "記録", &["記録する"])
        .keyword("convert", "変換", &["変換する"])
        .marker(SemanticRole::Patient, RoleMarker::after("を"))
        .marker(SemanticRole::Destination, RoleMarker::after("に").alt("へ"))
        .marker(SemanticRole::Source, RoleMarker::after("から"))
        .marker(SemanticRole::Goal, RoleMarker::after("に"))
        .marker(SemanticRole::Manner, RoleMarker::after("で"))
        .marker(SemanticRole::Quantity, RoleMarker::after("だけ"))
        .marker(SemanticRole::Method, RoleMarker::after("として"))
        .marker(SemanticRole::Condition, RoleMarker::after("とき"))
}
