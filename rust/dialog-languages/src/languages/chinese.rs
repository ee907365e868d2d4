//! Chinese: SVO, no spaces, no inflection. The 把 construction moves the
//! object before the verb and is hand-authored.

use dialog_nlp::{
    Extraction, LanguagePattern, LanguageProfile, MarkerPosition, RoleMarker, SemanticRole,
    TokenSpec, WordOrder,
};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("zh", "Chinese", WordOrder::Svo)
        .without_spaces()
        .keyword("add", "添加", &["加入"])
        .keyword("remove", "删除", &["移除"])
        .keyword("toggle", "切换", &[])
        .keyword("put", "放置", &["放入"])
        .keyword("set", "设置", &["设定"])
        .keyword("show", "显示", &[])
        .keyword("hide", "隐藏", &[])
        .keyword("increment", "增加", &[])
        .keyword("wait", "等待", &[])
        .keyword("fetch", "获取", &[])
        .keyword("send", "发送", &[])
        .keyword("log", "记录", &[])
        .keyword("convert", "转换", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("到").alt("至"))
        .marker(SemanticRole::Source, RoleMarker::before("从"))
        .marker(SemanticRole::Goal, RoleMarker::before("为").alt("成"))
        .marker(SemanticRole::Manner, RoleMarker::before("用"))
        .marker(SemanticRole::Quantity, RoleMarker::before("按"))
        .marker(SemanticRole::Method, RoleMarker::before("作为"))
        .marker(SemanticRole::Condition, RoleMarker::before("当"))
        .words(&["现在", "正在", "存在", "所在", "在线", "到达", "从前", "成功", "成为", "当前"])
}

pub fn patterns() -> Vec<LanguagePattern> {
    vec![
        // 把牛奶添加到列表
        LanguagePattern::new("add-zh-ba", "zh", "add", 110)
            .token(TokenSpec::literal("把"))
            .token(TokenSpec::role("item"))
            .token(TokenSpec::literal_with("添加", vec!["加入".to_string()]))
            .token(TokenSpec::optional(vec![
                TokenSpec::literal_with("到", vec!["至".to_string()]),
                TokenSpec::role("list"),
            ]))
            .extract("item", Extraction::Position(1))
            .extract(
                "list",
                Extraction::Marker {
                    marker: "到".to_string(),
                    alternatives: vec!["至".to_string()],
                    position: MarkerPosition::Before,
                },
            ),
    ]
}
