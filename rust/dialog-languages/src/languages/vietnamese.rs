//! Vietnamese: SVO, isolating, with multi-word verbs (`chuyển đổi`) and
//! prepositions (`dưới dạng`).

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("vi", "Vietnamese", WordOrder::Svo)
        .keyword("add", "thêm", &[])
        .keyword("remove", "xóa", &["gỡ"])
        .keyword("toggle", "chuyển đổi", &[])
        .keyword("put", "đặt", &[])
        .keyword("set", "thiết lập", &[])
        .keyword("show", "hiển thị", &["hiện"])
        .keyword("hide", "ẩn", &[])
        .keyword("increment", "tăng", &[])
        .keyword("wait", "đợi", &["chờ"])
        .keyword("fetch", "lấy", &[])
        .keyword("send", "gửi", &[])
        .keyword("log", "ghi lại", &["ghi"])
        .keyword("convert", "biến đổi", &[])
        .marker(SemanticRole::Destination, RoleMarker::before("vào").alt("đến"))
        .marker(SemanticRole::Source, RoleMarker::before("từ"))
        .marker(SemanticRole::Goal, RoleMarker::before("thành"))
        .marker(SemanticRole::Manner, RoleMarker::before("với"))
        .marker(SemanticRole::Quantity, RoleMarker::before("lên"))
        .marker(SemanticRole::Method, RoleMarker::before("dưới dạng"))
        .marker(SemanticRole::Condition, RoleMarker::before("khi").alt("nếu"))
}
