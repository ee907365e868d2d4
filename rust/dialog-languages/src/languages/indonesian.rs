//! Indonesian: SVO with prepositions. Verbs take emphatic and causative
//! suffixes (`tambahkanlah`) that the tokenizer strips.

use dialog_nlp::{LanguageProfile, RoleMarker, SemanticRole, WordOrder};

pub fn profile() -> LanguageProfile {
    LanguageProfile::new("id", "Indonesian", WordOrder::Svo)
        .verb_suffixes(&["lah", "kan"])
        .keyword("add", "tambah", &["tambahkan"])
        .keyword("remove", "hapus", &["buang"])
        .keyword("toggle", "alihkan", &["alih"])
        .keyword("put", "taruh", &["letakkan"])
        .keyword("set", "atur", &["setel"])
        .keyword("show", "tampilkan", &["tunjukkan"])
        .keyword("hide", "sembunyikan", &[])
        .keyword("increment", "naikkan", &["tingkatkan"])
        .keyword("wait", "tunggu", &[])
        .keyword("fetch", "ambil", &[])
        .keyword("send", "kirim", &[])
        .keyword("log", "catat", &[])
        .keyword("convert", "ubah", &["konversi"])
        .marker(SemanticRole::Destination, RoleMarker::before("ke"))
        .marker(SemanticRole::Source, RoleMarker::before("dari"))
        .marker(SemanticRole::Goal, RoleMarker::before("menjadi"))
        .marker(SemanticRole::Manner, RoleMarker::before("dengan"))
        .marker(SemanticRole::Quantity, RoleMarker::before("sebanyak"))
        .marker(SemanticRole::Method, RoleMarker::before("sebagai"))
        .marker(SemanticRole::Condition, RoleMarker::before("ketika").alt("jika"))
}
