//! Normalization is idempotent: the stem of a stem is the stem, and
//! dictionary forms come back untouched with full confidence.
mod idempotence {
    use dialog_morphology::{LANGUAGES, normalizer_for};
    use proptest::prelude::*;
    use testresult::TestResult;

    /// Inflected forms seen in commands, per language.
    fn corpus(code: &str) -> &'static [&'static str] {
        match code {
            "ja" => &[
                "追加して", "追加してください", "追加します", "追加しました", "削除して",
                "切り替えて", "切り替えている", "表示して", "隠して", "増やして", "待って",
                "待っています", "送って", "入れて", "置いて", "取得して", "変換してください",
            ],
            "ko" => &[
                "추가해요", "추가해주세요", "추가했다", "추가하세요", "추가하기", "넣어",
                "넣으세요", "기다려요", "가져와", "숨겨", "보내", "보내요", "전환해",
            ],
            "es" => &[
                "agrégalo", "muéstrame", "ocultarlo", "agregando", "agregó", "añadió",
                "agregad", "agregue", "quita", "pon", "obtén", "espera", "convierte",
                "alterna", "elimínalo",
            ],
            "ru" => &[
                "переключи", "переключись", "добавьте", "удалите", "добавил", "сохрань",
                "покажи", "скрой", "подожди", "преобразуйте", "отправь",
            ],
            "tr" => &[
                "ekleyin", "ekleyiniz", "ekliyor", "gösteriyor", "ekledi", "gösterdi",
                "kaldırmak", "kaldırın", "bekleyin", "gönderin", "kaydedin", "ekliyordu",
                "gösteriyordu", "bekliyordu",
            ],
            "de" => &[
                "zeig", "gezeigt", "gewartet", "wartete", "warte", "zeige", "entfernt",
                "füg", "hol", "setze", "sende",
            ],
            "ar" => &[
                "أضيفوا", "أَضِفْ", "وأضف", "اجلبوا", "أرسلي", "احذفي", "فانتظر", "انتظروا",
            ],
            _ => &[],
        }
    }

    /// Dictionary forms that must be fixed points.
    fn dictionary(code: &str) -> &'static [&'static str] {
        match code {
            "ja" => &["切り替える", "待つ", "送る", "隠す", "置く"],
            "ko" => &["넣다", "기다리다", "보내다", "숨기다", "가져오다"],
            "es" => &["agregar", "poner", "mostrar", "añadir", "convertir"],
            "ru" => &["добавить", "переключить", "показать", "вывести", "ждать"],
            "tr" => &["ekle", "göster", "kaldır", "bekle", "gönder"],
            "de" => &["zeigen", "warten", "hinzufügen", "entfernen", "senden"],
            "ar" => &["أضف", "احذف", "انتظر", "أرسل", "ضع"],
            _ => &[],
        }
    }

    /// Letters of each normalizer's script, for generating arbitrary words.
    fn alphabet(code: &str) -> &'static str {
        match code {
            "ja" => "[ぁ-んァ-ン一-龯]{1,10}",
            "ko" => "[가-힣]{1,8}",
            "es" => "[a-záéíóúñ]{1,12}",
            "ru" => "[а-яё]{1,12}",
            "tr" => "[a-zçğıöşü]{1,12}",
            "de" => "[a-zäöüß]{1,12}",
            "ar" => "[ء-يـ\u{064B}-\u{0652}]{1,10}",
            _ => "[a-z]{1,12}",
        }
    }

    fn random_word() -> impl Strategy<Value = (&'static str, String)> {
        prop::sample::select(LANGUAGES)
            .prop_flat_map(|code| alphabet(code).prop_map(move |word| (code, word)))
    }

    fn corpus_word() -> impl Strategy<Value = (&'static str, &'static str)> {
        prop::sample::select(LANGUAGES).prop_flat_map(|code| {
            prop::sample::select(corpus(code)).prop_map(move |word| (code, word))
        })
    }

    proptest! {
        #[test]
        fn normalizing_twice_changes_nothing((code, word) in corpus_word()) {
            let normalizer = normalizer_for(code).unwrap();
            let once = normalizer.normalize(word);
            let twice = normalizer.normalize(&once.stem);
            prop_assert_eq!(&twice.stem, &once.stem, "{}: {}", code, word);
            prop_assert!(twice.is_unchanged(), "{}: {} -> {}", code, word, once);
        }

        #[test]
        fn random_words_reach_a_fixed_point((code, word) in random_word()) {
            let normalizer = normalizer_for(code).unwrap();
            let once = normalizer.normalize(&word);
            let twice = normalizer.normalize(&once.stem);
            prop_assert_eq!(&twice.stem, &once.stem, "{}: {}", code, word);
        }

        #[test]
        fn confidence_stays_in_range((code, word) in corpus_word()) {
            let normalizer = normalizer_for(code).unwrap();
            let result = normalizer.normalize(word);
            prop_assert!((0.0..=1.0).contains(&result.confidence));
            prop_assert!(!result.is_unchanged(), "{}: {} was not recognized", code, word);
        }

        #[test]
        fn arbitrary_text_never_panics(code in prop::sample::select(LANGUAGES), word in "\\PC{0,12}") {
            let normalizer = normalizer_for(code).unwrap();
            let result = normalizer.normalize(&word);
            prop_assert!((0.0..=1.0).contains(&result.confidence));
        }
    }

    #[test_log::test]
    fn dictionary_forms_have_full_confidence() -> TestResult {
        for code in LANGUAGES {
            let normalizer = normalizer_for(code).ok_or("missing normalizer")?;
            for word in dictionary(code) {
                let result = normalizer.normalize(word);
                assert_eq!(result.stem, *word, "{code}");
                assert_eq!(result.confidence, 1.0, "{code}: {word}");
            }
        }
        Ok(())
    }

    #[test_log::test]
    fn stacked_turkish_suffixes() -> TestResult {
        let tr = normalizer_for("tr").ok_or("missing normalizer")?;
        let result = tr.normalize("ekliyordu");
        assert_eq!(result.stem, "ekle");
        assert!(tr.normalize(&result.stem).is_unchanged());
        Ok(())
    }

    #[test_log::test]
    fn scenario_russian_toggle() -> TestResult {
        let ru = normalizer_for("ru").ok_or("missing normalizer")?;
        let result = ru.normalize("переключи");
        assert_eq!(result.stem, "переключить");
        assert_eq!(result.confidence, 0.95);
        Ok(())
    }
}
