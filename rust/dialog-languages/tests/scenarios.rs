//! End-to-end behavior of the built-in registry: one command, many
//! languages, one canonical node.
mod scenarios {
    use dialog_languages::parser;
    use dialog_morphology::normalizer_for;
    use dialog_nlp::{Confidence, Input, ParseOutcome, derive};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test_log::test]
    fn japanese_add_with_explicit_particles() -> TestResult {
        let parser = parser()?;
        let node = parser
            .parse(&Input::new("ミルク を 追加").with_locale("ja"))
            .expect("input parses");
        assert_eq!(node.action, "add");
        assert_eq!(node.role("item"), Some("ミルク"));
        assert!(node.confidence >= Confidence(0.9));
        Ok(())
    }

    #[test_log::test]
    fn spanish_add_with_destination() -> TestResult {
        let parser = parser()?;
        let node = parser
            .parse(&Input::new("agregar leche a compras").with_locale("es"))
            .expect("input parses");
        assert_eq!(node.action, "add");
        assert_eq!(node.role("item"), Some("leche"));
        assert_eq!(node.role("list"), Some("compras"));
        assert_eq!(node.confidence, Confidence::CERTAIN);
        Ok(())
    }

    #[test]
    fn russian_imperative_normalizes_to_the_infinitive() -> TestResult {
        let russian = normalizer_for("ru").expect("russian has a normalizer");
        let result = russian.normalize("переключи");
        assert_eq!(result.stem, "переключить");
        assert_eq!(result.confidence, 0.95);
        Ok(())
    }

    #[test]
    fn gibberish_does_not_parse() -> TestResult {
        let parser = parser()?;
        let input = Input::new("completely invalid gibberish xyz");
        assert_eq!(parser.parse_detailed(&input), ParseOutcome::NoMatch);
        assert!(parser.parse(&input).is_none());
        Ok(())
    }

    #[test]
    fn derivation_orders_and_marks_roles_per_language() -> TestResult {
        let registry = dialog_languages::registry()?;
        let add = registry.schema("add").expect("add is registered");

        let summary = |code: &str| -> Vec<(String, String)> {
            let profile = registry.profile(code).expect("language is registered");
            derive(add, profile)
                .into_iter()
                .map(|role| (role.name, role.marker))
                .collect()
        };

        assert_eq!(
            summary("en"),
            vec![
                ("item".to_string(), String::new()),
                ("list".to_string(), "to".to_string())
            ]
        );
        assert_eq!(
            summary("ja"),
            vec![
                ("list".to_string(), "に".to_string()),
                ("item".to_string(), "を".to_string())
            ]
        );
        Ok(())
    }

    #[test_log::test]
    fn russian_command_uses_the_normalized_verb() -> TestResult {
        let parser = parser()?;
        let node = parser
            .parse(&Input::new("переключи .active на #menu").with_locale("ru"))
            .expect("input parses");
        assert_eq!(node.action, "toggle");
        assert_eq!(node.role("item"), Some(".active"));
        assert_eq!(node.role("target"), Some("#menu"));
        assert_eq!(node.confidence, Confidence(0.95));
        Ok(())
    }

    #[test]
    fn one_command_in_every_script() -> TestResult {
        let parser = parser()?;
        let inputs = [
            ("en", "add #milk to #groceries"),
            ("es", "agregar #milk a #groceries"),
            ("fr", "ajoute #milk à #groceries"),
            ("de", "füge #milk zu #groceries hinzu"),
            ("ru", "добавить #milk в #groceries"),
            ("ar", "أضف #milk إلى #groceries"),
            ("tr", "#groceries'ye #milk ekle"),
            ("ja", "#groceries に #milk を 追加"),
            ("ko", "#groceries 에 #milk 를 추가"),
            ("zh", "添加 #milk 到 #groceries"),
            ("id", "tambahkan #milk ke #groceries"),
            ("vi", "thêm #milk vào #groceries"),
        ];
        for (code, text) in inputs {
            let node = parser
                .parse(&Input::new(text).with_locale(code))
                .unwrap_or_else(|| panic!("{code}: no parse for '{text}'"));
            assert_eq!(node.action, "add", "{code}");
            assert_eq!(node.role("item"), Some("#milk"), "{code}");
            assert_eq!(node.role("list"), Some("#groceries"), "{code}");
        }
        Ok(())
    }
}
