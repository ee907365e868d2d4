//! Invariants of the assembled registry: conformance, ordering and
//! serialization.
mod registry {
    use std::sync::Arc;

    use dialog_languages::{CODES, builder, registry, schemas};
    use dialog_nlp::{
        CommandSchema, Input, LanguagePattern, LanguageProfile, Parser, TokenSpec,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use testresult::TestResult;

    #[test]
    fn every_pattern_conforms_to_its_schema() -> TestResult {
        let registry = registry()?;
        for code in CODES {
            for pattern in registry.patterns(code) {
                let schema = registry
                    .schema(&pattern.command)
                    .expect("pattern command is registered");
                for role in pattern.roles() {
                    assert!(schema.has_role(role), "{}: unknown role {role}", pattern.id);
                }
                for required in schema.required_roles() {
                    assert!(
                        pattern.roles().contains(&required.name.as_str()),
                        "{}: never binds {}",
                        pattern.id,
                        required.name
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn patterns_are_ordered_by_priority_then_declaration() -> TestResult {
        let registry = registry()?;
        for code in CODES {
            let priorities: Vec<i32> = registry.patterns(code).iter().map(|p| p.priority).collect();
            let mut sorted = priorities.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(priorities, sorted, "{code}");
        }

        let german: Vec<&str> = registry
            .patterns("de")
            .iter()
            .filter(|p| p.command == "add")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(german, vec!["add-de-separable", "add-de-generated"]);
        Ok(())
    }

    #[test]
    fn sov_languages_get_reordered_patterns() -> TestResult {
        let registry = registry()?;
        let ids: Vec<&str> = registry
            .patterns("ko")
            .iter()
            .filter(|p| p.command == "show")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], "show-ko-generated");
        Ok(())
    }

    #[test]
    fn higher_priority_pattern_wins() -> TestResult {
        let shadow = |priority| {
            LanguagePattern::new("log-en-shadow", "en", "log", priority)
                .token(TokenSpec::literal("add"))
                .token(TokenSpec::role("value"))
        };

        let above = Parser::new(Arc::new(builder().register_pattern(shadow(200)).build()?));
        let below = Parser::new(Arc::new(builder().register_pattern(shadow(50)).build()?));
        let input = Input::new("add #milk");

        for _ in 0..3 {
            assert_eq!(above.parse(&input).map(|n| n.action).as_deref(), Some("log"));
            assert_eq!(below.parse(&input).map(|n| n.action).as_deref(), Some("add"));
        }
        Ok(())
    }

    #[test]
    fn parse_result_serializes_to_json() -> TestResult {
        let parser = dialog_languages::parser()?;
        let node = parser
            .parse(&Input::new("add #milk to groceries"))
            .expect("input parses");
        assert_eq!(
            serde_json::to_value(&node)?,
            json!({
                "action": "add",
                "roles": {
                    "item": { "text": "#milk", "value_type": "selector" },
                    "list": { "text": "groceries", "value_type": "reference" }
                },
                "confidence": 1.0
            })
        );
        Ok(())
    }

    #[test]
    fn tables_round_trip_through_json() -> TestResult {
        for profile in dialog_languages::languages::profiles() {
            let json = serde_json::to_string(&profile)?;
            let back: LanguageProfile = serde_json::from_str(&json)?;
            assert_eq!(back, profile);
        }
        for schema in schemas::schemas() {
            let json = serde_json::to_string(&schema)?;
            let back: CommandSchema = serde_json::from_str(&json)?;
            assert_eq!(back, schema);
        }
        Ok(())
    }
}
