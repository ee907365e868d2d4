//! The command set every language profile covers.
//!
//! Role positions are given per word order only where they differ from
//! declaration order; marker overrides cover the few commands whose role
//! takes a different preposition than the role's usual one (`toggle .x on
//! #menu`, not `toggle .x to #menu`).
//!
//! Places (destinations, sources, targets) take any value, multi-word
//! spans included: `danh sách`, `la lista`, `my groceries`.

use dialog_nlp::{CommandSchema, RoleDefinition, SchemaBuilder, SemanticRole, ValueType};

const ANY: &[ValueType] = &[
    ValueType::Literal,
    ValueType::Selector,
    ValueType::Reference,
    ValueType::Expression,
];

/// All command schemas, in registration order.
pub fn schemas() -> Vec<CommandSchema> {
    vec![
        add(),
        remove(),
        toggle(),
        put(),
        set(),
        show(),
        hide(),
        increment(),
        wait(),
        fetch(),
        send(),
        log(),
        convert(),
    ]
}

pub fn add() -> CommandSchema {
    SchemaBuilder::new("add", "collection")
        .description("Add an item to a collection")
        .role(
            RoleDefinition::new("item", SemanticRole::Patient)
                .required()
                .types(ANY)
                .svo(1)
                .sov(2),
        )
        .role(
            RoleDefinition::new("list", SemanticRole::Destination)
                .types(ANY)
                .svo(2)
                .sov(1),
        )
        .build()
}

pub fn remove() -> CommandSchema {
    SchemaBuilder::new("remove", "collection")
        .description("Remove an item from a collection")
        .role(RoleDefinition::new("item", SemanticRole::Patient).required())
        .role(RoleDefinition::new("list", SemanticRole::Source).types(ANY))
        .build()
}

pub fn toggle() -> CommandSchema {
    SchemaBuilder::new("toggle", "state")
        .description("Flip a class or flag on an element")
        .role(
            RoleDefinition::new("item", SemanticRole::Patient)
                .required()
                .types(&[ValueType::Selector, ValueType::Literal]),
        )
        .role(
            RoleDefinition::new("target", SemanticRole::Destination)
                .types(ANY)
                .marker("en", "on")
                .marker("es", "en")
                .marker("fr", "sur")
                .marker("de", "auf")
                .marker("id", "pada")
                .marker("vi", "trên")
                .marker("ru", "на")
                .marker("ar", "على")
                .marker("zh", "在"),
        )
        .build()
}

pub fn put() -> CommandSchema {
    SchemaBuilder::new("put", "content")
        .description("Put a value into a target")
        .role(
            RoleDefinition::new("value", SemanticRole::Patient)
                .required()
                .types(ANY),
        )
        .role(
            RoleDefinition::new("target", SemanticRole::Destination)
                .required()
                .types(ANY)
                .marker("en", "into")
                .marker("es", "en")
                .marker("fr", "dans")
                .marker("de", "in")
                .marker("id", "ke dalam")
                .marker("ar", "في"),
        )
        .build()
}

pub fn set() -> CommandSchema {
    SchemaBuilder::new("set", "state")
        .description("Set a property to a value")
        .role(RoleDefinition::new("target", SemanticRole::Patient).required())
        .role(
            RoleDefinition::new("value", SemanticRole::Goal)
                .required()
                .types(&[ValueType::Literal, ValueType::Reference, ValueType::Expression]),
        )
        .build()
}

pub fn show() -> CommandSchema {
    visibility("show", "Make an element visible")
}

pub fn hide() -> CommandSchema {
    visibility("hide", "Hide an element")
}

fn visibility(action: &str, description: &str) -> CommandSchema {
    SchemaBuilder::new(action, "visibility")
        .description(description)
        .role(RoleDefinition::new("item", SemanticRole::Patient).required())
        .role(
            RoleDefinition::new("manner", SemanticRole::Manner)
                .types(&[ValueType::Literal, ValueType::Reference]),
        )
        .role(
            RoleDefinition::new("condition", SemanticRole::Condition)
                .types(&[ValueType::Expression]),
        )
        .build()
}

pub fn increment() -> CommandSchema {
    SchemaBuilder::new("increment", "state")
        .description("Increase a numeric value")
        .role(RoleDefinition::new("target", SemanticRole::Patient).required())
        .role(
            RoleDefinition::new("quantity", SemanticRole::Quantity).types(&[ValueType::Literal]),
        )
        .build()
}

pub fn wait() -> CommandSchema {
    SchemaBuilder::new("wait", "timing")
        .description("Pause for a duration")
        .role(
            RoleDefinition::new("duration", SemanticRole::Duration)
                .required()
                .types(&[ValueType::Literal]),
        )
        .build()
}

pub fn fetch() -> CommandSchema {
    SchemaBuilder::new("fetch", "network")
        .description("Fetch a resource")
        .role(
            RoleDefinition::new("source", SemanticRole::Source)
                .required()
                .types(&[ValueType::Literal])
                .render("en", ""),
        )
        .role(
            RoleDefinition::new("method", SemanticRole::Method)
                .types(&[ValueType::Literal, ValueType::Reference]),
        )
        .build()
}

pub fn send() -> CommandSchema {
    SchemaBuilder::new("send", "events")
        .description("Send an event to a target")
        .role(
            RoleDefinition::new("event", SemanticRole::Patient)
                .required()
                .types(&[ValueType::Literal, ValueType::Reference]),
        )
        .role(RoleDefinition::new("target", SemanticRole::Destination).types(ANY))
        .build()
}

pub fn log() -> CommandSchema {
    SchemaBuilder::new("log", "output")
        .description("Write a value to the log")
        .role(
            RoleDefinition::new("value", SemanticRole::Patient)
                .required()
                .types(&[ValueType::Expression]),
        )
        .build()
}

pub fn convert() -> CommandSchema {
    SchemaBuilder::new("convert", "content")
        .description("Convert a value to another format")
        .role(RoleDefinition::new("value", SemanticRole::Patient).required())
        .role(
            RoleDefinition::new("format", SemanticRole::Goal)
                .types(&[ValueType::Literal, ValueType::Reference]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_schema_is_well_formed() {
        for schema in schemas() {
            assert!(schema.validate().is_ok(), "{}", schema.action);
            assert!(schema.required_roles().count() >= 1, "{}", schema.action);
        }
    }

    #[test]
    fn actions_are_unique() {
        let mut actions: Vec<String> = schemas().into_iter().map(|s| s.action).collect();
        let count = actions.len();
        actions.sort();
        actions.dedup();
        assert_eq!(actions.len(), count);
        assert_eq!(count, 13);
    }

    #[test]
    fn places_accept_multi_word_values() {
        for (schema, role) in [
            (add(), "list"),
            (remove(), "list"),
            (toggle(), "target"),
            (put(), "target"),
            (send(), "target"),
        ] {
            let role = schema.role(role).unwrap();
            assert!(
                role.expected_types.contains(&ValueType::Expression),
                "{}: {}",
                schema.action,
                role.name
            );
        }
    }

    #[test]
    fn add_puts_the_destination_first_in_sov() {
        let add = add();
        let item = add.role("item").unwrap();
        let list = add.role("list").unwrap();
        assert_eq!((item.svo_position, item.sov_position), (1, 2));
        assert_eq!((list.svo_position, list.sov_position), (2, 1));
    }
}
