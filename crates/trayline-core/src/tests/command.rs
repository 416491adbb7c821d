use crate::{Command, CoreError, Message, MenuNode};

use serde_json::json;

fn message(method: &str, params: Option<serde_json::Value>) -> Message {
    Message::new(method, params)
}

/// WHAT: setMenu parses nested nodes with defaults applied
/// WHY: Every node field is optional on the wire
#[test]
#[allow(clippy::unwrap_used)]
fn given_set_menu_when_parsing_then_defaults_filled_in() {
    // Given: Nodes with most fields omitted
    let msg = message(
        "setMenu",
        Some(json!({"items": [
            {"title": "A", "id": "a", "checked": true},
            {"separator": true},
            {"title": "Sub", "enabled": false, "items": [{"title": "B", "id": "b"}]}
        ]})),
    );

    // When: Interpreting the message
    let command = Command::from_message(msg).unwrap();

    // Then: Defaults are applied
    let Command::SetMenu(items) = command else {
        unreachable!("expected SetMenu");
    };
    assert_eq!(items.len(), 3);
    assert!(items[0].enabled && items[0].checked);
    assert!(items[1].separator && items[1].title.is_empty());
    assert!(!items[2].enabled);
    assert_eq!(items[2].children, vec![MenuNode::leaf("B", "b")]);
}

/// WHAT: setMenu without params or items is an empty menu
/// WHY: The parent may clear the menu by omission
#[test]
#[allow(clippy::unwrap_used)]
fn given_set_menu_without_items_when_parsing_then_empty_menu() {
    // Given/When/Then: Each omission form yields an empty menu
    for params in [None, Some(json!({})), Some(json!({"items": null}))] {
        let command = Command::from_message(message("setMenu", params)).unwrap();
        assert_eq!(command, Command::SetMenu(Vec::new()));
    }
}

/// WHAT: Mistyped node fields read as their defaults
/// WHY: One sloppy field must not discard the whole menu
#[test]
#[allow(clippy::unwrap_used)]
fn given_mistyped_node_fields_when_parsing_then_defaults_used() {
    // Given: Nulls and wrong types in every optional field, plus a non-object node
    let msg = message(
        "setMenu",
        Some(json!({"items": [
            {"title": "A", "id": "a"},
            {"title": null, "id": "b", "enabled": null, "checked": "yes", "items": null},
            {"title": 1, "id": 2, "separator": 1, "enabled": "no", "items": {"title": "X"}},
            "stray"
        ]})),
    );

    // When: Interpreting the message
    let Command::SetMenu(items) = Command::from_message(msg).unwrap() else {
        unreachable!("expected SetMenu");
    };

    // Then: Every node survives as a leaf with defaults filled in
    assert_eq!(
        items,
        vec![
            MenuNode::leaf("A", "a"),
            MenuNode::leaf("", "b"),
            MenuNode::default(),
            MenuNode::default(),
        ]
    );
}

/// WHAT: A non-array items value is an empty menu
/// WHY: Only structural shape matters, never field types
#[test]
#[allow(clippy::unwrap_used)]
fn given_non_array_items_when_parsing_then_empty_menu() {
    for params in [json!({"items": 3}), json!({"items": "nope"}), json!([1, 2])] {
        // When: Interpreting
        let command = Command::from_message(message("setMenu", Some(params))).unwrap();

        // Then: An empty menu
        assert_eq!(command, Command::SetMenu(Vec::new()));
    }
}

/// WHAT: setIcon and setTooltip require their field
/// WHY: Missing required fields make the command a no-op
#[test]
fn given_missing_required_field_when_parsing_then_invalid_params() {
    // Given: Commands with absent or mistyped fields
    let cases = [
        message("setIcon", None),
        message("setIcon", Some(json!({}))),
        message("setIcon", Some(json!({"base64": 5}))),
        message("setTooltip", Some(json!({"txt": "x"}))),
    ];

    for msg in cases {
        // When: Interpreting
        let result = Command::from_message(msg);

        // Then: InvalidParams
        assert!(matches!(result, Err(CoreError::InvalidParams { .. })));
    }
}

/// WHAT: Well-formed setIcon, setTooltip and quit are recognized
/// WHY: Basic command decoding
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_commands_when_parsing_then_recognized() {
    // Given/When/Then
    assert_eq!(
        Command::from_message(message("setIcon", Some(json!({"base64": "SGk="})))).unwrap(),
        Command::SetIcon("SGk=".to_string())
    );
    assert_eq!(
        Command::from_message(message("setTooltip", Some(json!({"text": ""})))).unwrap(),
        Command::SetTooltip(String::new())
    );
    assert_eq!(
        Command::from_message(message("quit", Some(json!({"ignored": true})))).unwrap(),
        Command::Quit
    );
}

/// WHAT: Unknown methods are reported as such
/// WHY: The session drops them without side effects
#[test]
fn given_unknown_method_when_parsing_then_unknown_method_error() {
    // Given: A method the helper does not implement
    let result = Command::from_message(message("setBadge", None));

    // Then: UnknownMethod carrying the name
    assert!(matches!(
        result,
        Err(CoreError::UnknownMethod { ref method, .. }) if method == "setBadge"
    ));
}
