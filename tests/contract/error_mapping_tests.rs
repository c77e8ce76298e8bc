//! Protocol error codes and argument coercion at the handler boundary.

use pattern_registry::mcp::handler::{prompt_args, prompt_error, resource_error};
use pattern_registry::AppError;
use serde_json::json;

#[test]
fn unknown_resource_maps_to_resource_not_found() {
    let err = resource_error(&AppError::NotFound("resource 'patterns://x'".into()));
    assert_eq!(err.code.0, -32002);
    assert!(err.message.contains("patterns://x"));
}

#[test]
fn unknown_prompt_maps_to_invalid_params() {
    let err = prompt_error(&AppError::NotFound("prompt 'nonexistent_prompt'".into()));
    assert_eq!(err.code.0, -32602);
    assert!(err.message.contains("nonexistent_prompt"));
}

#[test]
fn load_failure_maps_to_internal_error() {
    let err = resource_error(&AppError::Load {
        category: "ui".into(),
        content_key: "buttons".into(),
        cause: "permission denied".into(),
    });
    assert_eq!(err.code.0, -32603);
    assert!(err.message.contains("ui/buttons"));
}

#[test]
fn other_prompt_failures_map_to_internal_error() {
    let err = prompt_error(&AppError::Config("broken".into()));
    assert_eq!(err.code.0, -32603);
}

#[test]
fn prompt_args_keep_strings_and_stringify_other_values() {
    let value = json!({
        "client_name": "Acme",
        "seats": 12,
        "priority": true,
        "notes": null,
    });
    let args = prompt_args(value.as_object());

    assert_eq!(args.len(), 3);
    assert_eq!(args["client_name"], "Acme");
    assert_eq!(args["seats"], "12");
    assert_eq!(args["priority"], "true");
    assert!(!args.contains_key("notes"));
}

#[test]
fn missing_argument_object_yields_empty_args() {
    assert!(prompt_args(None).is_empty());
}
