//! Display format and conversions of `AppError`.

use pattern_registry::AppError;

#[test]
fn not_found_display_includes_subject() {
    let err = AppError::NotFound("resource 'patterns://ui/nope'".into());
    assert_eq!(err.to_string(), "not found: resource 'patterns://ui/nope'");
}

#[test]
fn load_display_names_category_and_key() {
    let err = AppError::Load {
        category: "ui".into(),
        content_key: "buttons".into(),
        cause: "file missing".into(),
    };
    assert_eq!(err.to_string(), "load: ui/buttons: file missing");
}

#[test]
fn duplicate_variants_are_distinct() {
    let uri = AppError::DuplicateUri("x".into());
    let prompt = AppError::DuplicatePrompt("x".into());
    assert_ne!(uri.to_string(), prompt.to_string());
    assert!(uri.to_string().starts_with("duplicate uri:"));
    assert!(prompt.to_string().starts_with("duplicate prompt:"));
}

#[test]
fn messages_have_no_trailing_period() {
    let errors = [
        AppError::Config("bad value".into()),
        AppError::Mcp("closed".into()),
        AppError::Io("denied".into()),
    ];
    for err in errors {
        let text = err.to_string();
        assert!(!text.ends_with('.'), "error message must not end with a period: {text}");
    }
}

#[test]
fn toml_errors_convert_to_config() {
    let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
    let err = AppError::from(toml_err);
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().starts_with("config: invalid config"));
}

#[test]
fn io_errors_convert_to_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = AppError::from(io_err);
    assert_eq!(err.to_string(), "io: denied");
}

#[test]
fn implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = AppError::NotFound("x".into());
    assert_error(&err);
    assert!(format!("{err:?}").contains("NotFound"));
}
