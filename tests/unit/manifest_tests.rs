//! `ManifestStore` construction, ordering and lookup.

use pattern_registry::models::resource::ResourceDescriptor;
use pattern_registry::registry::ManifestStore;
use pattern_registry::AppError;

fn descriptors() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new("patterns://ui/forms", "Forms", "ui", "forms"),
        ResourceDescriptor::new("patterns://api/pagination", "Pagination", "api", "pagination")
            .with_description("Cursor pagination"),
        ResourceDescriptor::new("patterns://ui/buttons", "Buttons", "ui", "buttons")
            .with_mime_type("text/plain"),
    ]
}

#[test]
fn find_by_uri_returns_exact_descriptor() {
    let input = descriptors();
    let store = ManifestStore::new(input.clone()).expect("valid manifest");
    for descriptor in &input {
        assert_eq!(store.find_by_uri(&descriptor.uri).expect("present"), descriptor);
    }
}

#[test]
fn list_all_preserves_insertion_order() {
    let input = descriptors();
    let store = ManifestStore::new(input.clone()).expect("valid manifest");
    let uris: Vec<&str> = store.list_all().iter().map(|d| d.uri.as_str()).collect();
    assert_eq!(
        uris,
        vec![
            "patterns://ui/forms",
            "patterns://api/pagination",
            "patterns://ui/buttons"
        ]
    );
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn duplicate_uri_is_rejected() {
    let mut input = descriptors();
    input.push(ResourceDescriptor::new("patterns://ui/forms", "Forms again", "ui", "forms-v2"));
    let err = ManifestStore::new(input).expect_err("duplicate must be rejected");
    match err {
        AppError::DuplicateUri(uri) => assert_eq!(uri, "patterns://ui/forms"),
        other => panic!("expected DuplicateUri, got {other:?}"),
    }
}

#[test]
fn shared_content_unit_is_allowed() {
    let input = vec![
        ResourceDescriptor::new("patterns://ui/buttons", "Buttons", "ui", "buttons"),
        ResourceDescriptor::new("patterns://legacy/buttons", "Buttons (legacy)", "ui", "buttons"),
    ];
    assert!(ManifestStore::new(input).is_ok());
}

#[test]
fn unknown_uri_is_not_found() {
    let store = ManifestStore::new(descriptors()).expect("valid manifest");
    let err = store.find_by_uri("patterns://ui/missing").expect_err("absent");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn uri_lookup_is_exact() {
    let store = ManifestStore::new(descriptors()).expect("valid manifest");
    assert!(store.find_by_uri("patterns://ui/forms/").is_err());
    assert!(store.find_by_uri("PATTERNS://ui/forms").is_err());
}

#[test]
fn empty_manifest_is_valid() {
    let store = ManifestStore::new(Vec::new()).expect("empty manifest");
    assert!(store.is_empty());
    assert!(store.list_all().is_empty());
}
