//! Tests for field classification and key derivation

use crate::app::models::FieldKind;
use crate::app::services::record_normalizer::FieldSchema;

#[test]
fn test_default_schema_classification() {
    let schema = FieldSchema::default();

    assert_eq!(schema.classify("ID"), FieldKind::Identifier);
    assert_eq!(schema.classify("Open Dataset"), FieldKind::Boolean);
    assert_eq!(schema.classify("Assessment"), FieldKind::Boolean);
    assert_eq!(
        schema.classify("Exclude from ReproInventory"),
        FieldKind::Boolean
    );
    assert_eq!(schema.classify("Keywords"), FieldKind::Multivalued);
    assert_eq!(schema.classify("Programming Language"), FieldKind::Multivalued);
    assert_eq!(schema.classify("Course Name"), FieldKind::Plain);
    assert_eq!(schema.classify("URL"), FieldKind::Plain);
}

#[test]
fn test_classification_is_exact_match() {
    let schema = FieldSchema::default();

    // Casing and spacing must match the configured names
    assert_eq!(schema.classify("open dataset"), FieldKind::Plain);
    assert_eq!(schema.classify("keywords"), FieldKind::Plain);
    assert_eq!(schema.classify("id"), FieldKind::Plain);
    assert_eq!(schema.classify("Keywords "), FieldKind::Plain);
}

#[test]
fn test_key_derivation() {
    let schema = FieldSchema::default();

    assert_eq!(schema.derive_key("Course Name"), "course_name");
    assert_eq!(schema.derive_key("URL"), "url");
    assert_eq!(
        schema.derive_key("Exclude from ReproInventory"),
        "exclude_from_reproinventory"
    );
    assert_eq!(schema.derive_key("Neuroimaging Software"), "neuroimaging_software");
}

#[test]
fn test_identifier_key_keeps_spaces() {
    let schema = FieldSchema::new(Vec::new(), Vec::new(), "Item Code");

    // The identifier key is lowercased only
    assert_eq!(schema.derive_key("Item Code"), "item code");
    // Every other field still gets underscores
    assert_eq!(schema.derive_key("Course Name"), "course_name");
}

#[test]
fn test_default_identifier_key_is_id() {
    let schema = FieldSchema::default();
    assert_eq!(schema.identifier_field(), "ID");
    assert_eq!(schema.derive_key("ID"), "id");
}

#[test]
fn test_identifier_precedence_over_sets() {
    let schema = FieldSchema::new(
        vec!["Code".to_string()],
        vec!["Code".to_string()],
        "Code",
    );
    assert_eq!(schema.classify("Code"), FieldKind::Identifier);
}

#[test]
fn test_custom_schema() {
    let schema = FieldSchema::new(
        vec!["Active".to_string()],
        vec!["Tags".to_string()],
        "Key",
    );

    assert_eq!(schema.classify("Active"), FieldKind::Boolean);
    assert_eq!(schema.classify("Tags"), FieldKind::Multivalued);
    assert_eq!(schema.classify("Key"), FieldKind::Identifier);
    assert_eq!(schema.classify("Anything Else"), FieldKind::Plain);
    assert_eq!(schema.classified_field_count(), 3);
}
