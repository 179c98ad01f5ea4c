//! Unit tests for YAML record persistence

use crate::app::models::{Record, Value};
use crate::app::services::record_writer::tests::create_test_records;
use crate::app::services::record_writer::{write_records_to_yaml, RecordWriter};
use tempfile::TempDir;

#[tokio::test]
async fn test_write_records_creates_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    let records = create_test_records();
    let writer = RecordWriter::new(&output_path);
    let stats = writer.write_records(&records).await.unwrap();

    assert_eq!(stats.records_written, 2);
    assert_eq!(stats.output_path, output_path);
    assert!(output_path.exists());

    let on_disk = std::fs::metadata(&output_path).unwrap().len() as usize;
    assert_eq!(stats.bytes_written, on_disk);
}

#[tokio::test]
async fn test_written_yaml_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    let records = create_test_records();
    write_records_to_yaml(&records, &output_path).await.unwrap();

    let yaml = std::fs::read_to_string(&output_path).unwrap();
    let restored: Vec<Record> = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(restored, records);
    assert_eq!(restored[0].get("id"), Some(&Value::Int(1)));
    assert_eq!(restored[0].get("notes"), Some(&Value::Absent));
    assert_eq!(restored[1].get("keywords"), Some(&Value::NotApplicable));
}

#[tokio::test]
async fn test_absent_values_appear_as_explicit_nulls() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    write_records_to_yaml(&create_test_records(), &output_path)
        .await
        .unwrap();

    // The absent notes cell must still be present as a key with a null
    // value, never dropped from the record.
    let yaml = std::fs::read_to_string(&output_path).unwrap();
    assert!(yaml.contains("notes: null"));
}

#[tokio::test]
async fn test_key_order_matches_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    write_records_to_yaml(&create_test_records(), &output_path)
        .await
        .unwrap();

    let yaml = std::fs::read_to_string(&output_path).unwrap();
    let id = yaml.find("id:").unwrap();
    let course_name = yaml.find("course_name:").unwrap();
    let keywords = yaml.find("keywords:").unwrap();
    assert!(id < course_name);
    assert!(course_name < keywords);
}

#[tokio::test]
async fn test_missing_output_directories_are_created() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir
        .path()
        .join("nested")
        .join("output")
        .join("inventory_data.yaml");

    let stats = write_records_to_yaml(&create_test_records(), &output_path)
        .await
        .unwrap();

    assert!(output_path.exists());
    assert!(stats.bytes_written > 0);
}

#[tokio::test]
async fn test_empty_record_set_writes_empty_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    let stats = write_records_to_yaml(&[], &output_path).await.unwrap();
    assert_eq!(stats.records_written, 0);

    let yaml = std::fs::read_to_string(&output_path).unwrap();
    let restored: Vec<Record> = serde_yaml::from_str(&yaml).unwrap();
    assert!(restored.is_empty());
}

#[tokio::test]
async fn test_overwrite_replaces_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory_data.yaml");

    write_records_to_yaml(&create_test_records(), &output_path)
        .await
        .unwrap();

    let mut only = Record::new();
    only.insert("id".to_string(), Value::Int(99));
    write_records_to_yaml(&[only], &output_path).await.unwrap();

    let restored: Vec<Record> =
        serde_yaml::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].get("id"), Some(&Value::Int(99)));
}
