//! Comprehensive unit tests for the record_writer module
//!
//! This module contains unit tests for the YAML writer and the YAML to JSON
//! transcoder, organized by logical functionality.

pub mod writer_tests;

// Common test utilities used across multiple test modules
use crate::app::models::{Record, Value};

/// Create a small record set covering every value kind
pub fn create_test_records() -> Vec<Record> {
    let mut first = Record::new();
    first.insert("id".to_string(), Value::Int(1));
    first.insert(
        "course_name".to_string(),
        Value::Text("Intro to MRI".to_string()),
    );
    first.insert(
        "keywords".to_string(),
        Value::List(vec!["MRI".to_string(), "neuroimaging".to_string()]),
    );
    first.insert("open_dataset".to_string(), Value::Bool(true));
    first.insert("notes".to_string(), Value::Absent);

    let mut second = Record::new();
    second.insert("id".to_string(), Value::Int(2));
    second.insert(
        "course_name".to_string(),
        Value::Text("Statistics Refresher".to_string()),
    );
    second.insert("keywords".to_string(), Value::NotApplicable);
    second.insert("open_dataset".to_string(), Value::Bool(false));
    second.insert(
        "notes".to_string(),
        Value::Text("runs twice a year".to_string()),
    );

    vec![first, second]
}
