//! Field classification schema for inventory sheets
//!
//! This module provides the classification map handed to the normalizer:
//! which header fields hold yes/no answers, which hold delimited multivalues,
//! and which field is the record identifier. Everything else is plain text.

use crate::app::models::FieldKind;
use crate::constants;
use std::collections::HashSet;

/// Classification map for the fields of one inventory sheet
///
/// Field names are matched exactly against the trimmed header names. The
/// identifier classification takes precedence over the name sets, so a
/// schema that lists the identifier field in one of the sets still treats
/// it as the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    boolean_fields: HashSet<String>,
    multivalued_fields: HashSet<String>,
    identifier_field: String,
}

impl FieldSchema {
    /// Create a schema from explicit field name sets
    pub fn new(
        boolean_fields: Vec<String>,
        multivalued_fields: Vec<String>,
        identifier_field: impl Into<String>,
    ) -> Self {
        Self {
            boolean_fields: boolean_fields.into_iter().collect(),
            multivalued_fields: multivalued_fields.into_iter().collect(),
            identifier_field: identifier_field.into(),
        }
    }

    /// Classify a header field by name
    pub fn classify(&self, field_name: &str) -> FieldKind {
        if field_name == self.identifier_field {
            FieldKind::Identifier
        } else if self.boolean_fields.contains(field_name) {
            FieldKind::Boolean
        } else if self.multivalued_fields.contains(field_name) {
            FieldKind::Multivalued
        } else {
            FieldKind::Plain
        }
    }

    /// Derive the record key for a header field
    ///
    /// Keys are the lowercased field name with spaces replaced by
    /// underscores. The identifier field is only lowercased, keeping its
    /// name intact.
    pub fn derive_key(&self, field_name: &str) -> String {
        let lowered = field_name.to_lowercase();
        if field_name == self.identifier_field {
            lowered
        } else {
            lowered.replace(' ', "_")
        }
    }

    /// Name of the identifier field
    pub fn identifier_field(&self) -> &str {
        &self.identifier_field
    }

    /// Number of classified (non-plain) field names in the schema
    pub fn classified_field_count(&self) -> usize {
        self.boolean_fields.len() + self.multivalued_fields.len() + 1
    }
}

impl Default for FieldSchema {
    /// Schema for the standard training inventory sheet
    fn default() -> Self {
        Self::new(
            constants::default_boolean_fields(),
            constants::default_multivalued_fields(),
            constants::DEFAULT_IDENTIFIER_FIELD,
        )
    }
}
