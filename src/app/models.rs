//! Data models for inventory processing
//!
//! This module contains the core data structures for representing normalized
//! inventory records: the field classification kinds, the typed cell value,
//! and the ordered record mapping produced for each data row.

use crate::constants;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod report;

// =============================================================================
// Field Classification
// =============================================================================

/// Classification assigned to a header field, driving how its cells resolve
///
/// Classification is name-based: the schema carries the sets of boolean and
/// multivalued field names plus the identifier field name, and every other
/// header field defaults to `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Yes/no answer cells, resolved to a tri-state boolean
    Boolean,

    /// Cells encoding several delimited values, resolved to a string list
    Multivalued,

    /// The record identifier, resolved to an integer where possible
    Identifier,

    /// Everything else, resolved to the trimmed string
    Plain,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Multivalued => "multivalued",
            FieldKind::Identifier => "identifier",
            FieldKind::Plain => "plain",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Typed Cell Value
// =============================================================================

/// Resolved value of a single cell after normalization
///
/// `Absent` is distinct from the empty string and from `NotApplicable`: an
/// empty or unrecognized cell resolves to `Absent`, while a cell containing
/// the not-applicable marker resolves to `NotApplicable` regardless of its
/// field's classification. On serialization `Absent` renders as an explicit
/// null and `NotApplicable` as the literal string `"NA"`, so record sets
/// round-trip through YAML and JSON without losing either state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Empty or unrecognized cell; serialized as null
    Absent,

    /// Recognized yes/no answer
    Bool(bool),

    /// Parsed identifier
    Int(i64),

    /// Plain text, or an identifier that failed integer parsing
    Text(String),

    /// Ordered multivalue segments
    List(Vec<String>),

    /// The not-applicable marker; serialized as the string "NA"
    NotApplicable,
}

impl Value {
    /// Check whether this value is the absent marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Get the boolean payload if this is a recognized yes/no value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload if this is a parsed identifier
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the text payload if this is a plain string value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the segment list if this is a multivalue
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Human-readable name of the value's shape, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::NotApplicable => "not-applicable",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Absent => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::NotApplicable => serializer.serialize_str(constants::NOT_APPLICABLE_VALUE),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "null, a boolean, an integer, a string, or a sequence of strings")
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Absent)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Absent)
            }

            fn visit_bool<E>(self, b: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(b))
            }

            fn visit_i64<E>(self, i: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(i))
            }

            fn visit_u64<E>(self, u: u64) -> std::result::Result<Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(u)
                    .map(Value::Int)
                    .map_err(|_| E::custom(format!("integer {} out of range", u)))
            }

            fn visit_str<E>(self, s: &str) -> std::result::Result<Value, E> {
                // Only the exact serialized marker maps back; case folding
                // belongs to cell resolution, not to the wire format
                if s == constants::NOT_APPLICABLE_VALUE {
                    Ok(Value::NotApplicable)
                } else {
                    Ok(Value::Text(s.to_string()))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<String>()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// =============================================================================
// Record Mapping
// =============================================================================

/// One normalized data row, keyed by derived field key
///
/// Keys keep header order so serialized record sets read like the source
/// sheet. Inserting an existing key replaces its value in place (the key
/// keeps its original position), which is how duplicate header columns end
/// up last-one-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create an empty record sized for a known header width
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert a key/value pair, replacing in place on duplicate keys
    ///
    /// Returns the displaced value when the key already existed.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        for (existing, slot) in &mut self.fields {
            if *existing == key {
                return Some(std::mem::replace(slot, value));
            }
        }
        self.fields.push((key, value));
        None
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of field keys to cell values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Record::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    record.insert(key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut record = Record::new();
        record.insert("id", Value::Int(7));
        record.insert("course_name", Value::Text("Intro to MRI".to_string()));
        record.insert(
            "keywords",
            Value::List(vec!["fMRI".to_string(), "BIDS".to_string()]),
        );
        record.insert("open_dataset", Value::Bool(true));
        record.insert("assessment", Value::NotApplicable);
        record.insert("notes", Value::Absent);
        record
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_accessors() {
            assert!(Value::Absent.is_absent());
            assert!(!Value::NotApplicable.is_absent());
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert_eq!(Value::Int(42).as_int(), Some(42));
            assert_eq!(Value::Text("x".to_string()).as_text(), Some("x"));
            assert_eq!(
                Value::List(vec!["a".to_string()]).as_list(),
                Some(&["a".to_string()][..])
            );
            assert_eq!(Value::Absent.as_bool(), None);
            assert_eq!(Value::NotApplicable.as_text(), None);
        }

        #[test]
        fn test_from_conversions() {
            assert_eq!(Value::from(true), Value::Bool(true));
            assert_eq!(Value::from(42i64), Value::Int(42));
            assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
            assert_eq!(
                Value::from(vec!["a".to_string(), "b".to_string()]),
                Value::List(vec!["a".to_string(), "b".to_string()])
            );
        }

        #[test]
        fn test_json_serialization() {
            assert_eq!(serde_json::to_string(&Value::Absent).unwrap(), "null");
            assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
            assert_eq!(serde_json::to_string(&Value::Int(42)).unwrap(), "42");
            assert_eq!(
                serde_json::to_string(&Value::NotApplicable).unwrap(),
                "\"NA\""
            );
            assert_eq!(
                serde_json::to_string(&Value::List(vec!["R".to_string(), "Python".to_string()]))
                    .unwrap(),
                "[\"R\",\"Python\"]"
            );
        }

        #[test]
        fn test_yaml_serialization() {
            assert_eq!(serde_yaml::to_string(&Value::Absent).unwrap(), "null\n");
            assert_eq!(serde_yaml::to_string(&Value::NotApplicable).unwrap(), "NA\n");
            assert_eq!(serde_yaml::to_string(&Value::Int(7)).unwrap(), "7\n");
        }

        #[test]
        fn test_deserialization_shapes() {
            assert_eq!(
                serde_json::from_str::<Value>("null").unwrap(),
                Value::Absent
            );
            assert_eq!(
                serde_json::from_str::<Value>("true").unwrap(),
                Value::Bool(true)
            );
            assert_eq!(serde_json::from_str::<Value>("42").unwrap(), Value::Int(42));
            assert_eq!(
                serde_json::from_str::<Value>("\"NA\"").unwrap(),
                Value::NotApplicable
            );
            assert_eq!(
                serde_json::from_str::<Value>("[\"a\",\"b\"]").unwrap(),
                Value::List(vec!["a".to_string(), "b".to_string()])
            );
        }

        #[test]
        fn test_na_marker_is_exact_on_the_wire() {
            // Lowercase "na" in a serialized document is ordinary text; the
            // case-insensitive match belongs to cell resolution only
            assert_eq!(
                serde_json::from_str::<Value>("\"na\"").unwrap(),
                Value::Text("na".to_string())
            );
            assert_eq!(
                serde_json::from_str::<Value>("\"N/A\"").unwrap(),
                Value::Text("N/A".to_string())
            );
        }

        #[test]
        fn test_type_names() {
            assert_eq!(Value::Absent.type_name(), "absent");
            assert_eq!(Value::List(Vec::new()).type_name(), "list");
            assert_eq!(Value::NotApplicable.type_name(), "not-applicable");
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_insert_and_lookup() {
            let record = sample_record();
            assert_eq!(record.len(), 6);
            assert_eq!(record.get("id"), Some(&Value::Int(7)));
            assert_eq!(record.get("notes"), Some(&Value::Absent));
            assert!(record.contains_key("open_dataset"));
            assert!(!record.contains_key("missing_key"));
        }

        #[test]
        fn test_duplicate_insert_replaces_in_place() {
            let mut record = Record::new();
            record.insert("id", Value::Int(1));
            record.insert("name", Value::Text("first".to_string()));

            let displaced = record.insert("id", Value::Int(2));
            assert_eq!(displaced, Some(Value::Int(1)));
            assert_eq!(record.len(), 2);
            assert_eq!(record.get("id"), Some(&Value::Int(2)));

            // Position of the replaced key is unchanged
            let keys: Vec<&str> = record.keys().collect();
            assert_eq!(keys, vec!["id", "name"]);
        }

        #[test]
        fn test_key_order_survives_serialization() {
            let mut record = Record::new();
            record.insert("zebra", Value::Int(1));
            record.insert("apple", Value::Int(2));

            let yaml = serde_yaml::to_string(&record).unwrap();
            let zebra_pos = yaml.find("zebra").unwrap();
            let apple_pos = yaml.find("apple").unwrap();
            assert!(zebra_pos < apple_pos);
        }

        #[test]
        fn test_yaml_round_trip() {
            let record = sample_record();
            let yaml = serde_yaml::to_string(&record).unwrap();
            let back: Record = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(back, record);
        }

        #[test]
        fn test_json_round_trip_preserves_absent_and_na() {
            let record = sample_record();
            let json = serde_json::to_string(&record).unwrap();
            assert!(json.contains("\"notes\":null"));
            assert!(json.contains("\"assessment\":\"NA\""));

            let back: Record = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
        }

        #[test]
        fn test_from_iterator() {
            let record: Record = vec![
                ("a".to_string(), Value::Int(1)),
                ("b".to_string(), Value::Int(2)),
                ("a".to_string(), Value::Int(3)),
            ]
            .into_iter()
            .collect();

            assert_eq!(record.len(), 2);
            assert_eq!(record.get("a"), Some(&Value::Int(3)));
        }
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Boolean.to_string(), "boolean");
        assert_eq!(FieldKind::Multivalued.to_string(), "multivalued");
        assert_eq!(FieldKind::Identifier.to_string(), "identifier");
        assert_eq!(FieldKind::Plain.to_string(), "plain");
    }
}
