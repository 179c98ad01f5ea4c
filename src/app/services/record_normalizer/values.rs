//! Cell value resolution utilities for inventory sheets
//!
//! This module provides the per-cell resolution pipeline: trim, map empty
//! cells to the absent marker, give the not-applicable marker priority over
//! classification parsing, then apply the classification-specific parse.

use crate::app::models::{FieldKind, Value};
use crate::constants;

/// Resolve a raw cell into its typed value given its field's classification
///
/// Resolution order: surrounding whitespace is trimmed; an empty cell is
/// absent; a not-applicable marker stays the literal `"NA"` string whatever
/// the classification; everything else parses per classification.
pub fn resolve_cell(raw: &str, kind: FieldKind) -> Value {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Value::Absent;
    }
    if constants::is_not_applicable(trimmed) {
        return Value::NotApplicable;
    }

    match kind {
        FieldKind::Boolean => parse_boolean(trimmed),
        FieldKind::Multivalued => Value::List(split_multivalue(trimmed)),
        FieldKind::Identifier => parse_identifier(trimmed),
        FieldKind::Plain => Value::Text(trimmed.to_string()),
    }
}

/// Parse a yes/no answer cell
///
/// Recognizes `yes` and `no` case-insensitively and keeps the
/// not-applicable marker as its literal string. Any other answer resolves
/// to absent rather than an error, so one odd cell never fails a run.
pub fn parse_boolean(trimmed: &str) -> Value {
    if trimmed.eq_ignore_ascii_case(constants::BOOLEAN_TRUE_VALUE) {
        Value::Bool(true)
    } else if trimmed.eq_ignore_ascii_case(constants::BOOLEAN_FALSE_VALUE) {
        Value::Bool(false)
    } else if constants::is_not_applicable(trimmed) {
        Value::NotApplicable
    } else {
        Value::Absent
    }
}

/// Split a multivalue cell on the first delimiter present
///
/// Delimiters are tested in priority order and only the first one found is
/// used; segments are never re-split on lower-priority delimiters, so
/// `"Python, R; Matlab"` splits on the comma into `["Python", "R; Matlab"]`.
/// Segments are trimmed and empty segments are discarded. A cell without
/// any delimiter becomes a single-element list.
pub fn split_multivalue(trimmed: &str) -> Vec<String> {
    for delimiter in constants::MULTIVALUE_DELIMITERS {
        if trimmed.contains(delimiter) {
            return trimmed
                .split(delimiter)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect();
        }
    }

    vec![trimmed.to_string()]
}

/// Parse an identifier cell, keeping the raw string when it is not numeric
pub fn parse_identifier(trimmed: &str) -> Value {
    match trimmed.parse::<i64>() {
        Ok(id) => Value::Int(id),
        Err(_) => Value::Text(trimmed.to_string()),
    }
}
