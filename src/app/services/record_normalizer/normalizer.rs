//! Core record normalizer implementation
//!
//! This module provides the row-processing orchestration: header capture,
//! unconditional description-row discard, and per-row record assembly via
//! the cell resolution pipeline.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use super::schema::FieldSchema;
use super::stats::{NormalizeResult, SheetStats};
use super::values::resolve_cell;
use crate::app::models::{FieldKind, Record};
use crate::constants;
use crate::{Error, Result};

/// Normalizer turning raw inventory sheets into typed records
///
/// The normalizer is a pure function of its input rows and schema: rows in,
/// records out, nothing retained between runs. Per-cell anomalies are
/// tolerated silently and surface only in the statistics; structurally
/// unusable input (an empty sheet, a header without usable names) is the
/// one error class.
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    schema: FieldSchema,
    delimiter: u8,
}

/// Header column prepared for record assembly
///
/// Empty-named header cells produce no column, so the assembly loop skips
/// their positions entirely.
#[derive(Debug, Clone)]
struct Column {
    key: String,
    kind: FieldKind,
}

impl RecordNormalizer {
    /// Create a normalizer with the default tab delimiter
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            schema,
            delimiter: constants::DEFAULT_DELIMITER,
        }
    }

    /// Override the cell delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Normalize a sheet file and return records with statistics
    pub fn normalize_file(&self, file_path: &Path) -> Result<NormalizeResult> {
        info!("Normalizing inventory sheet: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read sheet {}", file_path.display()), e)
        })?;

        self.normalize_content(&content)
    }

    /// Normalize sheet content already held in memory
    pub fn normalize_content(&self, content: &str) -> Result<NormalizeResult> {
        if content.trim().is_empty() {
            return Err(Error::sheet_format("input sheet is empty"));
        }

        let mut stats = SheetStats::new();
        let mut records = Vec::new();
        let mut columns: Vec<Option<Column>> = Vec::new();
        let mut header_captured = false;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        for (row_index, result) in reader.records().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    if row_index == constants::HEADER_ROW_INDEX {
                        return Err(Error::sheet_parsing(
                            "header row could not be read",
                            Some(e),
                        ));
                    }
                    if row_index == constants::DESCRIPTION_ROW_INDEX {
                        debug!("Discarding unreadable description row");
                    } else {
                        stats.rows_read += 1;
                        stats.rows_skipped += 1;
                        stats.errors.push(format!("Row {}: {}", row_index + 1, e));
                        warn!("Skipping unreadable row {}: {}", row_index + 1, e);
                    }
                    continue;
                }
            };

            if row_index == constants::HEADER_ROW_INDEX {
                columns = self.capture_header(&row, &mut stats)?;
                header_captured = true;
            } else if row_index == constants::DESCRIPTION_ROW_INDEX {
                debug!("Discarding description row");
            } else {
                stats.rows_read += 1;
                let record = self.assemble_record(&row, &columns, &mut stats);
                records.push(record);
                stats.records_parsed += 1;
            }
        }

        if !header_captured {
            return Err(Error::sheet_format("no header row found"));
        }

        info!(
            "Normalized {} records from {} data rows",
            stats.records_parsed, stats.rows_read
        );

        Ok(NormalizeResult { records, stats })
    }

    /// Capture the header row into assembly-ready columns
    ///
    /// Header names are trimmed and trusted. Empty names lose their column
    /// with a warning; duplicate derived keys are kept (the later column
    /// overwrites earlier values during assembly) and warned about.
    fn capture_header(
        &self,
        row: &csv::StringRecord,
        stats: &mut SheetStats,
    ) -> Result<Vec<Option<Column>>> {
        let mut columns = Vec::with_capacity(row.len());
        let mut seen_keys: HashSet<String> = HashSet::new();

        for (index, name) in row.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                warn!(
                    "Header column {} has an empty name; its cells will be ignored",
                    index + 1
                );
                columns.push(None);
                continue;
            }

            let key = self.schema.derive_key(name);
            let kind = self.schema.classify(name);

            if !seen_keys.insert(key.clone()) {
                warn!(
                    "Duplicate header key '{}'; the later column overwrites earlier values",
                    key
                );
                stats.duplicate_headers.push(key.clone());
            }

            columns.push(Some(Column { key, kind }));
        }

        stats.header_fields = columns.iter().flatten().count();
        if stats.header_fields == 0 {
            return Err(Error::sheet_format("header row has no usable field names"));
        }

        debug!("Captured {} header fields", stats.header_fields);
        Ok(columns)
    }

    /// Assemble one record by zipping a data row against the header columns
    ///
    /// Rows shorter than the header resolve their missing positions to
    /// absent; columns beyond the header are ignored.
    fn assemble_record(
        &self,
        row: &csv::StringRecord,
        columns: &[Option<Column>],
        stats: &mut SheetStats,
    ) -> Record {
        let mut record = Record::with_capacity(columns.len());

        for (index, column) in columns.iter().enumerate() {
            let column = match column {
                Some(column) => column,
                None => continue,
            };

            let raw = row.get(index).unwrap_or("");
            let value = resolve_cell(raw, column.kind);

            if value.is_absent() {
                stats.cells_absent += 1;
                if column.kind == FieldKind::Boolean && !raw.trim().is_empty() {
                    stats.unrecognized_booleans += 1;
                    debug!(
                        "Unrecognized boolean answer '{}' for '{}'",
                        raw.trim(),
                        column.key
                    );
                }
            } else {
                stats.cells_filled += 1;
            }

            record.insert(column.key.clone(), value);
        }

        record
    }
}
