//! Data models for conversion run reports
//!
//! This module contains the report written alongside the YAML output after a
//! conversion run, recording what was read, what was produced, and anything
//! the normalizer flagged along the way.

use crate::app::services::record_normalizer::SheetStats;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report describing one completed conversion run
///
/// Written as pretty JSON under the metadata directory next to the YAML
/// output, so a run can be audited after the fact without re-reading the
/// input sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Version of the tool that produced this report
    pub tool_version: String,

    /// Timestamp when the conversion completed
    pub completed_at: DateTime<Utc>,

    /// Input sheet that was normalized
    pub input_file: PathBuf,

    /// Number of data rows read from the sheet
    pub rows_read: usize,

    /// Number of records written to the output
    pub records_written: usize,

    /// Number of cells that resolved to absent
    pub absent_cells: usize,

    /// Number of boolean cells carrying an unrecognized marker
    pub unrecognized_booleans: usize,

    /// Derived keys that appeared more than once in the header row
    pub duplicate_headers: Vec<String>,

    /// Files produced by this run with their sizes
    pub outputs: Vec<OutputFile>,
}

/// One file produced by a conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFile {
    /// Path of the produced file
    pub path: PathBuf,

    /// Size of the file in bytes
    pub size_bytes: u64,
}

impl ConversionReport {
    /// Build a report from normalization statistics
    pub fn from_stats(
        input_file: impl Into<PathBuf>,
        stats: &SheetStats,
        records_written: usize,
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            completed_at: Utc::now(),
            input_file: input_file.into(),
            rows_read: stats.rows_read,
            records_written,
            absent_cells: stats.cells_absent,
            unrecognized_booleans: stats.unrecognized_booleans,
            duplicate_headers: stats.duplicate_headers.clone(),
            outputs: Vec::new(),
        }
    }

    /// Record a produced file and its size
    pub fn add_output(&mut self, path: impl Into<PathBuf>, size_bytes: u64) {
        self.outputs.push(OutputFile {
            path: path.into(),
            size_bytes,
        });
    }

    /// Write the report as pretty JSON, creating the parent directory on demand
    pub async fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::json_serialization("Failed to serialize conversion report", e))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io("Failed to create metadata directory", e))?;
        }

        tokio::fs::write(path, json.as_bytes())
            .await
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        Ok(())
    }
}
