//! YAML persistence for normalized record sets
//!
//! This module contains the RecordWriter used by the convert pipeline to
//! serialize an ordered record set to a YAML file on disk.

use crate::app::models::Record;
use crate::{Error, Result};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Statistics describing a completed write operation
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// Number of records serialized
    pub records_written: usize,
    /// Total bytes written to the output file
    pub bytes_written: usize,
    /// Path of the file that was written
    pub output_path: PathBuf,
}

/// Writer for persisting normalized records as a YAML sequence
///
/// The writer serializes the whole record set in one pass and creates the
/// output file's parent directory when it does not exist yet. Key order
/// within each record is preserved exactly as the normalizer produced it,
/// and absent values are written as explicit nulls so every record carries
/// the full header key set.
pub struct RecordWriter {
    /// Output file path
    output_path: PathBuf,
}

impl RecordWriter {
    /// Create a new RecordWriter for the given output path
    ///
    /// Nothing is written until [`write_records`](Self::write_records) runs.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Get the output file path
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Serialize the records to YAML and write them to the output path
    ///
    /// An empty record set produces a valid empty YAML sequence, so a
    /// header-only input sheet still round-trips cleanly.
    pub async fn write_records(&self, records: &[Record]) -> Result<WriteStats> {
        info!(
            "Writing {} records to {}",
            records.len(),
            self.output_path.display()
        );

        let yaml = serde_yaml::to_string(&records)
            .map_err(|e| Error::yaml_serialization("Failed to serialize records", e))?;

        if let Some(parent) = self.output_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io("Failed to create output directory", e))?;
        }

        tokio::fs::write(&self.output_path, yaml.as_bytes())
            .await
            .map_err(|e| {
                Error::io(
                    format!("Failed to write {}", self.output_path.display()),
                    e,
                )
            })?;

        debug!(
            "YAML output complete: {} bytes at {}",
            yaml.len(),
            self.output_path.display()
        );

        Ok(WriteStats {
            records_written: records.len(),
            bytes_written: yaml.len(),
            output_path: self.output_path.clone(),
        })
    }
}

/// Write a record set to a YAML file in one call
///
/// Convenience wrapper used by the convert command.
pub async fn write_records_to_yaml(records: &[Record], output_path: &Path) -> Result<WriteStats> {
    RecordWriter::new(output_path).write_records(records).await
}
