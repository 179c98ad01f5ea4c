//! Persistence for normalized inventory records
//!
//! This module writes the record sets produced by the normalizer to disk as
//! YAML, and transcodes YAML documents into pretty-printed JSON for the
//! viewer. Output directories are created on demand so a fresh checkout can
//! run the full pipeline without any setup.
//!
//! ## Architecture
//!
//! The writer is organized into logical components:
//! - [`writer`] - YAML serialization of record sets with write statistics
//! - [`transcode`] - Generic YAML to JSON document transcoding
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inventory_processor::app::models::{Record, Value};
//! use inventory_processor::app::services::record_writer::RecordWriter;
//!
//! # async fn example() -> inventory_processor::Result<()> {
//! let mut record = Record::new();
//! record.insert("id".to_string(), Value::Int(1));
//!
//! let writer = RecordWriter::new("output/inventory_data.yaml");
//! let stats = writer.write_records(&[record]).await?;
//!
//! println!(
//!     "Wrote {} records ({} bytes) to {}",
//!     stats.records_written,
//!     stats.bytes_written,
//!     stats.output_path.display()
//! );
//! # Ok(())
//! # }
//! ```

pub mod transcode;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use transcode::{transcode_yaml_to_json, yaml_to_json_string};
pub use writer::{write_records_to_yaml, RecordWriter, WriteStats};
