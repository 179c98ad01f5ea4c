//! Record normalizer for tab-separated inventory sheets
//!
//! This module turns a raw inventory sheet (header row, one discarded
//! description row, then data rows) into an ordered sequence of typed
//! records. Field classification, cell resolution, and record assembly are
//! small cohesive steps within this one unit.
//!
//! ## Architecture
//!
//! The normalizer is organized into logical components:
//! - [`normalizer`] - Core row processing and record assembly
//! - [`schema`] - Field classification and key derivation
//! - [`values`] - Cell value resolution utilities
//! - [`stats`] - Normalization statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use inventory_processor::app::services::record_normalizer::{FieldSchema, RecordNormalizer};
//!
//! # fn example() -> inventory_processor::Result<()> {
//! let normalizer = RecordNormalizer::new(FieldSchema::default());
//! let result = normalizer.normalize_content("ID\tCourse Name\n\t\n1\tIntro to MRI")?;
//!
//! println!(
//!     "Normalized {} records from {} data rows",
//!     result.records.len(),
//!     result.stats.rows_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod normalizer;
pub mod schema;
pub mod stats;
pub mod values;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use normalizer::RecordNormalizer;
pub use schema::FieldSchema;
pub use stats::{NormalizeResult, SheetStats};
