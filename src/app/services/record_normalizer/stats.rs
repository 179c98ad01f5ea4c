//! Normalization statistics and result structures
//!
//! This module provides types for tracking how a sheet normalized: row and
//! cell counts, silently tolerated anomalies, and the ordered record output
//! handed to the persistence layer.

use crate::app::models::Record;

/// Normalization result with records and statistics
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// Normalized records in source row order
    pub records: Vec<Record>,

    /// Statistics gathered while normalizing
    pub stats: SheetStats,
}

/// Statistics for one sheet normalization run
#[derive(Debug, Clone)]
pub struct SheetStats {
    /// Usable header fields (empty-named columns excluded)
    pub header_fields: usize,

    /// Data rows encountered (header and description rows excluded)
    pub rows_read: usize,

    /// Records successfully assembled
    pub records_parsed: usize,

    /// Rows skipped because they could not be read
    pub rows_skipped: usize,

    /// Cells resolved to a concrete value
    pub cells_filled: usize,

    /// Cells resolved to the absent marker
    pub cells_absent: usize,

    /// Boolean cells dropped as unrecognized answers
    pub unrecognized_booleans: usize,

    /// Derived keys that appeared more than once in the header
    pub duplicate_headers: Vec<String>,

    /// Row-level read errors, for debugging
    pub errors: Vec<String>,
}

impl SheetStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_fields: 0,
            rows_read: 0,
            records_parsed: 0,
            rows_skipped: 0,
            cells_filled: 0,
            cells_absent: 0,
            unrecognized_booleans: 0,
            duplicate_headers: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Calculate row success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if normalization was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Total cells resolved, filled and absent together
    pub fn cells_total(&self) -> usize {
        self.cells_filled + self.cells_absent
    }
}

impl Default for SheetStats {
    fn default() -> Self {
        Self::new()
    }
}
