//! Application constants for the inventory processor
//!
//! This module contains the default field classification sets, sheet layout
//! markers, default file locations, and server defaults used throughout the
//! inventory processor application.

// =============================================================================
// Sheet Layout
// =============================================================================

/// Default cell delimiter for inventory sheets (tab-separated export)
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Row index of the header row (field names)
pub const HEADER_ROW_INDEX: usize = 0;

/// Row index of the human-readable description row, always discarded
pub const DESCRIPTION_ROW_INDEX: usize = 1;

/// Literal used in sheets to mark a value as not applicable
pub const NOT_APPLICABLE_VALUE: &str = "NA";

/// Recognized boolean lexemes (matched case-insensitively)
pub const BOOLEAN_TRUE_VALUE: &str = "yes";
pub const BOOLEAN_FALSE_VALUE: &str = "no";

/// Multivalue cell delimiters in priority order; the first one present in a
/// cell is the only one applied
pub const MULTIVALUE_DELIMITERS: &[&str] = &[",", ";", " / "];

// =============================================================================
// Default Field Classification
// =============================================================================

/// Field names whose cells encode several delimited values
pub const DEFAULT_MULTIVALUED_FIELDS: &[&str] = &[
    "Tag Team",
    "Level",
    "Platform",
    "Keywords",
    "Instruction Medium",
    "Delivery",
    "Language",
    "Programming Language",
    "Neuroimaging Software",
    "Imaging Modality",
    "Quadrants",
];

/// Field names whose cells encode yes/no answers
pub const DEFAULT_BOOLEAN_FIELDS: &[&str] =
    &["Open Dataset", "Assessment", "Exclude from ReproInventory"];

/// Field name treated as the record identifier
pub const DEFAULT_IDENTIFIER_FIELD: &str = "ID";

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default input sheet filename (tab-separated inventory export)
pub const DEFAULT_INPUT_FILE: &str = "inventory.tsv";

/// Default output directory for generated record sets
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Normalized record set filename (YAML)
pub const YAML_OUTPUT_FILENAME: &str = "inventory_data.yaml";

/// Transcoded record set filename (JSON, consumed by the front end)
pub const JSON_OUTPUT_FILENAME: &str = "inventory_data.json";

/// Metadata directory name in output
pub const METADATA_OUTPUT_DIR: &str = "metadata";

/// Conversion report filename
pub const CONVERSION_REPORT_FILENAME: &str = "conversion_report.json";

/// Per-user configuration file location under the platform config dir
pub const CONFIG_DIR_NAME: &str = "inventory-processor";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Viewer Server Defaults
// =============================================================================

/// Defaults for the built-in viewer API
pub mod server {
    /// Bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Bind port
    pub const DEFAULT_PORT: u16 = 5000;

    /// Tabular file served verbatim as JSON records
    pub const DEFAULT_DATA_FILE: &str = "data.csv";

    /// Directory holding the static viewer page and its assets
    pub const DEFAULT_ASSETS_DIR: &str = "assets";
}

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment overrides applied between the config file and CLI flags
pub mod env {
    pub const INPUT_FILE: &str = "INVENTORY_PROCESSOR_INPUT";
    pub const OUTPUT_DIR: &str = "INVENTORY_PROCESSOR_OUTPUT";
    pub const DATA_FILE: &str = "INVENTORY_PROCESSOR_DATA_FILE";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a trimmed cell value is the not-applicable marker
pub fn is_not_applicable(value: &str) -> bool {
    value.eq_ignore_ascii_case(NOT_APPLICABLE_VALUE)
}

/// Default multivalued field names as owned strings (configuration seed)
pub fn default_multivalued_fields() -> Vec<String> {
    DEFAULT_MULTIVALUED_FIELDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Default boolean field names as owned strings (configuration seed)
pub fn default_boolean_fields() -> Vec<String> {
    DEFAULT_BOOLEAN_FIELDS.iter().map(|s| s.to_string()).collect()
}
