//! Inventory Processor Library
//!
//! A Rust library for normalizing tab-separated training inventory sheets
//! into typed, ordered YAML and JSON record sets.
//!
//! This library provides tools for:
//! - Parsing inventory sheet exports with header and description row handling
//! - Classifying header fields as boolean, multivalued, identifier, or plain
//! - Resolving cells to typed values with explicit absent and NA markers
//! - Writing ordered YAML record sets and transcoding them to JSON
//! - Serving the generated documents through a small viewer API
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;
pub mod server;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_normalizer;
        pub mod record_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldKind, Record, Value};
pub use config::Config;

/// Result type alias for the inventory processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for inventory processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Sheet parsing error
    #[error("Sheet parsing error: {message}")]
    SheetParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Sheet structurally unusable (empty, or no usable header)
    #[error("Sheet format error: {message}")]
    SheetFormat { message: String },

    /// YAML serialization error
    #[error("YAML serialization error: {message}")]
    YamlSerialization {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    JsonSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Viewer server error
    #[error("Server error: {message}")]
    Server { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Command interrupted
    #[error("Interrupted: {message}")]
    Interrupted { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a sheet parsing error with context
    pub fn sheet_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::SheetParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a sheet format error
    pub fn sheet_format(message: impl Into<String>) -> Self {
        Self::SheetFormat {
            message: message.into(),
        }
    }

    /// Create a YAML serialization error
    pub fn yaml_serialization(message: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlSerialization {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error
    pub fn json_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a viewer server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an interrupted error
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::SheetParsing {
            message: "Sheet parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::YamlSerialization {
            message: "YAML serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
