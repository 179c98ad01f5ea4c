//! Configuration management and validation.
//!
//! Provides the layered configuration used by every subcommand: built-in
//! defaults, then an optional TOML file, then `INVENTORY_PROCESSOR_*`
//! environment variables, then CLI overrides applied by the command layer.

use crate::app::services::record_normalizer::FieldSchema;
use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration for inventory processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion pipeline settings
    pub pipeline: PipelineConfig,

    /// Field classification settings for the normalizer
    pub schema: SchemaConfig,

    /// Viewer server settings
    pub server: ServerConfig,
}

/// Settings for the sheet-to-YAML conversion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input sheet to normalize
    pub input_file: PathBuf,

    /// Directory receiving the YAML/JSON outputs and run metadata
    pub output_dir: PathBuf,

    /// Cell delimiter for the input sheet, a single ASCII character
    pub delimiter: String,

    /// Write a conversion report under the metadata directory
    pub write_report: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(constants::DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            delimiter: "\t".to_string(),
            write_report: false,
        }
    }
}

/// Field classification sets handed to the normalizer
///
/// Classification is name-based against the raw (trimmed) header names, so
/// these entries use the sheet's own capitalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Header fields whose cells encode several delimited values
    pub multivalued_fields: Vec<String>,

    /// Header fields whose cells encode yes/no answers
    pub boolean_fields: Vec<String>,

    /// Header field treated as the record identifier
    pub identifier_field: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            multivalued_fields: constants::default_multivalued_fields(),
            boolean_fields: constants::default_boolean_fields(),
            identifier_field: constants::DEFAULT_IDENTIFIER_FIELD.to_string(),
        }
    }
}

/// Settings for the built-in viewer API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Tabular CSV file served as JSON records
    pub data_file: PathBuf,

    /// Directory holding the static viewer page and its assets
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::server::DEFAULT_HOST.to_string(),
            port: constants::server::DEFAULT_PORT,
            data_file: PathBuf::from(constants::server::DEFAULT_DATA_FILE),
            assets_dir: PathBuf::from(constants::server::DEFAULT_ASSETS_DIR),
        }
    }
}

impl Config {
    /// Load configuration using the layered approach (defaults -> file ->
    /// environment -> provided paths)
    ///
    /// The input and output arguments come from CLI flags and therefore land
    /// on top of everything else. A config file that cannot be read or
    /// parsed is an error; an absent default config file is not.
    pub fn load_layered(
        input_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();

        if let Some(input_file) = input_file {
            config.pipeline.input_file = input_file;
        }
        if let Some(output_dir) = output_dir {
            config.pipeline.output_dir = output_dir;
        }

        Ok(config)
    }

    /// Parse a configuration file, filling omitted fields with defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = toml::from_str::<Config>(&contents).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `INVENTORY_PROCESSOR_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(input_file) = std::env::var(constants::env::INPUT_FILE) {
            self.pipeline.input_file = PathBuf::from(input_file);
        }
        if let Ok(output_dir) = std::env::var(constants::env::OUTPUT_DIR) {
            self.pipeline.output_dir = PathBuf::from(output_dir);
        }
        if let Ok(data_file) = std::env::var(constants::env::DATA_FILE) {
            self.server.data_file = PathBuf::from(data_file);
        }
    }

    /// Default per-user config file path under the platform config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;

        Ok(config_dir
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Validate the assembled configuration
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.pipeline.delimiter.as_bytes();
        if delimiter.len() != 1 {
            return Err(Error::configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.pipeline.delimiter
            )));
        }

        if self.pipeline.input_file.as_os_str().is_empty() {
            return Err(Error::configuration("Input file must not be empty"));
        }

        if self.schema.identifier_field.trim().is_empty() {
            return Err(Error::configuration("Identifier field must not be empty"));
        }

        if self.server.port == 0 {
            return Err(Error::configuration("Server port must not be 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(Error::configuration("Server host must not be empty"));
        }

        Ok(())
    }

    /// The configured delimiter as a single byte
    ///
    /// Valid after [`validate`](Self::validate) has passed.
    pub fn delimiter_byte(&self) -> u8 {
        self.pipeline
            .delimiter
            .as_bytes()
            .first()
            .copied()
            .unwrap_or(constants::DEFAULT_DELIMITER)
    }

    /// Build the normalizer's field classification from the schema section
    pub fn field_schema(&self) -> FieldSchema {
        FieldSchema::new(
            self.schema.boolean_fields.clone(),
            self.schema.multivalued_fields.clone(),
            self.schema.identifier_field.clone(),
        )
    }

    /// Path of the YAML record set inside the output directory
    pub fn yaml_output_path(&self) -> PathBuf {
        self.pipeline.output_dir.join(constants::YAML_OUTPUT_FILENAME)
    }

    /// Path of the transcoded JSON record set inside the output directory
    pub fn json_output_path(&self) -> PathBuf {
        self.pipeline.output_dir.join(constants::JSON_OUTPUT_FILENAME)
    }

    /// Path of the conversion report inside the metadata directory
    pub fn report_output_path(&self) -> PathBuf {
        self.pipeline
            .output_dir
            .join(constants::METADATA_OUTPUT_DIR)
            .join(constants::CONVERSION_REPORT_FILENAME)
    }

    /// Create the output directory when it does not exist yet
    pub fn ensure_output_directory(&self) -> Result<()> {
        let output_dir = &self.pipeline.output_dir;
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    output_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// The server bind address as a `host:port` string
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
