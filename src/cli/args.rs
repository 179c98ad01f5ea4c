//! Command-line argument definitions for the inventory processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the inventory processor
///
/// Converts tab-separated training inventory sheets into normalized YAML and
/// JSON record sets, and serves the results through a small built-in viewer.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inventory-processor",
    version,
    about = "Normalize tab-separated inventory sheets into typed YAML/JSON record sets",
    long_about = "A tool that normalizes tab-separated training inventory exports into typed, \
                  ordered YAML record sets, transcodes them to JSON for the web front end, and \
                  serves the results through a small built-in viewer API. Field classification \
                  (boolean, multivalued, identifier) is configurable per sheet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the inventory processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Normalize an inventory sheet into a YAML record set (main command)
    Convert(ConvertArgs),
    /// Transcode a YAML document into pretty-printed JSON
    Transcode(TranscodeArgs),
    /// Serve the viewer API over HTTP
    Serve(ServeArgs),
}

/// Arguments for the convert command (main sheet normalization)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input inventory sheet
    ///
    /// Tab-separated export with a header row, one discarded description
    /// row, then data rows. If not specified, the configured input file
    /// is used.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input inventory sheet (tab-separated)"
    )]
    pub input: Option<PathBuf>,

    /// Output directory for the generated record set
    ///
    /// Will be created if it doesn't exist. Receives the YAML record set
    /// and, with --report, a metadata/conversion_report.json.
    /// If not specified, defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for generated files"
    )]
    pub output: Option<PathBuf>,

    /// Cell delimiter for the input sheet
    ///
    /// A single ASCII character, for sheets exported with something other
    /// than tabs (for example ',' or ';').
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        help = "Cell delimiter, a single ASCII character (default: tab)"
    )]
    pub delimiter: Option<char>,

    /// Write a conversion report under metadata/
    ///
    /// The report records row counts, absent-cell counts, duplicate-header
    /// warnings, and the produced files with their sizes.
    #[arg(long = "report", help = "Write metadata/conversion_report.json")]
    pub report: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for pipeline, schema, and server settings.
    /// If not specified, looks for the per-user config file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the run summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the transcode command (YAML to JSON)
#[derive(Debug, Clone, Parser)]
pub struct TranscodeArgs {
    /// Input YAML document
    ///
    /// If not specified, the pipeline's YAML output path from the
    /// configuration is used.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input YAML document"
    )]
    pub input: Option<PathBuf>,

    /// Output JSON file
    ///
    /// Parent directories are created on demand. If not specified, the
    /// pipeline's JSON output path from the configuration is used.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output JSON file"
    )]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the serve command (viewer API)
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Bind address for the viewer server
    #[arg(long = "host", value_name = "HOST", help = "Bind address")]
    pub host: Option<String>,

    /// Bind port for the viewer server
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Bind port")]
    pub port: Option<u16>,

    /// CSV file served as JSON records at /api/data
    ///
    /// The table is loaded once at startup; restart the server to pick up
    /// changes.
    #[arg(
        long = "data-file",
        value_name = "FILE",
        help = "CSV file served as JSON records"
    )]
    pub data_file: Option<PathBuf>,

    /// Directory holding the static viewer page and assets
    ///
    /// Served under /static, with index.html served at the root. A built-in
    /// minimal page is used when the directory has no index.html.
    #[arg(
        long = "assets-dir",
        value_name = "DIR",
        help = "Directory holding static viewer assets"
    )]
    pub assets_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for run summaries
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input sheet exists (only if explicitly provided)
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input sheet does not exist: {}",
                    input.display()
                )));
            }

            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input sheet is not a file: {}",
                    input.display()
                )));
            }
        }

        // Validate delimiter is a single byte
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err(Error::configuration(format!(
                    "Delimiter must be an ASCII character, got '{}'",
                    delimiter
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl TranscodeArgs {
    /// Validate the transcode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input document exists (only if explicitly provided)
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input document does not exist: {}",
                    input.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ServeArgs {
    /// Validate the serve command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate data file exists (only if explicitly provided)
        if let Some(data_file) = &self.data_file {
            if !data_file.exists() {
                return Err(Error::configuration(format!(
                    "Data file does not exist: {}",
                    data_file.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    ///
    /// The server logs requests at info, so the default here is one step
    /// chattier than the batch commands.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            delimiter: None,
            report: false,
            config_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for TranscodeArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            data_file: None,
            assets_dir: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}
