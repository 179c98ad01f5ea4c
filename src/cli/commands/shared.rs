//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::constants;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Conversion statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of data rows read from the input sheet
    pub rows_read: usize,
    /// Number of records written to the record set
    pub records_written: usize,
    /// Number of cells resolved to the absent marker
    pub absent_cells: usize,
    /// Number of duplicate header keys tolerated
    pub duplicate_headers: usize,
    /// Number of row-level errors tolerated
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ConversionStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
///
/// Every subcommand derives its level from its own verbosity flags and
/// passes it through here, so `RUST_LOG` still wins when set.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inventory_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve which config file a command should load, if any
///
/// An explicitly passed path always wins. Otherwise the per-user config
/// file is used when it exists; absence falls back to built-in defaults.
pub fn resolve_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub async fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = resolve_config_file(args.config_file.as_deref());

    if let Some(config_path) = &config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults and environment variables");
    }

    // Load with layered configuration
    let mut config = Config::load_layered(
        args.input.clone(),
        args.output.clone(),
        config_file.as_deref(),
    )?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ConvertArgs) -> Result<()> {
    // Override pipeline settings if explicitly provided
    if let Some(delimiter) = args.delimiter {
        config.pipeline.delimiter = delimiter.to_string();
    }
    if args.report {
        config.pipeline.write_report = true;
    }

    Ok(())
}

/// Validate and prepare output directories
pub async fn prepare_directories(config: &Config) -> Result<()> {
    info!("Preparing output directories");

    // Create output directory if it doesn't exist
    config.ensure_output_directory()?;

    // Create metadata subdirectory for the conversion report
    if config.pipeline.write_report {
        let metadata_dir = config
            .pipeline
            .output_dir
            .join(constants::METADATA_OUTPUT_DIR);
        if !metadata_dir.exists() {
            std::fs::create_dir_all(&metadata_dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create metadata directory '{}': {}",
                    metadata_dir.display(),
                    e
                ))
            })?;
        }
    }

    info!(
        "Output directory prepared: {}",
        config.pipeline.output_dir.display()
    );
    Ok(())
}

/// Create a spinner with appropriate styling
///
/// The pipeline works on one document per step, so steps get a spinner
/// rather than a per-item bar.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
