//! Transcode command implementation for the inventory processor CLI
//!
//! Turns the YAML record set into the pretty-printed JSON document consumed
//! by the web front end, preserving key order and the explicit null markers.

use super::shared::{ConversionStats, create_spinner, resolve_config_file, setup_logging};
use crate::app::services::record_writer::transcode_yaml_to_json;
use crate::cli::args::TranscodeArgs;
use crate::config::Config;
use crate::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Transcode command runner for the inventory processor
///
/// Input and output paths default to the pipeline's configured document
/// locations, so a bare `transcode` after a `convert` picks up the right
/// files.
pub async fn run_transcode(args: TranscodeArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting YAML to JSON transcoding");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration for the default document paths
    let config = load_transcode_configuration(&args)?;

    let input = args.input.clone().unwrap_or_else(|| config.yaml_output_path());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.json_output_path());

    let spinner = (!args.quiet).then(|| create_spinner("Transcoding record set"));

    let bytes_written = transcode_yaml_to_json(&input, &output).await?;

    if let Some(spinner) = &spinner {
        spinner.finish_with_message(format!("Wrote {}", output.display()));
    }

    let mut stats = ConversionStats::default();
    stats.output_sizes.push((
        output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| output.display().to_string()),
        bytes_written as u64,
    ));
    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        println!(
            "\n✅ Transcoded {} -> {}",
            input.display(),
            output.display()
        );
        println!(
            "   • Output size: {}",
            ConversionStats::format_size(bytes_written as u64)
        );
    }

    Ok(stats)
}

/// Assemble the configuration layers transcode cares about
fn load_transcode_configuration(args: &TranscodeArgs) -> Result<Config> {
    let config_file = resolve_config_file(args.config_file.as_deref());

    let mut config = match &config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_toml_file(path)?
        }
        None => Config::default(),
    };

    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths_come_from_configuration() {
        let config = Config::default();
        assert_eq!(
            config.yaml_output_path(),
            PathBuf::from("output/inventory_data.yaml")
        );
        assert_eq!(
            config.json_output_path(),
            PathBuf::from("output/inventory_data.json")
        );
    }

    #[test]
    fn test_load_transcode_configuration_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[pipeline]\noutput_dir = \"elsewhere\"\n").unwrap();

        let args = TranscodeArgs {
            config_file: Some(config_path),
            ..Default::default()
        };

        let config = load_transcode_configuration(&args).unwrap();
        assert_eq!(
            config.yaml_output_path(),
            PathBuf::from("elsewhere/inventory_data.yaml")
        );
    }
}
