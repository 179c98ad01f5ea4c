//! Serve command implementation for the inventory processor CLI
//!
//! Runs the built-in viewer API over the pipeline's outputs. The command
//! blocks until ctrl_c, then lets the server drain in-flight requests.

use super::shared::{ConversionStats, resolve_config_file, setup_logging};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::server;
use crate::Result;
use tracing::{debug, info};

/// Serve command runner for the inventory processor
pub async fn run_serve(args: ServeArgs) -> Result<ConversionStats> {
    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting viewer server");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_serve_configuration(&args)?;

    server::start_server(&config.server, config.json_output_path()).await?;

    Ok(ConversionStats::default())
}

/// Assemble the configuration layers serve cares about
fn load_serve_configuration(args: &ServeArgs) -> Result<Config> {
    let config_file = resolve_config_file(args.config_file.as_deref());

    let mut config = match &config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_toml_file(path)?
        }
        None => Config::default(),
    };

    config.apply_env_overrides();

    // CLI overrides land last
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_file) = &args.data_file {
        config.server.data_file = data_file.clone();
    }
    if let Some(assets_dir) = &args.assets_dir {
        config.server.assets_dir = assets_dir.clone();
    }

    config.validate()?;
    Ok(config)
}
