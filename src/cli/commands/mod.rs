//! Command implementations for the inventory processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod convert;
pub mod serve;
pub mod shared;
pub mod transcode;

// Re-export the statistics type shared across commands
pub use shared::ConversionStats;

use crate::cli::args::Commands;
use crate::{Error, Result};
use std::future::Future;

/// Main command runner for the inventory processor
///
/// This function dispatches to the appropriate subcommand handler:
/// - `convert`: sheet normalization into the YAML record set
/// - `transcode`: YAML record set into pretty-printed JSON
/// - `serve`: viewer API over the generated documents
///
/// The batch commands race against ctrl_c and abort outright; the server
/// installs its own shutdown handling so in-flight requests drain first.
pub async fn run(command: Commands) -> Result<ConversionStats> {
    match command {
        Commands::Convert(convert_args) => interruptible(convert::run_convert(convert_args)).await,
        Commands::Transcode(transcode_args) => {
            interruptible(transcode::run_transcode(transcode_args)).await
        }
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
    }
}

/// Race a batch command against ctrl_c
async fn interruptible<F>(work: F) -> Result<ConversionStats>
where
    F: Future<Output = Result<ConversionStats>>,
{
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    tokio::select! {
        result = work => result,
        _ = shutdown_signal => {
            eprintln!("\nReceived CTRL+C, shutting down gracefully...");
            Err(Error::interrupted("ctrl_c received before the command finished"))
        }
    }
}
