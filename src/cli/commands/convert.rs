//! Convert command implementation for the inventory processor CLI
//!
//! This module contains the complete conversion workflow including
//! configuration loading, sheet normalization, record persistence, and
//! report generation.

use super::shared::{
    ConversionStats, create_spinner, load_configuration, prepare_directories, setup_logging,
};
use crate::app::models::report::ConversionReport;
use crate::app::services::record_normalizer::RecordNormalizer;
use crate::app::services::record_writer::RecordWriter;
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::config::Config;
use crate::constants;
use crate::{Error, Result};
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert command runner for the inventory processor
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Validate inputs and create output directories
/// 3. Normalize the sheet into typed records
/// 4. Persist the record set and generate summary statistics
pub async fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting inventory conversion");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args).await?;
    debug!("Loaded configuration: {:?}", config);

    // Validate and prepare directories
    prepare_directories(&config).await?;

    let stats = execute_conversion(&config, args.show_progress()).await?;

    // Generate final report
    generate_final_report(&args, &stats)?;

    Ok(stats)
}

/// Normalize the configured sheet and persist the record set
async fn execute_conversion(config: &Config, show_progress: bool) -> Result<ConversionStats> {
    let start_time = Instant::now();
    let input_file = &config.pipeline.input_file;

    if !input_file.exists() {
        return Err(Error::file_not_found(input_file.display().to_string()));
    }

    // Normalize the sheet into typed records
    let spinner = show_progress.then(|| create_spinner("Normalizing inventory sheet"));

    let normalizer =
        RecordNormalizer::new(config.field_schema()).with_delimiter(config.delimiter_byte());
    let result = normalizer.normalize_file(input_file)?;

    if let Some(spinner) = &spinner {
        spinner.finish_with_message(format!(
            "Normalized {} records from {} rows",
            result.records.len(),
            result.stats.rows_read
        ));
    }

    info!(
        "Normalized {} records ({} cells filled, {} absent)",
        result.stats.records_parsed, result.stats.cells_filled, result.stats.cells_absent
    );

    // Persist the record set
    let writer = RecordWriter::new(config.yaml_output_path());
    let write_stats = writer.write_records(&result.records).await?;

    let mut stats = ConversionStats {
        rows_read: result.stats.rows_read,
        records_written: write_stats.records_written,
        absent_cells: result.stats.cells_absent,
        duplicate_headers: result.stats.duplicate_headers.len(),
        errors_encountered: result.stats.errors.len(),
        ..Default::default()
    };
    stats.output_sizes.push((
        constants::YAML_OUTPUT_FILENAME.to_string(),
        write_stats.bytes_written as u64,
    ));

    // Write the conversion report when requested; a failed report never
    // fails a conversion that already produced its record set
    if config.pipeline.write_report {
        let mut report = ConversionReport::from_stats(
            input_file.clone(),
            &result.stats,
            write_stats.records_written,
        );
        report.add_output(&write_stats.output_path, write_stats.bytes_written as u64);

        let report_path = config.report_output_path();
        match report.write(&report_path).await {
            Ok(()) => info!("Conversion report written to {}", report_path.display()),
            Err(e) => warn!("Failed to write conversion report: {}", e),
        }
    }

    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

/// Generate final conversion report
fn generate_final_report(args: &ConvertArgs, stats: &ConversionStats) -> Result<()> {
    info!("Generating final report");

    match args.output_format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
        OutputFormat::Csv => generate_csv_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ConversionStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = ConversionStats::format_size(stats.total_output_size());

    println!("\n🎉 Inventory Conversion Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Conversion Summary:");
    println!("   • Rows read: {}", stats.rows_read);
    println!("   • Records written: {}", stats.records_written);
    println!("   • Absent cells: {}", stats.absent_cells);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.duplicate_headers > 0 {
        println!(
            "⚠️  Duplicate header keys tolerated: {}",
            stats.duplicate_headers
        );
    }

    if stats.errors_encountered > 0 {
        println!("⚠️  Rows skipped as unreadable: {}", stats.errors_encountered);
    }

    if !stats.output_sizes.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in &stats.output_sizes {
            println!("   • {}: {}", filename, ConversionStats::format_size(*size));
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ConversionStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "rows_read": stats.rows_read,
        "records_written": stats.records_written,
        "absent_cells": stats.absent_cells,
        "duplicate_headers": stats.duplicate_headers,
        "errors_encountered": stats.errors_encountered,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_output_size(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    let rendered = serde_json::to_string_pretty(&json_stats)
        .map_err(|e| Error::json_serialization("Failed to render run summary", e))?;
    println!("{}", rendered);
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &ConversionStats) -> Result<()> {
    println!("metric,value");
    println!("rows_read,{}", stats.rows_read);
    println!("records_written,{}", stats.records_written);
    println!("absent_cells,{}", stats.absent_cells);
    println!("duplicate_headers,{}", stats.duplicate_headers);
    println!("errors_encountered,{}", stats.errors_encountered);
    println!(
        "processing_time_seconds,{}",
        stats.processing_time.as_secs_f64()
    );
    println!("total_output_size_bytes,{}", stats.total_output_size());

    Ok(())
}
