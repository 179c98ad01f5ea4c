use clap::Parser;
use inventory_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    // Create async runtime and run the main command logic; signal handling
    // lives in the command layer
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(command));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Inventory Processor - Training Inventory Sheet Converter");
    println!("========================================================");
    println!();
    println!("Normalize tab-separated training inventory exports into typed YAML");
    println!("record sets, transcode them to JSON, and serve them for viewing.");
    println!();
    println!("USAGE:");
    println!("    inventory-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Normalize an inventory sheet into a YAML record set (main command)");
    println!("    transcode   Transcode a YAML record set into pretty-printed JSON");
    println!("    serve       Serve the viewer API over the generated documents");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert the default inventory sheet:");
    println!("    inventory-processor convert");
    println!();
    println!("    # Convert a specific sheet and write a conversion report:");
    println!("    inventory-processor convert --input inventory.tsv --output dist --report");
    println!();
    println!("    # Transcode the generated YAML for the web front end:");
    println!("    inventory-processor transcode");
    println!();
    println!("    # Serve the viewer on another port:");
    println!("    inventory-processor serve --port 8080");
    println!();
    println!("For detailed help on any command, use:");
    println!("    inventory-processor <COMMAND> --help");
}
