use clap::Parser;
use ncer_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NCER Processor - Genomic Annotation Converter");
    println!("=============================================");
    println!();
    println!("Convert NCER genomic annotation files (chromosome, start, end, percentile)");
    println!("into identifier-keyed JSON documents for document-store ingestion.");
    println!();
    println!("USAGE:");
    println!("    ncer-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert an annotation file to newline-delimited JSON (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a tab-delimited annotation file to stdout:");
    println!("    ncer-processor convert annotations.tsv");
    println!();
    println!("    # Write documents to a file, merging duplicate identifiers:");
    println!("    ncer-processor convert annotations.tsv -o documents.ndjson --group-duplicates");
    println!();
    println!("    # Show an ETA while converting a file of known length:");
    println!("    ncer-processor convert annotations.tsv --expected-lines 290366");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ncer-processor convert --help");
}
