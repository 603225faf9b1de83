//! Convert command: annotation file to newline-delimited JSON documents

use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use colored::*;
use indicatif::{HumanDuration, ProgressBar};
use tracing::{debug, info, warn};

use super::shared;
use crate::cli::args::ConvertArgs;
use crate::config::{CollisionPolicy, Config};
use crate::parser::{AnnotationParser, ParseStats};
use crate::sink::JsonLinesWriter;
use crate::{Error, Result};

/// Run the convert command end to end
pub fn execute(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    shared::setup_logging(&args)?;

    info!("Starting NCER annotation conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let parser = AnnotationParser::new(config.clone());
    let sink = JsonLinesWriter::new(open_output(&args)?);

    let progress_bar = if args.show_progress() {
        Some(match config.expected_lines {
            Some(total) => shared::create_progress_bar(total, "Converting"),
            None => shared::create_spinner("Converting"),
        })
    } else {
        None
    };

    let (documents_written, stats) = match config.collision_policy {
        CollisionPolicy::EmitPerLine => {
            convert_streaming(&parser, &args, sink, progress_bar.as_ref())?
        }
        CollisionPolicy::GroupById => {
            convert_grouped(&parser, &args, sink, progress_bar.as_ref())?
        }
    };

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    print_summary(&args, &stats, documents_written, start_time.elapsed());
    report_skipped(&stats);

    Ok(())
}

/// Stream documents straight to the sink, one per valid line
fn convert_streaming(
    parser: &AnnotationParser,
    args: &ConvertArgs,
    mut sink: JsonLinesWriter<Box<dyn Write>>,
    progress_bar: Option<&ProgressBar>,
) -> Result<(u64, ParseStats)> {
    let mut stream = parser.stream(&args.input_file)?;

    while let Some(document) = stream.next() {
        sink.write_document(&document)?;
        if let Some(pb) = progress_bar {
            pb.set_position(stream.stats().lines_read);
        }
    }

    let written = sink.finish()?;
    Ok((written, stream.into_stats()))
}

/// Buffer the whole file, merge duplicate identifiers, then drain to the sink
fn convert_grouped(
    parser: &AnnotationParser,
    args: &ConvertArgs,
    mut sink: JsonLinesWriter<Box<dyn Write>>,
    progress_bar: Option<&ProgressBar>,
) -> Result<(u64, ParseStats)> {
    let result = parser.parse_file(&args.input_file)?;

    if let Some(pb) = progress_bar {
        pb.set_position(result.stats.lines_read);
    }

    for document in &result.documents {
        sink.write_document(document)?;
    }

    let written = sink.finish()?;
    Ok((written, result.stats))
}

/// Load configuration using the layered approach (file -> CLI overrides)
fn load_configuration(args: &ConvertArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    if let Some(source_name) = &args.source_name {
        config.source_name = source_name.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(expected_lines) = args.expected_lines {
        config.expected_lines = Some(expected_lines);
    }
    if args.sweep_nulls {
        config.sweep_nulls = true;
    }
    if args.group_duplicates {
        config.collision_policy = CollisionPolicy::GroupById;
    }

    config.validate()?;
    Ok(config)
}

/// Select the output writer: discard for dry runs, else file or stdout
fn open_output(args: &ConvertArgs) -> Result<Box<dyn Write>> {
    if args.dry_run {
        info!("Dry run: no output will be written");
        return Ok(Box::new(io::sink()));
    }

    match &args.output_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
            info!("Writing documents to {}", path.display());
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Print the human-readable end-of-run summary
fn print_summary(
    args: &ConvertArgs,
    stats: &ParseStats,
    documents_written: u64,
    elapsed: std::time::Duration,
) {
    if args.quiet {
        return;
    }

    eprintln!("\n{}", "Conversion Summary".bright_green().bold());
    eprintln!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(elapsed)
    );
    eprintln!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        stats.lines_read.to_string().bright_white().bold()
    );
    eprintln!(
        "  {} {}",
        "Documents written:".bright_cyan(),
        documents_written.to_string().bright_white().bold()
    );

    if stats.lines_skipped > 0 {
        eprintln!(
            "  {} {}",
            "Lines skipped:".bright_cyan(),
            stats.lines_skipped.to_string().bright_red().bold()
        );
    } else {
        eprintln!("  {} 0", "Lines skipped:".bright_cyan());
    }

    eprintln!(
        "  {} {:.2}%",
        "Success rate:".bright_cyan(),
        stats.success_rate()
    );
}

/// Log every retained skipped line for operator review
fn report_skipped(stats: &ParseStats) {
    for skipped in &stats.skipped {
        warn!(
            "Skipped line {}: {} ('{}')",
            skipped.line_number, skipped.reason, skipped.content
        );
    }
}
