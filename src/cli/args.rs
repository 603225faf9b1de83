//! Command-line argument definitions for the NCER processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the NCER annotation converter
///
/// Converts delimited genomic annotation files into identifier-keyed JSON
/// documents ready for document-store ingestion.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ncer-processor",
    version,
    about = "Convert NCER genomic annotation files into document-store records",
    long_about = "Converts delimited genomic annotation files (chromosome, start, end, \
                  percentile) into normalized JSON documents keyed by canonical variant \
                  identifiers of the form chr<chrom>:g.<start>_<end>. Malformed lines are \
                  logged and skipped; only a missing input file aborts the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the NCER processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert an annotation file to newline-delimited JSON documents
    Convert(ConvertArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input annotation file
    ///
    /// Delimited text with one interval per line in the fixed column order
    /// chrom, start, end, percentile. No header row is expected.
    #[arg(value_name = "INPUT")]
    pub input_file: PathBuf,

    /// Output file for newline-delimited JSON documents
    ///
    /// Written to stdout when omitted.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Source name that keys each record in emitted documents
    #[arg(long = "source-name", value_name = "NAME")]
    pub source_name: Option<String>,

    /// Field delimiter separating the four schema columns
    ///
    /// Defaults to a tab character.
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Expected total line count
    ///
    /// Used only to display a bounded progress bar with an ETA; has no
    /// effect on parsing.
    #[arg(long = "expected-lines", value_name = "COUNT")]
    pub expected_lines: Option<u64>,

    /// Remove null-like fields from records before emission
    ///
    /// Drops fields whose value is an empty string, the literal tokens
    /// "null" or "N/A", null, an empty list, or an empty mapping.
    #[arg(long = "sweep-nulls")]
    pub sweep_nulls: bool,

    /// Merge records sharing a variant identifier into a list
    ///
    /// Buffers the whole file in memory; without this flag each line emits
    /// an independent document.
    #[arg(long = "group-duplicates")]
    pub group_duplicates: bool,

    /// Parse and report statistics without writing any output
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Path to configuration file (TOML format)
    ///
    /// If not specified, looks for the config file under the user config
    /// directory.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    ///
    /// Existence of the input file itself is checked by the parser so that
    /// a missing file surfaces as the file-not-found error.
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn base_args(input: PathBuf) -> ConvertArgs {
        ConvertArgs {
            input_file: input,
            output_file: None,
            source_name: None,
            delimiter: None,
            expected_lines: None,
            sweep_nulls: false,
            group_duplicates: false,
            dry_run: false,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let args = base_args(temp_dir.path().join("input.tsv"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = base_args(temp_dir.path().join("input.tsv"));
        args.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = base_args(temp_dir.path().join("input.tsv"));
        args.output_file = Some(PathBuf::from("/nonexistent/dir/out.ndjson"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_bare_output_filename() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = base_args(temp_dir.path().join("input.tsv"));
        args.output_file = Some(PathBuf::from("out.ndjson"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = base_args(temp_dir.path().join("input.tsv"));

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = base_args(temp_dir.path().join("input.tsv"));
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_command_parsing() {
        let args = Args::parse_from([
            "ncer-processor",
            "convert",
            "annotations.tsv",
            "--source-name",
            "ncer",
            "--sweep-nulls",
        ]);

        match args.get_command() {
            Commands::Convert(convert) => {
                assert_eq!(convert.input_file, PathBuf::from("annotations.tsv"));
                assert_eq!(convert.source_name.as_deref(), Some("ncer"));
                assert!(convert.sweep_nulls);
                assert!(!convert.group_duplicates);
            }
        }
    }
}
