//! Test utilities for annotation parser testing
//!
//! Provides shared helpers for building temp annotation files and test
//! configurations used across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::Config;

mod sweep_tests;

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a well-formed sample annotation file
pub fn create_sample_annotations() -> String {
    "1\t100\t200\t0.85\n\
     chr2\t50\t60\t12.5\n\
     X\t1000\t1050\t99.9\n"
        .to_string()
}

/// Helper to create a sample file with malformed lines mixed in
pub fn create_mixed_annotations() -> String {
    "1\t100\t200\t0.85\n\
     chr2\t50\t60\tabc\n\
     3\t10\t20\n\
     4\tfoo\t20\t0.5\n\
     5\t30\t40\t1.25\n"
        .to_string()
}

/// Default test configuration
pub fn test_config() -> Config {
    Config::default()
}
