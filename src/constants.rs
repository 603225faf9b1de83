//! Application constants for the NCER processor
//!
//! This module contains the input schema definition, default values,
//! and sentinel sets used throughout the converter.

// =============================================================================
// Source and Schema
// =============================================================================

/// Source name under which records appear in emitted documents
pub const DEFAULT_SOURCE_NAME: &str = "ncer";

/// Field delimiter used by NCER annotation files
pub const DEFAULT_DELIMITER: char = '\t';

/// Number of fields in the fixed input schema
pub const FIELD_COUNT: usize = 4;

/// Field names of the input schema, in column order
pub mod fields {
    pub const CHROM: &str = "chrom";
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const PERCENTILE: &str = "percentile";
}

/// Chromosome prefix stripped when canonicalizing variant identifiers
pub const CHROM_PREFIX: &str = "chr";

// =============================================================================
// Null-Sweep Sentinels
// =============================================================================

/// String values treated as null-like by the record sweep, alongside JSON
/// null and empty containers
pub const NULL_SENTINELS: &[&str] = &["", "null", "N/A"];

// =============================================================================
// Observability
// =============================================================================

/// Lines between throughput log entries while streaming
pub const PROGRESS_LOG_INTERVAL: u64 = 100_000;

// =============================================================================
// Configuration Paths
// =============================================================================

/// Directory name under the user config root holding the config file
pub const CONFIG_DIR_NAME: &str = "ncer-processor";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
