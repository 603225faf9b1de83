//! NCER Processor Library
//!
//! A Rust library for converting NCER genomic annotation files (delimited
//! text with chromosome, start, end, and percentile columns) into normalized
//! records keyed by genomic coordinate identifiers, ready for loading into a
//! document store.
//!
//! This library provides tools for:
//! - Streaming line-by-line parsing with skip-and-log error recovery
//! - Canonical variant identifier construction (`chr<chrom>:g.<start>_<end>`)
//! - Optional removal of null-like fields before emission
//! - Merging of records that share a variant identifier
//! - Newline-delimited JSON output for downstream ingestion pipelines

pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod sink;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{CollisionPolicy, Config};
pub use models::{Annotation, Document};
pub use parser::{AnnotationParser, ParseResult, ParseStats};

/// Result type alias for the NCER processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NCER processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file missing
    #[error("Cannot find input file: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Document serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Document serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Failed to parse config file: {}", error),
        }
    }
}
