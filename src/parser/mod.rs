//! Streaming parser for NCER annotation files
//!
//! This module provides a single-pass converter from delimited annotation
//! lines to identifier-keyed documents. Malformed lines are logged, counted,
//! and skipped without interrupting the stream; only a missing input file is
//! fatal.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Orchestration: eager parsing and collision policy handling
//! - [`stream`] - Lazy per-line record stream over an open file
//! - [`record`] - Single-line splitting and field coercion
//! - [`sweep`] - Null-like field removal before emission
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ncer_processor::config::Config;
//! use ncer_processor::parser::AnnotationParser;
//!
//! # fn example(path: &std::path::Path) -> ncer_processor::Result<()> {
//! let parser = AnnotationParser::new(Config::default());
//! let result = parser.parse_file(path)?;
//!
//! println!(
//!     "Emitted {} documents from {} lines ({} skipped)",
//!     result.documents.len(),
//!     result.stats.lines_read,
//!     result.stats.lines_skipped
//! );
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod record;
pub mod stats;
pub mod stream;
pub mod sweep;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::AnnotationParser;
pub use stats::{ParseResult, ParseStats, SkippedLine};
pub use stream::RecordStream;
