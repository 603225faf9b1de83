//! Parsing statistics and result structures
//!
//! Tracks line totals, emitted record counts, and the malformed lines
//! retained for operator review at end of run.

use crate::models::Document;
use serde::{Deserialize, Serialize};

/// Eager parsing result with emitted documents and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Documents emitted after collision policy handling
    pub documents: Vec<Document>,

    /// Parsing statistics for the whole file
    pub stats: ParseStats,
}

/// Parsing statistics for a single pass over a file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines read
    pub lines_read: u64,

    /// Number of records successfully emitted
    pub records_emitted: u64,

    /// Number of lines skipped as malformed
    pub lines_skipped: u64,

    /// Skipped lines retained for end-of-run review
    pub skipped: Vec<SkippedLine>,
}

/// A malformed line retained with its position and failure reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number within the input file
    pub line_number: u64,

    /// Raw line content without the trailing line ending
    pub content: String,

    /// Why the line was rejected
    pub reason: String,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of lines emitted, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_emitted as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
