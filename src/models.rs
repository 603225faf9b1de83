//! Data models for NCER annotation processing
//!
//! This module contains the core data structures for representing genomic
//! annotation intervals and the identifier-keyed documents emitted toward
//! the ingestion pipeline.

use crate::constants::{CHROM_PREFIX, fields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Annotation Record
// =============================================================================

/// A single genomic annotation interval with its percentile score
///
/// The chromosome name is stored canonically, with any leading literal
/// `chr` stripped, so identifiers derived from it are stable regardless of
/// whether the input file carried the prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Chromosome name without the `chr` prefix (e.g., "1", "X")
    pub chrom: String,

    /// Interval start coordinate
    pub start: u64,

    /// Interval end coordinate
    pub end: u64,

    /// Percentile annotation score for the interval
    pub percentile: f64,
}

impl Annotation {
    /// Create a new annotation, canonicalizing the chromosome name
    pub fn new(chrom: impl Into<String>, start: u64, end: u64, percentile: f64) -> Self {
        let raw = chrom.into();
        let chrom = raw
            .strip_prefix(CHROM_PREFIX)
            .map(str::to_string)
            .unwrap_or(raw);

        Self {
            chrom,
            start,
            end,
            percentile,
        }
    }

    /// Canonical variant identifier of form `chr<chrom>:g.<start>_<end>`
    ///
    /// Deterministic for a given coordinate triple; not guaranteed unique
    /// across a file, since multiple lines may annotate the same interval.
    pub fn variant_id(&self) -> String {
        format!("chr{}:g.{}_{}", self.chrom, self.start, self.end)
    }

    /// Field record as a JSON object, one entry per schema column
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(fields::CHROM.to_string(), Value::from(self.chrom.clone()));
        record.insert(fields::START.to_string(), Value::from(self.start));
        record.insert(fields::END.to_string(), Value::from(self.end));
        record.insert(
            fields::PERCENTILE.to_string(),
            Value::from(self.percentile),
        );
        record
    }
}

// =============================================================================
// Emitted Document
// =============================================================================

/// An (identifier, record) pair addressed to the ingestion sink
///
/// Serializes as `{"_id": <id>, "<source_name>": <body>}`. The body is the
/// field record for a single line, or a list of records when duplicate
/// identifiers have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Variant identifier keying the document
    pub id: String,

    /// Source name under which the record is nested
    pub source_name: String,

    /// Field record, or list of records in grouped mode
    pub body: Value,
}

impl Document {
    /// Build a document from an annotation record body
    pub fn new(id: impl Into<String>, source_name: impl Into<String>, body: Value) -> Self {
        Self {
            id: id.into(),
            source_name: source_name.into(),
            body,
        }
    }

    /// Full JSON representation consumed by the ingestion pipeline
    pub fn to_value(&self) -> Value {
        let mut document = Map::new();
        document.insert("_id".to_string(), Value::from(self.id.clone()));
        document.insert(self.source_name.clone(), self.body.clone());
        Value::Object(document)
    }
}
