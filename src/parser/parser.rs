//! Parser orchestration
//!
//! Provides the two entry points of the converter: a lazy per-line stream
//! for constant-memory pipelines and an eager whole-file parse that applies
//! the configured duplicate-identifier policy.

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use serde_json::Value;

use super::stats::ParseResult;
use super::stream::RecordStream;
use crate::config::{CollisionPolicy, Config};
use crate::models::Document;
use crate::Result;

/// Streaming converter for NCER annotation files
#[derive(Debug, Clone)]
pub struct AnnotationParser {
    config: Config,
}

impl AnnotationParser {
    /// Create a new parser with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The parser's configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lazily stream documents from a file, one per valid line
    ///
    /// The collision policy is not applied here; duplicate identifiers are
    /// yielded as they occur.
    pub fn stream(&self, path: &Path) -> Result<RecordStream> {
        RecordStream::open(path, self.config.clone())
    }

    /// Parse a whole file and apply the configured collision policy
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        let mut stream = self.stream(path)?;

        let documents = match self.config.collision_policy {
            CollisionPolicy::EmitPerLine => stream.by_ref().collect(),
            CollisionPolicy::GroupById => group_by_id(stream.by_ref()),
        };

        let stats = stream.into_stats();
        info!(
            "Parsed {} documents from {} lines",
            documents.len(),
            stats.lines_read
        );

        Ok(ParseResult { documents, stats })
    }
}

/// Merge documents sharing an identifier, keeping first-seen order
///
/// A singleton keeps its plain record body; records behind a duplicate
/// identifier accumulate into a list in input order. Requires buffering all
/// distinct identifiers in memory.
fn group_by_id(documents: impl Iterator<Item = Document>) -> Vec<Document> {
    let mut grouped: Vec<Document> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for document in documents {
        match index.get(&document.id) {
            Some(&at) => {
                let body = &mut grouped[at].body;
                match body {
                    Value::Array(records) => records.push(document.body),
                    _ => {
                        let first = body.take();
                        *body = Value::Array(vec![first, document.body]);
                    }
                }
            }
            None => {
                index.insert(document.id.clone(), grouped.len());
                grouped.push(document);
            }
        }
    }

    grouped
}
