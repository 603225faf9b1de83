//! Newline-delimited JSON output sink
//!
//! The ingestion pipeline downstream of the converter is an opaque consumer
//! of (identifier, record) pairs; this sink renders each pair as one JSON
//! document per line, buffered for throughput.

use std::io::{BufWriter, Write};

use crate::models::Document;
use crate::{Error, Result};

/// Writes documents as newline-delimited JSON to an underlying writer
pub struct JsonLinesWriter<W: Write> {
    writer: BufWriter<W>,
    documents_written: u64,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a sink over any writer (file, stdout, or an in-memory buffer)
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            documents_written: 0,
        }
    }

    /// Serialize one document and write it as a single line
    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        let value = document.to_value();
        serde_json::to_writer(&mut self.writer, &value)
            .map_err(|e| Error::serialization(format!("Failed to write document '{}'", document.id), e))?;
        self.writer.write_all(b"\n")?;
        self.documents_written += 1;
        Ok(())
    }

    /// Number of documents written so far
    pub fn documents_written(&self) -> u64 {
        self.documents_written
    }

    /// Flush buffered output and return the final document count
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        Ok(self.documents_written)
    }
}
