//! Lazy per-line record stream
//!
//! The stream is the single-pass core of the converter: it reads one line at
//! a time, emits a document per valid line, and absorbs malformed lines as
//! skip events. Memory use is constant regardless of file size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, info};

use super::record::parse_annotation;
use super::stats::{ParseStats, SkippedLine};
use super::sweep::sweep_record;
use crate::config::Config;
use crate::constants::PROGRESS_LOG_INTERVAL;
use crate::models::{Annotation, Document};
use crate::{Error, Result};

/// Lazily yields one document per valid input line
///
/// Drain the iterator, then inspect [`RecordStream::stats`] for totals and
/// the retained skip list. The invariant `lines_read == records_emitted +
/// lines_skipped` holds at every point during iteration.
pub struct RecordStream {
    reader: BufReader<File>,
    config: Config,
    stats: ParseStats,
    buf: String,
    done: bool,
}

impl RecordStream {
    /// Open a stream over an annotation file
    ///
    /// Fails with [`Error::FileNotFound`] before any parsing begins if the
    /// file does not exist.
    pub(crate) fn open(path: &Path, config: Config) -> Result<Self> {
        if !path.exists() {
            error!("Cannot find input file: {}", path.display());
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        info!("Start reading file: {}", path.display());

        Ok(Self {
            reader: BufReader::new(file),
            config,
            stats: ParseStats::new(),
            buf: String::new(),
            done: false,
        })
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consume the stream and return its final statistics
    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    fn emit(&mut self, annotation: Annotation) -> Document {
        let id = annotation.variant_id();
        let mut record = annotation.to_record();
        if self.config.sweep_nulls {
            record = sweep_record(record);
        }

        self.stats.records_emitted += 1;
        Document::new(id, self.config.source_name.clone(), record.into())
    }

    fn skip(&mut self, reason: String) {
        let content = self.buf.trim_end_matches(['\n', '\r']).to_string();
        debug!(
            "Skipping line {}: {} ('{}')",
            self.stats.lines_read, reason, content
        );

        self.stats.lines_skipped += 1;
        self.stats.skipped.push(SkippedLine {
            line_number: self.stats.lines_read,
            content,
            reason,
        });
    }
}

impl Iterator for RecordStream {
    type Item = Document;

    fn next(&mut self) -> Option<Document> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    info!(
                        "Complete: {} lines read, {} records emitted, {} lines skipped",
                        self.stats.lines_read,
                        self.stats.records_emitted,
                        self.stats.lines_skipped
                    );
                    return None;
                }
                Ok(_) => {
                    self.stats.lines_read += 1;
                    if self.stats.lines_read % PROGRESS_LOG_INTERVAL == 0 {
                        debug!("Processed {} lines", self.stats.lines_read);
                    }

                    match parse_annotation(&self.buf, self.config.delimiter) {
                        Ok(annotation) => return Some(self.emit(annotation)),
                        Err(e) => self.skip(e.to_string()),
                    }
                }
                Err(e) => {
                    // A failing read mid-file has no retry model; end the
                    // stream without emitting a partial record.
                    self.done = true;
                    error!(
                        "Read failed after {} lines: {}",
                        self.stats.lines_read, e
                    );
                    return None;
                }
            }
        }
    }
}
