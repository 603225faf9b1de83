//! Single-line parsing for NCER annotation records
//!
//! Splits a delimited line into the fixed four-column schema and coerces
//! the numeric fields, rejecting the whole line on any failure.

use crate::constants::FIELD_COUNT;
use crate::models::Annotation;
use crate::{Error, Result};

/// Parse one delimited line into an annotation record
///
/// The line must split into exactly four fields (chrom, start, end,
/// percentile). A wrong field count or a numeric coercion failure
/// invalidates the whole line; no partial record is ever produced.
pub fn parse_annotation(line: &str, delimiter: char) -> Result<Annotation> {
    let line = line.trim_end_matches(['\n', '\r']);
    let columns: Vec<&str> = line.split(delimiter).collect();

    if columns.len() != FIELD_COUNT {
        return Err(Error::data_validation(format!(
            "Expected {} fields, found {}",
            FIELD_COUNT,
            columns.len()
        )));
    }

    let start: u64 = columns[1].parse().map_err(|_| {
        Error::data_validation(format!("Invalid integer for start: '{}'", columns[1]))
    })?;

    let end: u64 = columns[2].parse().map_err(|_| {
        Error::data_validation(format!("Invalid integer for end: '{}'", columns[2]))
    })?;

    let percentile: f64 = columns[3].parse().map_err(|_| {
        Error::data_validation(format!(
            "Invalid float for percentile: '{}'",
            columns[3]
        ))
    })?;

    Ok(Annotation::new(columns[0], start, end, percentile))
}
