//! Null-like field removal
//!
//! Records from annotation sources routinely carry placeholder values for
//! missing data. The sweep removes them so only meaningful fields reach the
//! document store.

use crate::constants::NULL_SENTINELS;
use serde_json::{Map, Value};

/// Whether a value counts as null-like
///
/// The sentinel set is fixed: JSON null, the empty string, the literal
/// tokens `"null"` and `"N/A"`, an empty array, or an empty object.
pub fn is_null_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => NULL_SENTINELS.contains(&s.as_str()),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

/// Remove every null-like field from a record
///
/// Produces a sparse record containing only meaningful values; all other
/// values pass through unchanged.
pub fn sweep_record(record: Map<String, Value>) -> Map<String, Value> {
    record
        .into_iter()
        .filter(|(_, value)| !is_null_like(value))
        .collect()
}
