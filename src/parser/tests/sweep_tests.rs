//! Tests for null-like field removal

use serde_json::{json, Map, Value};

use super::{create_temp_file, test_config};
use crate::parser::sweep::{is_null_like, sweep_record};
use crate::parser::AnnotationParser;

#[test]
fn test_is_null_like_sentinels() {
    assert!(is_null_like(&Value::Null));
    assert!(is_null_like(&json!("")));
    assert!(is_null_like(&json!("null")));
    assert!(is_null_like(&json!("N/A")));
    assert!(is_null_like(&json!([])));
    assert!(is_null_like(&json!({})));
}

#[test]
fn test_is_null_like_preserves_meaningful_values() {
    assert!(!is_null_like(&json!(0)));
    assert!(!is_null_like(&json!(0.0)));
    assert!(!is_null_like(&json!(false)));
    assert!(!is_null_like(&json!("0")));
    assert!(!is_null_like(&json!("NA"))); // only the documented tokens count
    assert!(!is_null_like(&json!([1])));
    assert!(!is_null_like(&json!({"a": 1})));
}

#[test]
fn test_sweep_record_removes_only_null_like_fields() {
    let mut record = Map::new();
    record.insert("chrom".to_string(), json!(""));
    record.insert("start".to_string(), json!(100));
    record.insert("end".to_string(), json!(200));
    record.insert("note".to_string(), json!("null"));
    record.insert("percentile".to_string(), json!(0.85));

    let swept = sweep_record(record);
    assert_eq!(swept.len(), 3);
    assert!(swept.get("chrom").is_none());
    assert!(swept.get("note").is_none());
    assert_eq!(swept.get("start"), Some(&json!(100)));
    assert_eq!(swept.get("percentile"), Some(&json!(0.85)));
}

#[test]
fn test_stream_sweeps_empty_chrom_when_enabled() {
    // An empty chromosome field is valid schema-wise but null-like
    let file = create_temp_file("\t100\t200\t0.85\n");
    let config = test_config().with_sweep_nulls();
    let parser = AnnotationParser::new(config);

    let document = parser.stream(file.path()).unwrap().next().unwrap();
    assert_eq!(document.id, "chr:g.100_200");
    assert!(document.body.get("chrom").is_none());
    assert_eq!(document.body["start"], json!(100));
}

#[test]
fn test_stream_without_sweep_keeps_empty_fields() {
    let file = create_temp_file("\t100\t200\t0.85\n");
    let parser = AnnotationParser::new(test_config());

    let document = parser.stream(file.path()).unwrap().next().unwrap();
    assert_eq!(document.body["chrom"], json!(""));
}
