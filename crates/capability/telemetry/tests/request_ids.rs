use ops_telemetry::{metrics, new_request_ids, record_import_rows_validated};

#[test]
fn request_ids_non_empty() {
    let ids = new_request_ids();
    assert!(!ids.request_id.is_empty());
    assert!(!ids.trace_id.is_empty());
}

#[test]
fn counters_accumulate() {
    let before = metrics().snapshot().import_rows_validated;
    record_import_rows_validated(5);
    let after = metrics().snapshot().import_rows_validated;
    assert_eq!(after - before, 5);
}
