use super::*;

#[test]
fn count_query_filters_on_category() {
    let body = count_query_body("Audio");
    let filter = &body["structuredAggregationQuery"]["structuredQuery"]["where"]["fieldFilter"];
    assert_eq!(filter["value"]["stringValue"], "Audio");
    assert_eq!(filter["op"], "EQUAL");
    assert_eq!(
        body["structuredAggregationQuery"]["structuredQuery"]["from"][0]["collectionId"],
        "works"
    );
}

#[test]
fn parse_count_reads_integer_value() {
    let body = r#"[{"result":{"aggregateFields":{"count":{"integerValue":"12"}}},"readTime":"2024-01-01T00:00:00Z"}]"#;
    assert_eq!(parse_count_response(true, body), Ok(12));
}

#[test]
fn parse_count_reports_streamed_error() {
    let body = r#"[{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}]"#;
    let err = parse_count_response(false, body).unwrap_err();
    assert_eq!(err.code(), "permission-denied");
}

#[test]
fn streamed_error_keeps_backend_message() {
    let body = r#"[{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED","details":[]}}]"#;
    let err = parse_count_response(false, body).unwrap_err();
    assert_eq!(
        err,
        FirestoreError::Service {
            code: "permission-denied".to_owned(),
            message: "Missing or insufficient permissions.".to_owned(),
        }
    );
    assert_eq!(
        crate::net::service_errors::firestore_error_message(err.code(), "loading works"),
        "Error during loading works. You do not have permission to perform this action."
    );
}

#[test]
fn empty_error_stream_is_decode_error() {
    let err = parse_count_response(false, "[]").unwrap_err();
    assert!(matches!(err, FirestoreError::Decode(_)));
}

#[test]
fn parse_count_reports_bare_error() {
    let body = r#"{"error":{"code":503,"message":"try later","status":"UNAVAILABLE"}}"#;
    let err = parse_count_response(false, body).unwrap_err();
    assert_eq!(
        err,
        FirestoreError::Service { code: "unavailable".to_owned(), message: "try later".to_owned() }
    );
}

#[test]
fn parse_count_without_result_is_decode_error() {
    let err = parse_count_response(true, r#"[{"readTime":"2024-01-01T00:00:00Z"}]"#).unwrap_err();
    assert!(matches!(err, FirestoreError::Decode(_)));
}

#[test]
fn network_error_code_is_unavailable() {
    assert_eq!(FirestoreError::Network("offline".into()).code(), "unavailable");
}
