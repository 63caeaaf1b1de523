//! Firestore REST helpers for landing-page statistics.
//!
//! Only read-side aggregation lives here: the landing page shows how many
//! works exist per category. Documents are owned by the backend.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use serde::Deserialize;

use crate::config::FirebaseConfig;

/// Collection holding published works.
pub const WORKS_COLLECTION: &str = "works";

/// Categories shown on the landing page, in display order.
pub const CATEGORIES: [&str; 4] = ["Art", "Science", "Literature", "Audio"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FirestoreError {
    #[error("firestore {code}: {message}")]
    Service { code: String, message: String },
    #[error("firestore request failed: {0}")]
    Network(String),
    #[error("unexpected firestore response: {0}")]
    Decode(String),
}

impl FirestoreError {
    /// Lower-kebab status code as used by the SDK (`permission-denied`, ...).
    pub fn code(&self) -> &str {
        match self {
            Self::Service { code, .. } => code,
            Self::Network(_) => "unavailable",
            Self::Decode(_) => "internal",
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct AggregationRow {
    #[serde(default)]
    result: Option<AggregationResult>,
    #[serde(default)]
    error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregationResult {
    aggregate_fields: std::collections::HashMap<String, AggregateValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AggregateValue {
    #[serde(default)]
    integer_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RpcStatus,
}

/// Request body counting `works` documents whose `category` equals `category`.
pub fn count_query_body(category: &str) -> serde_json::Value {
    serde_json::json!({
        "structuredAggregationQuery": {
            "structuredQuery": {
                "from": [{ "collectionId": WORKS_COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "category" },
                        "op": "EQUAL",
                        "value": { "stringValue": category }
                    }
                }
            },
            "aggregations": [{ "alias": "count", "count": {} }]
        }
    })
}

fn status_to_code(status: &str) -> String {
    if status.is_empty() {
        return "unknown".to_owned();
    }
    status.to_ascii_lowercase().replace('_', "-")
}

fn service_error(status: RpcStatus) -> FirestoreError {
    FirestoreError::Service { code: status_to_code(&status.status), message: status.message }
}

/// Parse a `runAggregationQuery` response into the `count` aggregate.
pub fn parse_count_response(ok: bool, body: &str) -> Result<u64, FirestoreError> {
    if !ok {
        // Errors come back either bare or wrapped in a one-element stream.
        // Derived structs also accept arrays, so the stream shape goes first.
        if let Ok(mut rows) = serde_json::from_str::<Vec<ErrorEnvelope>>(body) {
            if let Some(row) = rows.pop() {
                return Err(service_error(row.error));
            }
        }
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return Err(service_error(envelope.error));
        }
        return Err(FirestoreError::Decode(body.chars().take(120).collect()));
    }

    let rows: Vec<AggregationRow> =
        serde_json::from_str(body).map_err(|e| FirestoreError::Decode(e.to_string()))?;
    for row in rows {
        if let Some(status) = row.error {
            return Err(service_error(status));
        }
        if let Some(result) = row.result {
            let raw = result
                .aggregate_fields
                .get("count")
                .and_then(|v| v.integer_value.as_deref())
                .ok_or_else(|| FirestoreError::Decode("missing count aggregate".to_owned()))?;
            return raw
                .parse::<u64>()
                .map_err(|e| FirestoreError::Decode(format!("count {raw:?}: {e}")));
        }
    }
    Err(FirestoreError::Decode("empty aggregation response".to_owned()))
}

/// Count published works in `category`.
pub async fn count_works(config: &FirebaseConfig, category: &str) -> Result<u64, FirestoreError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}:runAggregationQuery?key={}", config.firestore_documents_url(), config.api_key);
        let resp = gloo_net::http::Request::post(&url)
            .json(&count_query_body(category))
            .map_err(|e| FirestoreError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FirestoreError::Network(e.to_string()))?;
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| FirestoreError::Network(e.to_string()))?;
        parse_count_response(ok, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, category);
        Err(FirestoreError::Network("not available outside the browser".to_owned()))
    }
}
