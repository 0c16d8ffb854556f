//! Audit action vocabulary and detail-payload redaction.
//!
//! This module lives in `core` (zero internal deps) so both the API layer and
//! any future CLI tooling can share the action tags.

/// Known action tags for audit log entries. Free-form tags are accepted by
/// the table; these are the ones the service itself writes.
pub mod actions {
    pub const CREATE_REQUEST: &str = "CREATE_REQUEST";
    pub const UPDATE_REQUEST: &str = "UPDATE_REQUEST";
    pub const SUBMIT_REQUEST: &str = "SUBMIT_REQUEST";
    pub const APPROVE_REQUEST: &str = "APPROVE_REQUEST";
    pub const REJECT_REQUEST: &str = "REJECT_REQUEST";
    pub const GENERATE_DOCUMENT: &str = "GENERATE_DOCUMENT";
}

/// Top-level keys whose values are redacted from audit details before storage.
pub const SENSITIVE_FIELDS: &[&str] = &[
    "password",
    "token",
    "secret",
    "access_token",
    "refresh_token",
    "authorization",
    "credential",
];

/// Redact sensitive fields from a JSON value, recursing into objects and
/// arrays. Matching is substring-based on lowercased keys.
pub fn redact_sensitive_fields(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut redacted = serde_json::Map::new();
            for (key, val) in map {
                let lower_key = key.to_lowercase();
                if SENSITIVE_FIELDS.iter().any(|f| lower_key.contains(f)) {
                    redacted.insert(
                        key.clone(),
                        serde_json::Value::String("[REDACTED]".to_string()),
                    );
                } else {
                    redacted.insert(key.clone(), redact_sensitive_fields(val));
                }
            }
            serde_json::Value::Object(redacted)
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(redact_sensitive_fields).collect())
        }
        other => other.clone(),
    }
}
