//! Generic JSON decoding.
//!
//! Turns a response body into a `serde_json` tree without interpreting any
//! field. Shape-specific extraction happens in the mapper.

use serde_json::{Map, Value};

use crate::domain::json_kind;

/// A decoded top-level JSON object.
pub type Document = Map<String, Value>;

/// Error decoding a response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// The body is valid JSON but not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// A key the requested shape needs is absent.
    #[error("missing required key: {0}")]
    MissingKey(&'static str),

    /// A required key holds the wrong kind of value.
    #[error("key {key} must be {expected}, found {found}")]
    UnexpectedType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Parse a body into a generic JSON tree.
pub fn decode(body: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(body).map_err(|e| DecodeError::InvalidJson {
        message: e.to_string(),
    })
}

/// Parse a body that must be a JSON object.
pub fn decode_document(body: &str) -> Result<Document, DecodeError> {
    match decode(body)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Remove a required key from the document.
pub fn take_required(doc: &mut Document, key: &'static str) -> Result<Value, DecodeError> {
    doc.remove(key).ok_or(DecodeError::MissingKey(key))
}

/// Remove a required key that must hold an array.
pub fn take_array(doc: &mut Document, key: &'static str) -> Result<Vec<Value>, DecodeError> {
    match take_required(doc, key)? {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::UnexpectedType {
            key,
            expected: "an array",
            found: json_kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_object() {
        let doc = decode_document(r#"{"version": "1.1", "station": []}"#).unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn malformed_json() {
        let err = decode_document(r#"{"version": "1.1", "#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson { .. }));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn empty_body() {
        assert!(matches!(
            decode_document(""),
            Err(DecodeError::InvalidJson { .. })
        ));
    }

    #[test]
    fn top_level_array_is_not_a_document() {
        assert_eq!(
            decode_document("[]").unwrap_err(),
            DecodeError::NotAnObject { found: "array" }
        );
    }

    #[test]
    fn take_required_missing() {
        let mut doc = decode_document("{}").unwrap();
        assert_eq!(
            take_required(&mut doc, "connection").unwrap_err(),
            DecodeError::MissingKey("connection")
        );
    }

    #[test]
    fn take_array_wrong_type() {
        let mut doc = decode_document(r#"{"station": {"name": "x"}}"#).unwrap();
        let err = take_array(&mut doc, "station").unwrap_err();
        assert_eq!(
            err.to_string(),
            "key station must be an array, found object"
        );
    }

    #[test]
    fn take_array_removes_key() {
        let mut doc = decode_document(r#"{"station": [1, 2]}"#).unwrap();
        assert_eq!(take_array(&mut doc, "station").unwrap().len(), 2);
        assert!(!doc.contains_key("station"));
    }
}
