//! Weakly-typed results.
//!
//! Liveboard and vehicle payloads are heterogeneous and only ever read by
//! field name, so they are not promoted to dedicated types. Instead they are
//! converted into a [`DynamicValue`] tree whose records expose
//! [`DynamicRecord::get`].

use std::collections::BTreeMap;

use serde_json::{Number, Value};

/// Error returned when a weak conversion meets a value it cannot represent
/// at that position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported shape: expected a mapping or sequence, found {found}")]
pub struct UnsupportedShape {
    found: &'static str,
}

impl UnsupportedShape {
    pub(crate) fn new(found: &'static str) -> Self {
        Self { found }
    }

    /// The JSON kind that was rejected.
    pub fn found(&self) -> &'static str {
        self.found
    }
}

/// A field-accessible JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Record(DynamicRecord),
    List(Vec<DynamicValue>),
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
}

/// A mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicRecord {
    fields: BTreeMap<String, DynamicValue>,
}

impl DynamicValue {
    /// Convert a JSON mapping or sequence.
    ///
    /// Mappings become records and sequences convert element by element with
    /// the same rule, so a sequence of bare scalars is rejected too. Field
    /// values inside a record may be anything; nested mappings and sequences
    /// there are converted recursively.
    ///
    /// # Examples
    ///
    /// ```
    /// use irail::domain::DynamicValue;
    /// use serde_json::json;
    ///
    /// let v = DynamicValue::from_json(json!({"name": "IC1832", "stops": {"number": "3"}})).unwrap();
    /// assert_eq!(v.get("name").and_then(|n| n.as_str()), Some("IC1832"));
    /// assert_eq!(v.get("stops").and_then(|s| s.get("number")).and_then(|n| n.as_i64()), Some(3));
    ///
    /// assert!(DynamicValue::from_json(json!("bare")).is_err());
    /// ```
    pub fn from_json(value: Value) -> Result<Self, UnsupportedShape> {
        match value {
            Value::Object(map) => Ok(Self::Record(DynamicRecord::from_map(map))),
            Value::Array(items) => items
                .into_iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            other => Err(UnsupportedShape::new(json_kind(&other))),
        }
    }

    /// An empty record, used where the service omitted the whole payload.
    pub fn empty_record() -> Self {
        Self::Record(DynamicRecord::default())
    }

    fn from_field(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Record(DynamicRecord::from_map(map)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_field).collect()),
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            Value::Null => Self::Null,
        }
    }

    /// Look up a field, if this is a record.
    pub fn get(&self, field: &str) -> Option<&DynamicValue> {
        self.as_record()?.get(field)
    }

    /// Element at `index`, if this is a list.
    pub fn at(&self, index: usize) -> Option<&DynamicValue> {
        self.as_list()?.get(index)
    }

    pub fn as_record(&self) -> Option<&DynamicRecord> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value, accepting the string-typed integers iRail sends.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl DynamicRecord {
    fn from_map(map: serde_json::Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(k, v)| (k, DynamicValue::from_field(v)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&DynamicValue> {
        self.fields.get(field)
    }

    /// Shorthand for a text field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_fields_are_accessible() {
        let v = DynamicValue::from_json(json!({
            "name": "BE.NMBS.IC1832",
            "locationX": "0",
            "canceled": "0"
        }))
        .unwrap();

        let r = v.as_record().unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.get_str("name"), Some("BE.NMBS.IC1832"));
        assert_eq!(r.get("canceled").and_then(DynamicValue::as_i64), Some(0));
        assert!(r.get("missing").is_none());
    }

    #[test]
    fn nested_records_are_converted() {
        let v = DynamicValue::from_json(json!({
            "stationinfo": {"id": "BE.NMBS.008814001", "name": "Brussels-South"}
        }))
        .unwrap();

        let info = v.get("stationinfo").unwrap();
        assert_eq!(
            info.get("id").and_then(DynamicValue::as_str),
            Some("BE.NMBS.008814001")
        );
    }

    #[test]
    fn sequence_converts_element_wise() {
        let v = DynamicValue::from_json(json!([
            {"id": "0", "vehicle": "BE.NMBS.IC1832"},
            {"id": "1", "vehicle": "BE.NMBS.S12345"}
        ]))
        .unwrap();

        let items = v.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            v.at(1).and_then(|d| d.get("vehicle")).and_then(DynamicValue::as_str),
            Some("BE.NMBS.S12345")
        );
    }

    #[test]
    fn scalars_inside_records_are_kept() {
        let v = DynamicValue::from_json(json!({
            "n": 3, "flag": true, "nothing": null, "tags": ["a", "b"]
        }))
        .unwrap();

        assert_eq!(v.get("n").and_then(DynamicValue::as_i64), Some(3));
        assert_eq!(v.get("flag").and_then(DynamicValue::as_bool), Some(true));
        assert!(v.get("nothing").unwrap().is_null());
        assert_eq!(
            v.get("tags").and_then(|t| t.at(0)).and_then(DynamicValue::as_str),
            Some("a")
        );
    }

    #[test]
    fn bare_scalar_is_rejected() {
        let err = DynamicValue::from_json(json!("departures")).unwrap_err();
        assert_eq!(err.found(), "string");

        assert!(DynamicValue::from_json(json!(42)).is_err());
        assert!(DynamicValue::from_json(Value::Null).is_err());
    }

    #[test]
    fn top_level_sequence_of_scalars_is_rejected() {
        let err = DynamicValue::from_json(json!([{"a": 1}, 2])).unwrap_err();
        assert_eq!(err.found(), "number");
    }

    #[test]
    fn empty_record() {
        let v = DynamicValue::empty_record();
        assert!(v.as_record().unwrap().is_empty());
        assert_eq!(v, DynamicValue::from_json(json!({})).unwrap());
    }

    #[test]
    fn contains_checks_field_presence() {
        let v = DynamicValue::from_json(json!({"name": "BE.NMBS.IC1832", "note": null})).unwrap();
        let record = v.as_record().unwrap();
        assert!(record.contains("name"));
        assert!(record.contains("note"));
        assert!(!record.contains("shortname"));
        assert!(!DynamicValue::empty_record().as_record().unwrap().contains("name"));
    }

    #[test]
    fn keys_are_sorted() {
        let v = DynamicValue::from_json(json!({"b": 1, "a": 2})).unwrap();
        let keys: Vec<_> = v.as_record().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
