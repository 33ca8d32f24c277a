//! Flat tabular records: an ordered field-name to scalar-value mapping.
//!
//! Every data-entry form and every dataset in GeoField flattens to this
//! shape before it reaches the query engine or the exporter. Field order is
//! insertion order and is significant: the exporter derives the CSV header
//! from the first record's keys.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A scalar field value: free text (dates keep their string form) or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value (including date strings, kept as entered)
    Text(String),
    /// Numeric value
    Number(f64),
}

impl Scalar {
    /// Numeric view of the value, if it has one.
    ///
    /// Numbers return themselves; text returns the parsed value when the
    /// trimmed string parses as a float. Used for natural-order comparison.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(t) => f.write_str(t),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

/// One row of tabular data.
///
/// Fields keep their insertion order. All records passed together to the
/// exporter or the query engine are expected to share one field set; that
/// is the caller's contract and is not enforced here beyond "the first
/// record's keys define the header".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, or replace its value if the name already exists.
    ///
    /// Replacing keeps the field's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Builder-style `set`, for literal record construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Field name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Serialized as a JSON object in field order, so a submitted record can be
// logged as one structured line.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            match value {
                Scalar::Text(t) => map.serialize_entry(name, t)?,
                Scalar::Number(n) => map.serialize_entry(name, n)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_as_number() {
        assert_eq!(Scalar::Number(4.5).as_number(), Some(4.5));
        assert_eq!(Scalar::Text("12".to_string()).as_number(), Some(12.0));
        assert_eq!(Scalar::Text(" 3.25 ".to_string()).as_number(), Some(3.25));
        assert_eq!(Scalar::Text("granite".to_string()).as_number(), None);
        assert_eq!(Scalar::Text("".to_string()).as_number(), None);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Text("PT-001".to_string()).to_string(), "PT-001");
        assert_eq!(Scalar::Number(152.0).to_string(), "152");
        assert_eq!(Scalar::Number(5.361).to_string(), "5.361");
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new()
            .with("id", "PT-001")
            .with("coord_x", 5.361)
            .with("project", "Aurora Gold");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["id", "coord_x", "project"]);
    }

    #[test]
    fn test_record_set_replaces_in_place() {
        let mut record = Record::new().with("id", "PT-001").with("alt", 152.0);
        record.set("id", "PT-002");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["id", "alt"]);
        assert_eq!(record.get("id"), Some(&Scalar::Text("PT-002".to_string())));
    }

    #[test]
    fn test_record_get_missing() {
        let record = Record::new().with("id", "PT-001");
        assert!(record.get("lithology").is_none());
    }

    #[test]
    fn test_record_serializes_as_object() {
        let record = Record::new().with("id", "GEO-056").with("weight", 2.5);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"GEO-056","weight":2.5}"#);
    }
}
