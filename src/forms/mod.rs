//! Parameterized data-entry forms.
//!
//! Every screen in the client is one static field-list table (a
//! [`FormSpec`]) plus a [`FormState`] holding what the operator has typed.
//! Submitting converts the values into a [`Record`] and logs it; there is
//! no persistence behind the forms.

pub mod catalog;

use crate::record::{Record, Scalar};

/// What kind of input a field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Numeric input (parses to a number on submit)
    Number,
    /// Date in `YYYY-MM-DD` form, defaulting to today
    Date,
    /// Time of day in `HH:MM` form
    Time,
    /// Multi-line free text
    Multiline,
    /// One of a fixed option list
    Select(&'static [&'static str]),
}

/// One field of a form: stable name, display label, input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name used as the record key and CSV column
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    /// Input kind
    pub kind: FieldKind,
}

/// A complete form definition for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    /// Stable identifier, used in logs
    pub id: &'static str,
    /// Title shown above the form
    pub title: &'static str,
    /// Filename for the form's CSV download
    pub download_name: &'static str,
    /// Ordered field list
    pub fields: &'static [FieldSpec],
}

impl FormSpec {
    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// Entered values for one form, in spec field order.
#[derive(Debug, Clone)]
pub struct FormState {
    /// The form being filled in
    pub spec: &'static FormSpec,
    /// Current input text per field, parallel to `spec.fields`
    pub values: Vec<String>,
}

impl FormState {
    /// Fresh state for a spec: selects start on their first option, dates
    /// start on today, everything else starts empty.
    pub fn new(spec: &'static FormSpec) -> Self {
        let values = spec.fields.iter().map(Self::default_value).collect();
        Self { spec, values }
    }

    fn default_value(field: &FieldSpec) -> String {
        match field.kind {
            FieldKind::Select(options) => options.first().copied().unwrap_or("").to_string(),
            FieldKind::Date => chrono::Local::now().format("%Y-%m-%d").to_string(),
            _ => String::new(),
        }
    }

    /// Reset every field to its default.
    pub fn reset(&mut self) {
        self.values = self.spec.fields.iter().map(Self::default_value).collect();
    }

    /// Mutable access to a field's input text by name.
    pub fn value_mut(&mut self, name: &str) -> Option<&mut String> {
        let index = self.spec.field_index(name)?;
        self.values.get_mut(index)
    }

    /// Convert the entered values into a record, in spec field order.
    ///
    /// Numeric fields that parse become numbers; a numeric field left blank
    /// or unparseable stays as its text form (the exporter renders values
    /// as-is either way).
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        for (field, value) in self.spec.fields.iter().zip(&self.values) {
            let scalar = match field.kind {
                FieldKind::Number => value
                    .trim()
                    .parse::<f64>()
                    .map(Scalar::Number)
                    .unwrap_or_else(|_| Scalar::Text(value.clone())),
                _ => Scalar::Text(value.clone()),
            };
            record.set(field.name, scalar);
        }
        record
    }

    /// Submit the form: log the record as structured JSON and reset.
    ///
    /// Returns the submitted record so the caller can keep it in its
    /// session list. There is no store behind the forms; the log line is
    /// the submission.
    pub fn submit(&mut self) -> Record {
        let record = self.to_record();
        match serde_json::to_string(&record) {
            Ok(json) => tracing::info!("Form {} submitted: {}", self.spec.id, json),
            Err(e) => tracing::warn!("Form {} submitted (unserializable: {})", self.spec.id, e),
        }
        self.reset();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog;

    #[test]
    fn test_new_state_defaults() {
        let state = FormState::new(&catalog::SAFETY_MEETING);
        let shift = state.spec.field_index("shift").unwrap();
        assert_eq!(state.values[shift], "Day");

        let date = state.spec.field_index("date").unwrap();
        assert_eq!(state.values[date].len(), 10);

        let leader = state.spec.field_index("leader").unwrap();
        assert!(state.values[leader].is_empty());
    }

    #[test]
    fn test_to_record_preserves_spec_order() {
        let state = FormState::new(&catalog::GEOCHEMISTRY);
        let record = state.to_record();
        let keys: Vec<&str> = record.keys().collect();
        let names: Vec<&str> = catalog::GEOCHEMISTRY.fields.iter().map(|f| f.name).collect();
        assert_eq!(keys, names);
    }

    #[test]
    fn test_to_record_parses_numbers() {
        let mut state = FormState::new(&catalog::RC_COLLAR);
        *state.value_mut("x").unwrap() = "412350.5".to_string();
        let record = state.to_record();
        assert_eq!(record.get("x").unwrap().as_number(), Some(412350.5));
    }

    #[test]
    fn test_to_record_keeps_unparseable_number_as_text() {
        let mut state = FormState::new(&catalog::RC_COLLAR);
        *state.value_mut("x").unwrap() = "n/a".to_string();
        let record = state.to_record();
        assert_eq!(record.get("x").unwrap().to_string(), "n/a");
    }

    #[test]
    fn test_submit_resets_values() {
        let mut state = FormState::new(&catalog::FUEL_TRACKING);
        *state.value_mut("equipment_id").unwrap() = "RIG-07".to_string();

        let record = state.submit();
        assert_eq!(record.get("equipment_id").unwrap().to_string(), "RIG-07");

        let index = state.spec.field_index("equipment_id").unwrap();
        assert!(state.values[index].is_empty());
    }
}
