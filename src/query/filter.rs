//! Filter predicates for tabular queries.
//!
//! A `FilterSet` maps field names to match predicates. Predicates with an
//! empty value are inactive: they impose no constraint, exactly as if the
//! entry were absent. Active predicates combine with logical AND.

use crate::record::Record;

/// A per-field match predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match (text inputs)
    Contains(String),
    /// Case-insensitive equality (select inputs)
    Equals(String),
}

impl Predicate {
    /// The raw predicate value.
    pub fn value(&self) -> &str {
        match self {
            Predicate::Contains(v) | Predicate::Equals(v) => v,
        }
    }

    /// True when the predicate has no value and imposes no constraint.
    pub fn is_inactive(&self) -> bool {
        self.value().is_empty()
    }

    /// Apply the predicate to a field's display text.
    fn matches(&self, field_text: &str) -> bool {
        match self {
            Predicate::Contains(v) => field_text.to_lowercase().contains(&v.to_lowercase()),
            Predicate::Equals(v) => field_text.eq_ignore_ascii_case(v),
        }
    }
}

/// An ordered set of per-field filter predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, Predicate)>,
}

impl FilterSet {
    /// Create an empty filter set (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for a field, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, predicate: Predicate) {
        let field = field.into();
        if let Some(slot) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = predicate;
        } else {
            self.entries.push((field, predicate));
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        self.set(field, predicate);
        self
    }

    /// Field/predicate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.entries.iter().map(|(f, p)| (f.as_str(), p))
    }

    /// True when no entry imposes a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.entries.iter().all(|(_, p)| p.is_inactive())
    }

    /// Test a record against every active predicate (logical AND).
    ///
    /// A record lacking a filtered field cannot satisfy a non-empty
    /// predicate for it and does not match.
    pub fn matches(&self, record: &Record) -> bool {
        self.entries.iter().all(|(field, predicate)| {
            if predicate.is_inactive() {
                return true;
            }
            match record.get(field) {
                Some(value) => predicate.matches(&value.to_string()),
                None => false,
            }
        })
    }
}

/// Sort direction for a query's single-key sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// The opposite direction (header click toggling).
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator glyph for column headers.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{2191}",
            SortDirection::Descending => "\u{2193}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new()
            .with("id", "PT-001")
            .with("type", "Mapping")
            .with("project", "Aurora Gold")
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let filters = FilterSet::new().with("project", Predicate::Contains("aurora".to_string()));
        assert!(filters.matches(&sample()));
    }

    #[test]
    fn test_equals_is_case_insensitive() {
        let filters = FilterSet::new().with("type", Predicate::Equals("mapping".to_string()));
        assert!(filters.matches(&sample()));

        let filters = FilterSet::new().with("type", Predicate::Equals("mapp".to_string()));
        assert!(!filters.matches(&sample()));
    }

    #[test]
    fn test_empty_predicate_imposes_no_constraint() {
        let filters = FilterSet::new()
            .with("id", Predicate::Contains(String::new()))
            .with("type", Predicate::Equals(String::new()));
        assert!(filters.matches(&sample()));
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filters = FilterSet::new()
            .with("id", Predicate::Contains("PT".to_string()))
            .with("project", Predicate::Contains("copper".to_string()));
        assert!(!filters.matches(&sample()));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let filters = FilterSet::new().with("depth", Predicate::Contains("10".to_string()));
        assert!(!filters.matches(&sample()));
    }

    #[test]
    fn test_set_replaces_predicate() {
        let mut filters = FilterSet::new().with("id", Predicate::Contains("GEO".to_string()));
        filters.set("id", Predicate::Contains("PT".to_string()));
        assert!(filters.matches(&sample()));
    }

    #[test]
    fn test_numeric_field_filters_on_display_text() {
        let record = Record::new().with("coord_z", 152.0);
        let filters = FilterSet::new().with("coord_z", Predicate::Contains("15".to_string()));
        assert!(filters.matches(&record));
    }

    #[test]
    fn test_sort_direction_flip() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }
}
