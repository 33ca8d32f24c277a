//! Query execution: filter, stable sort, paginate.
//!
//! `run_query` is a pure function of its inputs, re-invoked by the caller
//! on every filter/sort/page change. Out-of-range pages come back empty and
//! unclamped; page clamping is the caller's job (it drives the Prev/Next
//! button enablement).

use std::cmp::Ordering;

use crate::record::{Record, Scalar};

use super::filter::{FilterSet, SortDirection};

/// Caller-owned query state, rebuilt by the view on each interaction.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Per-field filter predicates
    pub filters: FilterSet,
    /// Field to sort by; `None` preserves input order
    pub sort_key: Option<String>,
    /// Sort direction (ignored when `sort_key` is `None`)
    pub sort_direction: SortDirection,
    /// 1-based page number
    pub page: usize,
    /// Records per page
    pub page_size: usize,
}

/// One page of query results plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    /// Records on the requested page, at most `page_size` of them
    pub records: Vec<Record>,
    /// Total records matching the filters, across all pages
    pub total_filtered: usize,
    /// `ceil(total_filtered / page_size)`; zero for an empty filtered set
    pub total_pages: usize,
}

/// Compare two optional field values with natural ordering.
///
/// Numeric when both values parse as numbers, lexical on the display text
/// otherwise. Records missing the key order before records that have it.
fn compare_values(a: Option<&Scalar>, b: Option<&Scalar>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

/// Filter and sort a record collection without paginating.
///
/// This is what CSV downloads export: the whole filtered set in display
/// order, not just the visible page. The source slice is left untouched.
pub fn filter_and_sort(
    records: &[Record],
    filters: &FilterSet,
    sort_key: Option<&str>,
    direction: SortDirection,
) -> Vec<Record> {
    let mut selected: Vec<Record> = records
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect();

    if let Some(key) = sort_key {
        // sort_by is stable: equal keys keep their input order in both
        // directions (the comparator sign flips, not the tie order).
        selected.sort_by(|a, b| {
            let ordering = compare_values(a.get(key), b.get(key));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    selected
}

/// Run a full query: filter, sort, then slice out the requested page.
pub fn run_query(records: &[Record], state: &QueryState) -> QueryPage {
    let selected = filter_and_sort(
        records,
        &state.filters,
        state.sort_key.as_deref(),
        state.sort_direction,
    );

    let total_filtered = selected.len();
    let total_pages = if state.page_size == 0 {
        0
    } else {
        total_filtered.div_ceil(state.page_size)
    };

    let start = state.page.saturating_sub(1).saturating_mul(state.page_size);
    let page_records = if start >= total_filtered {
        Vec::new()
    } else {
        selected[start..(start + state.page_size).min(total_filtered)].to_vec()
    };

    QueryPage {
        records: page_records,
        total_filtered,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::Predicate;

    fn point(id: &str, kind: &str, date: &str, alt: f64, project: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("type", kind)
            .with("date", date)
            .with("alt", alt)
            .with("project", project)
    }

    fn dataset() -> Vec<Record> {
        vec![
            point("PT-001", "Mapping", "2024-07-10", 152.0, "Aurora Gold"),
            point("GEO-056", "Geochemistry", "2024-07-11", 160.0, "Aurora Gold"),
            point("RC-001-01", "RC hole", "2024-07-12", 170.0, "Copper Ridge"),
            point("TR-01-S01", "Trench", "2024-07-13", 158.0, "Aurora Gold"),
            point("PT-002", "Mapping", "2024-07-10", 155.0, "Copper Ridge"),
        ]
    }

    fn state() -> QueryState {
        QueryState {
            page: 1,
            page_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_total_filtered_independent_of_sort_and_page() {
        let records = dataset();
        let filters =
            FilterSet::new().with("project", Predicate::Contains("aurora".to_string()));

        let mut s = state();
        s.filters = filters.clone();
        let plain = run_query(&records, &s);

        s.sort_key = Some("alt".to_string());
        s.sort_direction = SortDirection::Descending;
        s.page = 7;
        let shuffled = run_query(&records, &s);

        assert_eq!(plain.total_filtered, 3);
        assert_eq!(shuffled.total_filtered, 3);
    }

    #[test]
    fn test_unsorted_query_preserves_input_order() {
        let records = dataset();
        let page = run_query(&records, &state());
        let ids: Vec<String> = page.records.iter().map(|r| r.get("id").unwrap().to_string()).collect();
        assert_eq!(ids, vec!["PT-001", "GEO-056", "RC-001-01", "TR-01-S01", "PT-002"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = dataset();
        let mut s = state();
        s.sort_key = Some("date".to_string());

        let page = run_query(&records, &s);
        let ids: Vec<String> = page.records.iter().map(|r| r.get("id").unwrap().to_string()).collect();
        // PT-001 and PT-002 share 2024-07-10 and keep their input order.
        assert_eq!(ids[0], "PT-001");
        assert_eq!(ids[1], "PT-002");
    }

    #[test]
    fn test_descending_reverses_ascending_without_ties() {
        let records = dataset();
        let asc = filter_and_sort(&records, &FilterSet::new(), Some("alt"), SortDirection::Ascending);
        let desc = filter_and_sort(&records, &FilterSet::new(), Some("alt"), SortDirection::Descending);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(reversed, desc);
    }

    #[test]
    fn test_numeric_sort_not_lexical() {
        let records = vec![
            Record::new().with("id", "a").with("depth", 9.0),
            Record::new().with("id", "b").with("depth", 120.0),
            Record::new().with("id", "c").with("depth", 30.0),
        ];
        let sorted = filter_and_sort(&records, &FilterSet::new(), Some("depth"), SortDirection::Ascending);
        let ids: Vec<String> = sorted.iter().map(|r| r.get("id").unwrap().to_string()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_text_sort_is_lexical() {
        let records = vec![
            Record::new().with("lith", "saprolite"),
            Record::new().with("lith", "granite"),
            Record::new().with("lith", "laterite"),
        ];
        let sorted = filter_and_sort(&records, &FilterSet::new(), Some("lith"), SortDirection::Ascending);
        let values: Vec<String> = sorted.iter().map(|r| r.get("lith").unwrap().to_string()).collect();
        assert_eq!(values, vec!["granite", "laterite", "saprolite"]);
    }

    #[test]
    fn test_missing_sort_key_orders_first() {
        let records = vec![
            Record::new().with("id", "a").with("alt", 10.0),
            Record::new().with("id", "b"),
        ];
        let sorted = filter_and_sort(&records, &FilterSet::new(), Some("alt"), SortDirection::Ascending);
        assert_eq!(sorted[0].get("id").unwrap().to_string(), "b");
    }

    #[test]
    fn test_pagination_covers_filtered_set_exactly_once() {
        let records = dataset();
        let mut s = state();
        s.page_size = 2;
        s.sort_key = Some("id".to_string());

        let first = run_query(&records, &s);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            s.page = page;
            let result = run_query(&records, &s);
            seen.extend(result.records);
        }

        let full = filter_and_sort(&records, &s.filters, s.sort_key.as_deref(), s.sort_direction);
        assert_eq!(seen, full);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        let records = dataset();
        let mut s = state();
        s.page_size = 3;
        let page = run_query(&records, &s);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.records.len(), 3);

        s.page = 2;
        let page = run_query(&records, &s);
        assert_eq!(page.records.len(), 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_clamped() {
        let records = dataset();
        let mut s = state();
        s.page = 42;
        let page = run_query(&records, &s);
        assert!(page.records.is_empty());
        assert_eq!(page.total_filtered, 5);
    }

    #[test]
    fn test_empty_filtered_set_yields_zero_pages() {
        let records = dataset();
        let mut s = state();
        s.filters = FilterSet::new().with("id", Predicate::Contains("ZZZ".to_string()));
        let page = run_query(&records, &s);
        assert!(page.records.is_empty());
        assert_eq!(page.total_filtered, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_empty_input_collection() {
        let page = run_query(&[], &state());
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_source_collection_is_untouched() {
        let records = dataset();
        let before = records.clone();
        let mut s = state();
        s.sort_key = Some("alt".to_string());
        s.sort_direction = SortDirection::Descending;
        let _ = run_query(&records, &s);
        assert_eq!(records, before);
    }
}
