//! In-memory tabular query engine.
//!
//! Pure functions over record collections: per-field filter predicates,
//! single-key stable sorting with natural ordering, and fixed-size
//! pagination. The caller owns the query state and re-runs the query on
//! every change; the source collection is never mutated.

pub mod engine;
pub mod filter;

pub use engine::{filter_and_sort, run_query, QueryPage, QueryState};
pub use filter::{FilterSet, Predicate, SortDirection};
