//! Case-insensitive "any field" search.
//!
//! The filtered view is recomputed from the whole collection on every query
//! or collection change. That is a linear scan per change; fine for a member
//! list, but an incrementally maintained index would be needed at scale.

use roster_model::{Record, RecordField};

/// A committed search query.
///
/// Matched verbatim apart from case: whitespace in the query is part of the
/// substring a field must contain. Only the empty string matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The text as the operator typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when at least one field contains the query, ignoring case.
    pub fn matches(&self, record: &Record) -> bool {
        self.is_empty()
            || RecordField::ALL
                .iter()
                .any(|&field| record.field_text(field).to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Positions in `records` of every record matching `query`, in order.
pub fn matching_indices(records: &[Record], query: &SearchQuery) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record))
        .map(|(index, _)| index)
        .collect()
}

/// The records matching `query`, in collection order.
///
/// An empty query returns the full collection.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query = SearchQuery::new(query);
    records.iter().filter(|r| query.matches(r)).collect()
}
