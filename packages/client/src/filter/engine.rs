//! Record filtering over displayed fields

use crate::filter::state::FilterState;
use crate::records::Record;

/// Free-text and facet filter over a record collection
///
/// The text predicate matches when any configured text field contains the
/// needle, ignoring case. The facet predicate matches when the facet field's
/// value is one of the selected facets. A record must pass both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    text_fields: Vec<String>,
    facet_field: String,
}

impl RecordFilter {
    /// Create a filter over the given text fields and facet field
    pub fn new<I, S>(text_fields: I, facet_field: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text_fields: text_fields.into_iter().map(Into::into).collect(),
            facet_field: facet_field.into(),
        }
    }

    /// Fields participating in free-text matching
    #[must_use]
    pub fn text_fields(&self) -> &[String] {
        &self.text_fields
    }

    /// Field whose value the facet selection constrains
    #[must_use]
    pub fn facet_field(&self) -> &str {
        &self.facet_field
    }

    /// Whether a single record passes the combined predicate
    #[must_use]
    pub fn matches<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        self.matches_text(record, &state.text) && self.matches_facet(record, state)
    }

    /// Filter a collection, preserving input order
    ///
    /// The source collection stays untouched; the visible sequence is
    /// re-derived from it on every call.
    #[must_use]
    pub fn apply<'a, R: Record>(&self, records: &'a [R], state: &FilterState) -> Vec<&'a R> {
        records
            .iter()
            .filter(|record| self.matches(*record, state))
            .collect()
    }

    fn matches_text<R: Record>(&self, record: &R, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        let needle = text.to_lowercase();
        self.text_fields.iter().any(|field| {
            record
                .text_field(field)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
    }

    fn matches_facet<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        if state.facets.is_empty() {
            return true;
        }
        record
            .text_field(&self.facet_field)
            .is_some_and(|value| state.facets.contains(value.as_ref()))
    }
}
