//! Expandable per-row detail panel

use serde_json::Value;
use vitrine_client::jsonpath::{self, QueryOutcome};

/// Detail panel state for one expanded row
///
/// A panel exists only while its row is expanded. It holds the row's
/// editable path expression and the outcome of applying it to the row's
/// nested payload; collapsing the row drops the panel, so re-expanding
/// starts fresh with the identity query.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    path: String,
    outcome: QueryOutcome,
}

impl DetailPanel {
    /// Open a panel over a row payload, starting from the identity query
    pub(crate) fn open(raw: Option<&Value>) -> Self {
        Self {
            path: String::new(),
            outcome: Self::compute(raw, ""),
        }
    }

    /// Re-derive the outcome for an edited path expression
    pub(crate) fn update(&mut self, raw: Option<&Value>, path: &str) {
        self.path = path.to_string();
        self.outcome = Self::compute(raw, path);
    }

    fn compute(raw: Option<&Value>, path: &str) -> QueryOutcome {
        match raw {
            Some(raw) => jsonpath::query(raw, path),
            None => QueryOutcome::Matches(Vec::new()),
        }
    }

    /// The path expression currently typed into the panel
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Outcome of the current expression, including rejection
    #[must_use]
    pub fn outcome(&self) -> &QueryOutcome {
        &self.outcome
    }

    /// Values the panel renders; rejected expressions render as no matches
    #[must_use]
    pub fn values(&self) -> &[Value] {
        self.outcome.values()
    }
}
