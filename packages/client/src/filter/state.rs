//! User-editable filter inputs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Filter input for one view session
///
/// Both parts default to pass-through: empty text matches every record and
/// an empty facet selection applies no facet constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text needle, matched case-insensitively against the configured
    /// text fields
    pub text: String,
    /// Selected facet values; a record passes when its facet field is a
    /// member
    pub facets: BTreeSet<String>,
}

impl FilterState {
    /// Whether this state matches every record
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.text.is_empty() && self.facets.is_empty()
    }
}
