//! Tagged evaluation outcome for user-entered path expressions

use serde_json::Value;

use super::error::PathError;

/// Result of evaluating a user-entered path expression
///
/// Keeps "matched nothing" distinguishable from "expression rejected" while
/// both render as an empty sequence through [`QueryOutcome::values`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The expression compiled; zero or more matched values in document order
    Matches(Vec<Value>),
    /// The expression was rejected at compile time
    Invalid(PathError),
}

impl QueryOutcome {
    /// Matched values; a rejected expression renders as no matches
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            QueryOutcome::Matches(values) => values,
            QueryOutcome::Invalid(_) => &[],
        }
    }

    /// Consume the outcome, yielding the matched values
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        match self {
            QueryOutcome::Matches(values) => values,
            QueryOutcome::Invalid(_) => Vec::new(),
        }
    }

    /// Compile error of a rejected expression
    #[must_use]
    pub fn error(&self) -> Option<&PathError> {
        match self {
            QueryOutcome::Matches(_) => None,
            QueryOutcome::Invalid(error) => Some(error),
        }
    }

    /// Whether the expression was rejected
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, QueryOutcome::Invalid(_))
    }
}
