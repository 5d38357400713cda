//! JSONPath-subset querying over parsed JSON values
//!
//! Compiles user-entered path expressions and evaluates them against
//! `serde_json::Value` payloads. The supported grammar covers a leading `$`
//! root, dot and bracket property access, array indices with negatives,
//! slices, wildcards, recursive descent, and filter predicates with
//! comparisons and `&&`/`||`.
//!
//! The module-level entry points implement the inspector contract: an empty
//! expression is the identity query, and a rejected expression normalizes to
//! an empty result instead of an error.

pub mod ast;
pub mod compiler;
pub mod error;
mod evaluator;
pub mod outcome;
mod parser;
mod tokenizer;
pub mod tokens;

pub use self::ast::{ComparisonOp, FilterExpression, FilterValue, LogicalOp, PathSelector};
pub use self::compiler::PathQuery;
pub use self::error::{PathError, PathResult};
pub use self::outcome::QueryOutcome;

use serde_json::Value;

/// Evaluate `path` against `root`, tagging rejected expressions
///
/// An empty `path` is the identity query and returns the root itself, so a
/// consumer can render the untouched payload before any expression has been
/// typed.
#[must_use]
pub fn query(root: &Value, path: &str) -> QueryOutcome {
    if path.is_empty() {
        return QueryOutcome::Matches(vec![root.clone()]);
    }
    match PathQuery::compile(path) {
        Ok(compiled) => QueryOutcome::Matches(compiled.evaluate(root)),
        Err(error) => {
            tracing::debug!(
                target: "vitrine::jsonpath",
                expression = path,
                error = %error,
                "path expression rejected"
            );
            QueryOutcome::Invalid(error)
        }
    }
}

/// Evaluate `path` against `root`, flattening rejected expressions to an
/// empty result
#[must_use]
pub fn evaluate(root: &Value, path: &str) -> Vec<Value> {
    query(root, path).into_values()
}
