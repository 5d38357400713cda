//! Path expression compilation
//!
//! Front-door validation plus tokenizer and parser orchestration, producing
//! a compiled query that can be evaluated any number of times.

use serde_json::Value;

use super::ast::PathSelector;
use super::error::{PathError, PathResult};
use super::evaluator;
use super::parser::SelectorParser;
use super::tokenizer::Tokenizer;

/// A compiled path expression
///
/// Compiling once and evaluating per payload keeps per-row inspector
/// updates cheap when the same expression is applied across a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery {
    selectors: Vec<PathSelector>,
    expression: String,
}

impl PathQuery {
    /// Compile a path expression into a selector chain
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] for empty input, a missing `$` root, or any
    /// syntax error in the selector grammar.
    pub fn compile(expression: &str) -> PathResult<Self> {
        Self::precheck(expression)?;
        let tokens = Tokenizer::new(expression).tokenize()?;
        let selectors = SelectorParser::new(tokens).parse()?;
        if matches!(selectors.last(), Some(PathSelector::RecursiveDescent)) {
            return Err(PathError::new(
                "recursive descent `..` must be followed by a selector",
                None,
            ));
        }
        Ok(Self {
            selectors,
            expression: expression.to_string(),
        })
    }

    /// Reject malformed shapes early with specific messages
    fn precheck(expression: &str) -> PathResult<()> {
        if expression.is_empty() {
            return Err(PathError::new("empty expression", Some(0)));
        }
        if !expression.starts_with('$') {
            if expression.starts_with('@') {
                return Err(PathError::new(
                    "current node identifier `@` is only valid inside filter expressions",
                    Some(0),
                ));
            }
            return Err(PathError::new("expressions must start with `$`", Some(0)));
        }
        if let Some(c) = expression.chars().nth(1)
            && c != '.'
            && c != '['
            && !c.is_whitespace()
        {
            return Err(PathError::new(
                "property access requires `.` or `[...]` notation after `$`",
                Some(1),
            ));
        }
        if expression.ends_with('.') && !expression.ends_with("..") {
            return Err(PathError::new(
                "incomplete property access (trailing `.`)",
                Some(expression.chars().count().saturating_sub(1)),
            ));
        }
        Ok(())
    }

    /// Evaluate the compiled query against a root value
    ///
    /// Matched values are cloned out of the input in document order.
    /// Structural misses yield an empty vector, never an error.
    #[must_use]
    pub fn evaluate(&self, root: &Value) -> Vec<Value> {
        evaluator::evaluate(&self.selectors, root)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Borrowing variant of [`PathQuery::evaluate`]
    #[must_use]
    pub fn evaluate_refs<'a>(&self, root: &'a Value) -> Vec<&'a Value> {
        evaluator::evaluate(&self.selectors, root)
    }

    /// The compiled selector chain
    #[must_use]
    pub fn selectors(&self) -> &[PathSelector] {
        &self.selectors
    }

    /// The source expression text
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}
