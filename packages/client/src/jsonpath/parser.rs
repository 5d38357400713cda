//! Selector parser for path expressions
//!
//! Consumes the token stream into a selector chain, dispatching on dot,
//! bracket, and filter forms. Filter predicates parse with the usual
//! precedence: comparisons bind tighter than `&&`, which binds tighter
//! than `||`.

use std::collections::VecDeque;

use super::ast::{ComparisonOp, FilterExpression, FilterValue, LogicalOp, PathSelector};
use super::error::{PathError, PathResult};
use super::tokens::Token;

/// Parser over a tokenized path expression
pub(crate) struct SelectorParser {
    tokens: VecDeque<Token>,
}

impl SelectorParser {
    pub(crate) fn new(tokens: VecDeque<Token>) -> Self {
        Self { tokens }
    }

    /// Parse the complete selector chain
    pub(crate) fn parse(mut self) -> PathResult<Vec<PathSelector>> {
        let mut selectors = Vec::new();
        while !matches!(self.peek(), Some(Token::Eof) | None) {
            selectors.push(self.parse_selector()?);
        }
        Ok(selectors)
    }

    fn parse_selector(&mut self) -> PathResult<PathSelector> {
        match self.next() {
            Some(Token::Root) => Ok(PathSelector::Root),
            Some(Token::Dot) => self.parse_dot_selector(),
            Some(Token::DoubleDot) => Ok(PathSelector::RecursiveDescent),
            Some(Token::Star) => Ok(PathSelector::Wildcard),
            Some(Token::LeftBracket) => self.parse_bracket_selector(),
            Some(Token::Identifier(name)) => Ok(PathSelector::Child { name }),
            Some(Token::At) => Err(PathError::new(
                "current node identifier `@` is only valid inside filter expressions",
                None,
            )),
            other => Err(Self::unexpected("a selector", other.as_ref())),
        }
    }

    fn parse_dot_selector(&mut self) -> PathResult<PathSelector> {
        match self.next() {
            Some(Token::Star) => Ok(PathSelector::Wildcard),
            Some(Token::Identifier(name)) => Ok(PathSelector::Child { name }),
            other => Err(Self::unexpected(
                "a property name or `*` after `.`",
                other.as_ref(),
            )),
        }
    }

    fn parse_bracket_selector(&mut self) -> PathResult<PathSelector> {
        match self.next() {
            Some(Token::Star) => {
                self.expect(&Token::RightBracket)?;
                Ok(PathSelector::Wildcard)
            }
            Some(Token::String(name)) => {
                self.expect(&Token::RightBracket)?;
                Ok(PathSelector::Child { name })
            }
            Some(Token::Integer(index)) => self.parse_index_or_slice(index),
            Some(Token::Colon) => self.parse_slice(None),
            Some(Token::Question) => self.parse_filter(),
            other => Err(Self::unexpected(
                "an index, slice, quoted name, `*`, or `?` filter inside brackets",
                other.as_ref(),
            )),
        }
    }

    /// A leading integer in brackets is an index unless a `:` follows
    fn parse_index_or_slice(&mut self, first: i64) -> PathResult<PathSelector> {
        if matches!(self.peek(), Some(Token::Colon)) {
            self.next();
            self.parse_slice(Some(first))
        } else {
            self.expect(&Token::RightBracket)?;
            Ok(PathSelector::Index { index: first })
        }
    }

    /// Parse the remainder of a slice once the first `:` has been consumed
    fn parse_slice(&mut self, start: Option<i64>) -> PathResult<PathSelector> {
        let mut end = None;
        let mut step = None;
        if let Some(Token::Integer(value)) = self.peek() {
            end = Some(*value);
            self.next();
        }
        if matches!(self.peek(), Some(Token::Colon)) {
            self.next();
            if let Some(Token::Integer(value)) = self.peek() {
                step = Some(*value);
                self.next();
            }
        }
        self.expect(&Token::RightBracket)?;
        Ok(PathSelector::Slice { start, end, step })
    }

    fn parse_filter(&mut self) -> PathResult<PathSelector> {
        let predicate = self.parse_predicate()?;
        self.expect(&Token::RightBracket)?;
        Ok(PathSelector::Filter { predicate })
    }

    fn parse_predicate(&mut self) -> PathResult<FilterExpression> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> PathResult<FilterExpression> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some(Token::LogicalOr)) {
            self.next();
            let right = self.parse_and()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::Or,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> PathResult<FilterExpression> {
        let mut left = self.parse_comparison()?;
        while matches!(self.peek(), Some(Token::LogicalAnd)) {
            self.next();
            let right = self.parse_comparison()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::And,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> PathResult<FilterExpression> {
        let left = self.parse_operand()?;
        let operator = match self.peek() {
            Some(Token::Equal) => ComparisonOp::Equal,
            Some(Token::NotEqual) => ComparisonOp::NotEqual,
            Some(Token::Less) => ComparisonOp::Less,
            Some(Token::LessEq) => ComparisonOp::LessEq,
            Some(Token::Greater) => ComparisonOp::Greater,
            Some(Token::GreaterEq) => ComparisonOp::GreaterEq,
            _ => return Ok(left),
        };
        self.next();
        let right = self.parse_operand()?;
        Ok(FilterExpression::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_operand(&mut self) -> PathResult<FilterExpression> {
        match self.next() {
            Some(Token::At) => self.parse_current_path(),
            Some(Token::String(value)) => Ok(FilterExpression::Literal {
                value: FilterValue::String(value),
            }),
            Some(Token::Integer(value)) => Ok(FilterExpression::Literal {
                value: FilterValue::Integer(value),
            }),
            Some(Token::Number(value)) => Ok(FilterExpression::Literal {
                value: FilterValue::Number(value),
            }),
            Some(Token::True) => Ok(FilterExpression::Literal {
                value: FilterValue::Boolean(true),
            }),
            Some(Token::False) => Ok(FilterExpression::Literal {
                value: FilterValue::Boolean(false),
            }),
            Some(Token::Null) => Ok(FilterExpression::Literal {
                value: FilterValue::Null,
            }),
            Some(Token::LeftParen) => {
                let inner = self.parse_predicate()?;
                self.expect(&Token::RightParen)?;
                Ok(inner)
            }
            other => Err(Self::unexpected(
                "`@`, a literal, or `(` in filter expression",
                other.as_ref(),
            )),
        }
    }

    /// Parse `@` followed by zero or more `.name` components
    fn parse_current_path(&mut self) -> PathResult<FilterExpression> {
        let mut path = Vec::new();
        while matches!(self.peek(), Some(Token::Dot)) {
            self.next();
            match self.next() {
                Some(Token::Identifier(name)) => path.push(name),
                other => {
                    return Err(Self::unexpected(
                        "a property name after `.` in filter expression",
                        other.as_ref(),
                    ));
                }
            }
        }
        if path.is_empty() {
            Ok(FilterExpression::Current)
        } else {
            Ok(FilterExpression::Property { path })
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    fn expect(&mut self, expected: &Token) -> PathResult<()> {
        match self.next() {
            Some(ref actual) if actual == expected => Ok(()),
            other => Err(Self::unexpected(
                &format!("{expected:?}"),
                other.as_ref(),
            )),
        }
    }

    fn unexpected(expected: &str, actual: Option<&Token>) -> PathError {
        match actual {
            Some(Token::Eof) | None => {
                PathError::new(format!("expected {expected}, found end of input"), None)
            }
            Some(token) => {
                PathError::new(format!("expected {expected}, found {token:?}"), None)
            }
        }
    }
}
