//! Path expression abstract syntax tree
//!
//! Structured form of a compiled path expression, shared between the parser
//! and the evaluator.

/// Individual selector component of a compiled path expression
#[derive(Debug, Clone, PartialEq)]
pub enum PathSelector {
    /// Root identifier (`$`)
    Root,
    /// Child property access (`.name` or `['name']`)
    Child {
        /// Property name to descend into
        name: String,
    },
    /// Recursive descent (`..`), visiting a node and every descendant
    RecursiveDescent,
    /// Array index access (`[0]`, `[-1]`); negative indices count from the end
    Index {
        /// Index value
        index: i64,
    },
    /// Array slice (`[start:end]` or `[start:end:step]`)
    Slice {
        /// Start index; defaults to the start of the array
        start: Option<i64>,
        /// End index, exclusive; defaults to the end of the array
        end: Option<i64>,
        /// Step between picked elements; defaults to 1, negative walks
        /// backwards
        step: Option<i64>,
    },
    /// Wildcard selector (`.*` or `[*]`)
    Wildcard,
    /// Filter selector (`[?(@.field == value)]`)
    Filter {
        /// Predicate applied to each candidate element
        predicate: FilterExpression,
    },
}

/// Predicate tree of a filter selector
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// The element under test (`@`)
    Current,
    /// Property path below the element under test (`@.a.b`); a bare
    /// property is an existence test
    Property {
        /// Path components below the element
        path: Vec<String>,
    },
    /// Literal operand
    Literal {
        /// The literal value
        value: FilterValue,
    },
    /// Comparison between two operands
    Comparison {
        /// Left operand
        left: Box<FilterExpression>,
        /// Comparison operator
        operator: ComparisonOp,
        /// Right operand
        right: Box<FilterExpression>,
    },
    /// Logical combination of two predicates
    Logical {
        /// Left predicate
        left: Box<FilterExpression>,
        /// Logical operator
        operator: LogicalOp,
        /// Right predicate
        right: Box<FilterExpression>,
    },
}

/// Literal operand values in filter predicates
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String literal
    String(String),
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Number(f64),
    /// Boolean literal
    Boolean(bool),
    /// Null literal
    Null,
}

/// Comparison operators usable in filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
}

/// Logical operators usable in filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
}
