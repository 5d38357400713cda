//! Token definitions for path expression lexing

/// Tokens produced by the path expression tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Root identifier (`$`)
    Root,
    /// Property access dot (`.`)
    Dot,
    /// Recursive descent (`..`)
    DoubleDot,
    /// Opening bracket (`[`)
    LeftBracket,
    /// Closing bracket (`]`)
    RightBracket,
    /// Opening parenthesis (`(`)
    LeftParen,
    /// Closing parenthesis (`)`)
    RightParen,
    /// Slice separator (`:`)
    Colon,
    /// Filter marker (`?`)
    Question,
    /// Current node identifier (`@`)
    At,
    /// Wildcard (`*`)
    Star,
    /// Quoted string literal, unescaped
    String(String),
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Number(f64),
    /// Boolean literal `true`
    True,
    /// Boolean literal `false`
    False,
    /// Literal `null`
    Null,
    /// Bare property name
    Identifier(String),
    /// Equality (`==`)
    Equal,
    /// Inequality (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEq,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEq,
    /// Logical and (`&&`)
    LogicalAnd,
    /// Logical or (`||`)
    LogicalOr,
    /// End of input marker
    Eof,
}
