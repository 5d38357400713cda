//! Path expression tokenizer
//!
//! Lexes a raw expression string into the token sequence consumed by the
//! selector parser. Positions reported in errors are character offsets into
//! the source expression.

use std::collections::VecDeque;

use super::error::{PathError, PathResult};
use super::tokens::Token;

/// Tokenizer over a path expression string
pub(crate) struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenize the whole expression, appending a trailing [`Token::Eof`]
    pub(crate) fn tokenize(mut self) -> PathResult<VecDeque<Token>> {
        let mut tokens = VecDeque::new();
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' => self.pos += 1,
                '$' => {
                    tokens.push_back(Token::Root);
                    self.pos += 1;
                }
                '.' => {
                    if self.peek_at(1) == Some('.') {
                        tokens.push_back(Token::DoubleDot);
                        self.pos += 2;
                    } else {
                        tokens.push_back(Token::Dot);
                        self.pos += 1;
                    }
                }
                '[' => {
                    tokens.push_back(Token::LeftBracket);
                    self.pos += 1;
                }
                ']' => {
                    tokens.push_back(Token::RightBracket);
                    self.pos += 1;
                }
                '(' => {
                    tokens.push_back(Token::LeftParen);
                    self.pos += 1;
                }
                ')' => {
                    tokens.push_back(Token::RightParen);
                    self.pos += 1;
                }
                ':' => {
                    tokens.push_back(Token::Colon);
                    self.pos += 1;
                }
                '?' => {
                    tokens.push_back(Token::Question);
                    self.pos += 1;
                }
                '@' => {
                    tokens.push_back(Token::At);
                    self.pos += 1;
                }
                '*' => {
                    tokens.push_back(Token::Star);
                    self.pos += 1;
                }
                '\'' | '"' => tokens.push_back(self.string_literal(c)?),
                '=' | '!' | '<' | '>' | '&' | '|' => tokens.push_back(self.operator()?),
                c if c.is_ascii_digit() || c == '-' => tokens.push_back(self.number_literal()?),
                c if c.is_alphabetic() || c == '_' => tokens.push_back(self.identifier()),
                other => {
                    return Err(PathError::new(
                        format!("unexpected character `{other}`"),
                        Some(self.pos),
                    ));
                }
            }
        }
        tokens.push_back(Token::Eof);
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn string_literal(&mut self, quote: char) -> PathResult<Token> {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                let escaped = self.peek_at(1).ok_or_else(|| {
                    PathError::new("unterminated escape in string literal", Some(self.pos))
                })?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '\\' | '\'' | '"' | '/' => escaped,
                    other => {
                        return Err(PathError::new(
                            format!("unsupported escape `\\{other}` in string literal"),
                            Some(self.pos),
                        ));
                    }
                });
                self.pos += 2;
            } else if c == quote {
                self.pos += 1;
                return Ok(Token::String(value));
            } else {
                value.push(c);
                self.pos += 1;
            }
        }
        Err(PathError::new("unterminated string literal", Some(start)))
    }

    fn number_literal(&mut self) -> PathResult<Token> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == '.' && !is_float && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())
            {
                is_float = true;
                self.pos += 1;
            } else {
                break;
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if text == "-" {
            return Err(PathError::new("expected digits after `-`", Some(start)));
        }
        if is_float {
            text.parse::<f64>()
                .map(Token::Number)
                .map_err(|_| PathError::new(format!("invalid number `{text}`"), Some(start)))
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| PathError::new(format!("invalid integer `{text}`"), Some(start)))
        }
    }

    fn operator(&mut self) -> PathResult<Token> {
        let c = self.chars[self.pos];
        let (token, len) = match (c, self.peek_at(1)) {
            ('=', Some('=')) => (Token::Equal, 2),
            ('!', Some('=')) => (Token::NotEqual, 2),
            ('<', Some('=')) => (Token::LessEq, 2),
            ('<', _) => (Token::Less, 1),
            ('>', Some('=')) => (Token::GreaterEq, 2),
            ('>', _) => (Token::Greater, 1),
            ('&', Some('&')) => (Token::LogicalAnd, 2),
            ('|', Some('|')) => (Token::LogicalOr, 2),
            _ => {
                return Err(PathError::new(
                    format!("unexpected character `{c}`"),
                    Some(self.pos),
                ));
            }
        };
        self.pos += len;
        Ok(token)
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        match text.as_str() {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            _ => Token::Identifier(text),
        }
    }
}
