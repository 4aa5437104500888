use thiserror::Error;

use crate::scanner::Span;

/// Lexical error with its source location.
///
/// The scanner never stops at one of these; it records the error and keeps
/// going with the next character.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

/// Specific kinds of lexical errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// End of input reached inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// A number literal too large to represent as a finite `f64`.
    #[error("number literal out of range '{0}'")]
    NumberOutOfRange(String),
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind,
            line,
            column,
            span,
        }
    }
}
