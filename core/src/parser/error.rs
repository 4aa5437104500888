use thiserror::Error;

use crate::scanner::{Token, TokenKind};

/// Grammar violation at a specific token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Token the parser was looking at when it gave up.
    pub token: Token,
    pub message: String,
}

/// Specific kinds of syntax errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Tokens that do not fit the grammar.
    Grammar,
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { max_depth: usize },
}

impl SyntaxError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self {
            kind: SyntaxErrorKind::Grammar,
            token,
            message: message.into(),
        }
    }

    pub fn max_depth_exceeded(token: Token, max_depth: usize) -> Self {
        Self {
            kind: SyntaxErrorKind::MaxDepthExceeded { max_depth },
            token,
            message: format!("nesting depth exceeds maximum of {max_depth}"),
        }
    }

    /// Where the error happened, as shown in diagnostics.
    ///
    /// `at end` when the parser ran out of input, `at '<lexeme>'` otherwise.
    pub fn location(&self) -> String {
        if self.token.kind == TokenKind::Eof {
            "at end".to_string()
        } else {
            format!("at '{}'", self.token.lexeme)
        }
    }
}
