//! Runtime evaluation errors.
//!
//! The first runtime error aborts the rest of the run; there is no way to
//! catch one from inside the language.

use std::io;

use thiserror::Error;

use crate::scanner::Token;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operator applied to operands of the wrong type.
    #[error("{message}")]
    TypeError { operator: Token, message: String },

    /// A read or assignment of a name no enclosing scope defines.
    #[error("undefined variable '{}'", name.lexeme)]
    UndefinedVariable { name: Token },

    /// Writing `print` output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    pub fn type_error(operator: &Token, message: impl Into<String>) -> Self {
        RuntimeError::TypeError {
            operator: operator.clone(),
            message: message.into(),
        }
    }

    pub fn undefined_variable(name: &Token) -> Self {
        RuntimeError::UndefinedVariable { name: name.clone() }
    }

    /// Token the error is attributed to, if any.
    pub fn token(&self) -> Option<&Token> {
        match self {
            RuntimeError::TypeError { operator, .. } => Some(operator),
            RuntimeError::UndefinedVariable { name } => Some(name),
            RuntimeError::Output(_) => None,
        }
    }
}
