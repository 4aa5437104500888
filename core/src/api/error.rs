//! Public error types for the Lox API.
//!
//! Scanner, parser and evaluator errors are converted to these types at the
//! engine boundary. Each carries one or more [`Diagnostic`]s plus the source
//! text, which is all a renderer needs.

use std::fmt;

use crate::{
    evaluator::RuntimeError,
    parser::{SyntaxError, SyntaxErrorKind},
    scanner::{LexError, LexErrorKind, Span},
};

/// Exit status for lexical and syntax errors.
pub const EXIT_COMPILATION: i32 = 65;
/// Exit status for runtime errors.
pub const EXIT_RUNTIME: i32 = 70;

/// Public error type for all engine operations.
#[derive(Debug)]
pub enum Error {
    /// Lexical or syntax errors. Nothing was executed.
    ///
    /// Contains every error found, in source order.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// The first runtime error. Statements before it have run.
    Runtime {
        diagnostic: Diagnostic,
        source: String,
    },
}

impl Error {
    /// Process exit status a script runner should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Compilation { .. } => EXIT_COMPILATION,
            Error::Runtime { .. } => EXIT_RUNTIME,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::Runtime { diagnostic, .. } => std::slice::from_ref(diagnostic),
        }
    }

    /// Source text the diagnostics point into.
    pub fn source_text(&self) -> &str {
        match self {
            Error::Compilation { source, .. } | Error::Runtime { source, .. } => source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => {
                write!(f, "compilation failed with {} error(s)", diagnostics.len())
            }
            Error::Runtime { diagnostic, .. } => write!(f, "runtime error: {}", diagnostic.message),
        }
    }
}

impl std::error::Error for Error {}

/// A user-facing error record with its source location.
///
/// `Display` gives the one-line form written to stderr:
/// `[Line 3][7] Error at ';': expect expression`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// 1-based line, or 0 when the error has no source location.
    pub line: usize,

    /// 1-based column, or 0 when the error has no source location.
    pub column: usize,

    /// `at end`, `at '<lexeme>'`, or empty.
    pub location: String,

    /// Byte range of the offending text, when there is one.
    pub span: Option<Span>,

    /// Error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Line {}][{}] {} {}: {}",
            self.line, self.column, self.severity, self.location, self.message
        )
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        let code = match err.kind {
            LexErrorKind::UnexpectedCharacter(_) => "L001",
            LexErrorKind::UnterminatedString => "L002",
            LexErrorKind::NumberOutOfRange(_) => "L003",
        };
        Diagnostic {
            severity: Severity::Error,
            message: err.to_string(),
            line: err.line,
            column: err.column,
            location: String::new(),
            span: Some(err.span.clone()),
            code: Some(code.to_string()),
        }
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        let code = match err.kind {
            SyntaxErrorKind::Grammar => "P001",
            SyntaxErrorKind::MaxDepthExceeded { .. } => "P002",
        };
        Diagnostic {
            severity: Severity::Error,
            message: err.message.clone(),
            line: err.token.line,
            column: err.token.column,
            location: err.location(),
            span: Some(err.token.span.clone()),
            code: Some(code.to_string()),
        }
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(err: &RuntimeError) -> Self {
        let code = match err {
            RuntimeError::TypeError { .. } => "R001",
            RuntimeError::UndefinedVariable { .. } => "R002",
            RuntimeError::Output(_) => "R003",
        };
        let token = err.token();
        Diagnostic {
            severity: Severity::Error,
            message: err.to_string(),
            line: token.map_or(0, |t| t.line),
            column: token.map_or(0, |t| t.column),
            location: String::new(),
            span: token.map(|t| t.span.clone()),
            code: Some(code.to_string()),
        }
    }
}
