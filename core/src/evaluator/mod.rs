//! Tree-walking evaluator for parsed Lox programs.
//!
//! Statements run in order against an explicit [`Environment`]; `print`
//! output goes to any [`std::io::Write`] sink.
//!
//! ## Example
//!
//! ```
//! use lox_core::{environment::Environment, evaluator, parser, scanner};
//!
//! let scanned = scanner::scan("var a = 1; print a + 2;");
//! let program = parser::parse(&scanned.tokens);
//!
//! let mut globals = Environment::new();
//! let mut out = Vec::new();
//! evaluator::interpret(&program.statements, &mut globals, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "3\n");
//! ```

mod error;
mod eval;
mod operators;


pub use error::RuntimeError;
pub use eval::Interpreter;

use std::io::Write;

use crate::{ast::Stmt, environment::Environment, values::Value};

/// Execute `statements` against `env`, writing `print` output to `out`.
///
/// Returns the value of the final statement when it is an expression
/// statement.
pub fn interpret(
    statements: &[Option<Stmt>],
    env: &mut Environment<'_>,
    out: &mut dyn Write,
) -> Result<Option<Value>, RuntimeError> {
    Interpreter::new(out).interpret(statements, env)
}
