//! Text renderings of the syntax tree.
//!
//! - [`print_expr`] / [`print_stmt`]: prefix s-expressions, used for debugging
//!   and for checking the shape of parsed trees.
//! - [`format_expr`] / [`format_stmt`]: Lox source text that parses back to
//!   an equivalent tree.

mod sexpr;
mod source;

pub use sexpr::AstPrinter;
pub use source::SourcePrinter;

use crate::ast::{Expr, Stmt};

/// Canonical prefix form of an expression.
pub fn print_expr(expr: &Expr) -> String {
    expr.accept(&mut AstPrinter)
}

/// Canonical prefix form of a statement.
pub fn print_stmt(stmt: &Stmt) -> String {
    stmt.accept(&mut AstPrinter)
}

/// Fully parenthesized source form of an expression.
pub fn format_expr(expr: &Expr) -> String {
    expr.accept(&mut SourcePrinter)
}

/// Single-line source form of a statement.
pub fn format_stmt(stmt: &Stmt) -> String {
    stmt.accept(&mut SourcePrinter)
}

#[cfg(test)]
mod printer_test;
