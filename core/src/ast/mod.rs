//! Syntax tree produced by the parser.

mod expr;
mod stmt;
mod visit;

pub use expr::Expr;
pub use stmt::Stmt;
pub use visit::{ExprVisitor, StmtVisitor};

#[cfg(test)]
mod visit_test;
