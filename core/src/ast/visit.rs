//! Double-dispatch over the AST.
//!
//! `accept` matches the node variant and calls the corresponding `visit_*`
//! method exactly once. Visitors decide themselves whether and how to recurse
//! into children.

use crate::{
    ast::{Expr, Stmt},
    scanner::Token,
    values::Value,
};

/// Operations over expression nodes.
pub trait ExprVisitor {
    type Output;

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Self::Output;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_variable(&mut self, name: &Token) -> Self::Output;
    fn visit_logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_literal(&mut self, value: &Value) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
}

/// Operations over statement nodes.
pub trait StmtVisitor {
    type Output;

    fn visit_block(&mut self, statements: &[Stmt]) -> Self::Output;
    fn visit_expression(&mut self, expr: &Expr) -> Self::Output;
    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Self::Output;
    fn visit_print(&mut self, expr: &Expr) -> Self::Output;
    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> Self::Output;
    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> Self::Output;
}

impl Expr {
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Assign { name, value } => visitor.visit_assign(name, value),
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Variable { name } => visitor.visit_variable(name),
            Expr::Logical {
                left,
                operator,
                right,
            } => visitor.visit_logical(left, operator, right),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
        }
    }
}

impl Stmt {
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Block(statements) => visitor.visit_block(statements),
            Stmt::Expression(expr) => visitor.visit_expression(expr),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if(condition, then_branch, else_branch.as_deref()),
            Stmt::Print(expr) => visitor.visit_print(expr),
            Stmt::Var { name, initializer } => visitor.visit_var(name, initializer.as_ref()),
            Stmt::While { condition, body } => visitor.visit_while(condition, body),
        }
    }
}
