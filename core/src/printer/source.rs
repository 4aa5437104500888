use crate::{
    ast::{Expr, ExprVisitor, Stmt, StmtVisitor},
    scanner::Token,
    values::Value,
};

/// Renders a tree back to source text.
///
/// Every compound expression is wrapped in parentheses, so the output parses
/// back to a tree that evaluates to the same value regardless of precedence.
/// Statements come out on a single line; `for` loops come out in their
/// `while` form.
#[derive(Debug, Default)]
pub struct SourcePrinter;

impl ExprVisitor for SourcePrinter {
    type Output = String;

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        format!("({} = {})", name.lexeme, value.accept(self))
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!(
            "({} {} {})",
            left.accept(self),
            operator.lexeme,
            right.accept(self)
        )
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        format!("({}{})", operator.lexeme, right.accept(self))
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!(
            "({} {} {})",
            left.accept(self),
            operator.lexeme,
            right.accept(self)
        )
    }

    fn visit_literal(&mut self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("\"{s}\""),
            // No literal spells these; division by zero yields them.
            Value::Number(n) if n.is_nan() => "(0 / 0)".to_string(),
            Value::Number(n) if n.is_infinite() && *n > 0.0 => "(1 / 0)".to_string(),
            Value::Number(n) if n.is_infinite() => "(-1 / 0)".to_string(),
            other => other.to_string(),
        }
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        format!("({})", inner.accept(self))
    }
}

impl StmtVisitor for SourcePrinter {
    type Output = String;

    fn visit_block(&mut self, statements: &[Stmt]) -> String {
        if statements.is_empty() {
            return "{}".to_string();
        }
        let body: Vec<String> = statements.iter().map(|s| s.accept(self)).collect();
        format!("{{ {} }}", body.join(" "))
    }

    fn visit_expression(&mut self, expr: &Expr) -> String {
        format!("{};", expr.accept(self))
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> String {
        let mut out = format!("if ({}) {}", condition.accept(self), then_branch.accept(self));
        if let Some(else_branch) = else_branch {
            out.push_str(" else ");
            out.push_str(&else_branch.accept(self));
        }
        out
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        format!("print {};", expr.accept(self))
    }

    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        match initializer {
            Some(initializer) => format!("var {} = {};", name.lexeme, initializer.accept(self)),
            None => format!("var {};", name.lexeme),
        }
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> String {
        format!("while ({}) {}", condition.accept(self), body.accept(self))
    }
}
