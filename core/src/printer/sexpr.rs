use crate::{
    ast::{Expr, ExprVisitor, Stmt, StmtVisitor},
    scanner::Token,
    values::Value,
};

/// Renders the AST in fully parenthesized prefix form.
///
/// `(5 * (2 + 3)) - 25 == 0` prints as
/// `(== (- (group (* 5 (group (+ 2 3)))) 25) 0)`.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::from("(");
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        format!("(= {} {})", name.lexeme, value.accept(self))
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_logical(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_literal(&mut self, value: &Value) -> String {
        value.to_string()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block(&mut self, statements: &[Stmt]) -> String {
        let mut out = String::from("(block");
        for statement in statements {
            out.push(' ');
            out.push_str(&statement.accept(self));
        }
        out.push(')');
        out
    }

    fn visit_expression(&mut self, expr: &Expr) -> String {
        self.parenthesize(";", &[expr])
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> String {
        let condition = condition.accept(self);
        let then_branch = then_branch.accept(self);
        match else_branch {
            Some(else_branch) => format!(
                "(if-else {condition} {then_branch} {})",
                else_branch.accept(self)
            ),
            None => format!("(if {condition} {then_branch})"),
        }
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        self.parenthesize("print", &[expr])
    }

    fn visit_var(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        match initializer {
            Some(initializer) => format!("(var {} = {})", name.lexeme, initializer.accept(self)),
            None => format!("(var {})", name.lexeme),
        }
    }

    fn visit_while(&mut self, condition: &Expr, body: &Stmt) -> String {
        format!("(while {} {})", condition.accept(self), body.accept(self))
    }
}
