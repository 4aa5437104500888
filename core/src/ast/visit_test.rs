use pretty_assertions::assert_eq;

use crate::{
    ast::{Expr, ExprVisitor, Stmt, StmtVisitor},
    scanner::{Token, TokenKind},
    values::Value,
};

/// Records the name of each node it is dispatched to, walking the whole tree.
#[derive(Default)]
struct Trace(Vec<&'static str>);

impl ExprVisitor for Trace {
    type Output = ();

    fn visit_assign(&mut self, _name: &Token, value: &Expr) {
        self.0.push("assign");
        value.accept(self);
    }
    fn visit_binary(&mut self, left: &Expr, _operator: &Token, right: &Expr) {
        self.0.push("binary");
        left.accept(self);
        right.accept(self);
    }
    fn visit_unary(&mut self, _operator: &Token, right: &Expr) {
        self.0.push("unary");
        right.accept(self);
    }
    fn visit_variable(&mut self, _name: &Token) {
        self.0.push("variable");
    }
    fn visit_logical(&mut self, left: &Expr, _operator: &Token, right: &Expr) {
        self.0.push("logical");
        left.accept(self);
        right.accept(self);
    }
    fn visit_literal(&mut self, _value: &Value) {
        self.0.push("literal");
    }
    fn visit_grouping(&mut self, inner: &Expr) {
        self.0.push("grouping");
        inner.accept(self);
    }
}

impl StmtVisitor for Trace {
    type Output = ();

    fn visit_block(&mut self, statements: &[Stmt]) {
        self.0.push("block");
        for statement in statements {
            statement.accept(self);
        }
    }
    fn visit_expression(&mut self, expr: &Expr) {
        self.0.push("expression");
        expr.accept(self);
    }
    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.0.push("if");
        condition.accept(self);
        then_branch.accept(self);
        if let Some(else_branch) = else_branch {
            else_branch.accept(self);
        }
    }
    fn visit_print(&mut self, expr: &Expr) {
        self.0.push("print");
        expr.accept(self);
    }
    fn visit_var(&mut self, _name: &Token, initializer: Option<&Expr>) {
        self.0.push("var");
        if let Some(initializer) = initializer {
            initializer.accept(self);
        }
    }
    fn visit_while(&mut self, condition: &Expr, body: &Stmt) {
        self.0.push("while");
        condition.accept(self);
        body.accept(self);
    }
}

fn ident(name: &str) -> Token {
    Token::synthetic(TokenKind::Identifier, name, 1)
}

fn op(kind: TokenKind) -> Token {
    Token::synthetic(kind, kind.fixed_lexeme().unwrap_or_default(), 1)
}

#[test]
fn test_expr_accept_dispatches_each_variant() {
    // x = -(1) + y or nil
    let expr = Expr::assign(
        ident("x"),
        Expr::logical(
            Expr::binary(
                Expr::unary(
                    op(TokenKind::Minus),
                    Expr::grouping(Expr::Literal(Value::Number(1.0))),
                ),
                op(TokenKind::Plus),
                Expr::Variable { name: ident("y") },
            ),
            op(TokenKind::Or),
            Expr::Literal(Value::Nil),
        ),
    );

    let mut trace = Trace::default();
    expr.accept(&mut trace);
    assert_eq!(
        trace.0,
        vec![
            "assign", "logical", "binary", "unary", "grouping", "literal", "variable", "literal"
        ]
    );
}

#[test]
fn test_stmt_accept_dispatches_each_variant() {
    let program = Stmt::Block(vec![
        Stmt::Var {
            name: ident("a"),
            initializer: None,
        },
        Stmt::If {
            condition: Expr::Literal(Value::Bool(true)),
            then_branch: Box::new(Stmt::Print(Expr::Variable { name: ident("a") })),
            else_branch: Some(Box::new(Stmt::Expression(Expr::Literal(Value::Nil)))),
        },
        Stmt::While {
            condition: Expr::Literal(Value::Bool(false)),
            body: Box::new(Stmt::Block(vec![])),
        },
    ]);

    let mut trace = Trace::default();
    program.accept(&mut trace);
    assert_eq!(
        trace.0,
        vec![
            "block",
            "var",
            "if",
            "literal",
            "print",
            "variable",
            "expression",
            "literal",
            "while",
            "literal",
            "block",
        ]
    );
}

#[test]
fn test_visitor_output_is_returned_from_accept() {
    struct Depth;

    impl ExprVisitor for Depth {
        type Output = usize;

        fn visit_assign(&mut self, _name: &Token, value: &Expr) -> usize {
            1 + value.accept(self)
        }
        fn visit_binary(&mut self, left: &Expr, _operator: &Token, right: &Expr) -> usize {
            1 + left.accept(self).max(right.accept(self))
        }
        fn visit_unary(&mut self, _operator: &Token, right: &Expr) -> usize {
            1 + right.accept(self)
        }
        fn visit_variable(&mut self, _name: &Token) -> usize {
            1
        }
        fn visit_logical(&mut self, left: &Expr, _operator: &Token, right: &Expr) -> usize {
            1 + left.accept(self).max(right.accept(self))
        }
        fn visit_literal(&mut self, _value: &Value) -> usize {
            1
        }
        fn visit_grouping(&mut self, inner: &Expr) -> usize {
            1 + inner.accept(self)
        }
    }

    let expr = Expr::binary(
        Expr::grouping(Expr::grouping(Expr::Literal(Value::Number(1.0)))),
        op(TokenKind::Star),
        Expr::Literal(Value::Number(2.0)),
    );
    assert_eq!(expr.accept(&mut Depth), 4);
}
