//! Recursive-descent parser with panic-mode error recovery.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! program     → declaration* EOF
//! declaration → varDecl | statement
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | forStmt | ifStmt | printStmt | whileStmt | block
//! forStmt     → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement
//! ifStmt      → "if" "(" expression ")" statement ( "else" statement )?
//! whileStmt   → "while" "(" expression ")" statement
//! block       → "{" declaration* "}"
//! expression  → assignment
//! assignment  → IDENTIFIER "=" assignment | logic_or
//! logic_or    → logic_and ( "or" logic_and )*
//! logic_and   → equality ( "and" equality )*
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "-" | "+" ) factor )*
//! factor      → unary ( ( "/" | "*" ) unary )*
//! unary       → ( "!" | "-" ) unary | primary
//! primary     → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")"
//! ```

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    parser::SyntaxError,
    scanner::{self, Token, TokenKind},
    values::Value,
};

/// Nesting limit used by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

type ParseResult<T> = Result<T, SyntaxError>;

/// Output of a parse run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedProgram {
    /// One entry per top-level declaration, `None` where the declaration
    /// failed to parse.
    pub statements: Vec<Option<Stmt>>,
    pub errors: Vec<SyntaxError>,
}

impl ParsedProgram {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Successfully parsed top-level statements, in order.
    pub fn valid_statements(&self) -> impl Iterator<Item = &Stmt> {
        self.statements.iter().flatten()
    }
}

/// Parse a token stream with the default nesting limit.
pub fn parse(tokens: &[Token]) -> ParsedProgram {
    parse_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse a token stream, rejecting constructs nested deeper than `max_depth`.
pub fn parse_with_max_depth(tokens: &[Token], max_depth: usize) -> ParsedProgram {
    Parser::new(tokens, max_depth).parse()
}

pub struct Parser<'t> {
    tokens: Cow<'t, [Token]>,
    current: usize,
    depth: usize,
    max_depth: usize,
    errors: Vec<SyntaxError>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], max_depth: usize) -> Self {
        // The cursor relies on the stream ending in `Eof`.
        let tokens = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => Cow::Borrowed(tokens),
            last => {
                let line = last.map_or(1, |t| t.line);
                let mut owned = tokens.to_vec();
                owned.push(Token::synthetic(TokenKind::Eof, "", line));
                Cow::Owned(owned)
            }
        };
        Self {
            tokens,
            current: 0,
            depth: 0,
            max_depth,
            errors: Vec::new(),
        }
    }

    pub fn parse(mut self) -> ParsedProgram {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.declaration_or_recover());
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParsedProgram {
            statements,
            errors: self.errors,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn declaration_or_recover(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                trace!(%error, line = error.token.line, "syntax error");
                self.errors.push(error);
                self.synchronize();
                None
            }
        }
    }

    fn declaration(&mut self) -> ParseResult<Stmt> {
        if self.matches(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self
            .consume(TokenKind::Identifier, "expect variable name")?
            .clone();
        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            "expect ';' after variable declaration",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        self.nested(|p| {
            if p.matches(&[TokenKind::For]) {
                p.for_statement()
            } else if p.matches(&[TokenKind::If]) {
                p.if_statement()
            } else if p.matches(&[TokenKind::Print]) {
                p.print_statement()
            } else if p.matches(&[TokenKind::While]) {
                p.while_statement()
            } else if p.matches(&[TokenKind::LeftBrace]) {
                Ok(Stmt::Block(p.block()?))
            } else {
                p.expression_statement()
            }
        })
    }

    /// Desugars into a block holding the initializer and a `while` loop.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "expect '(' after 'for'")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]) {
            None
        } else if self.matches(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "expect ';' after loop condition")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "expect ')' after for clauses")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }
        let condition = condition.unwrap_or(Expr::Literal(Value::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };
        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }
        Ok(body)
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "expect '(' after 'if'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "expect ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        // A dangling `else` belongs to the innermost `if`.
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "expect ';' after value")?;
        Ok(Stmt::Print(value))
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "expect '(' after 'while'")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "expect ')' after condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// Declarations up to the closing brace. Broken declarations are
    /// reported and left out of the block.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration_or_recover() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "expect '}' after block")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "expect ';' after expression")?;
        Ok(Stmt::Expression(expr))
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::assignment)
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.nested(Self::assignment)?;
            return match expr {
                Expr::Variable { name } => Ok(Expr::assign(name, value)),
                _ => Err(SyntaxError::new(equals, "invalid assignment target")),
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        self.logical_level(TokenKind::Or, Self::and)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        self.logical_level(TokenKind::And, Self::equality)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.nested(Self::unary)?;
            return Ok(Expr::unary(operator, right));
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Bool(false)));
        }
        if self.matches(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Bool(true)));
        }
        if self.matches(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Nil));
        }
        if self.matches(&[TokenKind::Number, TokenKind::String]) {
            let value = match &self.previous().literal {
                Some(scanner::Literal::Number(n)) => Value::Number(*n),
                Some(scanner::Literal::Str(s)) => Value::String(s.clone()),
                None => return Err(SyntaxError::new(self.previous().clone(), "expect expression")),
            };
            return Ok(Expr::Literal(value));
        }
        if self.matches(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable {
                name: self.previous().clone(),
            });
        }
        if self.matches(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "expect ')' after expression")?;
            return Ok(Expr::grouping(expr));
        }

        Err(self.error_at_current("expect expression"))
    }

    /// Left-associative fold of `next (op next)*` into `Binary` nodes.
    ///
    /// Every fold step deepens the tree by one, so each one counts toward
    /// the nesting limit.
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        next: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        self.chain(|p| {
            let mut expr = next(p)?;
            while p.matches(operators) {
                let operator = p.previous().clone();
                p.descend()?;
                let right = next(p)?;
                expr = Expr::binary(expr, operator, right);
            }
            Ok(expr)
        })
    }

    /// Same as [`Self::binary_level`] but building `Logical` nodes.
    fn logical_level(
        &mut self,
        operator: TokenKind,
        next: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        self.chain(|p| {
            let mut expr = next(p)?;
            while p.matches(&[operator]) {
                let operator = p.previous().clone();
                p.descend()?;
                let right = next(p)?;
                expr = Expr::logical(expr, operator, right);
            }
            Ok(expr)
        })
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Run `parse` one nesting level deeper, failing once the limit is hit.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.chain(|p| {
            p.descend()?;
            parse(p)
        })
    }

    /// Run `parse`, then drop whatever depth it charged with [`Self::descend`].
    fn chain<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let depth = self.depth;
        let result = parse(self);
        self.depth = depth;
        result
    }

    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::max_depth_exceeded(
                self.peek().clone(),
                self.max_depth,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Skip tokens until a likely statement boundary.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement()
            {
                return;
            }
            self.advance();
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<&Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(message))
    }

    fn error_at_current(&self, message: &str) -> SyntaxError {
        SyntaxError::new(self.peek().clone(), message)
    }

    fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }
}
