//! Core evaluation logic.

use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    environment::Environment,
    evaluator::{RuntimeError, operators},
    scanner::TokenKind,
    values::Value,
};

/// Tree-walking interpreter.
///
/// Holds only the output sink. The active environment is passed explicitly
/// to every call, and block scopes are created and dropped on the Rust stack.
pub struct Interpreter<'o> {
    out: &'o mut dyn Write,
}

impl<'o> Interpreter<'o> {
    pub fn new(out: &'o mut dyn Write) -> Self {
        Self { out }
    }

    /// Execute statements in order, stopping at the first runtime error.
    ///
    /// Placeholders left by statements that failed to parse are skipped.
    /// Output written before an error stays written. Returns the value of the
    /// last statement when it is an expression statement.
    pub fn interpret(
        &mut self,
        statements: &[Option<Stmt>],
        env: &mut Environment<'_>,
    ) -> Result<Option<Value>, RuntimeError> {
        debug!(statements = statements.len(), "interpreting");
        let result = self.execute_all(statements, env);
        let flushed = self.out.flush();
        let last = result?;
        flushed?;
        Ok(last)
    }

    fn execute_all(
        &mut self,
        statements: &[Option<Stmt>],
        env: &mut Environment<'_>,
    ) -> Result<Option<Value>, RuntimeError> {
        let mut last = None;
        for statement in statements.iter().flatten() {
            last = match statement {
                Stmt::Expression(expr) => Some(self.evaluate(expr, env)?),
                other => {
                    self.execute(other, env)?;
                    None
                }
            };
        }
        Ok(last)
    }

    pub fn execute(&mut self, stmt: &Stmt, env: &mut Environment<'_>) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Block(statements) => self.execute_block(statements, env),

            Stmt::Expression(expr) => {
                self.evaluate(expr, env)?;
                Ok(())
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, env)?.is_truthy() {
                    self.execute(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, env)
                } else {
                    Ok(())
                }
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr, env)?;
                writeln!(self.out, "{}", value.stringify())?;
                Ok(())
            }

            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(initializer) => self.evaluate(initializer, env)?,
                    None => Value::Nil,
                };
                trace!(name = %name.lexeme, %value, "define");
                env.define(name.lexeme.clone(), value);
                Ok(())
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition, env)?.is_truthy() {
                    self.execute(body, env)?;
                }
                Ok(())
            }
        }
    }

    /// Run `statements` in a fresh scope nested in `env`.
    ///
    /// The scope is dropped on return, so `env` is active again whether the
    /// block finished or failed.
    fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: &mut Environment<'_>,
    ) -> Result<(), RuntimeError> {
        trace!(statements = statements.len(), "enter block");
        let mut scope = Environment::with_enclosing(env);
        let result = statements
            .iter()
            .try_for_each(|statement| self.execute(statement, &mut scope));
        trace!(ok = result.is_ok(), "exit block");
        result
    }

    pub fn evaluate(&mut self, expr: &Expr, env: &mut Environment<'_>) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Grouping(inner) => self.evaluate(inner, env),

            Expr::Variable { name } => env.get(name),

            Expr::Assign { name, value } => {
                let value = self.evaluate(value, env)?;
                env.assign(name, value.clone())?;
                Ok(value)
            }

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                // The deciding operand is returned as is, not as a boolean.
                let decided = match operator.kind {
                    TokenKind::Or => left.is_truthy(),
                    _ => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right, env)
                }
            }

            Expr::Unary { operator, right } => {
                let right = self.evaluate(right, env)?;
                operators::eval_unary(operator, right)
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                operators::eval_binary(operator, left, right)
            }
        }
    }
}
