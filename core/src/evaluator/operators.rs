//! Binary and unary operator implementations.

use crate::{
    evaluator::RuntimeError,
    scanner::{Token, TokenKind},
    values::Value,
};

const NUMBER_OPERAND: &str = "operand must be a number";
const PLUS_OPERANDS: &str = "operands must be both numbers or both strings";

/// Evaluate a unary operation on an already-evaluated operand.
///
/// `!` yields the operand's truthiness as a boolean, without negating it.
pub(super) fn eval_unary(operator: &Token, operand: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Bang => Ok(Value::Bool(operand.is_truthy())),
        TokenKind::Minus => Ok(Value::Number(-number_operand(operator, &operand)?)),
        _ => Err(unsupported(operator)),
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// Arithmetic follows IEEE 754, so `1 / 0` is infinity rather than an error.
pub(super) fn eval_binary(
    operator: &Token,
    left: Value,
    right: Value,
) -> Result<Value, RuntimeError> {
    let value = match operator.kind {
        TokenKind::Plus => return add(operator, left, right),
        TokenKind::EqualEqual => Value::Bool(left.loosely_equals(&right)),
        TokenKind::BangEqual => Value::Bool(!left.loosely_equals(&right)),
        TokenKind::Minus => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Number(l - r)
        }
        TokenKind::Star => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Number(l * r)
        }
        TokenKind::Slash => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Number(l / r)
        }
        TokenKind::Greater => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Bool(l > r)
        }
        TokenKind::GreaterEqual => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Bool(l >= r)
        }
        TokenKind::Less => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Bool(l < r)
        }
        TokenKind::LessEqual => {
            let (l, r) = number_operands(operator, &left, &right)?;
            Value::Bool(l <= r)
        }
        _ => return Err(unsupported(operator)),
    };
    Ok(value)
}

/// Numeric addition or string concatenation.
fn add(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::String(mut l), Value::String(r)) => {
            l.push_str(&r);
            Ok(Value::String(l))
        }
        _ => Err(RuntimeError::type_error(operator, PLUS_OPERANDS)),
    }
}

fn number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    operand
        .as_number()
        .ok_or_else(|| RuntimeError::type_error(operator, NUMBER_OPERAND))
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), RuntimeError> {
    Ok((
        number_operand(operator, left)?,
        number_operand(operator, right)?,
    ))
}

// The parser never builds these; hand-made trees can.
fn unsupported(operator: &Token) -> RuntimeError {
    RuntimeError::type_error(
        operator,
        format!("unsupported operator '{}'", operator.lexeme),
    )
}
