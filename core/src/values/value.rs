//! Runtime values produced by the evaluator.

use core::fmt;

/// A dynamically-typed runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness: `nil` and `false` are falsy, everything else is truthy.
    ///
    /// Zero and the empty string are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(_) | Value::String(_) => true,
        }
    }

    /// Equality as the `==` operator sees it.
    ///
    /// Two `nil`s are equal and `nil` never equals anything else. All other
    /// values compare by their default text form, so `1 == "1"` holds.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Nil, _) | (_, Value::Nil) => false,
            (left, right) => left.to_string() == right.to_string(),
        }
    }

    /// Text printed by `print` and echoed by the prompt.
    ///
    /// Whole numbers print without a decimal point, any other number prints
    /// with six fixed decimals. Everything else uses the default text form.
    pub fn stringify(&self) -> String {
        match self {
            Value::Number(n) if n.trunc() == *n => format!("{n:.0}"),
            Value::Number(n) => format!("{n:.6}"),
            other => other.to_string(),
        }
    }
}

/// Default text form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
