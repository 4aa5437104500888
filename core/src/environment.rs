//! Variable bindings for the evaluator.
//!
//! Environments form a chain from the innermost block scope out to the
//! globals. Each block scope only borrows its parent, so the chain unwinds in
//! strict LIFO order: when block execution returns, by success or by error,
//! the child is dropped and the parent is the active scope again.
//!
//! ```text
//! var a = 1;       // globals: { a }
//! {
//!   var a = 2;     // block:   { a } -> globals
//!   a = 3;         // updates block's `a`
//! }
//! print a;         // 1
//! ```

use hashbrown::HashMap;

use crate::{evaluator::RuntimeError, scanner::Token, values::Value};

/// A link in the scope chain.
///
/// Implemented by [`Environment`]; block scopes hold their parent as
/// `&mut dyn Scope` so a child can borrow a parent of any lifetime.
pub trait Scope {
    /// Look up a name here or in any enclosing scope.
    fn lookup(&self, name: &str) -> Option<&Value>;

    /// Mutable lookup, with the same resolution order as [`Scope::lookup`].
    fn lookup_mut(&mut self, name: &str) -> Option<&mut Value>;
}

/// A single scope: local bindings plus an optional enclosing scope.
#[derive(Default)]
pub struct Environment<'a> {
    values: HashMap<String, Value>,
    enclosing: Option<&'a mut dyn Scope>,
}

impl Environment<'static> {
    /// Create a global scope with no bindings.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            enclosing: None,
        }
    }
}

impl<'a> Environment<'a> {
    /// Create a block scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: &'a mut dyn Scope) -> Self {
        Self {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Bind `name` in this scope.
    ///
    /// Always succeeds. Redefining a name in the same scope overwrites it;
    /// defining a name that exists in an enclosing scope shadows it.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Value bound to `name` in the nearest scope that defines it.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.lookup(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::undefined_variable(name))
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding: assigning to an unknown name is an error.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        match self.lookup_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    /// Whether `name` is bound in this scope, ignoring enclosing scopes.
    pub fn contains_local(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings in this scope alone.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Scope for Environment<'_> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        match self.values.get(name) {
            Some(value) => Some(value),
            None => self.enclosing.as_deref()?.lookup(name),
        }
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        if self.values.contains_key(name) {
            return self.values.get_mut(name);
        }
        self.enclosing.as_deref_mut()?.lookup_mut(name)
    }
}
