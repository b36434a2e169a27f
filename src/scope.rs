//! Nested name scopes.
//!
//! A scope maps names to cells or rules and falls back to its parent
//! on lookup. Binding always writes to the scope it is called on, so an
//! inner scope can shadow an outer name without touching it.

use crate::core::logic_variable::Cell;
use crate::rule::Rule;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Value a name can be bound to.
#[derive(Clone, Debug)]
pub enum Value {
    Cell(Cell),
    Rule(Rc<Rule>),
}

#[derive(Clone, Debug)]
pub struct Scope(Rc<Frame>);

#[derive(Debug)]
struct Frame {
    names: RefCell<HashMap<String, Value>>,
    parent: Option<Scope>,
}

impl Scope {
    /// Create a root scope.
    pub fn new() -> Self {
        Scope(Rc::new(Frame {
            names: RefCell::new(HashMap::new()),
            parent: None,
        }))
    }

    /// Create an empty scope nested under this one.
    pub fn child(&self) -> Scope {
        Scope(Rc::new(Frame {
            names: RefCell::new(HashMap::new()),
            parent: Some(self.clone()),
        }))
    }

    pub fn parent(&self) -> Option<&Scope> {
        self.0.parent.as_ref()
    }

    /// Find the innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.0.names.borrow().get(name) {
                return Some(value.clone());
            }
            scope = scope.parent()?;
        }
    }

    /// Bind `name` in this scope, returning the binding it replaced here.
    pub fn bind(&self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.names.borrow_mut().insert(name.into(), value)
    }

    /// Returns `true` if `name` is bound in this scope itself.
    pub fn binds_locally(&self, name: &str) -> bool {
        self.0.names.borrow().contains_key(name)
    }

    /// Number of names bound in this scope itself.
    pub fn len(&self) -> usize {
        self.0.names.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}
