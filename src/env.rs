// ABOUTME: Environment module for managing lexical bindings and scope chains

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a fresh root environment with no parent and no bindings.
    /// Primitives are installed separately by `crate::builtins::register_builtins`.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a new child frame closing over `parent`.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Binds `name` in this frame, shadowing any outer binding. Always
    /// writes to the current frame, never a parent.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Looks up `name`, walking toward the root. A miss at the root
    /// yields `Value::Null` rather than an error: lookup is permissive
    /// so that macros can build forms whose symbols resolve later, and
    /// so `if`/`do` can be used defensively against not-yet-bound names.
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }
        match &self.parent {
            Some(parent) => parent.get(name),
            None => Value::Null,
        }
    }
}
