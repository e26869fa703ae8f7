// ABOUTME: Public library surface for Interpreter, Read, Print

use crate::builtins::register_builtins;
use crate::env::Environment;
use crate::error::EvalError;
use crate::eval::{eval, force};
use crate::value::Value;
use std::rc::Rc;

/// A Klisp interpreter instance: one root environment with every
/// primitive installed, plus whatever `def` bindings accumulate across
/// calls to [`Interpreter::eval`].
pub struct Interpreter {
    root: Rc<Environment>,
}

impl Interpreter {
    /// Fresh instance with primitives installed.
    pub fn new() -> Self {
        let root = Environment::new();
        register_builtins(&root);
        Interpreter { root }
    }

    /// Evaluates an already-parsed form in the root environment and
    /// fully forces the result (no dangling thunks escape this call).
    pub fn eval(&self, form: Value) -> Result<Value, EvalError> {
        force(eval(form, self.root.clone(), true)?)
    }

    /// Parses and evaluates a full source string in one step.
    pub fn run(&self, source: &str) -> Result<Value, EvalError> {
        let form = crate::parser::read(source)?;
        self.eval(form)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a full source string into a program form.
pub fn read(source: &str) -> Result<Value, EvalError> {
    crate::parser::read(source)
}

/// Canonical text form of a Value.
pub fn print(value: &Value) -> String {
    crate::printer::print(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_runs_source_end_to_end() {
        let interp = Interpreter::new();
        let result = interp.run("(def sq (fn (x) (* x x))) (sq 6)").unwrap();
        assert!(matches!(result, Value::Number(n) if n == 36.0));
    }

    #[test]
    fn test_interpreter_retains_bindings_across_calls() {
        let interp = Interpreter::new();
        interp.run("(def x 10)").unwrap();
        let result = interp.run("x").unwrap();
        assert!(matches!(result, Value::Number(n) if n == 10.0));
    }

    #[test]
    fn test_read_print_are_accessible_as_free_functions() {
        let form = read("(+ 1 2)").unwrap();
        assert_eq!(print(&form), "(do (+ 1 2))");
    }
}
