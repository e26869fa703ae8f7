//! List operations: `car cdr cons len`

use super::{define_builtin, first, second};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(car (1 2 3)) => 1`; permissive on non-cons (see `Value::car`).
fn builtin_car(args: Value) -> Result<Value, EvalError> {
    Ok(first(&args).car())
}

/// `(cdr (1 2 3)) => (2 3)`
fn builtin_cdr(args: Value) -> Result<Value, EvalError> {
    Ok(first(&args).cdr())
}

/// `(cons 1 (2 3)) => (1 2 3)`
fn builtin_cons(args: Value) -> Result<Value, EvalError> {
    Ok(Value::cons(first(&args), second(&args)))
}

/// `(len 'abc') => 3`; byte length of a String or Symbol, else 0.
fn builtin_len(args: Value) -> Result<Value, EvalError> {
    let n = match first(&args) {
        Value::Str(bytes) => bytes.borrow().len(),
        Value::Symbol(s) => s.len(),
        _ => 0,
    };
    Ok(Value::Number(n as f64))
}

pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "car", builtin_car);
    define_builtin(env, "cdr", builtin_cdr);
    define_builtin(env, "cons", builtin_cons);
    define_builtin(env, "len", builtin_len);
}
