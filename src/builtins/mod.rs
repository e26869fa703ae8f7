//! # Built-in primitive library
//!
//! The complete Klisp primitive roster, bound into the root environment.
//! Each primitive receives its arguments as a single proper list (per
//! the evaluator's application protocol) and returns a `Value`.
//!
//! ## Categories
//!
//! - **[arithmetic]**: `+ - * / # %` (numeric folds)
//! - **[bitwise]**: `& | ^` (numeric-bitwise / boolean-logical, polymorphic on the first argument)
//! - **[comparison]**: `= < >` (structural equality, numeric/lexicographic order)
//! - **[lists]**: `car cdr cons len`
//! - **[strings]**: `gets sets! point char string->number number->string string->symbol symbol->string`
//! - **[types]**: `type`
//! - **[math]**: `sin cos floor rand time`
//! - **[console]**: `print`

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Builtin, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod bitwise;
pub mod comparison;
pub mod console;
pub mod lists;
pub mod math;
pub mod strings;
pub mod types;

/// Installs the `true`/`false` singletons and every primitive into the
/// root environment.
pub fn register_builtins(env: &Rc<Environment>) {
    env.define("true", Value::Boolean(true));
    env.define("false", Value::Boolean(false));

    arithmetic::register(env);
    bitwise::register(env);
    comparison::register(env);
    lists::register(env);
    strings::register(env);
    types::register(env);
    math::register(env);
    console::register(env);
}

pub(crate) fn define_builtin(
    env: &Rc<Environment>,
    name: &'static str,
    func: fn(Value) -> Result<Value, EvalError>,
) {
    env.define(name, Value::Builtin(Rc::new(Builtin { name, func })));
}

/// `args.car()`
pub(crate) fn first(args: &Value) -> Value {
    args.car()
}

/// `args.cdr().car()`
pub(crate) fn second(args: &Value) -> Value {
    args.cdr().car()
}

/// `args.cdr().cdr().car()`
pub(crate) fn third(args: &Value) -> Value {
    args.cdr().cdr().car()
}

pub(crate) fn expect_number(value: &Value, function: &str) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::type_error(function, "number", other)),
    }
}

pub(crate) fn expect_bytes(value: &Value, function: &str) -> Result<Vec<u8>, EvalError> {
    match value {
        Value::Str(bytes) => Ok(bytes.borrow().clone()),
        other => Err(EvalError::type_error(function, "string", other)),
    }
}
