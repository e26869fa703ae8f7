//! Bitwise/boolean operations: `& | ^`
//!
//! Polymorphic on the first argument: 64-bit signed bitwise on Numbers,
//! logical and/or/xor on Booleans.

use super::{define_builtin, first};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(& 6 3) => 2`; `(& true false) => false`
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "&", and_builtin);
    define_builtin(env, "|", or_builtin);
    define_builtin(env, "^", xor_builtin);
}

fn and_builtin(args: Value) -> Result<Value, EvalError> {
    dispatch(
        "&",
        args,
        |a, b| a & b,
        |a, b| a && b,
    )
}

fn or_builtin(args: Value) -> Result<Value, EvalError> {
    dispatch(
        "|",
        args,
        |a, b| a | b,
        |a, b| a || b,
    )
}

fn xor_builtin(args: Value) -> Result<Value, EvalError> {
    dispatch(
        "^",
        args,
        |a, b| a ^ b,
        |a, b| a != b,
    )
}

fn dispatch(
    name: &'static str,
    args: Value,
    numeric_op: fn(i64, i64) -> i64,
    bool_op: fn(bool, bool) -> bool,
) -> Result<Value, EvalError> {
    match first(&args) {
        Value::Number(n) => {
            let mut acc = n as i64;
            for rest in args.cdr().iter() {
                acc = numeric_op(acc, super::expect_number(&rest, name)? as i64);
            }
            Ok(Value::Number(acc as f64))
        }
        Value::Boolean(b) => {
            let mut acc = b;
            for rest in args.cdr().iter() {
                match rest {
                    Value::Boolean(b) => acc = bool_op(acc, b),
                    other => return Err(EvalError::type_error(name, "boolean", &other)),
                }
            }
            Ok(Value::Boolean(acc))
        }
        other => Err(EvalError::type_error(name, "number or boolean", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_numeric() {
        let args = Value::list(vec![Value::Number(6.0), Value::Number(3.0)]);
        assert!(matches!(and_builtin(args).unwrap(), Value::Number(n) if n == 2.0));
    }

    #[test]
    fn test_and_boolean() {
        let args = Value::list(vec![Value::Boolean(true), Value::Boolean(false)]);
        assert!(matches!(and_builtin(args).unwrap(), Value::Boolean(false)));
    }

    #[test]
    fn test_xor_boolean() {
        let args = Value::list(vec![Value::Boolean(true), Value::Boolean(true)]);
        assert!(matches!(xor_builtin(args).unwrap(), Value::Boolean(false)));
    }
}
